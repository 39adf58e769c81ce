//! Derives flat comment entries from the raw activity feed.

use youtrack_api::models::{Activity, ActivityPayload};

/// One comment derived from a comment-category activity fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub author: String,
    pub text: String,
    pub timestamp: Option<i64>,
}

/// Flattens comment-category activities into chronological comment entries.
///
/// Within one activity, `added` fragments come before `removed` fragments;
/// removed text is rendered the same way as added text. Activities whose
/// category id does not mention comments contribute nothing, and fragments
/// without usable text are dropped, so extraction is total.
pub fn extract_comments(activities: &[Activity]) -> Vec<CommentEntry> {
    let mut entries = Vec::new();
    for activity in activities {
        let category = activity
            .category
            .as_ref()
            .and_then(|category| category.id.as_deref())
            .unwrap_or("");
        if !category.to_lowercase().contains("comment") {
            continue;
        }

        let author = activity
            .author
            .as_ref()
            .and_then(|author| author.display_name())
            .unwrap_or("")
            .to_string();

        let mut texts = fragment_texts(activity.added.as_ref());
        texts.extend(fragment_texts(activity.removed.as_ref()));
        for text in texts {
            entries.push(CommentEntry {
                author: author.clone(),
                text,
                timestamp: activity.timestamp,
            });
        }
    }
    entries
}

fn fragment_texts(payload: Option<&ActivityPayload>) -> Vec<String> {
    let Some(payload) = payload else {
        return Vec::new();
    };
    payload
        .fragments()
        .iter()
        .filter_map(|fragment| fragment.text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}
