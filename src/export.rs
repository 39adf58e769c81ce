//! Normalized entity snapshot handed to the Markdown renderer.
//!
//! Issues and articles share most of their exportable surface; this module
//! flattens both wire shapes into one view so a single renderer can serve
//! the two widgets.

use crate::text::or_default;
use youtrack_api::models::{Article, Attachment, FieldValue, Issue};

/// Which entity type a snapshot was taken from. Controls the body heading,
/// body formatting and the issue-only sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Issue,
    Article,
}

impl ExportKind {
    /// Heading of the body section.
    pub fn body_heading(&self) -> &'static str {
        match self {
            ExportKind::Issue => "## Description",
            ExportKind::Article => "## Content",
        }
    }

    /// Custom fields only exist on issues.
    pub fn has_fields(&self) -> bool {
        matches!(self, ExportKind::Issue)
    }

    /// Link groups only exist on issues.
    pub fn has_links(&self) -> bool {
        matches!(self, ExportKind::Issue)
    }

    /// Lower-case label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Issue => "issue",
            ExportKind::Article => "article",
        }
    }

    /// Path segment of the entity's web URL.
    pub fn web_path(&self) -> &'static str {
        match self {
            ExportKind::Issue => "issue",
            ExportKind::Article => "articles",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportAttachment {
    pub name: Option<String>,
    pub url: Option<String>,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct ExportField {
    pub name: String,
    pub value: Option<FieldValue>,
}

/// Entity view consumed by the renderer. `project` and `reporter` are kept
/// as already-resolved display strings; `Some("")` means the reference was
/// present but carried no usable name, which still renders its line.
#[derive(Debug, Clone)]
pub struct ExportSnapshot {
    pub kind: ExportKind,
    pub id_readable: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub project: Option<String>,
    pub reporter: Option<String>,
    pub created: Option<i64>,
    pub tags: Vec<String>,
    pub attachments: Vec<ExportAttachment>,
    pub fields: Vec<ExportField>,
}

impl ExportSnapshot {
    pub fn from_issue(issue: Issue, base_url: &str) -> Self {
        Self {
            kind: ExportKind::Issue,
            id_readable: issue.id_readable,
            summary: issue.summary,
            body: issue.description,
            project: issue.project.map(|project| {
                or_default(
                    project.short_name.as_deref(),
                    project.name.as_deref().unwrap_or(""),
                )
                .to_string()
            }),
            reporter: issue
                .reporter
                .map(|reporter| reporter.display_name().unwrap_or("").to_string()),
            created: issue.created,
            tags: tag_names(issue.tags),
            attachments: issue
                .attachments
                .into_iter()
                .map(|attachment| convert_attachment(attachment, base_url))
                .collect(),
            fields: issue
                .fields
                .into_iter()
                .map(|entry| ExportField {
                    name: entry.display_name().to_string(),
                    value: entry.value,
                })
                .collect(),
        }
    }

    pub fn from_article(article: Article, base_url: &str) -> Self {
        Self {
            kind: ExportKind::Article,
            id_readable: article.id_readable,
            summary: article.summary,
            body: article.content,
            project: article.project.map(|project| {
                or_default(
                    project.short_name.as_deref(),
                    project.name.as_deref().unwrap_or(""),
                )
                .to_string()
            }),
            reporter: article
                .reporter
                .map(|reporter| reporter.display_name().unwrap_or("").to_string()),
            created: article.created,
            tags: tag_names(article.tags),
            attachments: article
                .attachments
                .into_iter()
                .map(|attachment| convert_attachment(attachment, base_url))
                .collect(),
            fields: Vec::new(),
        }
    }
}

fn tag_names(tags: Vec<youtrack_api::models::TagRef>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|tag| tag.name)
        .filter(|name| !name.is_empty())
        .collect()
}

fn convert_attachment(attachment: Attachment, base_url: &str) -> ExportAttachment {
    ExportAttachment {
        name: attachment.name,
        url: attachment.url.map(|url| resolve_href(&url, base_url)),
        size: attachment.size.map(|size| size.max(0) as u64).unwrap_or(0),
    }
}

/// Attachment URLs come back relative to the instance root.
fn resolve_href(href: &str, base_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") || base_url.is_empty() {
        return href.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::{ExportKind, ExportSnapshot};
    use youtrack_api::models::{Article, Issue};

    #[test]
    fn issue_snapshot_resolves_references_and_urls() {
        let issue: Issue = serde_json::from_str(
            r#"{
                "idReadable": "PRJ-1",
                "summary": "Title",
                "description": "d1",
                "reporter": {"login": "ann"},
                "project": {"shortName": "PRJ", "name": "Project"},
                "tags": [{"name": "urgent"}, {"name": ""}],
                "attachments": [{"name": "log.txt", "url": "/persistent/log.txt", "size": 2048}]
            }"#,
        )
        .expect("issue parses");

        let snapshot = ExportSnapshot::from_issue(issue, "https://yt.example.com/");
        assert_eq!(snapshot.kind, ExportKind::Issue);
        assert_eq!(snapshot.project.as_deref(), Some("PRJ"));
        assert_eq!(snapshot.reporter.as_deref(), Some("ann"));
        assert_eq!(snapshot.tags, vec!["urgent"]);
        assert_eq!(
            snapshot.attachments[0].url.as_deref(),
            Some("https://yt.example.com/persistent/log.txt")
        );
        assert_eq!(snapshot.attachments[0].size, 2048);
    }

    #[test]
    fn article_snapshot_uses_content_as_body() {
        let article: Article = serde_json::from_str(
            r#"{"idReadable": "KB-A-1", "summary": "Guide", "content": "body text"}"#,
        )
        .expect("article parses");

        let snapshot = ExportSnapshot::from_article(article, "https://yt.example.com");
        assert_eq!(snapshot.kind, ExportKind::Article);
        assert_eq!(snapshot.body.as_deref(), Some("body text"));
        assert!(snapshot.fields.is_empty());
    }

    #[test]
    fn present_project_without_names_still_registers() {
        let issue: Issue =
            serde_json::from_str(r#"{"idReadable": "PRJ-2", "project": {}}"#).expect("parses");
        let snapshot = ExportSnapshot::from_issue(issue, "");
        assert_eq!(snapshot.project.as_deref(), Some(""));
    }
}
