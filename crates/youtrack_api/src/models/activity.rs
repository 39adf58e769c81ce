//! Activity feed payloads from the `activitiesPage` endpoint.
//!
//! Comments are not fetched as first-class entities; they are derived from
//! comment-category activities whose `added`/`removed` payloads carry text
//! fragments. Payload shapes vary by category, so both sides are modeled as
//! untagged unions that tolerate whatever the server sends.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::user::UserRef;

/// Envelope returned by `issues/{id}/activitiesPage` and
/// `articles/{id}/activitiesPage`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesPage {
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// One host-reported event on an entity.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub author: Option<UserRef>,
    pub timestamp: Option<i64>,
    pub category: Option<ActivityCategory>,
    #[serde(default)]
    pub added: Option<ActivityPayload>,
    #[serde(default)]
    pub removed: Option<ActivityPayload>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategory {
    pub id: Option<String>,
}

/// An `added`/`removed` payload: usually an array of fragments, sometimes a
/// single bare fragment.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ActivityPayload {
    Many(Vec<ActivityFragment>),
    One(ActivityFragment),
}

impl ActivityPayload {
    /// View of the payload as a fragment slice regardless of wire shape.
    pub fn fragments(&self) -> &[ActivityFragment] {
        match self {
            ActivityPayload::Many(fragments) => fragments,
            ActivityPayload::One(fragment) => std::slice::from_ref(fragment),
        }
    }
}

/// A single payload fragment: a bare string, an object exposing a string
/// `text` field, or something else entirely (dropped downstream).
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ActivityFragment {
    Text(String),
    Item(ActivityFragmentItem),
    Other(Value),
}

impl ActivityFragment {
    /// Text carried by the fragment, when it has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ActivityFragment::Text(text) => Some(text.as_str()),
            ActivityFragment::Item(item) => item.text.as_deref(),
            ActivityFragment::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFragmentItem {
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::{ActivitiesPage, ActivityFragment, ActivityPayload};

    #[test]
    fn payload_accepts_array_and_single_fragment() {
        let many: ActivityPayload =
            serde_json::from_str(r#"[{"text":"a"},{"text":"b"}]"#).expect("array payload");
        assert_eq!(many.fragments().len(), 2);

        let one: ActivityPayload = serde_json::from_str(r#"{"text":"solo"}"#).expect("bare payload");
        assert_eq!(one.fragments().len(), 1);
        assert_eq!(one.fragments()[0].text(), Some("solo"));
    }

    #[test]
    fn fragment_with_non_string_text_yields_none() {
        let fragment: ActivityFragment = serde_json::from_str(r#"{"text":5}"#).expect("fragment");
        assert_eq!(fragment.text(), None);
    }

    #[test]
    fn page_with_missing_activities_defaults_to_empty() {
        let page: ActivitiesPage = serde_json::from_str("{}").expect("page");
        assert!(page.activities.is_empty());
    }
}
