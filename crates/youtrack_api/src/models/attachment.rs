//! Attachment metadata returned by issue and article projections.

use serde::Deserialize;
use serde_json::Value;

use super::user::UserRef;

/// Attachment metadata: stable id, display name, content URL (often
/// relative to the instance base), byte size, mime type and author.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub size: Option<i64>,
    pub mime_type: Option<String>,
    pub created: Option<i64>,
    pub author: Option<UserRef>,
}
