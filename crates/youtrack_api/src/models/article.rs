use serde::Deserialize;

use super::attachment::Attachment;
use super::issue::{ProjectRef, TagRef};
use super::user::UserRef;

/// A knowledge-base article snapshot. Mirrors [`super::Issue`] except the
/// body lives in `content` and there are no custom fields or links.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Option<String>,
    pub id_readable: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub reporter: Option<UserRef>,
    pub created: Option<i64>,
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
