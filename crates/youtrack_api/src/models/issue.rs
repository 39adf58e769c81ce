use serde::Deserialize;

use super::attachment::Attachment;
use super::field::CustomFieldEntry;
use super::user::UserRef;

/// An issue snapshot as requested by the context-copy projection. Every
/// field is optional; missing data degrades at render time instead of
/// failing deserialization.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: Option<String>,
    pub id_readable: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub reporter: Option<UserRef>,
    pub created: Option<i64>,
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub fields: Vec<CustomFieldEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub short_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    pub name: Option<String>,
}
