//! Issue link payloads from the `issues/{id}/links` endpoint.

use serde::Deserialize;

/// One link group: a direction, the link-type descriptor with its
/// per-direction label variants, and the related issues on the other end.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    pub direction: Option<String>,
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub issues: Vec<RelatedIssue>,
}

/// Link-type descriptor. Labels are localized when the server has a
/// translation; either side may be missing.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LinkType {
    pub name: Option<String>,
    pub localized_name: Option<String>,
    pub source_to_target: Option<String>,
    pub localized_source_to_target: Option<String>,
    pub target_to_source: Option<String>,
    pub localized_target_to_source: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedIssue {
    pub id_readable: Option<String>,
    pub summary: Option<String>,
}
