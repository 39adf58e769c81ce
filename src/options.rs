//! Per-user section toggles for the context-copy widgets.
//!
//! The same options object serves issues and articles; keys that only apply
//! to one entity type (fields, links) are preserved for the other so that
//! stored preferences survive switching between widgets.

use serde::{Deserialize, Serialize};

/// Names of the sections a toggle can address, in render order.
pub const SECTION_NAMES: [&str; 11] = [
    "id",
    "summary",
    "description",
    "project",
    "reporter",
    "created",
    "tags",
    "fields",
    "attachments",
    "links",
    "comments",
];

/// Section inclusion toggles. Defaults keep the identifying header and body
/// on and everything else opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    pub id: bool,
    pub summary: bool,
    pub description: bool,
    pub project: bool,
    pub reporter: bool,
    pub created: bool,
    pub tags: bool,
    pub fields: bool,
    pub attachments: bool,
    pub links: bool,
    pub comments: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            id: true,
            summary: true,
            description: true,
            project: true,
            reporter: false,
            created: false,
            tags: false,
            fields: false,
            attachments: false,
            links: false,
            comments: false,
        }
    }
}

impl CopyOptions {
    /// Overlays a stored partial options object: present keys win, missing
    /// keys keep their current value.
    pub fn apply(&mut self, patch: &CopyOptionsPatch) {
        let slots = [
            (&mut self.id, patch.id),
            (&mut self.summary, patch.summary),
            (&mut self.description, patch.description),
            (&mut self.project, patch.project),
            (&mut self.reporter, patch.reporter),
            (&mut self.created, patch.created),
            (&mut self.tags, patch.tags),
            (&mut self.fields, patch.fields),
            (&mut self.attachments, patch.attachments),
            (&mut self.links, patch.links),
            (&mut self.comments, patch.comments),
        ];
        for (slot, stored) in slots {
            if let Some(value) = stored {
                *slot = value;
            }
        }
    }

    /// Defaults with a stored patch applied on top.
    pub fn merged(patch: &CopyOptionsPatch) -> Self {
        let mut options = Self::default();
        options.apply(patch);
        options
    }

    /// Flips one toggle by section name. Returns false for unknown names.
    pub fn set_by_name(&mut self, name: &str, value: bool) -> bool {
        match name {
            "id" => self.id = value,
            "summary" => self.summary = value,
            "description" => self.description = value,
            "project" => self.project = value,
            "reporter" => self.reporter = value,
            "created" => self.created = value,
            "tags" => self.tags = value,
            "fields" => self.fields = value,
            "attachments" => self.attachments = value,
            "links" => self.links = value,
            "comments" => self.comments = value,
            _ => return false,
        }
        true
    }
}

/// Partial options as stored by the settings endpoint. Unknown keys in the
/// stored JSON are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<bool>,
}
