//! Typed YouTrack API client crate used by the copy-as-Markdown widgets.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::YouTrackClient;
pub use config::YouTrackConfig;
pub use error::{Result, YouTrackError};
pub use models::{
    ActivitiesPage, Activity, ActivityCategory, ActivityFragment, ActivityPayload, Article,
    Attachment, CustomFieldEntry, FieldValue, FieldValueItem, Issue, IssueLink, LinkType,
    ProjectRef, RelatedIssue, TagRef, UserRef,
};
