//! Copy-as-Markdown widgets for YouTrack issues and knowledge-base
//! articles.
//!
//! The export pipeline is pure: wire payloads from [`youtrack_api`] are
//! flattened into an [`export::ExportSnapshot`], comments are derived from
//! the activity feed, and [`markdown::render_export`] assembles the final
//! document under the user's [`options::CopyOptions`]. The widget layer
//! wires those pieces to the clipboard strategy chain and the settings
//! endpoints.

pub mod clipboard;
pub mod comments;
pub mod config;
pub mod export;
pub mod fields;
pub mod markdown;
pub mod options;
pub mod template;
pub mod text;
pub mod widget;

pub use comments::{extract_comments, CommentEntry};
pub use export::{ExportKind, ExportSnapshot};
pub use markdown::render_export;
pub use options::{CopyOptions, CopyOptionsPatch};
pub use template::{build_link, LinkTarget, DEFAULT_TEMPLATE};
pub use widget::{ContextWidget, LinkWidget, LogNotifier, NoticeLevel, Notifier};
