mod activity;
mod article;
mod attachment;
mod field;
mod issue;
mod link;
mod settings;
mod user;

pub use activity::{
    ActivitiesPage, Activity, ActivityCategory, ActivityFragment, ActivityFragmentItem,
    ActivityPayload,
};
pub use article::Article;
pub use attachment::Attachment;
pub use field::{
    CustomFieldEntry, FieldDescriptor, FieldType, FieldValue, FieldValueItem, ProjectCustomField,
};
pub use issue::{Issue, ProjectRef, TagRef};
pub use link::{IssueLink, LinkType, RelatedIssue};
pub use settings::{unwrap_result, LinkTemplatePayload, UserSettingsPayload};
pub use user::UserRef;
