//! Placeholder substitution for the copy-link widgets.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Template applied when the project has not configured one.
pub const DEFAULT_TEMPLATE: &str = "[{{id}}]({{url}}) {{summary}}";

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(id|url|summary)\}\}").expect("invalid placeholder regex"));

/// Entity fields a template can reference. Absent values substitute as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTarget {
    pub id: String,
    pub url: String,
    pub summary: String,
}

/// Substitutes `{{id}}`, `{{url}}` and `{{summary}}` in a single pass.
/// Substituted values are never re-scanned, so entity text containing a
/// token-like substring comes through verbatim.
pub fn build_link(template: &str, target: &LinkTarget) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "id" => target.id.as_str(),
            "url" => target.url.as_str(),
            _ => target.summary.as_str(),
        })
        .into_owned()
}
