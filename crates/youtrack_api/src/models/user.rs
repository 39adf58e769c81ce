//! User references embedded in issue, article and activity payloads.

use serde::Deserialize;

/// A minimal user reference as requested by the `reporter(login,fullName)`
/// and `author(login,fullName)` projections.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub login: Option<String>,
    pub full_name: Option<String>,
}

impl UserRef {
    /// Best available display name: full name first, then login.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.login.as_deref().filter(|login| !login.is_empty()))
    }
}
