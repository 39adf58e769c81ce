use std::time::Duration;

pub const DEFAULT_API_PATH: &str = "api";
pub const DEFAULT_APP_ID: &str = "copy-context";
pub const DEFAULT_USER_AGENT: &str = "ytcopy";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for a YouTrack instance.
///
/// Authentication uses a permanent token sent as a `Bearer` header. The
/// `app` field names the installed app whose backend hosts the
/// `user-settings` and `get-template` endpoints.
#[derive(Clone, Debug)]
pub struct YouTrackConfig {
    pub base_url: String,
    pub token: String,
    pub app: String,
    pub accept_language: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl YouTrackConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            app: DEFAULT_APP_ID.to_string(),
            accept_language: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = app.into();
        self
    }

    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = Some(language.into());
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    /// Root of the REST API, with a trailing slash.
    pub fn api_root(&self) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), DEFAULT_API_PATH)
    }

    /// Root of the installed app's backend endpoints, with a trailing slash.
    pub fn app_root(&self) -> String {
        format!(
            "{}/{}/apps/{}/",
            self.base_url.trim_end_matches('/'),
            DEFAULT_API_PATH,
            self.app
        )
    }
}

#[cfg(test)]
mod tests {
    use super::YouTrackConfig;

    #[test]
    fn api_root_normalizes_trailing_slash() {
        let config = YouTrackConfig::new("https://yt.example.com/", "token");
        assert_eq!(config.api_root(), "https://yt.example.com/api/");
    }

    #[test]
    fn app_root_uses_configured_app_id() {
        let config = YouTrackConfig::new("https://yt.example.com", "token").with_app("md-export");
        assert_eq!(config.app_root(), "https://yt.example.com/api/apps/md-export/");
    }
}
