//! Environment-backed connection settings for the CLI shell.

use std::env;

use youtrack_api::YouTrackConfig;

pub const ENV_BASE_URL: &str = "YOUTRACK_BASE_URL";
pub const ENV_TOKEN: &str = "YOUTRACK_TOKEN";
pub const ENV_APP: &str = "YOUTRACK_APP";

/// Connection parameters resolved from the environment. The app id is
/// optional and falls back to the client's default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub token: String,
    pub app: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url = required(ENV_BASE_URL)?;
        let token = required(ENV_TOKEN)?;
        let app = env::var(ENV_APP)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            base_url,
            token,
            app,
        })
    }

    pub fn client_config(&self) -> YouTrackConfig {
        let mut config = YouTrackConfig::new(self.base_url.clone(), self.token.clone());
        if let Some(app) = &self.app {
            config = config.with_app(app.clone());
        }
        config
    }
}

fn required(name: &str) -> Result<String, String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("{} is not set", name))
}
