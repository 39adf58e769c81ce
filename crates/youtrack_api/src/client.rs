use crate::config::YouTrackConfig;
use crate::error::{Result, YouTrackError};
use crate::models::{
    unwrap_result, ActivitiesPage, Article, Issue, IssueLink, LinkTemplatePayload,
    UserSettingsPayload,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Field projection for the context-copy issue fetch. Fully qualified so the
/// server returns every nested attribute the renderer can use.
const ISSUE_FIELDS: &str = "id,idReadable,summary,description,\
reporter(login,fullName),created,\
project(shortName,name),\
tags(name),\
attachments(id,name,url,size,mimeType,created,author(login,fullName)),\
fields(value(id,name,login,fullName,localizedName,presentation,$type),\
projectCustomField(field(name,fieldType(valueType))))";

/// Article projection: same as the issue one minus links/fields, with
/// `content` carrying the body.
const ARTICLE_FIELDS: &str = "id,idReadable,summary,content,\
reporter(login,fullName),created,\
project(shortName,name),\
tags(name),\
attachments(id,name,url,size,mimeType,created,author(login,fullName))";

const LINK_FIELDS: &str = "direction,\
linkType(name,localizedName,sourceToTarget,localizedSourceToTarget,\
targetToSource,localizedTargetToSource),\
issues(idReadable,summary)";

const ACTIVITY_FIELDS: &str =
    "activities(author(login,fullName),timestamp,category(id),added(text,$type),removed(text,$type))";

/// Comment-related activity categories, used to filter the activities feed
/// server-side before comments are derived from it.
const COMMENT_CATEGORIES: &str = "CommentsCategory,CommentTextCategory,ArticleCommentsCategory,\
CommentAttachmentsCategory,CommentReactionCategory,CommentTemporarilyDeletedCategory,\
CommentVisibilityCategory";

const USER_SETTINGS_PATH: &str = "backend-global/user-settings";
const LINK_TEMPLATE_PATH: &str = "backend/get-template";

/// Async client for the YouTrack REST API and the app backend hosting the
/// per-user settings and link-template endpoints. Every call is a single
/// attempt; there is no retry, pacing or response caching.
#[derive(Clone)]
pub struct YouTrackClient {
    http: HttpClient,
    config: YouTrackConfig,
}

impl YouTrackClient {
    pub fn new(config: YouTrackConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &YouTrackConfig {
        &self.config
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.get_with_query(path, None).await
    }

    pub async fn get_with_query<T>(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(&self.config.api_root(), path);
        debug!(path, "youtrack get");
        let mut request = self.http.get(url);
        if let Some(params) = query {
            request = request.query(params);
        }
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    async fn get_app_value(&self, path: &str) -> Result<Value> {
        let url = self.url_for(&self.config.app_root(), path);
        debug!(path, "app backend get");
        let response = self.http.get(url).send().await?;
        Self::parse_json(response).await
    }

    async fn post_app<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(&self.config.app_root(), path);
        debug!(path, "app backend post");
        let response = self.http.post(url).json(body).send().await?;
        Self::ensure_success(response).await
    }

    /// Fetches an issue with the full context-copy projection.
    pub async fn get_issue(&self, issue_id: &str) -> Result<Issue> {
        let path = format!("issues/{}", issue_id);
        self.get_with_query(&path, Some(&[("fields", ISSUE_FIELDS)])).await
    }

    /// Fetches a knowledge-base article with the context-copy projection.
    pub async fn get_article(&self, article_id: &str) -> Result<Article> {
        let path = format!("articles/{}", article_id);
        self.get_with_query(&path, Some(&[("fields", ARTICLE_FIELDS)])).await
    }

    /// Fetches the outbound/inbound link groups of an issue.
    pub async fn get_issue_links(&self, issue_id: &str) -> Result<Vec<IssueLink>> {
        let path = format!("issues/{}/links", issue_id);
        self.get_with_query(&path, Some(&[("fields", LINK_FIELDS)])).await
    }

    /// Fetches the comment-category activity page of an issue.
    pub async fn get_issue_activities(&self, issue_id: &str) -> Result<ActivitiesPage> {
        let path = format!("issues/{}/activitiesPage", issue_id);
        self.get_activities_page(&path).await
    }

    /// Fetches the comment-category activity page of an article.
    pub async fn get_article_activities(&self, article_id: &str) -> Result<ActivitiesPage> {
        let path = format!("articles/{}/activitiesPage", article_id);
        self.get_activities_page(&path).await
    }

    async fn get_activities_page(&self, path: &str) -> Result<ActivitiesPage> {
        self.get_with_query(
            path,
            Some(&[("categories", COMMENT_CATEGORIES), ("fields", ACTIVITY_FIELDS)]),
        )
        .await
    }

    /// Fetches the stored per-user copy settings, if any. The concrete
    /// shape belongs to the widget layer, so the payload stays raw JSON.
    pub async fn get_user_settings(&self) -> Result<Option<Value>> {
        let raw = unwrap_result(self.get_app_value(USER_SETTINGS_PATH).await?);
        if raw.is_null() {
            return Ok(None);
        }
        let payload: UserSettingsPayload = serde_json::from_value(raw)?;
        Ok(payload.settings)
    }

    /// Stores the current per-user copy settings.
    pub async fn save_user_settings<T>(&self, settings: &T) -> Result<()>
    where
        T: Serialize,
    {
        let body = serde_json::json!({ "settings": settings });
        self.post_app(USER_SETTINGS_PATH, &body).await
    }

    /// Fetches the configured Markdown link template. `None` when the
    /// project admin has not configured one.
    pub async fn get_link_template(&self) -> Result<Option<String>> {
        let raw = unwrap_result(self.get_app_value(LINK_TEMPLATE_PATH).await?);
        if raw.is_null() {
            return Ok(None);
        }
        let payload: LinkTemplatePayload = serde_json::from_value(raw)?;
        Ok(payload.template)
    }

    /// Resolves a possibly-relative href (attachment URLs mostly) against
    /// the instance base URL. Falls back to the input on parse failure.
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            return href.to_string();
        }
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join(href.trim_start_matches('/')))
            .map(String::from)
            .unwrap_or_else(|_| href.to_string())
    }

    fn url_for(&self, root: &str, path: &str) -> String {
        let mut base = root.to_string();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(YouTrackError::from)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(YouTrackError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }

    async fn ensure_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            Err(YouTrackError::Authentication(format!(
                "Access denied ({}) - {}",
                status, body
            )))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(build_http_error(status, &body))
        }
    }
}

fn build_http_client(config: &YouTrackConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        header_value(format!("Bearer {}", config.token))?,
    );

    if let Some(language) = &config.accept_language {
        headers.insert(ACCEPT_LANGUAGE, header_value(language.clone())?);
    }

    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| YouTrackError::Other(err.to_string()))
}

fn header_value(value: String) -> Result<HeaderValue> {
    HeaderValue::from_str(&value).map_err(|err| YouTrackError::Other(err.to_string()))
}

fn build_http_error(status: StatusCode, body: &str) -> YouTrackError {
    let code = extract_error_code(body);
    YouTrackError::http(status, code, body.to_string())
}

/// YouTrack error bodies carry `error` and `error_description`; the
/// description is the more useful code when present.
fn extract_error_code(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    value
        .get("error_description")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
