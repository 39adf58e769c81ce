//! Widget controllers: mount-time data loading and the copy action.
//!
//! `ContextWidget` backs the full context export, `LinkWidget` the
//! templated link copy. Both treat entity data as a one-shot fetch: a
//! failure surfaces as a widget-level error, while settings and template
//! fetches silently fall back to defaults.

use log::{debug, info, warn};
use youtrack_api::models::IssueLink;
use youtrack_api::YouTrackClient;

use crate::clipboard;
use crate::comments::{extract_comments, CommentEntry};
use crate::export::{ExportKind, ExportSnapshot};
use crate::markdown::render_export;
use crate::options::{CopyOptions, CopyOptionsPatch};
use crate::template::{build_link, LinkTarget, DEFAULT_TEMPLATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing notification sink. Fire-and-forget; not part of render
/// correctness.
pub trait Notifier {
    fn notify(&self, message: &str, level: NoticeLevel);
}

/// Default notifier backed by the log facade.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        match level {
            NoticeLevel::Success => info!("{}", message),
            NoticeLevel::Error => warn!("{}", message),
        }
    }
}

/// Controller for the context-copy widget.
#[derive(Debug)]
pub struct ContextWidget {
    options: CopyOptions,
    snapshot: ExportSnapshot,
    comments: Vec<CommentEntry>,
    links: Vec<IssueLink>,
}

impl ContextWidget {
    /// Loads stored settings and entity data concurrently. Settings
    /// failures keep the defaults; entity or activity failures become the
    /// widget error state.
    pub async fn mount(
        client: &YouTrackClient,
        kind: ExportKind,
        entity_id: &str,
    ) -> Result<Self, String> {
        let entity_id = entity_id.trim();
        if entity_id.is_empty() {
            return Err(format!("No {} context found", kind.label()));
        }

        let (patch, data) = tokio::join!(
            fetch_settings(client),
            fetch_entity_data(client, kind, entity_id)
        );

        let mut options = CopyOptions::default();
        if let Some(patch) = patch {
            options.apply(&patch);
        }
        let (snapshot, comments, links) = data?;

        Ok(Self {
            options,
            snapshot,
            comments,
            links,
        })
    }

    pub fn kind(&self) -> ExportKind {
        self.snapshot.kind
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CopyOptions {
        &mut self.options
    }

    /// Current Markdown document, recomputed from the live option set.
    pub fn markdown(&self) -> String {
        render_export(&self.snapshot, &self.comments, &self.links, &self.options)
    }

    /// Persists the current options (without awaiting the save) and writes
    /// the document to the clipboard. The copy proceeds regardless of the
    /// save outcome.
    pub fn copy(&self, client: &YouTrackClient, notifier: &dyn Notifier) -> bool {
        persist_options(client, &self.options);
        let ok = clipboard::write_clipboard(&self.markdown());
        if ok {
            notifier.notify("Context copied to clipboard", NoticeLevel::Success);
        } else {
            notifier.notify("Failed to copy context", NoticeLevel::Error);
        }
        ok
    }
}

/// Controller for the copy-link widget. The built link stays readable and
/// editable so the user can recover manually when every clipboard strategy
/// fails.
#[derive(Debug)]
pub struct LinkWidget {
    link: String,
}

impl LinkWidget {
    /// Fetches the entity and the configured template concurrently and
    /// substitutes the placeholders. A missing or failed template resolves
    /// to the default; an entity failure is the widget error state.
    pub async fn mount(
        client: &YouTrackClient,
        kind: ExportKind,
        entity_id: &str,
        template_override: Option<&str>,
    ) -> Result<Self, String> {
        let entity_id = entity_id.trim();
        if entity_id.is_empty() {
            return Err(format!("No {} context found", kind.label()));
        }

        let (target, template) = tokio::join!(
            fetch_link_target(client, kind, entity_id),
            resolve_template(client, template_override)
        );
        let target = target?;

        Ok(Self {
            link: build_link(&template, &target),
        })
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn set_link(&mut self, link: String) {
        self.link = link;
    }

    /// Writes the link to the clipboard and notifies the user either way.
    pub fn copy(&self, notifier: &dyn Notifier) -> bool {
        let ok = clipboard::write_clipboard(&self.link);
        if ok {
            notifier.notify("Link copied to clipboard", NoticeLevel::Success);
        } else {
            notifier.notify("Failed to copy link", NoticeLevel::Error);
        }
        ok
    }
}

async fn fetch_settings(client: &YouTrackClient) -> Option<CopyOptionsPatch> {
    match client.get_user_settings().await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(patch) => Some(patch),
            Err(err) => {
                debug!("Stored settings unreadable, keeping defaults: {}", err);
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            debug!("Settings fetch failed, keeping defaults: {}", err);
            None
        }
    }
}

/// Dispatches the settings save without awaiting it, trading persistence
/// durability for copy responsiveness.
fn persist_options(client: &YouTrackClient, options: &CopyOptions) {
    let client = client.clone();
    let options = options.clone();
    tokio::spawn(async move {
        if let Err(err) = client.save_user_settings(&options).await {
            debug!("Settings save failed: {}", err);
        }
    });
}

async fn fetch_entity_data(
    client: &YouTrackClient,
    kind: ExportKind,
    entity_id: &str,
) -> Result<(ExportSnapshot, Vec<CommentEntry>, Vec<IssueLink>), String> {
    let base_url = client.config().base_url.clone();
    match kind {
        ExportKind::Issue => {
            let (issue, links, page) = tokio::try_join!(
                client.get_issue(entity_id),
                client.get_issue_links(entity_id),
                client.get_issue_activities(entity_id)
            )
            .map_err(|err| format!("Failed to load issue context: {}", err))?;
            Ok((
                ExportSnapshot::from_issue(issue, &base_url),
                extract_comments(&page.activities),
                links,
            ))
        }
        ExportKind::Article => {
            let (article, page) = tokio::try_join!(
                client.get_article(entity_id),
                client.get_article_activities(entity_id)
            )
            .map_err(|err| format!("Failed to load article context: {}", err))?;
            Ok((
                ExportSnapshot::from_article(article, &base_url),
                extract_comments(&page.activities),
                Vec::new(),
            ))
        }
    }
}

async fn fetch_link_target(
    client: &YouTrackClient,
    kind: ExportKind,
    entity_id: &str,
) -> Result<LinkTarget, String> {
    let base_url = client.config().base_url.clone();
    match kind {
        ExportKind::Issue => {
            let issue = client
                .get_issue(entity_id)
                .await
                .map_err(|err| format!("Failed to load issue info: {}", err))?;
            Ok(build_target(
                kind,
                issue.id_readable.or(issue.id),
                issue.summary,
                &base_url,
            ))
        }
        ExportKind::Article => {
            let article = client
                .get_article(entity_id)
                .await
                .map_err(|err| format!("Failed to load article info: {}", err))?;
            Ok(build_target(
                kind,
                article.id_readable.or(article.id),
                article.summary,
                &base_url,
            ))
        }
    }
}

/// Assembles the substitutable entity fields. The web URL follows the
/// instance convention `<base>/issue/<id>` and `<base>/articles/<id>`.
fn build_target(
    kind: ExportKind,
    id: Option<String>,
    summary: Option<String>,
    base_url: &str,
) -> LinkTarget {
    let id = id.unwrap_or_default();
    let url = if id.is_empty() {
        String::new()
    } else {
        format!("{}/{}/{}", base_url.trim_end_matches('/'), kind.web_path(), id)
    };
    LinkTarget {
        id,
        url,
        summary: summary.unwrap_or_default(),
    }
}

async fn resolve_template(client: &YouTrackClient, template_override: Option<&str>) -> String {
    if let Some(template) = template_override {
        return template.to_string();
    }
    match client.get_link_template().await {
        Ok(Some(template)) if !template.is_empty() => template,
        Ok(_) => DEFAULT_TEMPLATE.to_string(),
        Err(err) => {
            debug!("Template fetch failed, using default: {}", err);
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{build_target, ContextWidget, LinkWidget};
    use crate::export::ExportKind;
    use youtrack_api::{YouTrackClient, YouTrackConfig};

    fn offline_client() -> YouTrackClient {
        YouTrackClient::new(YouTrackConfig::new("https://yt.example.com", "token"))
            .expect("client builds")
    }

    #[tokio::test]
    async fn mount_without_entity_id_reports_missing_context() {
        let client = offline_client();
        let err = ContextWidget::mount(&client, ExportKind::Issue, "  ")
            .await
            .expect_err("blank id must fail");
        assert_eq!(err, "No issue context found");

        let err = LinkWidget::mount(&client, ExportKind::Article, "", None)
            .await
            .expect_err("blank id must fail");
        assert_eq!(err, "No article context found");
    }

    #[test]
    fn build_target_derives_web_url_from_kind() {
        let target = build_target(
            ExportKind::Issue,
            Some("PRJ-1".to_string()),
            Some("Title".to_string()),
            "https://yt.example.com/",
        );
        assert_eq!(target.url, "https://yt.example.com/issue/PRJ-1");

        let target = build_target(
            ExportKind::Article,
            Some("KB-A-1".to_string()),
            None,
            "https://yt.example.com",
        );
        assert_eq!(target.url, "https://yt.example.com/articles/KB-A-1");
        assert_eq!(target.summary, "");
    }

    #[test]
    fn build_target_without_id_leaves_url_empty() {
        let target = build_target(ExportKind::Issue, None, Some("x".to_string()), "https://yt");
        assert_eq!(target.id, "");
        assert_eq!(target.url, "");
    }
}
