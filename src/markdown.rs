//! Renders an entity snapshot into the Markdown document placed on the
//! clipboard.
//!
//! One renderer serves both widgets; [`ExportKind`] decides the body
//! heading, whether the body is code-fenced (issue descriptions are raw
//! Markdown and get wrapped, article content is emitted as-is) and whether
//! the issue-only fields/links sections apply. Section order is fixed and
//! sections that resolve to nothing are dropped without leaving blank
//! lines behind.

use crate::comments::CommentEntry;
use crate::export::{ExportAttachment, ExportField, ExportKind, ExportSnapshot};
use crate::fields::field_value_text;
use crate::options::CopyOptions;
use crate::text::{bytes_to_size, human_date, wrap_in_code_block};
use youtrack_api::models::{IssueLink, LinkType, RelatedIssue};

const BODY_FENCE_LANGUAGE: &str = "markdown";

/// Builds the full Markdown document for a snapshot. Pure and total: bad
/// pieces of input drop their own line or section, never the whole render.
pub fn render_export(
    snapshot: &ExportSnapshot,
    comments: &[CommentEntry],
    links: &[IssueLink],
    options: &CopyOptions,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_title(&mut lines, snapshot, options);
    push_header_lines(&mut lines, snapshot, options);
    push_body(&mut lines, snapshot, options);
    push_tags(&mut lines, snapshot, options);
    push_fields(&mut lines, snapshot, options);
    push_attachments(&mut lines, snapshot, options);
    push_links(&mut lines, snapshot, links, options);
    push_comments(&mut lines, comments, options);

    lines.join("\n").trim().to_string()
}

fn push_title(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    let mut parts: Vec<&str> = Vec::new();
    if options.id {
        if let Some(id) = non_empty(snapshot.id_readable.as_deref()) {
            parts.push(id);
        }
    }
    if options.summary {
        if let Some(summary) = non_empty(snapshot.summary.as_deref()) {
            parts.push(summary);
        }
    }
    if !parts.is_empty() {
        lines.push(format!("# {}", parts.join(" — ")));
    }
}

fn push_header_lines(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    if options.project {
        if let Some(project) = &snapshot.project {
            lines.push(format!("Project: {}", project).trim_end().to_string());
        }
    }
    if options.reporter {
        if let Some(reporter) = &snapshot.reporter {
            lines.push(format!("Reporter: {}", reporter).trim_end().to_string());
        }
    }
    if options.created {
        if let Some(created) = snapshot.created.filter(|ts| *ts != 0) {
            lines.push(format!("Created: {}", human_date(Some(created))));
        }
    }
}

fn push_body(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    if !options.description {
        return;
    }
    let Some(body) = non_empty(snapshot.body.as_deref().map(str::trim)) else {
        return;
    };
    let rendered = match snapshot.kind {
        ExportKind::Issue => wrap_in_code_block(body, BODY_FENCE_LANGUAGE),
        ExportKind::Article => body.to_string(),
    };
    if rendered.is_empty() {
        return;
    }
    push_section(lines, snapshot.kind.body_heading(), vec![rendered]);
}

fn push_tags(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    if !options.tags || snapshot.tags.is_empty() {
        return;
    }
    push_section(lines, "## Tags", vec![snapshot.tags.join(", ")]);
}

fn push_fields(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    if !options.fields || !snapshot.kind.has_fields() {
        return;
    }
    let bullets: Vec<String> = snapshot.fields.iter().filter_map(field_bullet).collect();
    if !bullets.is_empty() {
        push_section(lines, "## Fields", bullets);
    }
}

fn field_bullet(field: &ExportField) -> Option<String> {
    let text = field_value_text(field.value.as_ref());
    if text.is_empty() {
        return None;
    }
    Some(format!("- {}: {}", field.name, text))
}

fn push_attachments(lines: &mut Vec<String>, snapshot: &ExportSnapshot, options: &CopyOptions) {
    if !options.attachments || snapshot.attachments.is_empty() {
        return;
    }
    let bullets = snapshot
        .attachments
        .iter()
        .map(attachment_bullet)
        .collect();
    push_section(lines, "## Attachments", bullets);
}

fn attachment_bullet(attachment: &ExportAttachment) -> String {
    let name = non_empty(attachment.name.as_deref()).unwrap_or("file");
    let url = attachment.url.as_deref().unwrap_or("");
    let size = if attachment.size > 0 {
        format!(" ({})", bytes_to_size(Some(attachment.size)))
    } else {
        String::new()
    };
    format!("- [{}]({}){}", name, url, size)
}

fn push_links(
    lines: &mut Vec<String>,
    snapshot: &ExportSnapshot,
    links: &[IssueLink],
    options: &CopyOptions,
) {
    if !options.links || !snapshot.kind.has_links() || links.is_empty() {
        return;
    }
    let bullets: Vec<String> = links.iter().filter_map(link_bullet).collect();
    if !bullets.is_empty() {
        push_section(lines, "## Links", bullets);
    }
}

/// A link renders only when both a direction-appropriate label and at least
/// one identifiable related issue resolve.
fn link_bullet(link: &IssueLink) -> Option<String> {
    let link_type = link.link_type.as_ref()?;
    let inward = link
        .direction
        .as_deref()
        .map(|direction| direction.eq_ignore_ascii_case("INWARD"))
        .unwrap_or(false);
    let label = link_label(link_type, inward)?;

    let related = link
        .issues
        .iter()
        .filter_map(related_issue_text)
        .collect::<Vec<_>>()
        .join(", ");
    if related.is_empty() {
        return None;
    }
    Some(format!("- {}: {}", label, related))
}

fn link_label(link_type: &LinkType, inward: bool) -> Option<&str> {
    let candidates = if inward {
        [
            link_type.localized_target_to_source.as_deref(),
            link_type.target_to_source.as_deref(),
            link_type.localized_name.as_deref(),
            link_type.name.as_deref(),
        ]
    } else {
        [
            link_type.localized_source_to_target.as_deref(),
            link_type.source_to_target.as_deref(),
            link_type.localized_name.as_deref(),
            link_type.name.as_deref(),
        ]
    };
    candidates.into_iter().flatten().find(|label| !label.is_empty())
}

fn related_issue_text(issue: &RelatedIssue) -> Option<String> {
    let id = non_empty(issue.id_readable.as_deref())?;
    Some(match non_empty(issue.summary.as_deref()) {
        Some(summary) => format!("{} — {}", id, summary),
        None => id.to_string(),
    })
}

fn push_comments(lines: &mut Vec<String>, comments: &[CommentEntry], options: &CopyOptions) {
    if !options.comments || comments.is_empty() {
        return;
    }
    let mut body: Vec<String> = Vec::new();
    for comment in comments {
        if comment.text.is_empty() {
            continue;
        }
        let author = if comment.author.is_empty() {
            "User"
        } else {
            comment.author.as_str()
        };
        let date = comment
            .timestamp
            .filter(|ts| *ts != 0)
            .map(|ts| format!(" ({})", human_date(Some(ts))))
            .unwrap_or_default();
        body.push(format!("**{}**{}:", author, date));
        body.push(blockquote(&comment.text));
        body.push(String::new());
    }
    if !body.is_empty() {
        push_section(lines, "## Comments", body);
    }
}

fn blockquote(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends a heading preceded and followed by a blank line, then the body.
fn push_section(lines: &mut Vec<String>, heading: &str, body: Vec<String>) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.push(String::new());
    lines.extend(body);
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::render_export;
    use crate::comments::CommentEntry;
    use crate::export::{ExportAttachment, ExportField, ExportKind, ExportSnapshot};
    use crate::options::CopyOptions;
    use youtrack_api::models::IssueLink;

    fn snapshot(kind: ExportKind) -> ExportSnapshot {
        ExportSnapshot {
            kind,
            id_readable: Some("PRJ-1".to_string()),
            summary: Some("Title".to_string()),
            body: Some("d1".to_string()),
            project: None,
            reporter: None,
            created: None,
            tags: Vec::new(),
            attachments: Vec::new(),
            fields: Vec::new(),
        }
    }

    fn link(json: &str) -> IssueLink {
        serde_json::from_str(json).expect("link parses")
    }

    #[test]
    fn issue_render_starts_with_title_and_fenced_description() {
        let markdown = render_export(
            &snapshot(ExportKind::Issue),
            &[],
            &[],
            &CopyOptions::default(),
        );
        assert_eq!(
            markdown,
            "# PRJ-1 — Title\n\n## Description\n\n```markdown\nd1\n```"
        );
    }

    #[test]
    fn article_render_emits_raw_content() {
        let markdown = render_export(
            &snapshot(ExportKind::Article),
            &[],
            &[],
            &CopyOptions::default(),
        );
        assert_eq!(markdown, "# PRJ-1 — Title\n\n## Content\n\nd1");
    }

    #[test]
    fn title_respects_individual_toggles() {
        let options = CopyOptions {
            id: false,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snapshot(ExportKind::Article), &[], &[], &options);
        assert!(markdown.starts_with("# Title"));

        let neither = CopyOptions {
            id: false,
            summary: false,
            description: false,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snapshot(ExportKind::Article), &[], &[], &neither);
        assert_eq!(markdown, "");
    }

    #[test]
    fn header_lines_follow_the_title_without_blank_lines() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.project = Some("PRJ".to_string());
        snap.reporter = Some("Ann".to_string());
        snap.created = Some(1000);
        snap.body = None;
        let options = CopyOptions {
            reporter: true,
            created: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &[], &options);
        assert_eq!(
            markdown,
            "# PRJ-1 — Title\nProject: PRJ\nReporter: Ann\nCreated: 1970-01-01T00:00:01.000Z"
        );
    }

    #[test]
    fn project_line_survives_empty_resolution() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.project = Some(String::new());
        snap.body = None;
        let markdown = render_export(&snap, &[], &[], &CopyOptions::default());
        assert!(markdown.contains("\nProject:"));
    }

    #[test]
    fn tags_section_renders_comma_joined_names() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        snap.tags = vec!["urgent".to_string(), "backend".to_string()];
        let options = CopyOptions {
            tags: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &[], &options);
        assert!(markdown.ends_with("## Tags\n\nurgent, backend"));
    }

    #[test]
    fn fields_section_skips_empty_values_and_vanishes_when_all_do() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        snap.fields = vec![
            ExportField {
                name: "Priority".to_string(),
                value: Some(serde_json::from_str(r#"{"name":"Major"}"#).expect("value")),
            },
            ExportField {
                name: "Sprint".to_string(),
                value: None,
            },
        ];
        let options = CopyOptions {
            fields: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &[], &options);
        assert!(markdown.contains("## Fields\n\n- Priority: Major"));
        assert!(!markdown.contains("Sprint"));

        snap.fields.remove(0);
        let markdown = render_export(&snap, &[], &[], &options);
        assert!(!markdown.contains("## Fields"));
    }

    #[test]
    fn attachment_bullets_append_size_only_when_nonzero() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        snap.attachments = vec![
            ExportAttachment {
                name: Some("log.txt".to_string()),
                url: Some("https://yt/persistent/log.txt".to_string()),
                size: 1536,
            },
            ExportAttachment {
                name: None,
                url: None,
                size: 0,
            },
        ];
        let options = CopyOptions {
            attachments: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &[], &options);
        assert!(markdown.contains("- [log.txt](https://yt/persistent/log.txt) (1.50 KB)"));
        assert!(markdown.contains("- [file]()"));
    }

    #[test]
    fn inward_link_uses_target_to_source_label() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        let links = vec![link(
            r#"{
                "direction": "INWARD",
                "linkType": {"targetToSource": "is caused by"},
                "issues": [{"idReadable": "X-2"}]
            }"#,
        )];
        let options = CopyOptions {
            links: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &links, &options);
        assert!(markdown.contains("## Links\n\n- is caused by: X-2"));
    }

    #[test]
    fn unresolvable_links_drop_their_section() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        let links = vec![
            link(r#"{"direction": "OUTWARD", "linkType": {}, "issues": [{"idReadable": "X-3"}]}"#),
            link(r#"{"direction": "OUTWARD", "linkType": {"sourceToTarget": "blocks"}, "issues": []}"#),
        ];
        let options = CopyOptions {
            links: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &links, &options);
        assert!(!markdown.contains("## Links"));
    }

    #[test]
    fn links_never_render_for_articles() {
        let mut snap = snapshot(ExportKind::Article);
        snap.body = None;
        let links = vec![link(
            r#"{"direction": "OUTWARD", "linkType": {"sourceToTarget": "blocks"}, "issues": [{"idReadable": "X-4"}]}"#,
        )];
        let options = CopyOptions {
            links: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &[], &links, &options);
        assert!(!markdown.contains("## Links"));
    }

    #[test]
    fn comments_render_blockquoted_with_author_and_date() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.body = None;
        let comments = vec![
            CommentEntry {
                author: "Ann".to_string(),
                text: "first line\nsecond line".to_string(),
                timestamp: Some(1000),
            },
            CommentEntry {
                author: String::new(),
                text: "anonymous note".to_string(),
                timestamp: None,
            },
        ];
        let options = CopyOptions {
            comments: true,
            ..CopyOptions::default()
        };
        let markdown = render_export(&snap, &comments, &[], &options);
        assert!(markdown.contains(
            "## Comments\n\n**Ann** (1970-01-01T00:00:01.000Z):\n> first line\n> second line"
        ));
        assert!(markdown.contains("**User**:\n> anonymous note"));
    }

    #[test]
    fn disabled_sections_leave_no_blank_lines() {
        let mut snap = snapshot(ExportKind::Issue);
        snap.tags = vec!["tag".to_string()];
        let markdown = render_export(&snap, &[], &[], &CopyOptions::default());
        assert!(!markdown.contains("\n\n\n"));
        assert!(!markdown.contains("## Tags"));
        assert_eq!(markdown, markdown.trim());
    }
}
