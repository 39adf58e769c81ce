use clap::{Args, Parser, Subcommand};
use log::info;

use ytcopy::config::AppConfig;
use ytcopy::export::ExportKind;
use ytcopy::options::{CopyOptions, SECTION_NAMES};
use ytcopy::widget::{ContextWidget, LinkWidget, LogNotifier};
use youtrack_api::YouTrackClient;

#[derive(Parser)]
#[command(
    name = "ytcopy",
    version,
    about = "Copy YouTrack issues and knowledge-base articles as Markdown"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy an issue's context as a Markdown document
    Issue(ContextArgs),
    /// Copy an article's context as a Markdown document
    Article(ContextArgs),
    /// Copy a templated Markdown link to an issue
    IssueLink(LinkArgs),
    /// Copy a templated Markdown link to an article
    ArticleLink(LinkArgs),
}

#[derive(Args)]
struct ContextArgs {
    /// Readable entity id, e.g. PRJ-1
    id: String,
    /// Sections to switch on, comma separated (e.g. comments,tags)
    #[arg(long, value_delimiter = ',')]
    include: Vec<String>,
    /// Sections to switch off, comma separated
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,
    /// Print the Markdown to stdout instead of copying it
    #[arg(long)]
    print: bool,
}

#[derive(Args)]
struct LinkArgs {
    /// Readable entity id, e.g. PRJ-1
    id: String,
    /// Template override; placeholders {{id}}, {{url}} and {{summary}}
    #[arg(long)]
    template: Option<String>,
    /// Print the link to stdout instead of copying it
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .try_init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = AppConfig::from_env()?;
    let client = YouTrackClient::new(config.client_config()).map_err(|err| err.to_string())?;

    match cli.command {
        Command::Issue(args) => run_context(&client, ExportKind::Issue, args).await,
        Command::Article(args) => run_context(&client, ExportKind::Article, args).await,
        Command::IssueLink(args) => run_link(&client, ExportKind::Issue, args).await,
        Command::ArticleLink(args) => run_link(&client, ExportKind::Article, args).await,
    }
}

async fn run_context(
    client: &YouTrackClient,
    kind: ExportKind,
    args: ContextArgs,
) -> Result<(), String> {
    info!("Loading {} {}", kind.label(), args.id);
    let mut widget = ContextWidget::mount(client, kind, &args.id).await?;
    apply_section_flags(widget.options_mut(), &args.include, true)?;
    apply_section_flags(widget.options_mut(), &args.exclude, false)?;

    if args.print {
        println!("{}", widget.markdown());
        return Ok(());
    }
    if widget.copy(client, &LogNotifier) {
        Ok(())
    } else {
        Err("could not write to the clipboard".to_string())
    }
}

async fn run_link(client: &YouTrackClient, kind: ExportKind, args: LinkArgs) -> Result<(), String> {
    info!("Loading {} {}", kind.label(), args.id);
    let widget = LinkWidget::mount(client, kind, &args.id, args.template.as_deref()).await?;

    if args.print {
        println!("{}", widget.link());
        return Ok(());
    }
    if widget.copy(&LogNotifier) {
        Ok(())
    } else {
        // Leave the link visible so it can be copied manually.
        println!("{}", widget.link());
        Err("could not write to the clipboard".to_string())
    }
}

fn apply_section_flags(
    options: &mut CopyOptions,
    names: &[String],
    value: bool,
) -> Result<(), String> {
    for name in names {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if !options.set_by_name(&key, value) {
            return Err(format!(
                "Unknown section name: {} (expected one of {})",
                key,
                SECTION_NAMES.join(", ")
            ));
        }
    }
    Ok(())
}
