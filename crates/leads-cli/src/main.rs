mod controller;
mod interactive;
mod placeholder;
mod view;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use leads_core::record::or_dash;
use leads_core::SearchRecord;
use leads_webhook::WebhookClient;
use tracing_subscriber::EnvFilter;

use crate::controller::{ExportOutcome, SearchController, TriggerOutcome};
use crate::view::TerminalView;

#[derive(Debug, Parser)]
#[command(name = "leads-cli")]
#[command(about = "Search business leads through the scraping webhook and export them to XLSX")]
struct Cli {
    /// Overrides `LEADS_WEBHOOK_URL`.
    #[arg(long, global = true)]
    webhook_url: Option<String>,

    /// Overrides `LEADS_OUTPUT_DIR`.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search and print the results
    Search {
        /// Search term, e.g. "Oficinas em Fernandópolis, SP"
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
        /// Write busca_leads.xlsx into the output directory
        #[arg(long)]
        export: bool,
        /// Write the rendered results table as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Prompt for searches until `:quit`
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = leads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(url) = cli.webhook_url {
        config.webhook_url = url;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    tracing::debug!(?config, "configuration loaded");

    let client = WebhookClient::new(
        &config.webhook_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let controller = SearchController::new(client, TerminalView::new(config.output_dir.clone()));

    match cli.command {
        Some(Commands::Search { term, export, html }) => {
            run_search(&controller, &term.join(" "), export, html).await
        }
        Some(Commands::Interactive) | None => {
            interactive::run(
                &controller,
                Duration::from_millis(config.placeholder_interval_ms),
            )
            .await
        }
    }
}

async fn run_search(
    controller: &SearchController<TerminalView>,
    term: &str,
    export: bool,
    html: Option<PathBuf>,
) -> anyhow::Result<()> {
    let outcome = controller.trigger(term).await;

    if let Some(path) = html {
        let page = controller.with_view(|view| {
            leads_report::render_document(term, view.status(), view.table()).into_string()
        });
        std::fs::write(&path, page)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "results page written");
    }

    match outcome {
        TriggerOutcome::Completed { .. } => {
            if controller.with_view(TerminalView::results_visible) {
                print_records(&controller.records());
            }
            if export {
                if let ExportOutcome::Delivered { rows } = controller.export_current_results()? {
                    tracing::debug!(rows, "exported");
                }
            } else if controller.with_view(TerminalView::export_enabled) {
                println!("Use --export para salvar os resultados em planilha.");
            }
            Ok(())
        }
        TriggerOutcome::EmptyTerm | TriggerOutcome::AlreadySearching => Ok(()),
        TriggerOutcome::Failed(error) => Err(error.into()),
    }
}

/// Prints records as a plain-text table, one line per record.
pub(crate) fn print_records(records: &[SearchRecord]) {
    if records.is_empty() {
        return;
    }
    for (idx, record) in records.iter().enumerate() {
        println!(
            "{:>3}. {} | {} | {} | {} | {}",
            idx + 1,
            or_dash(record.name.as_deref()),
            or_dash(record.phone.as_deref()),
            or_dash(record.categories_opt()),
            or_dash(record.address.as_deref()),
            or_dash(record.website_host()),
        );
    }
}
