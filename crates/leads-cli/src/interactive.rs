//! Prompt loop: every line is a search, `:export` writes the workbook.

use std::io::Write;
use std::time::Duration;

use leads_core::messages::PLACEHOLDER_EXAMPLES;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::SearchController;
use crate::placeholder::{PlaceholderCycle, SearchField};
use crate::print_records;
use crate::view::TerminalView;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PromptCommand {
    Search(String),
    Export,
    Help,
    Quit,
}

pub(crate) fn parse_prompt_line(line: &str) -> PromptCommand {
    match line.trim() {
        ":export" | ":e" => PromptCommand::Export,
        ":help" | ":h" | "?" => PromptCommand::Help,
        ":quit" | ":q" | ":exit" => PromptCommand::Quit,
        // Empty lines go through the controller so the prompt message shows.
        _ => PromptCommand::Search(line.to_owned()),
    }
}

const HELP: &str = "Digite um termo de busca e pressione Enter.\n  :export  salva busca_leads.xlsx\n  :quit    sai";

pub(crate) async fn run(
    controller: &SearchController<TerminalView>,
    placeholder_interval: Duration,
) -> anyhow::Result<()> {
    let mut field = SearchField::default();
    let mut cycle = PlaceholderCycle::new(&PLACEHOLDER_EXAMPLES);
    cycle.apply(&mut field);

    let mut ticker = tokio::time::interval(placeholder_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; the initial phrase is already applied.
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");
    prompt(&field)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                cycle.tick(&mut field);
                tracing::trace!(placeholder = %field.placeholder, "placeholder rotated");
                redraw_prompt(&field)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_prompt_line(&line) {
                    PromptCommand::Quit => break,
                    PromptCommand::Help => println!("{HELP}"),
                    PromptCommand::Export => {
                        if let Err(error) = controller.export_current_results() {
                            tracing::error!(%error, "export failed");
                            eprintln!("Falha ao exportar: {error}");
                        }
                    }
                    PromptCommand::Search(term) => {
                        field.value = term;
                        controller.trigger(&field.value).await;
                        field.value.clear();
                        print_records(&controller.records());
                    }
                }
                prompt(&field)?;
            }
        }
    }

    Ok(())
}

fn prompt_line(field: &SearchField) -> String {
    format!("[{}] > ", field.display())
}

fn prompt(field: &SearchField) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(prompt_line(field).as_bytes())?;
    stdout.flush()
}

/// Rewrites the current terminal line in place: carriage return, clear line,
/// fresh prompt.
fn redraw_prompt(field: &SearchField) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r\x1b[2K{}", prompt_line(field))?;
    stdout.flush()
}
