use anyhow::Result;
use cardrive_chat::SearchController;
use cardrive_types::FuelFilter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;

use crate::app::render::{render_filters, render_suggestions, Transcript};
use crate::app::{build_controller, TranscriptLog};
use crate::config::AppConfig;

/// One line of REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Empty,
    Exit,
    Help,
    Clear,
    ShowFilter,
    Filter(FuelFilter),
    More(usize),
    Less(usize),
    Suggest(usize),
    Query(String),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        if line == "exit" || line == "quit" {
            return ReplCommand::Exit;
        }
        let Some(command) = line.strip_prefix('/') else {
            return ReplCommand::Query(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let index = parts.next().and_then(|n| n.parse::<usize>().ok());

        match (name, index) {
            ("help", _) => ReplCommand::Help,
            ("clear", _) => ReplCommand::Clear,
            ("filter", _) => ReplCommand::ShowFilter,
            ("more", Some(n)) => ReplCommand::More(n),
            ("less", Some(n)) => ReplCommand::Less(n),
            ("suggest", Some(n)) => ReplCommand::Suggest(n),
            (name, _) => match name.parse::<FuelFilter>() {
                Ok(kind) => ReplCommand::Filter(kind),
                Err(_) => ReplCommand::Unknown(line.to_string()),
            },
        }
    }
}

/// Add a non-blank line to the editor history. Failures only cost the history entry.
fn remember<H: History>(history: &mut H, line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    match history.add(line) {
        Ok(added) => added,
        Err(e) => {
            log::debug!("could not add history entry: {}", e);
            false
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_cyan().bold());
    println!("  {}  search for cars", "<text>".bright_yellow());
    println!(
        "  {}  toggle a fuel filter",
        "/electric /hybrid /petrol /diesel".bright_yellow()
    );
    println!("  {}  show the active filter", "/filter".bright_yellow());
    println!("  {}  start a new conversation", "/clear".bright_yellow());
    println!("  {}  expand or collapse the n-th result list", "/more <n> /less <n>".bright_yellow());
    println!("  {}  run a suggested search", "/suggest <n>".bright_yellow());
    println!("  {}  leave", "exit | quit".bright_yellow());
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: AppConfig) -> Result<()> {
    println!("{}", "🚗 CarDrive - AI Car Assistant".bright_cyan().bold());
    println!("{}", format!("Search service: {}", config.api_url).bright_black());
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black());

    let mut controller = build_controller(&config);
    let mut log = TranscriptLog::open(&config).await;
    let mut transcript = Transcript::new(false);

    // Typing indicator, driven by published snapshots while a search is outstanding
    let mut updates = controller.subscribe();
    let indicator = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            if updates.borrow_and_update().loading {
                println!("{}", "🤖 Searching...".bright_black().italic());
            }
        }
    });

    println!("{}", render_filters(controller.session().fuel_filter()));
    show_updates(&controller, &mut transcript, &mut log).await;

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = match controller.session().fuel_filter() {
            Some(kind) => format!("[{}] {} ", kind.label().bright_magenta(), "You:".bright_green().bold()),
            None => format!("{} ", "You:".bright_green().bold()),
        };

        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), e);
                break;
            }
        };
        remember(rl.history_mut(), &line);

        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Exit => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            ReplCommand::Help => print_help(),
            ReplCommand::Clear => {
                controller.reset_conversation();
                println!("{}", "✓ Started a new conversation".green());
            }
            ReplCommand::ShowFilter => {
                println!("{}", render_filters(controller.session().fuel_filter()));
            }
            ReplCommand::Filter(kind) => {
                let active = controller.set_fuel_filter(kind);
                println!("{}", render_filters(active));
            }
            ReplCommand::More(n) => toggle_results(&controller, &mut transcript, n, true),
            ReplCommand::Less(n) => toggle_results(&controller, &mut transcript, n, false),
            ReplCommand::Suggest(n) => {
                let suggestion = controller
                    .suggestions()
                    .get(n.saturating_sub(1))
                    .filter(|_| n > 0)
                    .copied();
                match suggestion {
                    Some(text) => {
                        println!("{} {}", "You:".bright_green().bold(), text);
                        controller.set_input(text);
                        controller.submit_pending().await;
                    }
                    None => println!("{}", "No suggestion with that number".yellow()),
                }
            }
            ReplCommand::Query(text) => {
                controller.submit_query(&text).await;
            }
            ReplCommand::Unknown(text) => {
                println!("{} {}", "Unknown command:".yellow(), text);
                continue;
            }
        }

        show_updates(&controller, &mut transcript, &mut log).await;
    }

    log.shutdown().await;
    drop(controller);
    let _ = indicator.await;
    Ok(())
}

fn toggle_results(controller: &SearchController, transcript: &mut Transcript, n: usize, expand: bool) {
    match transcript.set_expanded(&controller.snapshot(), n, expand) {
        Some(block) => println!("{}", block),
        None => println!("{}", format!("No result list #{}", n).yellow()),
    }
}

/// Print and log everything that appeared since the last call, then offer
/// suggestions while the conversation is still fresh
async fn show_updates(
    controller: &SearchController,
    transcript: &mut Transcript,
    log: &mut TranscriptLog,
) {
    let snapshot = controller.snapshot();
    let blocks = transcript.render_new(&snapshot);
    for block in &blocks {
        println!("{}\n", block);
    }
    log.record(&snapshot).await;

    let suggestions = controller.suggestions();
    if !blocks.is_empty() && !suggestions.is_empty() {
        println!("{}\n", render_suggestions(suggestions));
    }
}
