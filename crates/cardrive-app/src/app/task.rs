use anyhow::Result;
use cardrive_chat::SubmitOutcome;
use colored::Colorize;

use crate::app::render::{render_filters, Transcript};
use crate::app::{build_controller, TranscriptLog};
use crate::config::AppConfig;

/// Run a single search, print the transcript and exit
pub async fn run_task_mode(config: AppConfig, query: String) -> Result<()> {
    println!("{}", "🚗 CarDrive - Query Mode".bright_cyan().bold());
    if config.initial_filter.is_some() {
        println!("{}", render_filters(config.initial_filter));
    }
    println!();

    let mut controller = build_controller(&config);
    let mut log = TranscriptLog::open(&config).await;
    let mut transcript = Transcript::new(true);

    let outcome = controller.submit_query(&query).await;

    let snapshot = controller.snapshot();
    for block in transcript.render_new(&snapshot) {
        println!("{}\n", block);
    }
    log.record(&snapshot).await;
    log.shutdown().await;

    match outcome {
        SubmitOutcome::Ignored => anyhow::bail!("Query is empty"),
        SubmitOutcome::Failed => anyhow::bail!("Search service request failed"),
        _ => Ok(()),
    }
}
