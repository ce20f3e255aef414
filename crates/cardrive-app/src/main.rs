use anyhow::Result;
use clap::Parser;

use cardrive::{default_log_filter, run_repl_mode, run_task_mode, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)),
    )
    .init();

    let app_config = setup_from_cli(&cli)?;

    if let Some(query) = cli.query.clone() {
        return run_task_mode(app_config, query).await;
    }

    run_repl_mode(app_config).await
}
