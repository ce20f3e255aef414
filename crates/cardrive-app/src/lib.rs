pub mod app;
pub mod cli;
pub mod config;

pub use app::{run_repl_mode, run_task_mode};
pub use cli::Cli;
pub use config::{default_log_filter, setup_from_cli, AppConfig};
