pub mod render;
pub mod repl;
pub mod task;

pub use repl::{run_repl_mode, ReplCommand};
pub use task::run_task_mode;

use cardrive_api::HttpCarSearch;
use cardrive_chat::{SearchController, SessionSnapshot};
use cardrive_logging::ConversationLogger;
use cardrive_types::MessageId;
use std::sync::Arc;

use crate::config::AppConfig;

/// Build a controller wired to the HTTP search service with the configured
/// initial fuel filter applied
pub fn build_controller(config: &AppConfig) -> SearchController {
    let client = HttpCarSearch::new(&config.api_url).with_verbose(config.verbose);
    let mut controller = SearchController::new(Arc::new(client));
    if let Some(kind) = config.initial_filter {
        controller.set_fuel_filter(kind);
    }
    controller
}

/// Writes transcript messages to the JSONL log as they appear
pub struct TranscriptLog {
    logger: Option<ConversationLogger>,
    last_logged: Option<MessageId>,
}

impl TranscriptLog {
    /// Open a logger when a log directory is configured. Failure to open it
    /// disables logging instead of aborting the session.
    pub async fn open(config: &AppConfig) -> Self {
        let logger = match &config.log_dir {
            Some(dir) => match ConversationLogger::new(dir).await {
                Ok(logger) => {
                    log::info!("transcript log at {}", logger.file_path().display());
                    Some(logger)
                }
                Err(e) => {
                    eprintln!("Logging disabled: {}", e);
                    None
                }
            },
            None => None,
        };
        Self {
            logger,
            last_logged: None,
        }
    }

    /// Append every message not logged yet
    pub async fn record(&mut self, snapshot: &SessionSnapshot) {
        let Some(logger) = &mut self.logger else {
            return;
        };
        for message in &snapshot.messages {
            if self.last_logged.map_or(true, |seen| message.id > seen) {
                logger.log_message(message).await;
                self.last_logged = Some(message.id);
            }
        }
    }

    pub async fn shutdown(&mut self) {
        if let Some(logger) = &mut self.logger {
            logger.shutdown().await;
        }
    }
}
