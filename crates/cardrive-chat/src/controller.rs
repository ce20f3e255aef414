use cardrive_api::CarSearch;
use cardrive_types::FuelFilter;
use std::sync::Arc;
use tokio::sync::watch;

use crate::session::{ChatSession, SessionSnapshot, SubmitOutcome};

/// Drives a [`ChatSession`] against a search collaborator and publishes
/// every state change to subscribers.
pub struct SearchController {
    session: ChatSession,
    client: Arc<dyn CarSearch>,
    updates: watch::Sender<SessionSnapshot>,
}

impl SearchController {
    pub fn new(client: Arc<dyn CarSearch>) -> Self {
        let session = ChatSession::new();
        let (updates, _) = watch::channel(session.snapshot());
        Self {
            session,
            client,
            updates,
        }
    }

    /// Receive a snapshot after every change, including while a search is in flight
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        self.session.suggestions()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.set_input(text);
        self.publish();
    }

    pub fn set_fuel_filter(&mut self, kind: FuelFilter) -> Option<FuelFilter> {
        let active = self.session.set_fuel_filter(kind);
        log::debug!("fuel filter now {:?}", active);
        self.publish();
        active
    }

    pub fn reset_conversation(&mut self) {
        self.session.reset_conversation();
        self.publish();
    }

    /// Submit a query and wait for the search to finish.
    ///
    /// The user's message is published before the search starts. Search
    /// failures become a transcript notice; nothing is returned as an error.
    pub async fn submit_query(&mut self, text: &str) -> SubmitOutcome {
        let Some(pending) = self.session.begin_query(text) else {
            return SubmitOutcome::Ignored;
        };
        self.publish();

        log::debug!(
            "searching for '{}' (typed '{}')",
            pending.query(),
            pending.display_text()
        );
        let result = self.client.search(pending.query()).await;

        let outcome = self.session.complete_query(pending, result);
        log::info!("search finished: {:?}", outcome);
        self.publish();
        outcome
    }

    /// Submit whatever is currently in the pending input
    pub async fn submit_pending(&mut self) -> SubmitOutcome {
        let text = self.session.input().to_string();
        self.submit_query(&text).await
    }

    fn publish(&self) {
        self.updates.send_replace(self.session.snapshot());
    }
}
