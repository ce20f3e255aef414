use cardrive_api::{SearchError, SearchResponse};
use cardrive_types::{
    results_summary, FuelFilter, Message, GREETING_TEXT, NO_RESULTS_TEXT, SEARCH_ERROR_TEXT,
    SUGGESTED_QUERIES,
};

use crate::clock::MessageClock;

/// Immutable copy of the session state handed to presenters
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub loading: bool,
    pub fuel_filter: Option<FuelFilter>,
    pub input: String,
}

/// A query accepted by [`ChatSession::begin_query`] and awaiting its search result.
///
/// Only `begin_query` can create one, so a completion is always paired with
/// exactly one optimistic user message.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingQuery {
    display: String,
    query: String,
}

impl PendingQuery {
    /// Text shown in the user's message
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Text sent to the search service, including any fuel filter
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What a submission ended up doing to the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a search already in flight; nothing changed
    Ignored,
    /// Summary plus result list appended for this many cars
    Results(usize),
    /// The search succeeded but matched nothing
    NoResults,
    /// The service replied with a message instead of results
    Advisory,
    /// The search failed; a generic notice was appended
    Failed,
}

/// Conversation state of one chat search session.
///
/// Submitting is split in two phases: [`begin_query`](Self::begin_query)
/// appends the user's message and raises the loading flag,
/// [`complete_query`](Self::complete_query) appends the assistant's reply
/// and lowers it again. Callers await the search between the two.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    loading: bool,
    fuel_filter: Option<FuelFilter>,
    input: String,
    clock: MessageClock,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            loading: false,
            fuel_filter: None,
            input: String::new(),
            clock: MessageClock::new(),
        };
        let greeting = session.greeting();
        session.messages.push(greeting);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fuel_filter(&self) -> Option<FuelFilter> {
        self.fuel_filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            messages: self.messages.clone(),
            loading: self.loading,
            fuel_filter: self.fuel_filter,
            input: self.input.clone(),
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Toggle a fuel filter: selecting the active one clears it. Returns the new filter.
    pub fn set_fuel_filter(&mut self, kind: FuelFilter) -> Option<FuelFilter> {
        self.fuel_filter = if self.fuel_filter == Some(kind) {
            None
        } else {
            Some(kind)
        };
        self.fuel_filter
    }

    /// Start over with a fresh greeting. The fuel filter is kept.
    pub fn reset_conversation(&mut self) {
        let greeting = self.greeting();
        self.messages = vec![greeting];
        self.input.clear();
    }

    /// Suggested queries, offered only before the first exchange
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.messages.len() == 1 && !self.loading {
            &SUGGESTED_QUERIES
        } else {
            &[]
        }
    }

    /// Phase one of a submission: validate, append the user's message, mark loading.
    ///
    /// Returns `None` without touching any state when the text is blank or a
    /// search is already outstanding.
    pub fn begin_query(&mut self, text: &str) -> Option<PendingQuery> {
        let display = text.trim();
        if display.is_empty() || self.loading {
            return None;
        }

        let query = match self.fuel_filter {
            Some(filter) => filter.augment(display),
            None => display.to_string(),
        };

        let id = self.clock.next_id();
        let timestamp = self.clock.timestamp();
        self.messages.push(Message::user(id, display, timestamp));
        self.input.clear();
        self.loading = true;

        Some(PendingQuery {
            display: display.to_string(),
            query,
        })
    }

    /// Phase two of a submission: turn the search result into assistant messages.
    pub fn complete_query(
        &mut self,
        pending: PendingQuery,
        result: Result<SearchResponse, SearchError>,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(SearchResponse::Cars(cars)) if cars.is_empty() => {
                self.push_assistant(NO_RESULTS_TEXT);
                SubmitOutcome::NoResults
            }
            Ok(SearchResponse::Cars(cars)) => {
                let count = cars.len();
                self.push_assistant(&results_summary(count));
                let id = self.clock.next_id();
                let timestamp = self.clock.timestamp();
                self.messages
                    .push(Message::results(id, cars, pending.query, timestamp));
                SubmitOutcome::Results(count)
            }
            Ok(SearchResponse::Advisory(message)) => {
                self.push_assistant(&message);
                SubmitOutcome::Advisory
            }
            Err(e) => {
                log::warn!("search for '{}' failed: {}", pending.query, e);
                self.push_assistant(SEARCH_ERROR_TEXT);
                SubmitOutcome::Failed
            }
        };
        self.loading = false;
        outcome
    }

    fn push_assistant(&mut self, text: &str) {
        let id = self.clock.next_id();
        let timestamp = self.clock.timestamp();
        self.messages.push(Message::assistant(id, text, timestamp));
    }

    fn greeting(&mut self) -> Message {
        let id = self.clock.next_id();
        Message::assistant(id, GREETING_TEXT, self.clock.timestamp())
    }
}
