//! Core types and structures for cardrive
//!
//! This crate provides the foundational types shared by the search client,
//! the chat session controller and the terminal presenter.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod car;
pub mod fuel;

pub use car::Car;
pub use fuel::{FuelFilter, ParseFuelFilterError};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the car search service
pub const DEFAULT_API_URL: &str = "https://booking-car-test-drive.onrender.com";

/// Number of cars shown for a result message before "see more" is used
pub const RESULT_DISPLAY_CAP: usize = 3;

/// Synthetic assistant message every conversation starts with
pub const GREETING_TEXT: &str = "Hi there! I'm your AI car search assistant. I can help you find the perfect vehicle based on your specific needs and preferences. What kind of car are you looking for today?";

/// Notice appended when a search succeeds with zero matches
pub const NO_RESULTS_TEXT: &str = "I couldn't find any cars matching your criteria. Try adjusting your search parameters or browse our available inventory.";

/// Notice appended when the search service fails in any way
pub const SEARCH_ERROR_TEXT: &str = "Sorry, I encountered an error while searching. Please try again.";

/// Queries offered while the conversation only holds the greeting
pub const SUGGESTED_QUERIES: [&str; 4] = [
    "Show me the latest model of tesla",
    "Find top 2 electric cars",
    "Search for BMW cars",
    "Show me all Tesla models",
];

/// Summary line announcing how many cars matched, with singular/plural agreement
pub fn results_summary(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!(
        "I found {} car{} that match your search criteria. Here are the results:",
        count, suffix
    )
}

// ============================================================================
// Message Types
// ============================================================================

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// Transcript entry identifier, derived from wall-clock milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Creation time formatted for display (`HH:MM`)
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cars: Option<Vec<Car>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub query: Option<String>,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            timestamp: timestamp.into(),
            cars: None,
            query: None,
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: timestamp.into(),
            cars: None,
            query: None,
        }
    }

    /// Assistant entry carrying a result list; its text is intentionally empty
    pub fn results(
        id: MessageId,
        cars: Vec<Car>,
        query: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: String::new(),
            sender: Sender::Assistant,
            timestamp: timestamp.into(),
            cars: Some(cars),
            query: Some(query.into()),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn car_count(&self) -> Option<usize> {
        self.cars.as_ref().map(Vec::len)
    }
}
