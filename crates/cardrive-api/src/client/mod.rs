use async_trait::async_trait;
use cardrive_types::Car;
use serde::Deserialize;
use thiserror::Error;

pub mod http;

pub use http::HttpCarSearch;

/// Successful answer from the search service
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// Matching cars, in the order the service ranked them (may be empty)
    Cars(Vec<Car>),
    /// Human-readable reply instead of results (greetings, empty inventory, ...)
    Advisory(String),
}

impl SearchResponse {
    /// Decode a response body: either a JSON array of cars or an object with a `message`
    pub fn from_json(body: &str) -> Result<Self, SearchError> {
        let raw: RawResponse = serde_json::from_str(body).map_err(SearchError::Decode)?;
        Ok(match raw {
            RawResponse::Cars(cars) => SearchResponse::Cars(cars),
            RawResponse::Advisory { message } => SearchResponse::Advisory(message),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawResponse {
    Cars(Vec<Car>),
    Advisory { message: String },
}

/// Ways a search request can fail
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected search response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The search collaborator: one free-text query in, cars or an advisory out
#[async_trait]
pub trait CarSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}
