use async_trait::async_trait;
use serde_json::json;

use crate::client::{CarSearch, SearchError, SearchResponse};
use crate::config::search_endpoint;

/// Search collaborator backed by the hosted HTTP service
pub struct HttpCarSearch {
    endpoint: String,
    verbose: bool,
    client: reqwest::Client,
}

impl HttpCarSearch {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: search_endpoint(base_url),
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    /// Print request and response bodies to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CarSearch for HttpCarSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let request = json!({ "query": query });
        cardrive_logging::log_request(&self.endpoint, &request, self.verbose);

        let response = self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        cardrive_logging::log_response(status, &body, self.verbose);

        if !status.is_success() {
            return Err(SearchError::Status { status, body });
        }

        SearchResponse::from_json(&body)
    }
}
