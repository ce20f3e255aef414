//! # cardrive-api
//!
//! Client side of the car search service.
//!
//! ## Features
//!
//! - **Single Interface**: the `CarSearch` trait is all the chat session needs
//! - **HTTP Client**: `HttpCarSearch` talks to the hosted service over reqwest
//! - **Response Decoding**: a body is either a list of cars or an advisory message
//!
//! ## Example
//!
//! ```rust,no_run
//! use cardrive_api::{CarSearch, HttpCarSearch, SearchResponse};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpCarSearch::new(cardrive_api::DEFAULT_API_URL);
//!
//!     match client.search("suv electric cars").await? {
//!         SearchResponse::Cars(cars) => println!("{} cars", cars.len()),
//!         SearchResponse::Advisory(message) => println!("{}", message),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

pub use client::{CarSearch, HttpCarSearch, SearchError, SearchResponse};
pub use config::{normalize_base_url, search_endpoint, SEARCH_PATH};
pub use cardrive_types::DEFAULT_API_URL;
