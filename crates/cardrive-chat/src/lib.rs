//! Chat search session management for cardrive
//!
//! This crate owns the conversation state of a car search chat, drives
//! searches through a [`CarSearch`](cardrive_api::CarSearch) collaborator and
//! maps the answers into transcript messages.

mod clock;
pub mod controller;
pub mod session;
pub mod view;

pub use clock::MessageClock;
pub use controller::SearchController;
pub use session::{ChatSession, PendingQuery, SessionSnapshot, SubmitOutcome};
pub use view::{format_price, CarCard, ResultView};
