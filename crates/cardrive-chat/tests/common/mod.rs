use async_trait::async_trait;
use cardrive_api::{CarSearch, SearchError, SearchResponse};
use cardrive_types::Car;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Canned answer for one search call
pub enum Scripted {
    Cars(Vec<Car>),
    Advisory(String),
    Fail,
}

/// Search collaborator that replays scripted answers and records every query
#[derive(Default)]
pub struct ScriptedSearch {
    replies: Mutex<VecDeque<Scripted>>,
    queries: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedSearch {
    pub fn new(replies: Vec<Scripted>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    /// Hold every search until the returned notifier is triggered
    pub fn gated(replies: Vec<Scripted>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let search = Self {
            replies: Mutex::new(replies.into()),
            gate: Some(gate.clone()),
            ..Default::default()
        };
        (search, gate)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CarSearch for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        match reply {
            Scripted::Cars(cars) => Ok(SearchResponse::Cars(cars)),
            Scripted::Advisory(message) => Ok(SearchResponse::Advisory(message)),
            Scripted::Fail => Err(SearchError::Decode(
                serde_json::from_str::<serde_json::Value>("{\"cars\":").unwrap_err(),
            )),
        }
    }
}

pub fn sample_cars(n: usize) -> Vec<Car> {
    (0..n)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": i + 1,
                "company_name": "Tesla",
                "model": format!("Model {}", i + 1),
                "year": 2022 + (i % 3),
                "price": 39990 + 1000 * i,
                "mileage": 1000 * i,
                "color": "red",
                "transmission": "automatic",
                "fuel_type": "electric",
                "description": "Clean title",
                "images": [],
                "features": ["autopilot"],
                "available_for_test_drive": true
            }))
            .unwrap()
        })
        .collect()
}
