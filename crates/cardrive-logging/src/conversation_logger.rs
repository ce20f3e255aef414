use anyhow::Result;
use cardrive_types::Message;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 UTC
    id: u64,
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    car_count: Option<usize>,
}

/// Appends every transcript entry to a JSONL file, one line per message
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now: DateTime<Local> = Local::now();
        let filename = format!("cardrive-{}.jsonl", now.format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self {
            file_path,
            file: Some(file),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single transcript entry. Failures are reported but never propagated.
    pub async fn log_message(&mut self, message: &Message) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            id: message.id.0,
            role: message.sender.as_str(),
            content: &message.text,
            query: message.query.as_deref(),
            car_count: message.car_count(),
        };
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(&entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush().await;
            let _ = file.sync_all().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardrive_types::{Car, MessageId};
    use tempfile::TempDir;

    fn sample_car(id: u64) -> Car {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "company_name": "Tesla",
            "model": "Model Y",
            "year": 2024,
            "price": 47990,
            "mileage": 0,
            "color": "white",
            "transmission": "automatic",
            "fuel_type": "electric"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_logger_writes_one_line_per_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = ConversationLogger::new(temp_dir.path()).await.unwrap();

        logger.log_message(&Message::user(MessageId(1), "tesla", "09:15")).await;
        logger
            .log_message(&Message::results(
                MessageId(2),
                vec![sample_car(1), sample_car(2)],
                "tesla",
                "09:15",
            ))
            .await;
        logger.shutdown().await;

        let content = std::fs::read_to_string(logger.file_path()).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["role"], "user");
        assert_eq!(lines[0]["content"], "tesla");
        assert!(lines[0].get("car_count").is_none());
        assert_eq!(lines[1]["role"], "assistant");
        assert_eq!(lines[1]["car_count"], 2);
        assert_eq!(lines[1]["query"], "tesla");
    }

    #[tokio::test]
    async fn test_logger_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let logger = ConversationLogger::new(&nested).await.unwrap();

        assert!(nested.is_dir());
        let name = logger.file_path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("cardrive-"));
        assert!(name.ends_with(".jsonl"));
    }
}
