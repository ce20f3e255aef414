use cardrive_types::MessageId;
use chrono::{Local, Utc};

/// Hands out message ids and display timestamps.
///
/// Ids are derived from wall-clock milliseconds but never repeat or go
/// backwards, even when several messages are created within the same
/// millisecond or the system clock is adjusted.
#[derive(Debug, Default)]
pub struct MessageClock {
    last_id: u64,
}

impl MessageClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> MessageId {
        // Clocks set before the epoch fall back to the counter
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_id = now_ms.max(self.last_id + 1);
        MessageId(self.last_id)
    }

    /// Local time of day as shown next to a message, e.g. "14:05"
    pub fn timestamp(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut clock = MessageClock::new();
        let ids: Vec<MessageId> = (0..100).map(|_| clock.next_id()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_ids_follow_wall_clock_millis() {
        let before = Utc::now().timestamp_millis() as u64;
        let id = MessageClock::new().next_id();
        let after = Utc::now().timestamp_millis() as u64;

        assert!(id.0 >= before);
        assert!(id.0 <= after + 1);
    }

    #[test]
    fn test_timestamp_is_hours_and_minutes() {
        let ts = MessageClock::new().timestamp();
        assert_eq!(ts.len(), 5);
        assert_eq!(&ts[2..3], ":");
    }
}
