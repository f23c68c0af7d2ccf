use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single message flowing through the hub.
///
/// Messages are created by a producer, appended once to the hub's history,
/// and never mutated afterwards. The hub itself treats the contents as
/// opaque; only the [`Renderer`](crate::render::Renderer) looks inside.
///
/// # Fields
///
/// - `sender` - Identifier of the client (or producer) that published it.
/// - `payload` - The message content, usually a JSON-encoded string.
/// - `timestamp` - Unix timestamp in milliseconds at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub payload: String,
    pub timestamp: i64,
}

impl Message {
    /// Creates a message stamped with the current time.
    pub fn new(sender: &str, payload: String) -> Self {
        Self {
            sender: sender.to_string(),
            payload,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
