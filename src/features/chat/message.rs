//! Chat message types.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person studying.
    User,
    /// The study assistant.
    Assistant,
}

impl Sender {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single entry in the chat timeline.
///
/// Messages are immutable once created; the timeline only ever appends.
/// Text is treated as opaque and may contain right-to-left script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique, monotonically increasing identifier.
    pub id: u64,
    /// The message text.
    pub text: String,
    /// Who wrote it.
    pub sender: Sender,
    /// When it was created.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time.
    #[must_use]
    pub(crate) fn new(id: u64, sender: Sender, text: String) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        }
    }

    /// Get the timestamp in the local timezone.
    #[must_use]
    pub fn timestamp_local(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}
