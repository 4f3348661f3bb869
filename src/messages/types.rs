use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable once created; conversation order is
/// insertion order, the id and timestamp are never used for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a message from the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Create a reply message from the bot
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
