use super::types::Message;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only, thread-safe conversation store.
///
/// Cloning is cheap and shares the underlying message list. Appends are
/// serialized by the write lock; `push_and_snapshot` takes the snapshot
/// inside the same critical section so published snapshots are consistent
/// with append order.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a message and return the updated snapshot atomically
    pub fn push_and_snapshot(&self, message: Message) -> Vec<Message> {
        let mut messages = self.messages.write();
        messages.push(message);
        messages.clone()
    }

    pub fn push(&self, message: Message) {
        self.messages.write().push(message);
    }

    /// Get a snapshot of the full conversation in insertion order
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    pub fn clear(&self) {
        self.messages.write().clear();
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
