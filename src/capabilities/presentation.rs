use crate::messages::Message;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Receives the full ordered conversation on every change.
///
/// Snapshots are complete state, not deltas; a sink that misses one update
/// is made whole by the next. With overlapping turns, presents race: the
/// most recently delivered snapshot can briefly be the older one, until the
/// next change. Implementations must not block the caller.
pub trait PresentationSink: Send + Sync {
    fn present(&self, conversation: &[Message]);
}

/// Sink that discards all updates
#[derive(Debug, Clone, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl PresentationSink for NullSink {
    fn present(&self, _conversation: &[Message]) {}
}

/// Sink that forwards conversation snapshots over a channel.
///
/// The host side holds the receiver and drains it on its own schedule,
/// typically once per frame or per REPL iteration.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Vec<Message>>,
}

impl ChannelSink {
    /// Create a sink and the receiver for its snapshots
    pub fn new() -> (Self, Receiver<Vec<Message>>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl PresentationSink for ChannelSink {
    fn present(&self, conversation: &[Message]) {
        // A detached host is not an error for the pipeline
        let _ = self.tx.send(conversation.to_vec());
    }
}
