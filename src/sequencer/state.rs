use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Observable sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// No reply outstanding
    Idle,
    /// At least one reply outstanding
    AwaitingReply,
}

/// Counter of outstanding turns backing the [`TurnState`] flag.
///
/// Overlapping turns are allowed, so a plain boolean would flip back to Idle
/// when the first of two outstanding replies lands. The state is
/// AwaitingReply whenever the count is non-zero.
#[derive(Debug, Clone, Default)]
pub struct PendingTurns {
    count: Arc<AtomicUsize>,
}

impl PendingTurns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a turn
    pub fn begin(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Record the end of a turn, whether it produced a reply or failed
    pub fn finish(&self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn outstanding(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> TurnState {
        if self.outstanding() == 0 {
            TurnState::Idle
        } else {
            TurnState::AwaitingReply
        }
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state() == TurnState::AwaitingReply
    }
}
