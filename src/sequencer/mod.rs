//! The turn sequencer: one request/response cycle per user utterance
//!
//! Owns the conversation, appends the user message synchronously, obtains a
//! reply in a background task, and hands the reply to the speaker. Every
//! conversation change is published to the presentation sink.

pub mod state;
pub mod turn;

pub use state::{PendingTurns, TurnState};
pub use turn::{TurnSequencer, TurnSequencerBuilder};
