//! Host-facing session layer
//!
//! Wraps the turn sequencer in a command/event channel pipeline and wires
//! the permission gate and transcript source in front of it. The session
//! worker owns the async runtime, so hosts drive the whole pipeline from a
//! plain synchronous loop.

pub mod config;
pub mod driver;

pub use config::SessionConfig;
pub use driver::{Session, SessionBuilder, SessionCommand, SessionEvent, SessionHandle};
