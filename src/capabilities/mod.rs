//! Capability traits at the host boundary
//!
//! The turn pipeline never talks to a recognizer, an audio engine, or a UI
//! directly. Hosts adapt their native APIs to these traits and inject them:
//! - [`Responder`]: produces a reply string for an utterance
//! - [`Speaker`]: plays a string as audio, flush-on-new
//! - [`TranscriptSource`]: single-shot speech transcription
//! - [`PresentationSink`]: receives the full conversation on every change
//! - [`PermissionGate`]: check/request flow gating audio capture

pub mod permission;
pub mod presentation;
pub mod responder;
pub mod speaker;
pub mod transcript;

pub use permission::{AlwaysDenied, AlwaysGranted, PermissionGate};
pub use presentation::{ChannelSink, NullSink, PresentationSink};
pub use responder::{EchoResponder, Responder};
pub use speaker::{NullSpeaker, Speaker, TracingSpeaker};
pub use transcript::{StaticTranscript, TranscriptSource};
