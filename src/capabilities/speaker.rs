use crate::Result;
use tracing::info;

/// Capability that plays a string as audio.
///
/// Playback is fire-and-forget: the caller gets no completion signal, only
/// an error if the request could not be submitted at all. Implementations
/// must apply flush-on-new semantics: each call supersedes any in-progress
/// playback, so at most one utterance is ever audible.
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str) -> Result<()>;
}

/// Speaker that discards all playback requests
#[derive(Debug, Clone, Default)]
pub struct NullSpeaker;

impl NullSpeaker {
    pub fn new() -> Self {
        Self
    }
}

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Speaker that logs playback requests instead of producing audio.
///
/// Useful for demos and headless hosts. Flush-on-new is trivially satisfied
/// since nothing is ever queued.
#[derive(Debug, Clone, Default)]
pub struct TracingSpeaker;

impl TracingSpeaker {
    pub fn new() -> Self {
        Self
    }
}

impl Speaker for TracingSpeaker {
    fn speak(&self, text: &str) -> Result<()> {
        info!("Speaking: {}", text);
        Ok(())
    }
}
