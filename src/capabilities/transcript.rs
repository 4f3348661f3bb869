use crate::Result;
use async_trait::async_trait;

/// Capability producing a best-guess transcription of spoken audio.
///
/// Single-shot: one call covers one "start listening" trigger and resolves
/// with the best candidate. `Ok(None)` means the recognizer produced no
/// utterance (cancelled, timed out, or heard nothing); no turn is started in
/// that case.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcribe(&self) -> Result<Option<String>>;
}

/// Transcript source that returns a fixed candidate on every trigger
#[derive(Debug, Clone, Default)]
pub struct StaticTranscript {
    text: Option<String>,
}

impl StaticTranscript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Source that never hears anything
    pub fn silent() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TranscriptSource for StaticTranscript {
    async fn transcribe(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_transcript_returns_text() {
        let source = StaticTranscript::new("hello world");
        let result = source.transcribe().await.unwrap();
        assert_eq!(result, Some("hello world".to_string()));
    }

    #[tokio::test]
    async fn test_silent_transcript_returns_none() {
        let source = StaticTranscript::silent();
        let result = source.transcribe().await.unwrap();
        assert_eq!(result, None);
    }
}
