use crate::Result;
use async_trait::async_trait;

/// Capability producing a reply string for a user utterance.
///
/// Implementations may take arbitrarily long; the sequencer calls this from a
/// background task and never blocks on it. A failure aborts the turn after
/// the user message has been recorded.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn generate_reply(&self, utterance: &str) -> Result<String>;
}

/// Mock responder that echoes the utterance back.
///
/// Stands in for a real model or API backend in demos and tests.
#[derive(Debug, Clone, Default)]
pub struct EchoResponder;

impl EchoResponder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Responder for EchoResponder {
    async fn generate_reply(&self, utterance: &str) -> Result<String> {
        Ok(format!("Echo: {} (This is a mock response)", utterance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_responder_format() {
        let responder = EchoResponder::new();
        let reply = responder.generate_reply("hello").await.unwrap();
        assert_eq!(reply, "Echo: hello (This is a mock response)");
    }
}
