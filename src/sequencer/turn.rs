use crate::capabilities::{
    EchoResponder, NullSink, NullSpeaker, PresentationSink, Responder, Speaker,
};
use crate::messages::{Conversation, Message};
use crate::sequencer::state::{PendingTurns, TurnState};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Drives one request/response cycle per user utterance.
///
/// `submit_utterance` appends the user message and publishes it before
/// returning; the reply is obtained on a background task which appends the
/// bot message, publishes, and triggers playback. Overlapping turns are
/// allowed: each completion appends to the live conversation, so no message
/// is lost, but bot messages across overlapping turns land in resolution
/// order.
pub struct TurnSequencer {
    conversation: Conversation,
    responder: Arc<dyn Responder>,
    speaker: Arc<dyn Speaker>,
    sink: Arc<dyn PresentationSink>,
    pending: PendingTurns,
}

impl TurnSequencer {
    pub fn new(
        responder: Arc<dyn Responder>,
        speaker: Arc<dyn Speaker>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            conversation: Conversation::new(),
            responder,
            speaker,
            sink,
            pending: PendingTurns::new(),
        }
    }

    pub fn builder() -> TurnSequencerBuilder {
        TurnSequencerBuilder::new()
    }

    /// Submit a typed or transcribed utterance.
    ///
    /// Blank input is a silent no-op returning `None`; nothing is appended
    /// and no capability is invoked. Otherwise the user message is appended
    /// and published synchronously, and the returned handle resolves when
    /// the turn completes (reply appended and spoken, or responder failed).
    /// Awaiting the handle is optional.
    ///
    /// Must be called within a tokio runtime context.
    pub fn submit_utterance(&self, text: &str) -> Option<JoinHandle<()>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank utterance");
            return None;
        }

        let snapshot = self.conversation.push_and_snapshot(Message::user(text));
        self.sink.present(&snapshot);

        self.pending.begin();

        let utterance = text.to_string();
        let conversation = self.conversation.clone();
        let responder = Arc::clone(&self.responder);
        let speaker = Arc::clone(&self.speaker);
        let sink = Arc::clone(&self.sink);
        let pending = self.pending.clone();

        Some(tokio::spawn(async move {
            match responder.generate_reply(&utterance).await {
                Ok(reply) => {
                    debug!("Reply received for utterance: {}", utterance);
                    let snapshot = conversation.push_and_snapshot(Message::bot(reply.clone()));
                    sink.present(&snapshot);

                    if let Err(e) = speaker.speak(&reply) {
                        warn!("Playback failed: {}", e);
                    }
                }
                Err(e) => {
                    // The user message stays; the turn just produces no reply
                    warn!("Reply generation failed: {}", e);
                }
            }
            pending.finish();
        }))
    }

    /// Current state: Idle, or AwaitingReply while any turn is outstanding
    pub fn state(&self) -> TurnState {
        self.pending.state()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_awaiting_reply()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Clear the conversation and publish the empty snapshot
    pub fn clear(&self) {
        self.conversation.clear();
        self.sink.present(&self.conversation.snapshot());
    }
}

/// Builder for a [`TurnSequencer`] with default capabilities
pub struct TurnSequencerBuilder {
    responder: Arc<dyn Responder>,
    speaker: Arc<dyn Speaker>,
    sink: Arc<dyn PresentationSink>,
}

impl TurnSequencerBuilder {
    pub fn new() -> Self {
        Self {
            responder: Arc::new(EchoResponder::new()),
            speaker: Arc::new(NullSpeaker::new()),
            sink: Arc::new(NullSink::new()),
        }
    }

    pub fn with_responder(mut self, responder: Arc<dyn Responder>) -> Self {
        self.responder = responder;
        self
    }

    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn PresentationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> TurnSequencer {
        TurnSequencer::new(self.responder, self.speaker, self.sink)
    }
}

impl Default for TurnSequencerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
