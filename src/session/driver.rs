//! Session worker connecting commands to the turn sequencer
//!
//! Typed text goes straight to the sequencer; a listen trigger runs
//! permission check -> transcription -> submission, and is rejected while a
//! reply is pending.

use crate::capabilities::{
    AlwaysGranted, EchoResponder, NullSink, NullSpeaker, PermissionGate, PresentationSink,
    Responder, Speaker, StaticTranscript, TranscriptSource,
};
use crate::messages::Message;
use crate::sequencer::{TurnSequencer, TurnState};
use crate::session::config::SessionConfig;
use crate::{ParleyError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

/// Commands that can be sent to the session
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Submit a typed utterance
    SubmitText(String),

    /// Trigger one single-shot listen/transcribe/submit cycle
    StartListening,

    /// Clear the conversation
    ClearConversation,

    /// Shutdown the session
    Shutdown,
}

/// Events emitted by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A turn was started for a submitted utterance
    TurnStarted,

    /// Listening has started
    ListeningStarted,

    /// Transcription result, about to be submitted as an utterance
    Transcript(String),

    /// The recognizer produced no utterance; no turn was started
    NoTranscript,

    /// Audio capture permission was denied; no turn was started
    PermissionDenied,

    /// Listening was rejected because a reply is still pending
    ReplyPending,

    /// The conversation was cleared
    Cleared,

    /// An error occurred
    Error(String),

    /// The session has shut down
    Shutdown,
}

/// Handle for controlling the session from the host
pub struct SessionHandle {
    /// Command sender
    command_tx: Sender<SessionCommand>,

    /// Event receiver
    event_rx: Receiver<SessionEvent>,

    /// Shared sequencer, for conversation and state reads
    sequencer: Arc<TurnSequencer>,
}

impl SessionHandle {
    /// Send a command to the session
    pub fn send_command(&self, cmd: SessionCommand) -> Result<()> {
        self.command_tx
            .send(cmd)
            .map_err(|e| ParleyError::ChannelError(format!("Failed to send command: {}", e)))
    }

    /// Try to receive an event from the session
    pub fn try_recv_event(&self) -> Option<SessionEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Receive an event, waiting up to `timeout`
    pub fn recv_event_timeout(&self, timeout: Duration) -> Option<SessionEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Get a snapshot of the conversation
    pub fn conversation(&self) -> Vec<Message> {
        self.sequencer.conversation().snapshot()
    }

    /// Current sequencer state
    pub fn state(&self) -> TurnState {
        self.sequencer.state()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.sequencer.is_awaiting_reply()
    }
}

/// Chat session wiring the permission gate and transcript source in front
/// of the turn sequencer
pub struct Session {
    /// Command receiver
    command_rx: Receiver<SessionCommand>,

    /// Event sender
    event_tx: Sender<SessionEvent>,

    /// Shared sequencer
    sequencer: Arc<TurnSequencer>,

    /// Transcript source
    transcript: Arc<dyn TranscriptSource>,

    /// Permission gate
    permission: Arc<dyn PermissionGate>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Start the session worker thread.
    ///
    /// The worker owns the async runtime; turn tasks run on it. Shutdown
    /// grants in-flight turns a short grace period before the runtime is
    /// dropped.
    pub fn start(self) -> JoinHandle<()> {
        let command_rx = self.command_rx;
        let event_tx = self.event_tx;
        let sequencer = self.sequencer;
        let transcript = self.transcript;
        let permission = self.permission;

        thread::spawn(move || {
            info!("Session worker starting");

            let runtime = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create tokio runtime: {}", e);
                    let _ = event_tx.send(SessionEvent::Error(format!(
                        "Runtime creation failed: {}",
                        e
                    )));
                    let _ = event_tx.send(SessionEvent::Shutdown);
                    return;
                }
            };

            info!("Session worker ready");

            loop {
                match command_rx.recv() {
                    Ok(SessionCommand::SubmitText(text)) => {
                        let _guard = runtime.enter();
                        if sequencer.submit_utterance(&text).is_some() {
                            let _ = event_tx.send(SessionEvent::TurnStarted);
                        }
                    }

                    Ok(SessionCommand::StartListening) => {
                        // Re-entrant recognition is disabled while a reply
                        // is outstanding
                        if sequencer.is_awaiting_reply() {
                            debug!("Listening rejected: reply pending");
                            let _ = event_tx.send(SessionEvent::ReplyPending);
                            continue;
                        }

                        if !permission.is_granted() && !permission.request() {
                            info!("Listening rejected: permission denied");
                            let _ = event_tx.send(SessionEvent::PermissionDenied);
                            continue;
                        }

                        let _ = event_tx.send(SessionEvent::ListeningStarted);

                        match runtime.block_on(transcript.transcribe()) {
                            Ok(Some(text)) => {
                                debug!("Transcription: {}", text);
                                let _ = event_tx.send(SessionEvent::Transcript(text.clone()));
                                let _guard = runtime.enter();
                                if sequencer.submit_utterance(&text).is_some() {
                                    let _ = event_tx.send(SessionEvent::TurnStarted);
                                }
                            }
                            Ok(None) => {
                                debug!("No utterance produced");
                                let _ = event_tx.send(SessionEvent::NoTranscript);
                            }
                            Err(e) => {
                                warn!("Transcription failed: {}", e);
                                let _ = event_tx.send(SessionEvent::Error(e.to_string()));
                            }
                        }
                    }

                    Ok(SessionCommand::ClearConversation) => {
                        info!("Clearing conversation");
                        sequencer.clear();
                        let _ = event_tx.send(SessionEvent::Cleared);
                    }

                    Ok(SessionCommand::Shutdown) => {
                        info!("Session shutdown requested");

                        // Grace period for in-flight turns
                        let deadline = Instant::now() + Duration::from_secs(1);
                        while sequencer.is_awaiting_reply() && Instant::now() < deadline {
                            thread::sleep(Duration::from_millis(10));
                        }

                        let _ = event_tx.send(SessionEvent::Shutdown);
                        break;
                    }

                    Err(e) => {
                        warn!("Command channel disconnected: {}", e);
                        break;
                    }
                }
            }

            info!("Session worker stopped");
        })
    }
}

/// Builder for creating a session with injected capabilities
pub struct SessionBuilder {
    config: SessionConfig,
    responder: Arc<dyn Responder>,
    speaker: Arc<dyn Speaker>,
    sink: Arc<dyn PresentationSink>,
    transcript: Arc<dyn TranscriptSource>,
    permission: Arc<dyn PermissionGate>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            responder: Arc::new(EchoResponder::new()),
            speaker: Arc::new(NullSpeaker::new()),
            sink: Arc::new(NullSink::new()),
            transcript: Arc::new(StaticTranscript::silent()),
            permission: Arc::new(AlwaysGranted::new()),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
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

    pub fn with_transcript_source(mut self, transcript: Arc<dyn TranscriptSource>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn with_permission_gate(mut self, permission: Arc<dyn PermissionGate>) -> Self {
        self.permission = permission;
        self
    }

    /// Build the session and its handle
    pub fn build(self) -> Result<(Session, SessionHandle)> {
        self.config.validate()?;

        let (command_tx, command_rx) = bounded(self.config.command_capacity);
        let (event_tx, event_rx) = bounded(self.config.event_capacity);

        let speaker: Arc<dyn Speaker> = if self.config.speak_replies {
            self.speaker
        } else {
            Arc::new(NullSpeaker::new())
        };

        let sequencer = Arc::new(TurnSequencer::new(self.responder, speaker, self.sink));

        let session = Session {
            command_rx,
            event_tx,
            sequencer: Arc::clone(&sequencer),
            transcript: self.transcript,
            permission: self.permission,
        };

        let handle = SessionHandle {
            command_tx,
            event_rx,
            sequencer,
        };

        Ok((session, handle))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
