//! Shared capability doubles for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use parley::capabilities::{PresentationSink, Responder, Speaker};
use parley::messages::Message;
use parley::{ParleyError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Responder producing a reply via a closure, counting invocations
pub struct ScriptedResponder {
    reply: Box<dyn Fn(&str) -> String + Send + Sync>,
    calls: AtomicUsize,
}

impl ScriptedResponder {
    pub fn new(reply: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn generate_reply(&self, utterance: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.reply)(utterance))
    }
}

/// Responder that always fails
pub struct FailingResponder {
    calls: AtomicUsize,
}

impl FailingResponder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Responder for FailingResponder {
    async fn generate_reply(&self, _utterance: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ParleyError::ResponderError("backend unavailable".into()))
    }
}

/// Responder that never resolves, keeping a turn pending forever
pub struct BlockedResponder {
    calls: AtomicUsize,
}

impl BlockedResponder {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Responder for BlockedResponder {
    async fn generate_reply(&self, _utterance: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        futures::future::pending::<()>().await;
        unreachable!()
    }
}

/// Responder that sleeps per-utterance before echoing, for overlap tests
pub struct DelayedResponder {
    delay_for: Box<dyn Fn(&str) -> Duration + Send + Sync>,
}

impl DelayedResponder {
    pub fn new(delay_for: impl Fn(&str) -> Duration + Send + Sync + 'static) -> Self {
        Self {
            delay_for: Box::new(delay_for),
        }
    }
}

#[async_trait]
impl Responder for DelayedResponder {
    async fn generate_reply(&self, utterance: &str) -> Result<String> {
        tokio::time::sleep((self.delay_for)(utterance)).await;
        Ok(format!("reply to {}", utterance))
    }
}

/// Transcript source whose recognizer always fails
pub struct FailingTranscript;

impl FailingTranscript {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl parley::capabilities::TranscriptSource for FailingTranscript {
    async fn transcribe(&self) -> Result<Option<String>> {
        Err(ParleyError::TranscriptionError("recognizer crashed".into()))
    }
}

/// Speaker that records every playback request
#[derive(Default)]
pub struct RecordingSpeaker {
    calls: Mutex<Vec<String>>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str) -> Result<()> {
        self.calls.lock().push(text.to_string());
        Ok(())
    }
}

/// Sink that records every published snapshot
#[derive(Default)]
pub struct RecordingSink {
    snapshots: Mutex<Vec<Vec<Message>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<Vec<Message>> {
        self.snapshots.lock().clone()
    }

    pub fn last(&self) -> Option<Vec<Message>> {
        self.snapshots.lock().last().cloned()
    }
}

impl PresentationSink for RecordingSink {
    fn present(&self, conversation: &[Message]) {
        self.snapshots.lock().push(conversation.to_vec());
    }
}

/// Poll `cond` until it holds or `timeout` elapses
pub fn wait_until(timeout: Duration, cond: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}

pub fn texts(messages: &[Message]) -> Vec<String> {
    messages.iter().map(|m| m.text.clone()).collect()
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
