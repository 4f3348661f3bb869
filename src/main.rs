use anyhow::Result;
use crossbeam_channel::Receiver;
use parley::capabilities::{ChannelSink, EchoResponder, StaticTranscript, TracingSpeaker};
use parley::messages::Message;
use parley::session::{Session, SessionCommand, SessionEvent};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Parley chat demo");

    let (sink, conversation_rx) = ChannelSink::new();

    let (session, handle) = Session::builder()
        .with_responder(Arc::new(EchoResponder::new()))
        .with_speaker(Arc::new(TracingSpeaker::new()))
        .with_sink(Arc::new(sink))
        // Canned voice input; a real host plugs its recognizer in here
        .with_transcript_source(Arc::new(StaticTranscript::new("what time is it")))
        .build()?;

    let worker = session.start();

    println!("Type a message, or :listen / :clear / :quit");

    let stdin = io::stdin();
    let mut printed = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" => break,
            ":listen" => handle.send_command(SessionCommand::StartListening)?,
            ":clear" => handle.send_command(SessionCommand::ClearConversation)?,
            text => handle.send_command(SessionCommand::SubmitText(text.to_string()))?,
        }

        print_updates(&conversation_rx, &mut printed, Duration::from_millis(500));
        report_events(&handle);
        print!("> ");
        io::stdout().flush()?;
    }

    handle.send_command(SessionCommand::Shutdown)?;
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("Session worker panicked"))?;

    info!(
        "Session transcript:\n{}",
        serde_json::to_string_pretty(&handle.conversation())?
    );

    Ok(())
}

/// Print messages added since the last call, draining snapshots until the
/// conversation goes quiet for `wait`
fn print_updates(rx: &Receiver<Vec<Message>>, printed: &mut usize, wait: Duration) {
    while let Ok(snapshot) = rx.recv_timeout(wait) {
        if snapshot.len() < *printed {
            println!("(conversation cleared)");
            *printed = 0;
        }
        for message in &snapshot[*printed..] {
            let prefix = if message.is_user() { "you" } else { "bot" };
            println!("{}> {}", prefix, message.text);
        }
        *printed = snapshot.len();
    }
}

fn report_events(handle: &parley::session::SessionHandle) {
    while let Some(event) = handle.try_recv_event() {
        match event {
            SessionEvent::PermissionDenied => {
                println!("(microphone permission denied)");
            }
            SessionEvent::NoTranscript => {
                println!("(didn't catch that)");
            }
            SessionEvent::ReplyPending => {
                println!("(still thinking, try again in a moment)");
            }
            SessionEvent::Error(e) => {
                println!("(error: {})", e);
            }
            _ => {}
        }
    }
}
