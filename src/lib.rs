pub mod capabilities;
pub mod messages;
pub mod sequencer;
pub mod session;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParleyError {
    #[error("Audio capture permission denied")]
    PermissionDenied,

    #[error("Transcription error: {0}")]
    TranscriptionError(String),

    #[error("Responder error: {0}")]
    ResponderError(String),

    #[error("Speaker error: {0}")]
    SpeakerError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ParleyError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The user can grant permission and retry
            ParleyError::PermissionDenied => true,
            // These are typically transient errors
            ParleyError::TranscriptionError(_) => true,
            ParleyError::ResponderError(_) => true,
            ParleyError::SpeakerError(_) => true,
            // A disconnected session cannot be revived
            ParleyError::ChannelError(_) => false,
            ParleyError::ConfigError(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            ParleyError::PermissionDenied => {
                "Microphone access was denied. Please grant permission to use voice input."
                    .to_string()
            }
            ParleyError::TranscriptionError(_) => {
                "Speech recognition failed. Please try again.".to_string()
            }
            ParleyError::ResponderError(_) => {
                "Reply generation failed. Please try again.".to_string()
            }
            ParleyError::SpeakerError(_) => {
                "Audio playback failed. The reply is still shown as text.".to_string()
            }
            ParleyError::ChannelError(_) => {
                "Internal communication error. Please restart the session.".to_string()
            }
            ParleyError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ParleyError>;
