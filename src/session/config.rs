use crate::{ParleyError, Result};

/// Configuration for a chat session
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Capacity of the command channel
    pub command_capacity: usize,

    /// Capacity of the event channel
    pub event_capacity: usize,

    /// Whether replies are passed to the speaker
    pub speak_replies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            command_capacity: 100,
            event_capacity: 100,
            speak_replies: true,
        }
    }
}

impl SessionConfig {
    /// Disable audible playback (text-only mode)
    pub fn without_playback(mut self) -> Self {
        self.speak_replies = false;
        self
    }

    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.command_capacity == 0 {
            return Err(ParleyError::ConfigError(
                "Command channel capacity must be non-zero".into(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(ParleyError::ConfigError(
                "Event channel capacity must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.speak_replies);
        assert_eq!(config.command_capacity, 100);
    }

    #[test]
    fn test_without_playback() {
        let config = SessionConfig::default().without_playback();
        assert!(!config.speak_replies);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = SessionConfig::default().with_command_capacity(0);
        assert!(config.validate().is_err());

        let config = SessionConfig::default().with_event_capacity(0);
        assert!(config.validate().is_err());
    }
}
