#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod command;

use crate::domain::models::Speech;
use crate::domain::models::SpeechCapturer;

pub struct SpeechManager {}

impl SpeechManager {
    /// Resolves voice input for this host. A command that isn't set, can't be
    /// found or isn't executable leaves voice input unavailable.
    pub fn probe(speech_command: &str) -> Speech {
        let speech_command = speech_command.trim();
        let program = match speech_command.split_whitespace().next() {
            Some(program) => program,
            None => {
                tracing::debug!("No speech command configured");
                return Speech::Unavailable;
            }
        };

        if which::which(program).is_err() {
            tracing::warn!(program, "Speech command not found, voice input is disabled");
            return Speech::Unavailable;
        }

        let capturer = command::CommandCapturer::new(speech_command);
        tracing::debug!(capturer = %capturer.name(), "Voice input enabled");

        return Speech::Available(Box::new(capturer));
    }
}
