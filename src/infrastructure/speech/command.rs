#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process;

use crate::domain::models::SpeechCapturer;

/// Runs an external transcription command once per capture and reads the
/// transcript from its standard output.
pub struct CommandCapturer {
    program: String,
    args: Vec<String>,
}

impl CommandCapturer {
    pub fn new(command: &str) -> CommandCapturer {
        let mut parts = command.split_whitespace().map(|e| return e.to_string());

        return CommandCapturer {
            program: parts.next().unwrap_or_default(),
            args: parts.collect(),
        };
    }
}

#[async_trait]
impl SpeechCapturer for CommandCapturer {
    fn name(&self) -> String {
        return self.program.to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn capture(&self) -> Result<String> {
        tracing::debug!(program = %self.program, args = ?self.args, "Starting speech capture");

        let output = process::Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(status = ?output.status, stderr, "Speech command failed");
            bail!(format!("Speech capture failed: {stderr}"));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(transcript, "Speech captured");

        return Ok(transcript);
    }
}
