use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SpeechCapturer {
    fn name(&self) -> String;

    /// Captures a single utterance and returns its transcript. Capture stops
    /// once a result is produced and is never resumed automatically.
    async fn capture(&self) -> Result<String>;
}

pub type SpeechCapturerBox = Box<dyn SpeechCapturer + Send + Sync>;

/// Voice input as found on the host at startup.
pub enum Speech {
    Available(SpeechCapturerBox),
    Unavailable,
}

impl Speech {
    pub fn is_available(&self) -> bool {
        return matches!(self, Speech::Available(_));
    }

    pub async fn capture(&self) -> Result<String> {
        match self {
            Speech::Available(capturer) => {
                let transcript = capturer.capture().await?;
                if transcript.trim().is_empty() {
                    bail!("No speech was recognised, try again.");
                }

                return Ok(transcript);
            }
            Speech::Unavailable => {
                bail!("Voice input is not available. Set a speech command with --speech-command to enable it.");
            }
        }
    }
}
