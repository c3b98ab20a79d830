use anyhow::Result;

use super::CommandCapturer;
use crate::domain::models::SpeechCapturer;

#[test]
fn it_splits_program_and_args() {
    let capturer = CommandCapturer::new("whisper-once --model tiny");

    assert_eq!(capturer.name(), "whisper-once");
    assert_eq!(capturer.args, vec!["--model".to_string(), "tiny".to_string()]);
}

#[cfg(unix)]
#[tokio::test]
async fn it_captures_stdout_as_transcript() -> Result<()> {
    let capturer = CommandCapturer::new("echo write a bubble sort");
    let transcript = capturer.capture().await?;

    assert_eq!(transcript, "write a bubble sort");
    return Ok(());
}

#[cfg(unix)]
#[tokio::test]
async fn it_fails_when_the_command_fails() {
    let capturer = CommandCapturer::new("false");
    let res = capturer.capture().await;

    assert!(res.is_err());
}
