#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use super::Downloads;
use super::GenerationService;
use super::Preferences;
use super::PreferencesStore;
use crate::domain::models::Action;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::Notice;
use crate::domain::models::Speech;
use crate::domain::models::ThemeMode;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter - Generate code for the prompt.
- ALT+Enter - Insert a new line in the prompt.
- CTRL+L - Clear the prompt and output.
- CTRL+Y - Copy the output to your clipboard.
- CTRL+S - Save the output to the download directory as LANGUAGE_codemind_code.txt.
- CTRL+T - Toggle between light and dark mode.
- F2 - Switch to the next code language.
- F3 - Switch to the next model.
- F4 - Speak your prompt, when a speech command is configured.
- CTRL+P / CTRL+N - Select an older / newer history entry.
- CTRL+R - Regenerate the selected history entry.
- Page up / Page down - Scroll the output.
- CTRL+C - Exit Codemind.
        "#;

    return text.trim().to_string();
}

fn copy_output(
    clipboard: &ClipboardService,
    text: &str,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    match clipboard.copy(text) {
        Ok(_) => {
            tx.send(Event::Notice(Notice::info("✅ Code copied to clipboard!")))?;
        }
        Err(err) => {
            tracing::error!(err = ?err, "Failed to copy output");
            tx.send(Event::Notice(Notice::error(&format!(
                "Failed to copy: {err}"
            ))))?;
        }
    }

    return Ok(());
}

async fn download_output(
    downloads: &Downloads,
    language: Language,
    text: &str,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match downloads.save(language, text).await {
        Ok(Some(file_path)) => {
            tx.send(Event::Notice(Notice::info(&format!(
                "⬇️ Saved to {}",
                file_path.to_string_lossy()
            ))))?;
        }
        Ok(None) => {}
        Err(err) => {
            tracing::error!(err = ?err, "Failed to save output");
            tx.send(Event::Notice(Notice::error(&format!(
                "Failed to save: {err}"
            ))))?;
        }
    }

    return Ok(());
}

async fn persist_theme(
    preferences: &PreferencesStore,
    theme: ThemeMode,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if let Err(err) = preferences.save(&Preferences { theme }).await {
        tracing::error!(err = ?err, "Failed to persist theme");
        tx.send(Event::Notice(Notice::error(&format!(
            "Theme changed but could not be saved: {err}"
        ))))?;
    }

    return Ok(());
}

/// Background worker performing every side effect the console asks for.
pub struct ActionsService {
    pub backend: Arc<BackendBox>,
    pub clipboard: ClipboardService,
    pub downloads: Downloads,
    pub preferences: PreferencesStore,
    pub speech: Arc<Speech>,
}

impl ActionsService {
    pub async fn start(
        self,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::Generate(prompt) => {
                    tracing::debug!(model = %prompt.model, language = %prompt.language, "Generate");
                    GenerationService::spawn(self.backend.clone(), prompt, tx.clone());
                }
                Action::CopyOutput(text) => {
                    copy_output(&self.clipboard, &text, &tx)?;
                }
                Action::DownloadOutput(language, text) => {
                    download_output(&self.downloads, language, &text, &tx).await?;
                }
                Action::PersistTheme(theme) => {
                    persist_theme(&self.preferences, theme, &tx).await?;
                }
                Action::CaptureSpeech() => {
                    let speech = self.speech.clone();
                    let worker_tx = tx.clone();
                    tokio::spawn(async move {
                        let event = match speech.capture().await {
                            Ok(transcript) => Event::SpeechTranscript(transcript),
                            Err(err) => {
                                tracing::warn!(err = ?err, "Speech capture failed");
                                Event::SpeechError(err.to_string())
                            }
                        };

                        if worker_tx.send(event).is_err() {
                            tracing::debug!("UI closed before speech capture completed");
                        }
                    });
                }
            }
        }

        return Ok(());
    }
}
