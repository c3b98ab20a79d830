#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task;

/// Owns the system clipboard from a single blocking task so copied text stays
/// available for as long as the app runs.
#[derive(Clone)]
pub struct ClipboardService {
    tx: Option<mpsc::UnboundedSender<String>>,
}

impl ClipboardService {
    pub fn start() -> ClipboardService {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(err) => {
                tracing::warn!(err = ?err, "Clipboard service is unable to start");
                return ClipboardService::disabled();
            }
        };

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        task::spawn_blocking(move || {
            while let Some(text) = rx.blocking_recv() {
                if let Err(err) = clipboard.set_text(text) {
                    tracing::error!(err = ?err, "Failed to write to clipboard");
                }
            }
        });

        return ClipboardService { tx: Some(tx) };
    }

    pub fn disabled() -> ClipboardService {
        return ClipboardService { tx: None };
    }

    pub fn is_available(&self) -> bool {
        return self.tx.is_some();
    }

    /// Writes text verbatim. Empty text is ignored.
    pub fn copy(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        if let Some(tx) = &self.tx {
            tx.send(text.to_string())?;
            return Ok(());
        }

        bail!("Clipboard is not available on this system.");
    }
}
