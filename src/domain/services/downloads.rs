#[cfg(test)]
#[path = "downloads_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;

pub struct Downloads {
    pub dir: path::PathBuf,
}

impl Default for Downloads {
    fn default() -> Downloads {
        return Downloads::new(path::PathBuf::from(Config::get(ConfigKey::DownloadDir)));
    }
}

impl Downloads {
    pub fn new(dir: path::PathBuf) -> Downloads {
        return Downloads { dir };
    }

    pub fn file_path(&self, language: Language) -> path::PathBuf {
        return self.dir.join(language.download_file_name());
    }

    /// Saves output as a plain text file named after the language, replacing
    /// any earlier download. Returns `None` without touching disk when there
    /// is nothing to save.
    pub async fn save(&self, language: Language, output: &str) -> Result<Option<path::PathBuf>> {
        if output.is_empty() {
            return Ok(None);
        }

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }

        let file_path = self.file_path(language);
        let mut file = fs::File::create(&file_path).await?;
        file.write_all(output.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = ?file_path, "Saved output");
        return Ok(Some(file_path));
    }
}
