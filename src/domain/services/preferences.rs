#[cfg(test)]
#[path = "preferences_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ThemeMode;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Presentation preferences that outlive a single run.
pub struct PreferencesStore {
    pub file_path: path::PathBuf,
}

impl Default for PreferencesStore {
    fn default() -> PreferencesStore {
        return PreferencesStore::new(path::PathBuf::from(Config::get(
            ConfigKey::PreferencesFile,
        )));
    }
}

impl PreferencesStore {
    pub fn new(file_path: path::PathBuf) -> PreferencesStore {
        return PreferencesStore { file_path };
    }

    pub async fn load(&self) -> Result<Preferences> {
        if !self.file_path.exists() {
            return Ok(Preferences::default());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        let preferences: Preferences = serde_yaml::from_str(&payload)?;

        return Ok(preferences);
    }

    /// Startup variant of `load`. A broken file is logged and ignored.
    pub async fn load_or_default(&self) -> Preferences {
        match self.load().await {
            Ok(preferences) => return preferences,
            Err(err) => {
                tracing::warn!(err = ?err, path = ?self.file_path, "Failed to read preferences");
                return Preferences::default();
            }
        }
    }

    pub async fn save(&self, preferences: &Preferences) -> Result<()> {
        let payload = serde_yaml::to_string(preferences)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        return Ok(());
    }
}
