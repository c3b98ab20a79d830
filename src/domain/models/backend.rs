use anyhow::Result;
use async_trait::async_trait;

use super::GenerationOutcome;
use super::GenerationPrompt;

#[async_trait]
pub trait Backend {
    /// Sends a single prompt to the inference service.
    ///
    /// A decoded response, including one that reports an error, is returned as
    /// a `GenerationOutcome`. Errors are reserved for transport failures such
    /// as an unreachable host or a body that isn't JSON.
    async fn get_completion(&self, prompt: &GenerationPrompt) -> Result<GenerationOutcome>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
