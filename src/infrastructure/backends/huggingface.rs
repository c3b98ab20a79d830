#[cfg(test)]
#[path = "huggingface_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::GenerationOutcome;
use crate::domain::models::GenerationPrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InferenceRequest {
    inputs: String,
}

/// Client for the Hugging Face hosted inference API. The token is read once
/// when the client is built and never validated locally.
pub struct HuggingFace {
    url: String,
    token: String,
}

impl Default for HuggingFace {
    fn default() -> HuggingFace {
        return HuggingFace::new(
            &Config::get(ConfigKey::InferenceURL),
            &Config::get(ConfigKey::ApiKey),
        );
    }
}

impl HuggingFace {
    pub fn new(url: &str, token: &str) -> HuggingFace {
        return HuggingFace {
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        };
    }
}

#[async_trait]
impl Backend for HuggingFace {
    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, prompt: &GenerationPrompt) -> Result<GenerationOutcome> {
        let req = InferenceRequest {
            inputs: prompt.as_inputs(),
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/models/{model}",
                url = self.url,
                model = prompt.model
            ))
            .bearer_auth(&self.token)
            .json(&req)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                model = prompt.model,
                "Inference request returned a non success status"
            );
        }

        let body = res.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&body)?;
        tracing::debug!(body = ?payload, "Completion response");

        return Ok(GenerationOutcome::from_payload(&payload));
    }
}
