#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::BackendBox;
use crate::domain::models::Event;
use crate::domain::models::GenerationOutcome;
use crate::domain::models::GenerationPrompt;
use crate::domain::models::GenerationResult;

pub struct GenerationService {}

impl GenerationService {
    /// Runs one generation and maps whatever happened onto displayable text.
    /// Never fails: transport errors resolve to the language fallback.
    pub async fn resolve(backend: &BackendBox, prompt: &GenerationPrompt) -> String {
        match backend.get_completion(prompt).await {
            Ok(outcome) => {
                if let GenerationOutcome::RemoteError(err) = &outcome {
                    tracing::warn!(err, model = prompt.model, "Inference service reported an error");
                }
                return outcome.into_output(prompt.language);
            }
            Err(err) => {
                tracing::error!(err = ?err, model = prompt.model, "Failed to fetch completion");
                return GenerationOutcome::transport_failure_output(prompt.language);
            }
        }
    }

    /// Spawns a generation that always reports back with a
    /// `GenerationResponse`, even if resolving the output panics.
    pub fn spawn(
        backend: Arc<BackendBox>,
        prompt: GenerationPrompt,
        tx: mpsc::UnboundedSender<Event>,
    ) -> JoinHandle<()> {
        let language = prompt.language;
        let input = prompt.input.to_string();

        let worker = tokio::spawn(async move {
            return GenerationService::resolve(&backend, &prompt).await;
        });

        return tokio::spawn(async move {
            let output = match worker.await {
                Ok(output) => output,
                Err(err) => {
                    tracing::error!(err = ?err, "Generation task failed");
                    GenerationOutcome::transport_failure_output(language)
                }
            };

            if tx
                .send(Event::GenerationResponse(GenerationResult { input, output }))
                .is_err()
            {
                tracing::debug!("UI closed before generation completed");
            }
        });
    }
}
