use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::GenerationOutcome;
use crate::domain::models::GenerationPrompt;

pub enum Reply {
    Outcome(GenerationOutcome),
    TransportFailure,
    Panic,
}

/// Backend double that answers every prompt with a canned reply.
pub struct StaticBackend {
    reply: Reply,
}

impl StaticBackend {
    pub fn boxed(reply: Reply) -> BackendBox {
        return Box::new(StaticBackend { reply });
    }

    pub fn generated(text: &str) -> BackendBox {
        return StaticBackend::boxed(Reply::Outcome(GenerationOutcome::Generated(
            text.to_string(),
        )));
    }
}

#[async_trait]
impl Backend for StaticBackend {
    #[allow(clippy::implicit_return)]
    async fn get_completion(&self, _prompt: &GenerationPrompt) -> Result<GenerationOutcome> {
        match &self.reply {
            Reply::Outcome(outcome) => return Ok(outcome.clone()),
            Reply::TransportFailure => bail!("connection refused"),
            Reply::Panic => panic!("backend exploded"),
        }
    }
}
