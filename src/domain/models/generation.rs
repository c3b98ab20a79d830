#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;

use serde_json::Value;

use super::Language;

pub const MODELS: [&str; 2] = ["tiiuae/falcon-7b-instruct", "bigcode/starcoder"];

pub const WARNING_MARKER: &str = "⚠️";

pub const VALIDATION_MESSAGE: &str = "Please describe the code you want.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationPrompt {
    pub input: String,
    pub language: Language,
    pub model: String,
}

impl GenerationPrompt {
    pub fn new(input: &str, language: Language, model: &str) -> GenerationPrompt {
        return GenerationPrompt {
            input: input.to_string(),
            language,
            model: model.to_string(),
        };
    }

    /// Instruction text sent as the model's `inputs`.
    pub fn as_inputs(&self) -> String {
        return format!("{} in {}", self.input, self.language.label());
    }
}

/// What a completed round trip to the inference service carried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(String),
    RemoteError(String),
    Missing,
}

fn generated_text(value: &Value) -> Option<String> {
    if let Some(text) = value.get("generated_text").and_then(|e| return e.as_str()) {
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    return None;
}

/// Only a value that reads as an actual message counts as a remote error.
/// Empty strings, `false` and `null` fall through to the text lookup.
fn error_message(err: &Value) -> Option<String> {
    let message = match err {
        Value::Null | Value::Bool(false) => return None,
        Value::String(text) => text.to_string(),
        other => other.to_string(),
    };

    if message.is_empty() {
        return None;
    }

    return Some(message);
}

impl GenerationOutcome {
    pub fn from_payload(payload: &Value) -> GenerationOutcome {
        if let Some(err) = payload.get("error").and_then(error_message) {
            return GenerationOutcome::RemoteError(err);
        }

        let text = match payload {
            Value::Array(items) => items.first().and_then(generated_text),
            Value::Object(_) => generated_text(payload),
            _ => None,
        };

        if let Some(text) = text {
            return GenerationOutcome::Generated(text);
        }

        return GenerationOutcome::Missing;
    }

    pub fn into_output(self, language: Language) -> String {
        match self {
            GenerationOutcome::Generated(text) => return text,
            GenerationOutcome::RemoteError(err) => {
                return format!("{WARNING_MARKER} API Error: {err}");
            }
            GenerationOutcome::Missing => {
                return format!(
                    "{WARNING_MARKER} No response from the model. Here is an example instead:\n\n{}",
                    language.fallback_snippet()
                );
            }
        }
    }

    /// Output used when the request never produced a decodable payload.
    pub fn transport_failure_output(language: Language) -> String {
        return format!(
            "{WARNING_MARKER} Failed to fetch AI response. Here is an example instead:\n\n{}",
            language.fallback_snippet()
        );
    }
}

/// A resolved generation, ready to be rendered and remembered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub input: String,
    pub output: String,
}
