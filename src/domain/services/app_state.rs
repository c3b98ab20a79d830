#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use crate::domain::models::GenerationPrompt;
use crate::domain::models::GenerationResult;
use crate::domain::models::History;
use crate::domain::models::HistoryEntry;
use crate::domain::models::Language;
use crate::domain::models::Notice;
use crate::domain::models::ThemeMode;
use crate::domain::models::MODELS;
use crate::domain::models::VALIDATION_MESSAGE;
use crate::domain::services::Scroll;

/// Everything the console shows, owned by the UI loop for one run.
pub struct AppState {
    pub prompt: String,
    pub output: String,
    pub language: Language,
    pub model: String,
    pub models: Vec<String>,
    pub pending: bool,
    pub listening: bool,
    pub theme: ThemeMode,
    pub history: History,
    pub history_cursor: Option<usize>,
    pub notice: Option<Notice>,
    pub scroll: Scroll,
    prompt_changed: bool,
}

impl AppState {
    pub fn new(language: Language, model: &str, theme: ThemeMode) -> AppState {
        let models = MODELS
            .iter()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();

        let mut selected_model = model.to_string();
        if !models.contains(&selected_model) {
            selected_model = models[0].to_string();
        }

        return AppState {
            prompt: "".to_string(),
            output: "".to_string(),
            language,
            model: selected_model,
            models,
            pending: false,
            listening: false,
            theme,
            history: History::default(),
            history_cursor: None,
            notice: None,
            scroll: Scroll::default(),
            prompt_changed: false,
        };
    }

    /// Prompt edits coming from the text area itself.
    pub fn set_prompt_from_input(&mut self, text: &str) {
        self.prompt = text.to_string();
    }

    /// Prompt replacements the text area has to pick up on its next draw.
    pub fn set_prompt(&mut self, text: &str) {
        self.prompt = text.to_string();
        self.prompt_changed = true;
    }

    pub fn take_prompt_change(&mut self) -> Option<String> {
        if !self.prompt_changed {
            return None;
        }

        self.prompt_changed = false;
        return Some(self.prompt.to_string());
    }

    fn set_output(&mut self, text: &str) {
        self.output = text.to_string();
        self.scroll.reset();
    }

    fn dispatch(&mut self) -> Option<GenerationPrompt> {
        let input = self.prompt.trim();
        if input.is_empty() {
            self.set_output(VALIDATION_MESSAGE);
            return None;
        }

        let prompt = GenerationPrompt::new(input, self.language, &self.model);
        self.pending = true;
        self.notice = None;
        self.set_output("");

        return Some(prompt);
    }

    /// Generate trigger. Ignored while a request is outstanding.
    pub fn generate(&mut self) -> Option<GenerationPrompt> {
        if self.pending {
            return None;
        }

        return self.dispatch();
    }

    /// Re-submits the selected history entry with the current language and
    /// model. Not guarded by `pending`, so overlapping requests race and the
    /// last one to arrive wins.
    pub fn regenerate(&mut self, idx: usize) -> Option<GenerationPrompt> {
        let input = self.history.get(idx)?.input.to_string();
        self.set_prompt(&input);

        return self.dispatch();
    }

    pub fn regenerate_selected(&mut self) -> Option<GenerationPrompt> {
        let idx = self.history_cursor?;
        return self.regenerate(idx);
    }

    pub fn handle_generation_response(&mut self, res: GenerationResult) {
        self.pending = false;
        self.set_output(&res.output);
        self.history.push(HistoryEntry {
            input: res.input,
            output: res.output,
        });

        // The selected entry moved down one slot, or was evicted.
        self.history_cursor = self
            .history_cursor
            .map(|idx| return idx + 1)
            .filter(|idx| return *idx < self.history.len());
    }

    pub fn clear(&mut self) {
        self.set_prompt("");
        self.set_output("");
    }

    pub fn copy_request(&self) -> Option<String> {
        if self.output.is_empty() {
            return None;
        }

        return Some(self.output.to_string());
    }

    pub fn download_request(&self) -> Option<(Language, String)> {
        if self.output.is_empty() {
            return None;
        }

        return Some((self.language, self.output.to_string()));
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        return self.theme;
    }

    pub fn next_language(&mut self) {
        self.language = self.language.next();
    }

    pub fn next_model(&mut self) {
        let idx = self
            .models
            .iter()
            .position(|e| return e == &self.model)
            .unwrap_or(0);

        self.model = self.models[(idx + 1) % self.models.len()].to_string();
    }

    pub fn select_history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        self.history_cursor = match self.history_cursor {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(self.history.len() - 1)),
        };
    }

    pub fn select_history_next(&mut self) {
        self.history_cursor = match self.history_cursor {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    /// Returns true when a capture should be started.
    pub fn begin_speech(&mut self) -> bool {
        if self.listening {
            return false;
        }

        self.listening = true;
        self.notice = None;
        return true;
    }

    pub fn handle_speech_transcript(&mut self, transcript: &str) {
        self.listening = false;
        self.set_prompt(transcript);
    }

    pub fn handle_speech_error(&mut self, err: &str) {
        self.listening = false;
        self.notice = Some(Notice::error(err));
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
