use super::GenerationPrompt;
use super::Language;
use super::ThemeMode;

pub enum Action {
    CaptureSpeech(),
    CopyOutput(String),
    DownloadOutput(Language, String),
    Generate(GenerationPrompt),
    PersistTheme(ThemeMode),
}
