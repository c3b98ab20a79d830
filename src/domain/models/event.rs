use tui_textarea::Input;

use super::GenerationResult;
use super::Notice;

pub enum Event {
    GenerationResponse(GenerationResult),
    Notice(Notice),
    SpeechError(String),
    SpeechTranscript(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardNewLine(),
    KeyboardPaste(String),
    UIClear(),
    UICopy(),
    UIDownload(),
    UIHistoryNext(),
    UIHistoryPrev(),
    UINextLanguage(),
    UINextModel(),
    UIRegenerate(),
    UIResize(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UISpeak(),
    UIToggleTheme(),
}
