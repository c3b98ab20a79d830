use anyhow::Result;
use test_utils::multiline_output_fixture;

use super::Highlighter;
use crate::domain::models::Language;
use crate::domain::models::ThemeMode;

fn as_text(highlighter: &Highlighter, text: &str, language: Language) -> String {
    return highlighter
        .lines(text, language)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_loads_both_themes() -> Result<()> {
    assert_eq!(Highlighter::new(ThemeMode::Light)?.mode(), ThemeMode::Light);
    assert_eq!(Highlighter::new(ThemeMode::Dark)?.mode(), ThemeMode::Dark);
    return Ok(());
}

#[test]
fn it_switches_modes() -> Result<()> {
    let mut highlighter = Highlighter::new(ThemeMode::Light)?;
    highlighter.set_mode(ThemeMode::Dark)?;

    assert_eq!(highlighter.mode(), ThemeMode::Dark);
    return Ok(());
}

#[test]
fn it_keeps_text_verbatim() -> Result<()> {
    let highlighter = Highlighter::new(ThemeMode::Dark)?;
    let text = multiline_output_fixture().trim_end();

    assert_eq!(as_text(&highlighter, text, Language::Python), text);
    return Ok(());
}

#[test]
fn it_returns_a_line_per_input_line() -> Result<()> {
    let highlighter = Highlighter::new(ThemeMode::Light)?;
    let lines = highlighter.lines("int main() {\n    return 0;\n}", Language::Cpp);

    assert_eq!(lines.len(), 3);
    return Ok(());
}

#[test]
fn it_colors_code() -> Result<()> {
    let highlighter = Highlighter::new(ThemeMode::Dark)?;
    let lines = highlighter.lines("public class Main {}", Language::Java);

    assert!(lines[0].spans.len() > 1);
    return Ok(());
}
