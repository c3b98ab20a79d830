#[cfg(test)]
#[path = "highlighter_test.rs"]
mod tests;

use anyhow::anyhow;
use anyhow::Result;
use once_cell::sync::Lazy;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxReference;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::domain::models::Language;
use crate::domain::models::ThemeMode;

pub static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

fn syntax_for(language: Language) -> &'static SyntaxReference {
    return SYNTAX_SET
        .find_syntax_by_token(language.syntax_token())
        .unwrap_or_else(|| return SYNTAX_SET.find_syntax_plain_text());
}

fn to_color(color: syntect::highlighting::Color) -> Color {
    return Color::Rgb(color.r, color.g, color.b);
}

/// Turns output text into styled terminal lines for the selected language.
pub struct Highlighter {
    mode: ThemeMode,
    theme: Theme,
}

impl Highlighter {
    pub fn new(mode: ThemeMode) -> Result<Highlighter> {
        let theme = THEME_SET
            .themes
            .get(mode.syntax_theme())
            .ok_or_else(|| return anyhow!("Theme {} does not exist", mode.syntax_theme()))?
            .clone();

        return Ok(Highlighter { mode, theme });
    }

    pub fn mode(&self) -> ThemeMode {
        return self.mode;
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<()> {
        if mode != self.mode {
            *self = Highlighter::new(mode)?;
        }

        return Ok(());
    }

    /// Highlights text line by line. Content is never altered, only styled;
    /// a line that fails to highlight is rendered plain.
    pub fn lines(&self, text: &str, language: Language) -> Vec<Line<'static>> {
        let mut highlight = HighlightLines::new(syntax_for(language), &self.theme);
        let plain = Style::default().fg(self.mode.foreground());

        return LinesWithEndings::from(text)
            .map(|line_nl| {
                let line = line_nl.trim_end_matches('\n').trim_end_matches('\r');

                // Highlighting multi-line constructs needs the trailing newline.
                let spans = match highlight.highlight_line(line_nl, &SYNTAX_SET) {
                    Ok(highlighted) => highlighted
                        .iter()
                        .map(|(style, part)| {
                            let part = part.trim_end_matches('\n').trim_end_matches('\r');
                            return Span::styled(
                                part.to_string(),
                                Style::default().fg(to_color(style.foreground)),
                            );
                        })
                        .filter(|span| return !span.content.is_empty())
                        .collect::<Vec<Span>>(),
                    Err(err) => {
                        tracing::warn!(err = ?err, "Failed to highlight line");
                        vec![Span::styled(line.to_string(), plain)]
                    }
                };

                return Line::from(spans);
            })
            .collect();
    }
}
