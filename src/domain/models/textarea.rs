use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::ThemeMode;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn new(text: &str, theme: ThemeMode) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        textarea.move_cursor(tui_textarea::CursorMove::End);
        TextArea::style(&mut textarea, theme);

        return textarea;
    }

    pub fn style(textarea: &mut tui_textarea::TextArea<'a>, theme: ThemeMode) {
        textarea.set_style(Style::default().fg(theme.foreground()).bg(theme.background()));
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme.accent()))
                .title("Describe the code you want")
                .padding(Padding::new(1, 1, 0, 0)),
        );
    }
}
