use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::NoticeType;
use crate::domain::models::TextArea;
use crate::domain::models::ThemeMode;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Highlighter;

fn panel(title: &str, theme: ThemeMode) -> Block<'_> {
    return Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent()))
        .style(Style::default().fg(theme.foreground()).bg(theme.background()))
        .title(title)
        .padding(Padding::new(1, 1, 0, 0));
}

fn header_line(app_state: &AppState) -> Line<'static> {
    let theme = app_state.theme;
    let mut status = "".to_string();
    if app_state.pending {
        status = "  ⏳ Generating...".to_string();
    } else if app_state.listening {
        status = "  🎙 Listening...".to_string();
    }

    return Line::from(vec![
        Span::styled(
            "🤖 Codemind AI",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  Language: {} (F2)  Model: {} (F3)  Mode: {} (CTRL+T)",
            app_state.language.label(),
            app_state.model,
            theme
        )),
        Span::styled(status, Style::default().add_modifier(Modifier::BOLD)),
    ]);
}

fn history_lines(app_state: &AppState) -> Vec<Line<'static>> {
    if app_state.history.is_empty() {
        return vec![Line::from("No generations yet.")];
    }

    return app_state
        .history
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let mut marker = "  ";
            let mut style = Style::default();
            if app_state.history_cursor == Some(idx) {
                marker = "> ";
                style = style
                    .fg(app_state.theme.accent())
                    .add_modifier(Modifier::BOLD);
            }

            let first_line = entry.input.split('\n').next().unwrap_or_default();
            return Line::from(Span::styled(format!("{marker}{first_line}"), style));
        })
        .collect();
}

fn notice_line(app_state: &AppState) -> Line<'static> {
    if let Some(notice) = &app_state.notice {
        let mut style = Style::default().fg(app_state.theme.accent());
        if notice.notice_type() == NoticeType::Error {
            style = Style::default().fg(Color::Red);
        }

        return Line::from(Span::styled(notice.text.to_string(), style));
    }

    return Line::from(Span::styled(
        "Enter generate · CTRL+L clear · CTRL+Y copy · CTRL+S download · F4 speak · CTRL+P/N history · CTRL+R regenerate · CTRL+C quit",
        Style::default().add_modifier(Modifier::DIM),
    ));
}

fn render<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
    highlighter: &Highlighter,
) {
    let theme = app_state.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        frame.size(),
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(layout[2]);

    frame.render_widget(
        Paragraph::new(vec![header_line(app_state)])
            .style(Style::default().fg(theme.foreground()).bg(theme.background())),
        layout[0],
    );
    frame.render_widget(textarea.widget(), layout[1]);

    let output_lines = highlighter.lines(&app_state.output, app_state.language);
    // Borders take two rows.
    app_state.scroll.set_state(
        output_lines.len().try_into().unwrap_or(u16::MAX),
        body[0].height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(output_lines)
            .block(panel("Generated code", theme))
            .scroll((app_state.scroll.position, 0)),
        body[0],
    );

    frame.render_widget(
        Paragraph::new(history_lines(app_state)).block(panel("History", theme)),
        body[1],
    );

    frame.render_widget(
        Paragraph::new(vec![notice_line(app_state)])
            .style(Style::default().fg(theme.foreground()).bg(theme.background())),
        layout[3],
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    let mut highlighter = Highlighter::new(app_state.theme)?;
    let mut textarea = TextArea::new("", app_state.theme);

    #[cfg(feature = "dev")]
    {
        app_state.set_prompt("Write a function that checks whether a string is a palindrome");
    }

    loop {
        if let Some(prompt) = app_state.take_prompt_change() {
            textarea = TextArea::new(&prompt, app_state.theme);
        }

        terminal.draw(|frame| {
            render(frame, app_state, &textarea, &highlighter);
        })?;

        match events.next().await? {
            Event::GenerationResponse(res) => {
                app_state.handle_generation_response(res);
            }
            Event::Notice(notice) => {
                app_state.set_notice(notice);
            }
            Event::SpeechTranscript(transcript) => {
                app_state.handle_speech_transcript(&transcript);
            }
            Event::SpeechError(err) => {
                app_state.handle_speech_error(&err);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if let Some(prompt) = app_state.generate() {
                    tx.send(Action::Generate(prompt))?;
                }
            }
            Event::KeyboardNewLine() => {
                textarea.insert_newline();
                app_state.set_prompt_from_input(&textarea.lines().join("\n"));
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
                app_state.set_prompt_from_input(&textarea.lines().join("\n"));
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text);
                app_state.set_prompt_from_input(&textarea.lines().join("\n"));
            }
            Event::UIClear() => {
                app_state.clear();
            }
            Event::UICopy() => {
                if let Some(text) = app_state.copy_request() {
                    tx.send(Action::CopyOutput(text))?;
                }
            }
            Event::UIDownload() => {
                if let Some((language, text)) = app_state.download_request() {
                    tx.send(Action::DownloadOutput(language, text))?;
                }
            }
            Event::UIToggleTheme() => {
                let theme = app_state.toggle_theme();
                highlighter.set_mode(theme)?;
                TextArea::style(&mut textarea, highlighter.mode());
                tx.send(Action::PersistTheme(theme))?;
            }
            Event::UINextLanguage() => {
                app_state.next_language();
            }
            Event::UINextModel() => {
                app_state.next_model();
            }
            Event::UISpeak() => {
                if app_state.begin_speech() {
                    tx.send(Action::CaptureSpeech())?;
                }
            }
            Event::UIHistoryPrev() => {
                app_state.select_history_prev();
            }
            Event::UIHistoryNext() => {
                app_state.select_history_next();
            }
            Event::UIRegenerate() => {
                if let Some(prompt) = app_state.regenerate_selected() {
                    tx.send(Action::Generate(prompt))?;
                }
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIResize() => {}
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, app_state, tx, &mut events).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
