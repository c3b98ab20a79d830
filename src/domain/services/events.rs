#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Maps a key press onto a console event. Anything unbound is text input.
pub fn map_input(input: Input) -> Event {
    match input {
        Input {
            key: Key::Enter,
            alt: true,
            ..
        } => return Event::KeyboardNewLine(),
        Input {
            key: Key::Enter, ..
        } => return Event::KeyboardEnter(),
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => return Event::KeyboardCTRLC(),
        Input {
            key: Key::Char('l'),
            ctrl: true,
            ..
        } => return Event::UIClear(),
        Input {
            key: Key::Char('y'),
            ctrl: true,
            ..
        } => return Event::UICopy(),
        Input {
            key: Key::Char('s'),
            ctrl: true,
            ..
        } => return Event::UIDownload(),
        Input {
            key: Key::Char('t'),
            ctrl: true,
            ..
        } => return Event::UIToggleTheme(),
        Input {
            key: Key::Char('p'),
            ctrl: true,
            ..
        } => return Event::UIHistoryPrev(),
        Input {
            key: Key::Char('n'),
            ctrl: true,
            ..
        } => return Event::UIHistoryNext(),
        Input {
            key: Key::Char('r'),
            ctrl: true,
            ..
        } => return Event::UIRegenerate(),
        Input { key: Key::F(2), .. } => return Event::UINextLanguage(),
        Input { key: Key::F(3), .. } => return Event::UINextModel(),
        Input { key: Key::F(4), .. } => return Event::UISpeak(),
        Input {
            key: Key::PageDown, ..
        } => return Event::UIScrollPageDown(),
        Input {
            key: Key::PageUp, ..
        } => return Event::UIScrollPageUp(),
        Input {
            key: Key::MouseScrollDown,
            ..
        } => return Event::UIScrollDown(),
        Input {
            key: Key::MouseScrollUp,
            ..
        } => return Event::UIScrollUp(),
        input => return Event::KeyboardCharInput(input),
    }
}

/// Terminals deliver pasted line breaks as CRLF or a lone CR.
pub fn normalize_paste(text: &str) -> String {
    return text.replace("\r\n", "\n").replace('\r', "\n");
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(normalize_paste(&text)));
            }
            CrosstermEvent::Resize(_, _) => {
                return Some(Event::UIResize());
            }
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp());
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown());
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                return Some(map_input(keyevent.into()));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => Some(event),
                    None => bail!("Background worker stopped unexpectedly"),
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::error!(err = ?err, "Failed to read terminal event");
                        None
                    }
                    None => None,
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
