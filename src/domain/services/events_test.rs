use tui_textarea::Input;
use tui_textarea::Key;

use super::map_input;
use super::normalize_paste;
use crate::domain::models::Event;

fn ctrl(c: char) -> Input {
    return Input {
        key: Key::Char(c),
        ctrl: true,
        alt: false,
    };
}

#[test]
fn it_generates_on_enter() {
    let input = Input {
        key: Key::Enter,
        ctrl: false,
        alt: false,
    };

    assert!(matches!(map_input(input), Event::KeyboardEnter()));
}

#[test]
fn it_inserts_newlines_on_alt_enter() {
    let input = Input {
        key: Key::Enter,
        ctrl: false,
        alt: true,
    };

    assert!(matches!(map_input(input), Event::KeyboardNewLine()));
}

#[test]
fn it_maps_output_actions() {
    assert!(matches!(map_input(ctrl('l')), Event::UIClear()));
    assert!(matches!(map_input(ctrl('y')), Event::UICopy()));
    assert!(matches!(map_input(ctrl('s')), Event::UIDownload()));
    assert!(matches!(map_input(ctrl('t')), Event::UIToggleTheme()));
    assert!(matches!(map_input(ctrl('r')), Event::UIRegenerate()));
    assert!(matches!(map_input(ctrl('c')), Event::KeyboardCTRLC()));
}

#[test]
fn it_maps_selectors() {
    let key = |key: Key| {
        return Input {
            key,
            ctrl: false,
            alt: false,
        };
    };

    assert!(matches!(map_input(key(Key::F(2))), Event::UINextLanguage()));
    assert!(matches!(map_input(key(Key::F(3))), Event::UINextModel()));
    assert!(matches!(map_input(key(Key::F(4))), Event::UISpeak()));
}

#[test]
fn it_passes_text_through() {
    let input = Input {
        key: Key::Char('a'),
        ctrl: false,
        alt: false,
    };

    assert!(matches!(
        map_input(input),
        Event::KeyboardCharInput(Input {
            key: Key::Char('a'),
            ..
        })
    ));
}

#[test]
fn it_normalizes_pasted_line_breaks() {
    assert_eq!(normalize_paste("a\r\nb\r\nc"), "a\nb\nc");
    assert_eq!(normalize_paste("a\rb"), "a\nb");
    assert_eq!(normalize_paste("a\n\nb"), "a\n\nb");
}
