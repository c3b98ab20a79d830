use super::Scroll;

#[test]
fn it_does_not_scroll_short_content() {
    let mut scroll = Scroll::default();
    scroll.set_state(5, 10);
    scroll.down();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_to_the_last_page() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    scroll.down_page();
    scroll.down_page();
    scroll.down_page();

    assert_eq!(scroll.position, 20);

    scroll.up();
    assert_eq!(scroll.position, 19);
}

#[test]
fn it_stays_above_zero() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    scroll.up_page();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_when_content_shrinks() {
    let mut scroll = Scroll::default();
    scroll.set_state(30, 10);
    scroll.down_page();
    scroll.down_page();
    scroll.set_state(12, 10);

    assert_eq!(scroll.position, 2);
}
