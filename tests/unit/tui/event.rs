use super::*;

#[test]
fn single_characters_parse_as_plain_keys() {
    assert_eq!(Key::parse("q"), Some(Key::simple(KeyCode::Char('q'))));
    assert_eq!(Key::parse(" x "), Some(Key::simple(KeyCode::Char('x'))));
}

#[test]
fn termui_style_names_parse() {
    assert_eq!(Key::parse("C-c"), Some(Key::ctrl(KeyCode::Char('c'))));
    assert_eq!(
        Key::parse("M-x"),
        Some(Key::new(KeyCode::Char('x'), KeyModifiers::ALT))
    );
    assert_eq!(Key::parse("<escape>"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(Key::parse("<f5>"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(Key::parse("<space>"), Some(Key::simple(KeyCode::Char(' '))));
}

#[test]
fn chords_parse() {
    assert_eq!(Key::parse("ctrl+c"), Some(Key::ctrl(KeyCode::Char('c'))));
    assert_eq!(
        Key::parse("ctrl+shift+k"),
        Some(Key::new(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ))
    );
    assert_eq!(Key::parse("+"), Some(Key::simple(KeyCode::Char('+'))));
}

#[test]
fn uppercase_normalizes_to_shift() {
    let parsed = Key::parse("Q").unwrap();
    let pressed = Key::from(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT));
    assert_eq!(parsed, pressed);
}

#[test]
fn garbage_is_rejected() {
    assert_eq!(Key::parse(""), None);
    assert_eq!(Key::parse("quit"), None);
    assert_eq!(Key::parse("<fx>"), None);
}

#[test]
fn release_events_are_ignored() {
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(
        InputEvent::from(crossterm::event::Event::Key(key)),
        InputEvent::Other
    );
    assert_eq!(
        InputEvent::from(crossterm::event::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );
}
