use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Anything the dashboard does not react to (mouse, focus, paste).
    Other,
}

impl InputEvent {
    pub fn key(code: KeyCode) -> Self {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(e) if e.kind != KeyEventKind::Release => InputEvent::Key(e),
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Parse a key name.
    ///
    /// Accepts single characters (`q`), termui-style names (`C-c`, `M-x`, `<escape>`,
    /// `<f1>`) and `+`-joined chords (`ctrl+shift+k`).
    pub fn parse(value: &str) -> Option<Key> {
        let v = value.trim();
        if v.is_empty() {
            return None;
        }
        if v == "+" || v == "-" {
            return Some(Key::simple(KeyCode::Char(v.chars().next()?)));
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut key_part = v;
        loop {
            if let Some(rest) = key_part.strip_prefix("C-") {
                modifiers |= KeyModifiers::CONTROL;
                key_part = rest;
            } else if let Some(rest) = key_part.strip_prefix("M-") {
                modifiers |= KeyModifiers::ALT;
                key_part = rest;
            } else {
                break;
            }
        }

        if key_part.contains('+') && key_part.len() > 1 {
            let mut last = None;
            for part in key_part.split('+').map(str::trim).filter(|p| !p.is_empty()) {
                match part.to_ascii_lowercase().as_str() {
                    "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                    "shift" => modifiers |= KeyModifiers::SHIFT,
                    "alt" | "option" => modifiers |= KeyModifiers::ALT,
                    _ => last = Some(part),
                }
            }
            key_part = last?;
        }

        let name = key_part
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(key_part);
        let mut code = parse_key_code(name)?;
        if let KeyCode::Char(ch) = code {
            if ch.is_ascii_uppercase() {
                code = KeyCode::Char(ch.to_ascii_lowercase());
                modifiers |= KeyModifiers::SHIFT;
            }
        }
        Some(Key::new(code, modifiers))
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let mut code = event.code;
        let mut modifiers = event.modifiers;

        if let KeyCode::Char(ch) = code {
            if ch.is_ascii_uppercase() {
                code = KeyCode::Char(ch.to_ascii_lowercase());
                modifiers |= KeyModifiers::SHIFT;
            }
        }

        Self::new(code, modifiers)
    }
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v_lc = value.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = value.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/event.rs"]
mod tests;
