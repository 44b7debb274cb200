use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Indexed(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }

    /// Foreground-only style decoded from a packed attribute.
    pub fn from_fg(attr: Attr) -> Self {
        Self {
            fg: attr.color(),
            bg: None,
            mods: attr.mods(),
        }
    }

    /// Background-only style decoded from a packed attribute; modifier bits are ignored.
    pub fn from_bg(attr: Attr) -> Self {
        Self {
            fg: None,
            bg: attr.color(),
            mods: Mod::NONE,
        }
    }
}

/// Packed termbox-style attribute: the low byte selects a color (0 is the terminal default,
/// `n` is palette index `n - 1`), the high bits carry text modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attr(pub u16);

impl Attr {
    pub const DEFAULT: Self = Self(0);
    pub const BLACK: Self = Self(1);
    pub const RED: Self = Self(2);
    pub const GREEN: Self = Self(3);
    pub const YELLOW: Self = Self(4);
    pub const BLUE: Self = Self(5);
    pub const MAGENTA: Self = Self(6);
    pub const CYAN: Self = Self(7);
    pub const WHITE: Self = Self(8);

    pub const BOLD: Self = Self(1 << 9);
    pub const UNDERLINE: Self = Self(1 << 10);
    pub const REVERSE: Self = Self(1 << 11);

    const COLOR_MASK: u16 = 0x01ff;

    pub fn color(self) -> Option<Color> {
        match self.0 & Self::COLOR_MASK {
            0 => None,
            n => Some(Color::Indexed(((n - 1) & 0xff) as u8)),
        }
    }

    pub fn mods(self) -> Mod {
        let mut out = Mod::NONE;
        if self.0 & Self::BOLD.0 != 0 {
            out |= Mod::BOLD;
        }
        if self.0 & Self::UNDERLINE.0 != 0 {
            out |= Mod::UNDERLINE;
        }
        if self.0 & Self::REVERSE.0 != 0 {
            out |= Mod::REVERSE;
        }
        out
    }
}

impl BitOr for Attr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
