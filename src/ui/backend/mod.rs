//! Rendering backends.
//!
//! Both backends share one rasterizer over the `Surface` trait, so the paint semantics are
//! identical in the terminal and in tests.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A screen that shows one complete frame of paint commands at a time.
pub trait Backend {
    fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()>;
}

/// A grid of cells the rasterizer can write into.
pub trait Surface {
    fn area(&self) -> Rect;

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[path = "ratatui.rs"]
pub mod terminal;

pub fn rasterize<S: Surface + ?Sized>(surface: &mut S, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill_with(surface, *rect, ' ', *style),
            PaintCmd::Line { ch, style, .. } => fill_with(surface, cmd.bounds(), *ch, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(surface, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, label } => {
                draw_border(surface, *rect, *style, label.as_deref())
            }
        }
    }
}

fn fill_with<S: Surface + ?Sized>(surface: &mut S, rect: Rect, ch: char, style: Style) {
    let clip = rect.intersect(surface.area());
    if clip.is_empty() {
        return;
    }
    let mut tmp = [0u8; 4];
    let symbol: &str = ch.encode_utf8(&mut tmp);
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            surface.put(x, y, symbol, style);
        }
    }
}

fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Rect,
) {
    let clip = clip.intersect(surface.area());
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let y = pos.y;
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if clip.contains(Pos::new(x, y)) {
            surface.put(x, y, g, style);
            for dx in 1..w {
                surface.put(x.saturating_add(dx), y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    style: Style,
    label: Option<&str>,
) {
    let rect = rect.intersect(surface.area());
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let inner_w = rect.w - 2;
    let inner_h = rect.h - 2;

    fill_with(surface, Rect::new(rect.x + 1, rect.y, inner_w, 1), '─', style);
    fill_with(surface, Rect::new(rect.x + 1, bottom, inner_w, 1), '─', style);
    fill_with(surface, Rect::new(rect.x, rect.y + 1, 1, inner_h), '│', style);
    fill_with(surface, Rect::new(right, rect.y + 1, 1, inner_h), '│', style);

    surface.put(rect.x, rect.y, "┌", style);
    surface.put(right, rect.y, "┐", style);
    surface.put(rect.x, bottom, "└", style);
    surface.put(right, bottom, "┘", style);

    if let Some(label) = label {
        let clip = Rect::new(rect.x + 1, rect.y, inner_w, 1);
        draw_text(surface, Pos::new(rect.x + 1, rect.y), label, style, clip);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/raster.rs"]
mod tests;
