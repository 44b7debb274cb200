use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use unicode_width::UnicodeWidthStr;

/// Grid of text cells with a separator line between rows. Its size follows its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub title: String,
    pub border_style: Style,
    pub text_style: Style,
}

impl Table {
    /// Border plus one line per row and one separator between consecutive rows.
    pub fn height(&self) -> u16 {
        let n = self.rows.len().min(u16::MAX as usize / 2) as u16;
        n * 2 + 1
    }

    /// Width of each column: its widest cell.
    pub fn column_widths(&self) -> Vec<u16> {
        let cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..cols)
            .map(|c| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.width().min(u16::MAX as usize) as u16)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.border(rect, self.border_style, Some(&self.title));
        let inner = rect.inner();
        if inner.is_empty() {
            return;
        }
        let widths = self.column_widths();
        for (r, row) in self.rows.iter().enumerate() {
            let y = inner.y as usize + r * 2;
            if y >= inner.bottom() as usize {
                break;
            }
            let y = y as u16;
            let mut x = inner.x.saturating_add(1);
            for (c, cell) in row.iter().enumerate() {
                if x >= inner.right() {
                    break;
                }
                painter.text(Pos::new(x, y), cell.clone(), self.text_style, inner);
                x = x.saturating_add(widths[c]).saturating_add(1);
                if c + 1 < widths.len() && x < inner.right() {
                    painter.vline(Pos::new(x, y), 1, '│', self.border_style);
                }
                x = x.saturating_add(2);
            }
            if r + 1 < self.rows.len() && y + 1 < inner.bottom() {
                painter.hline(Pos::new(inner.x, y + 1), inner.w, '─', self.border_style);
            }
        }
    }
}
