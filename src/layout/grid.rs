use super::row::Row;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;

/// Root container: sealed rows stacked top to bottom from the grid origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    x: u16,
    y: u16,
    width: u16,
    bg: Style,
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(x: u16, y: u16, width: u16, bg: Style) -> Self {
        Self {
            x,
            y,
            width,
            bg,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn background(&self) -> Style {
        self.bg
    }

    /// Total height of all rows.
    pub fn height(&self) -> u16 {
        self.rows
            .iter()
            .fold(0u16, |acc, r| acc.saturating_add(r.height()))
    }

    pub fn area(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height())
    }

    /// Append a sealed row and reflow the whole grid.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
        self.align();
    }

    /// Track a new terminal width.
    pub fn set_width(&mut self, width: u16) {
        if self.width != width {
            self.width = width;
            self.align();
        }
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Recompute the position and size of every row, column and widget.
    pub fn align(&mut self) {
        let mut y = self.y;
        for row in &mut self.rows {
            row.align(self.x, y, self.width);
            y = y.saturating_add(row.height());
        }
    }

    pub fn paint(&self, painter: &mut Painter) {
        let area = self.area();
        if area.is_empty() {
            return;
        }
        painter.fill_rect(area, self.bg);
        for row in &self.rows {
            for col in row.cols() {
                for (widget, rect) in col.widget_rects() {
                    widget.paint(painter, rect);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
