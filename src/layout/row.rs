use super::column::Column;
use crate::ui::core::geom::Rect;

/// Columns laid side by side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cols: Vec<Column>,
    rect: Rect,
}

impl Row {
    pub fn new(cols: Vec<Column>) -> Self {
        Self {
            cols,
            rect: Rect::default(),
        }
    }

    pub fn cols(&self) -> &[Column] {
        &self.cols
    }

    pub fn span(&self) -> u32 {
        self.cols
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.span()))
    }

    /// Height of the tallest column.
    pub fn height(&self) -> u16 {
        self.cols.iter().map(Column::height).max().unwrap_or(0)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Place the row at `(x, y)` across `width` cells and size every column.
    ///
    /// A column gets `size * width / 12` cells and starts after the previous column and its
    /// offset. When the row spans exactly 12 units, the last column absorbs the rounding loss
    /// so the row ends flush with the right edge.
    pub(crate) fn align(&mut self, x: u16, y: u16, width: u16) {
        let units = super::MAX_ROW_SIZE as u64;
        let to_cells = |n: u32| (n as u64 * width as u64 / units).min(u16::MAX as u64) as u16;
        let height = self.height();
        let full = self.span() == super::MAX_ROW_SIZE;
        let last = self.cols.len().saturating_sub(1);

        let mut col_x = x;
        for (i, col) in self.cols.iter_mut().enumerate() {
            col_x = col_x.saturating_add(to_cells(col.offset()));
            let mut w = to_cells(col.size());
            if i == last && full {
                w = x.saturating_add(width).saturating_sub(col_x);
            }
            col.set_rect(Rect::new(col_x, y, w, col.height()));
            col_x = col_x.saturating_add(w);
        }
        self.rect = Rect::new(x, y, width, height);
    }
}
