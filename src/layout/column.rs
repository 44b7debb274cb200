use crate::ui::core::geom::Rect;
use crate::widgets::Widget;

/// A vertical stack of widgets occupying `size` layout units, shifted right by `offset` units.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    size: u32,
    offset: u32,
    widgets: Vec<Widget>,
    rect: Rect,
}

impl Column {
    pub fn new(size: u32, offset: u32, widgets: Vec<Widget>) -> Self {
        Self {
            size,
            offset,
            widgets,
            rect: Rect::default(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Units this column takes out of its row. Saturates instead of wrapping.
    pub fn span(&self) -> u32 {
        self.size.saturating_add(self.offset)
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Stacked height of every widget.
    pub fn height(&self) -> u16 {
        self.widgets
            .iter()
            .fold(0u16, |acc, w| acc.saturating_add(w.height()))
    }

    /// Screen area assigned by the last alignment pass.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Area of each widget, stacked top to bottom inside the column.
    pub fn widget_rects(&self) -> impl Iterator<Item = (&Widget, Rect)> + '_ {
        let mut y = self.rect.y;
        self.widgets.iter().map(move |w| {
            let rect = Rect::new(self.rect.x, y, self.rect.w, w.height());
            y = y.saturating_add(w.height());
            (w, rect)
        })
    }
}
