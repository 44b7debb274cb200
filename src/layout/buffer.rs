use crate::widgets::Widget;

/// Widgets waiting to be captured by the next column.
#[derive(Debug, Default)]
pub struct WidgetBuffer {
    widgets: Vec<Widget>,
}

impl WidgetBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Hand out every pending widget in push order, leaving the buffer empty.
    pub fn drain_all(&mut self) -> Vec<Widget> {
        std::mem::take(&mut self.widgets)
    }

    pub fn clear(&mut self) {
        self.widgets.clear();
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/buffer.rs"]
mod tests;
