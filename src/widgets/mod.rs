//! Drawable dashboard content.
//!
//! The grid never looks inside a widget: it only asks for its height and hands it a rectangle
//! to paint into.

mod bar_chart;
mod paragraph;
mod stacked_bar_chart;
mod table;

pub use bar_chart::BarChart;
pub use paragraph::Paragraph;
pub use stacked_bar_chart::{StackedBarChart, STACK_DEPTH};
pub use table::Table;

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;

#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    TextBox(Paragraph),
    Title(Paragraph),
    BarChart(BarChart),
    StackedBarChart(StackedBarChart),
    Table(Table),
}

impl Widget {
    /// Rows the widget asks for, borders included.
    pub fn height(&self) -> u16 {
        match self {
            Widget::TextBox(p) | Widget::Title(p) => p.height,
            Widget::BarChart(c) => c.height,
            Widget::StackedBarChart(c) => c.height,
            Widget::Table(t) => t.height(),
        }
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        match self {
            Widget::TextBox(p) | Widget::Title(p) => p.paint(painter, rect),
            Widget::BarChart(c) => c.paint(painter, rect),
            Widget::StackedBarChart(c) => c.paint(painter, rect),
            Widget::Table(t) => t.paint(painter, rect),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Widget::TextBox(_) => "text_box",
            Widget::Title(_) => "title",
            Widget::BarChart(_) => "bar_chart",
            Widget::StackedBarChart(_) => "stacked_bar_chart",
            Widget::Table(_) => "table",
        }
    }
}

/// Scale `value` against `max` onto `room` rows, never exceeding `room`.
pub(crate) fn scale(value: i64, max: i64, room: u16) -> u16 {
    if value <= 0 || max <= 0 || room == 0 {
        return 0;
    }
    let scaled = (value as i128 * room as i128) / max as i128;
    scaled.clamp(0, room as i128) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/mod.rs"]
mod tests;
