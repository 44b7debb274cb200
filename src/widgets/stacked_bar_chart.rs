use super::bar_chart::bar_x;
use super::scale;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Style};

/// Maximum number of stacked series per bar.
pub const STACK_DEPTH: usize = 8;

const SERIES_COLORS: [u8; STACK_DEPTH] = [1, 2, 3, 4, 5, 6, 7, 0];

/// Bars made of up to `STACK_DEPTH` stacked segments; `data[series][bar]`.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedBarChart {
    pub data: [Vec<i64>; STACK_DEPTH],
    pub labels: Vec<String>,
    pub title: String,
    pub border_style: Style,
    pub text_style: Style,
    pub num_style: Style,
    pub height: u16,
    pub gap: u16,
    pub bar_width: u16,
}

impl StackedBarChart {
    pub fn bar_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Sum of all positive segments of bar `i`.
    pub fn total(&self, i: usize) -> i64 {
        self.data
            .iter()
            .filter_map(|series| series.get(i))
            .filter(|v| **v > 0)
            .sum()
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.border(rect, self.border_style, Some(&self.title));
        let inner = rect.inner();
        if inner.h < 2 || inner.w == 0 || self.bar_width == 0 {
            return;
        }
        let room = inner.h - 1;
        let label_y = inner.bottom() - 1;
        let max = (0..self.bar_count())
            .map(|i| self.total(i))
            .max()
            .unwrap_or(0)
            .max(1);

        for i in 0..self.bar_count() {
            let Some(x) = bar_x(inner, i, self.bar_width, self.gap) else {
                break;
            };
            let mut acc = 0i64;
            let mut top = label_y;
            for (series, values) in self.data.iter().enumerate() {
                let value = values.get(i).copied().unwrap_or(0);
                if value <= 0 {
                    continue;
                }
                acc += value;
                // Segments are sized from the running total so rounding never drifts.
                let new_top = label_y - scale(acc, max, room);
                let h = top - new_top;
                top = new_top;
                if h == 0 {
                    continue;
                }
                let style = Style::default().bg(Color::Indexed(SERIES_COLORS[series]));
                painter.fill_rect(Rect::new(x, top, self.bar_width, h), style);
                let num = value.to_string();
                let cell = Rect::new(x, top + h - 1, self.bar_width, 1);
                let num_style = Style {
                    bg: style.bg,
                    ..self.num_style
                };
                painter.text(Pos::new(x, top + h - 1), num, num_style, cell);
            }

            if let Some(label) = self.labels.get(i) {
                let cell = Rect::new(x, label_y, self.bar_width, 1);
                painter.text(Pos::new(x, label_y), label.clone(), self.text_style, cell);
            }
        }
    }
}
