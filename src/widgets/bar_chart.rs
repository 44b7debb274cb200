use super::scale;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;

#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub data: Vec<i64>,
    pub labels: Vec<String>,
    pub title: String,
    pub border_style: Style,
    pub text_style: Style,
    pub num_style: Style,
    pub bar_style: Style,
    pub height: u16,
    pub gap: u16,
    pub bar_width: u16,
}

impl BarChart {
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.border(rect, self.border_style, Some(&self.title));
        let inner = rect.inner();
        // One row is reserved for the labels.
        if inner.h < 2 || inner.w == 0 || self.bar_width == 0 {
            return;
        }
        let room = inner.h - 1;
        let label_y = inner.bottom() - 1;
        let max = self.data.iter().copied().max().unwrap_or(0).max(1);
        let num_style = Style {
            bg: self.bar_style.bg,
            ..self.num_style
        };

        for (i, &value) in self.data.iter().enumerate() {
            let Some(x) = bar_x(inner, i, self.bar_width, self.gap) else {
                break;
            };
            let h = scale(value, max, room);
            if h > 0 {
                let bar = Rect::new(x, label_y - h, self.bar_width, h);
                painter.fill_rect(bar, self.bar_style);
            }

            let num = value.to_string();
            let num_x = x + self.bar_width.saturating_sub(num.len() as u16) / 2;
            let cell = Rect::new(x, label_y - 1, self.bar_width, 1);
            let style = if h > 0 { num_style } else { self.num_style };
            painter.text(Pos::new(num_x, label_y - 1), num, style, cell);

            if let Some(label) = self.labels.get(i) {
                let cell = Rect::new(x, label_y, self.bar_width, 1);
                painter.text(Pos::new(x, label_y), label.clone(), self.text_style, cell);
            }
        }
    }
}

/// Left edge of bar `i`, or `None` once the bar no longer fits.
pub(crate) fn bar_x(inner: Rect, i: usize, bar_width: u16, gap: u16) -> Option<u16> {
    let step = bar_width as usize + gap as usize;
    let x = inner.x as usize + i * step;
    if x + bar_width as usize > inner.right() as usize {
        return None;
    }
    Some(x as u16)
}
