use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Bordered block of text, used for both text boxes and titles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub text_style: Style,
    pub border_style: Style,
    pub label: Option<String>,
    pub height: u16,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_style: Style::default(),
            border_style: Style::default(),
            label: None,
            height: 3,
        }
    }

    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.border(rect, self.border_style, self.label.as_deref());
        let inner = rect.inner();
        if inner.is_empty() {
            return;
        }
        for (i, line) in wrap(&self.text, inner.w)
            .into_iter()
            .take(inner.h as usize)
            .enumerate()
        {
            let pos = Pos::new(inner.x, inner.y + i as u16);
            painter.text(pos, line, self.text_style, inner);
        }
    }
}

/// Break `text` into lines no wider than `width` cells, honoring explicit newlines.
pub(crate) fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    let mut out = Vec::new();
    if width == 0 {
        return out;
    }
    for raw in text.lines() {
        let mut line = String::new();
        let mut line_w = 0usize;
        for g in raw.graphemes(true) {
            let w = g.width();
            if line_w + w > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_w = 0;
            }
            line.push_str(g);
            line_w += w;
        }
        out.push(line);
    }
    out
}
