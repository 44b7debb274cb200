use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One drawing instruction. Widgets only ever produce these; backends rasterize them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect {
        rect: Rect,
        style: Style,
    },
    /// `len` copies of `ch` starting at `from`.
    Line {
        from: Pos,
        axis: Axis,
        len: u16,
        ch: char,
        style: Style,
    },
    /// Text starting at `pos`; nothing outside `clip` is touched.
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
    /// Box-drawing frame; `label` is written over the top edge, clipped to the frame.
    Border {
        rect: Rect,
        style: Style,
        label: Option<String>,
    },
}

impl PaintCmd {
    /// Cells this command may write to.
    pub fn bounds(&self) -> Rect {
        match self {
            PaintCmd::FillRect { rect, .. } | PaintCmd::Border { rect, .. } => *rect,
            PaintCmd::Line {
                from, axis, len, ..
            } => match axis {
                Axis::Horizontal => Rect::new(from.x, from.y, *len, 1),
                Axis::Vertical => Rect::new(from.x, from.y, 1, *len),
            },
            PaintCmd::Text { clip, .. } => *clip,
        }
    }
}

/// Records paint commands in order.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn hline(&mut self, from: Pos, len: u16, ch: char, style: Style) {
        self.line(from, Axis::Horizontal, len, ch, style);
    }

    pub fn vline(&mut self, from: Pos, len: u16, ch: char, style: Style) {
        self.line(from, Axis::Vertical, len, ch, style);
    }

    fn line(&mut self, from: Pos, axis: Axis, len: u16, ch: char, style: Style) {
        if len > 0 {
            self.cmds.push(PaintCmd::Line {
                from,
                axis,
                len,
                ch,
                style,
            });
        }
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        let text = text.into();
        if !text.is_empty() {
            self.cmds.push(PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            });
        }
    }

    pub fn border(&mut self, rect: Rect, style: Style, label: Option<&str>) {
        let label = label.filter(|l| !l.is_empty()).map(str::to_string);
        self.cmds.push(PaintCmd::Border { rect, style, label });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
