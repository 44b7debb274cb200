use crate::ui::backend::{rasterize, Backend, Surface};
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;

/// The real screen. Ratatui keeps the previous frame and only flushes changed cells.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn stdout() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    /// Forget the previous frame so the next present repaints every cell.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }
}

impl Backend for RatatuiTerminal {
    fn present(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(DashFrame { cmds }, frame.area()))?;
        Ok(())
    }
}

/// One dashboard frame as a ratatui widget.
struct DashFrame<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for DashFrame<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        rasterize(&mut Cells(buf), self.cmds);
    }
}

struct Cells<'b>(&'b mut Buffer);

impl Surface for Cells<'_> {
    fn area(&self) -> Rect {
        let a = self.0.area;
        Rect::new(a.x, a.y, a.width, a.height)
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.0.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(RStyle::from(style));
        }
    }
}

impl From<Style> for RStyle {
    fn from(s: Style) -> Self {
        let base = RStyle::default().add_modifier(s.mods.into());
        let base = match s.fg {
            Some(fg) => base.fg(fg.into()),
            None => base,
        };
        match s.bg {
            Some(bg) => base.bg(bg.into()),
            None => base,
        }
    }
}

impl From<Color> for RColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Reset => RColor::Reset,
            Color::Indexed(i) => RColor::Indexed(i),
        }
    }
}

impl From<Mod> for RModifier {
    fn from(m: Mod) -> Self {
        [
            (Mod::BOLD, RModifier::BOLD),
            (Mod::UNDERLINE, RModifier::UNDERLINED),
            (Mod::REVERSE, RModifier::REVERSED),
        ]
        .into_iter()
        .filter(|(ours, _)| m.contains(*ours))
        .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
