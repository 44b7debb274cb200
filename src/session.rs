//! A dashboard session: staging state, the committed grid, and the render cycle.
//!
//! Widgets are pushed into a buffer, `add_col` turns the buffer into a staged column,
//! `add_row` validates the staged columns and commits them to the grid. Committed rows
//! survive `render`; only the staging state is cleaned after each frame.

use crate::config::DashboardConfig;
use crate::error::{DashError, Result};
use crate::layout::{validate_row_size, Column, Grid, Row, WidgetBuffer};
use crate::renderer::{Renderer, TerminalRenderer};
use crate::tui::event::{InputEvent, Key};
use crate::tui::event_loop::{EventLoop, LoopEvent, LoopHandle};
use crate::ui::core::style::{Attr, Style};
use crate::widgets::{BarChart, Paragraph, StackedBarChart, Table, Widget, STACK_DEPTH};

pub struct TermUi<R: Renderer = TerminalRenderer> {
    config: DashboardConfig,
    renderer: R,
    grid: Grid,
    widgets: WidgetBuffer,
    cols: Vec<Column>,
    events: EventLoop,
    input_started: bool,
    closed: bool,
}

impl TermUi<TerminalRenderer> {
    /// Take over the terminal and size the grid to it.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let renderer = TerminalRenderer::init().map_err(DashError::Init)?;
        Ok(Self::with_renderer(config, renderer))
    }
}

impl<R: Renderer> TermUi<R> {
    pub fn with_renderer(config: DashboardConfig, renderer: R) -> Self {
        let bg = Style::from_bg(Attr(config.background));
        let grid = Grid::new(0, 0, renderer.width(), bg);
        let events = EventLoop::new(config.tick());
        let ui = Self {
            config,
            renderer,
            grid,
            widgets: WidgetBuffer::new(),
            cols: Vec::new(),
            events,
            input_started: false,
            closed: false,
        };
        ui.debug_layout("grid created");
        ui
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Widgets pushed since the last `add_col`.
    pub fn pending_widgets(&self) -> usize {
        self.widgets.len()
    }

    /// Columns staged for the next `add_row`.
    pub fn staged_cols(&self) -> &[Column] {
        &self.cols
    }

    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    /// Capture every pending widget into a column `size` units wide.
    pub fn add_col(&mut self, size: u32) {
        let widgets = self.widgets.drain_all();
        tracing::trace!(size, widgets = widgets.len(), "column staged");
        self.cols.push(Column::new(size, 0, widgets));
    }

    /// Seal the staged columns into a row and append it to the grid.
    ///
    /// An oversized row is rejected as a whole: the grid is untouched and the staged columns
    /// are kept so the caller can inspect or `clean` them.
    pub fn add_row(&mut self) -> Result<()> {
        if let Err(err) = validate_row_size(&self.cols) {
            tracing::warn!(error = %err, "row rejected");
            return Err(err);
        }
        let cols = std::mem::take(&mut self.cols);
        self.grid.add_row(Row::new(cols));
        self.debug_layout("row added");
        Ok(())
    }

    /// Full-width framing text, committed directly as a one-column row.
    pub fn title(
        &mut self,
        title: &str,
        text_color: u16,
        border_color: u16,
        bold: bool,
        height: u16,
        size: u32,
    ) {
        let mut fg = Attr(text_color);
        if bold {
            fg = fg | Attr::BOLD;
        }
        let mut p = Paragraph::new(title);
        p.text_style = Style::from_fg(fg);
        p.border_style = Style::from_fg(Attr(border_color));
        p.height = height;

        let col = Column::new(size, 0, vec![Widget::Title(p)]);
        self.grid.add_row(Row::new(vec![col]));
        self.debug_layout("title added");
    }

    pub fn text_box(&mut self, data: &str, fg: u16, border: u16, border_label: &str, height: u16) {
        let mut p = Paragraph::new(data);
        p.text_style = Style::from_fg(Attr(fg));
        p.border_style = Style::from_fg(Attr(border));
        p.label = Some(border_label.to_string());
        p.height = height;
        self.push(Widget::TextBox(p));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn bar_chart(
        &mut self,
        data: &[i64],
        labels: &[String],
        title: &str,
        border: u16,
        fg: u16,
        num_color: u16,
        height: u16,
        gap: u16,
        bar_width: u16,
        bar_color: u16,
    ) {
        self.push(Widget::BarChart(BarChart {
            data: data.to_vec(),
            labels: labels.to_vec(),
            title: title.to_string(),
            border_style: Style::from_fg(Attr(border)),
            text_style: Style::from_fg(Attr(fg)),
            num_style: Style::from_fg(Attr(num_color)),
            bar_style: Style::from_bg(Attr(bar_color)),
            height,
            gap,
            bar_width,
        }));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn stacked_bar_chart(
        &mut self,
        data: [Vec<i64>; STACK_DEPTH],
        labels: &[String],
        title: &str,
        border: u16,
        fg: u16,
        num_color: u16,
        height: u16,
        gap: u16,
        bar_width: u16,
    ) {
        self.push(Widget::StackedBarChart(StackedBarChart {
            data,
            labels: labels.to_vec(),
            title: title.to_string(),
            border_style: Style::from_fg(Attr(border)),
            text_style: Style::from_fg(Attr(fg)),
            num_style: Style::from_fg(Attr(num_color)),
            height,
            gap,
            bar_width,
        }));
    }

    pub fn table(&mut self, rows: Vec<Vec<String>>, title: &str, border: u16, fg: u16) {
        self.push(Widget::Table(Table {
            rows,
            title: title.to_string(),
            border_style: Style::from_fg(Attr(border)),
            text_style: Style::from_fg(Attr(fg)),
        }));
    }

    /// Draw the grid, then drop this frame's staging state.
    pub fn render(&mut self) -> Result<()> {
        self.renderer.draw(&self.grid).map_err(DashError::Render)?;
        self.clean();
        Ok(())
    }

    /// Empty the widget buffer and staged columns. Committed rows are kept.
    pub fn clean(&mut self) {
        self.widgets.clear();
        self.cols.clear();
    }

    /// Drop every committed row so the dashboard can be rebuilt from scratch.
    pub fn reset(&mut self) {
        self.clean();
        self.grid.clear_rows();
    }

    /// Make `key` end the event loop.
    pub fn key_quit(&mut self, key: &str) -> Result<()> {
        let parsed = Key::parse(key).ok_or_else(|| DashError::InvalidKey(key.to_string()))?;
        self.events.bind_quit(parsed);
        Ok(())
    }

    /// Handle for stopping the loop or injecting input from elsewhere.
    pub fn loop_handle(&self) -> LoopHandle {
        self.events.handle()
    }

    /// Process input until a quit key or a stop request arrives.
    pub fn run_loop(&mut self) -> Result<()> {
        self.run_loop_with(|_| Ok(()))
    }

    /// Like `run_loop`, calling `on_tick` at every configured tick.
    pub fn run_loop_with<F>(&mut self, mut on_tick: F) -> Result<()>
    where
        F: FnMut(&mut Self) -> Result<()>,
    {
        if !self.input_started {
            self.renderer.start_input(self.events.handle())?;
            self.input_started = true;
        }
        tracing::debug!("event loop started");
        while let Some(event) = self.events.next_event() {
            match event {
                LoopEvent::Tick => on_tick(self)?,
                LoopEvent::Input(InputEvent::Resize(width, height)) => {
                    self.renderer.resize(width, height)?;
                    self.grid.set_width(self.renderer.width());
                    self.debug_layout("terminal resized");
                    self.renderer.draw(&self.grid).map_err(DashError::Render)?;
                }
                LoopEvent::Input(_) | LoopEvent::Stop => {}
            }
        }
        tracing::debug!("event loop finished");
        Ok(())
    }

    /// Release the terminal. Later calls are no-ops.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.renderer.close()?;
        Ok(())
    }

    fn debug_layout(&self, what: &str) {
        if self.config.debug {
            tracing::info!(grid = ?self.grid, "{what}");
        }
    }
}

impl<R: Renderer> Drop for TermUi<R> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(error = %err, "closing dashboard failed");
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
