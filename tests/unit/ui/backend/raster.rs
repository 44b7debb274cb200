use super::*;
use crate::ui::backend::test::TestBuffer;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

#[test]
fn draw_text_clips_wide_glyphs_that_do_not_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    let area = buf.area();
    draw_text(&mut buf, Pos::new(0, 0), "👍", Style::default(), area);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn draw_text_renders_wide_glyphs_when_they_fit() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 1));
    let area = buf.area();
    draw_text(&mut buf, Pos::new(0, 0), "👍", Style::default(), area);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "👍");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn text_respects_explicit_clip() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 6, 1));
    draw_text(
        &mut buf,
        Pos::new(0, 0),
        "abcdef",
        Style::default(),
        Rect::new(0, 0, 3, 1),
    );
    assert_eq!(buf.line(0), "abc   ");
}

#[test]
fn border_draws_corners_and_label() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 8, 3));
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 8, 3), Style::default(), Some("cpu"));
    rasterize(&mut buf, p.cmds());

    assert_eq!(buf.line(0), "┌cpu───┐");
    assert_eq!(buf.line(1), "│      │");
    assert_eq!(buf.line(2), "└──────┘");
}

#[test]
fn border_label_never_overwrites_right_corner() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 5, 2));
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 5, 2), Style::default(), Some("memory"));
    rasterize(&mut buf, p.cmds());
    assert_eq!(buf.line(0), "┌mem┐");
}

#[test]
fn lines_fill_with_their_char() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 3));
    let style = Style::default().fg(Color::Indexed(1));
    let mut p = Painter::new();
    p.hline(Pos::new(0, 0), 3, '=', style);
    p.vline(Pos::new(1, 0), 3, '|', style);
    rasterize(&mut buf, p.cmds());
    assert_eq!(buf.lines(), vec!["=|=", " | ", " | "]);
    assert_eq!(buf.cell(1, 2).unwrap().style, style);
}
