use super::*;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Color;

#[test]
fn present_clips_to_the_screen() {
    let mut backend = TestBackend::new(6, 2);
    let mut p = Painter::new();
    p.fill_rect(Rect::new(4, 1, 10, 10), Style::default().bg(Color::Indexed(4)));
    backend.present(p.cmds()).unwrap();

    let bg = |x, y| backend.buffer().cell(x, y).unwrap().style.bg;
    assert_eq!(bg(5, 1), Some(Color::Indexed(4)));
    assert_eq!(bg(3, 1), None);
    assert_eq!(bg(4, 0), None);
}

#[test]
fn present_replaces_the_previous_frame() {
    let mut backend = TestBackend::new(4, 1);
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "abcd", Style::default(), Rect::new(0, 0, 4, 1));
    backend.present(p.cmds()).unwrap();
    assert_eq!(backend.buffer().line(0), "abcd");

    backend.present(&[]).unwrap();
    assert_eq!(backend.buffer().line(0), "    ");
}

#[test]
fn lines_concatenate_symbols() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 2));
    buf.put(1, 1, "x", Style::default());
    assert_eq!(buf.lines(), vec!["   ".to_string(), " x ".to_string()]);
}

#[test]
fn out_of_bounds_cells_are_none() {
    let buf = TestBuffer::new(Rect::new(2, 2, 2, 2));
    assert!(buf.cell(1, 2).is_none());
    assert!(buf.cell(4, 2).is_none());
    assert!(buf.cell(3, 3).is_some());
}

#[test]
fn resize_discards_contents() {
    let mut backend = TestBackend::new(2, 1);
    backend.present(&[]).unwrap();
    backend.resize(4, 3);
    assert_eq!(backend.area(), Rect::new(0, 0, 4, 3));
    assert_eq!(backend.buffer().line(2), "    ");
}
