use super::*;
use crate::ui::backend::rasterize;
use crate::ui::backend::test::TestBuffer;
use crate::ui::core::style::{Color, Style};

fn render(widget: &Widget, w: u16, h: u16) -> TestBuffer {
    let area = Rect::new(0, 0, w, h);
    let mut painter = Painter::new();
    widget.paint(&mut painter, area);
    let mut buf = TestBuffer::new(area);
    rasterize(&mut buf, painter.cmds());
    buf
}

fn bar_chart(data: Vec<i64>) -> BarChart {
    BarChart {
        data,
        labels: vec!["a".into(), "b".into()],
        title: "bars".into(),
        border_style: Style::default(),
        text_style: Style::default(),
        num_style: Style::default(),
        bar_style: Style::default().bg(Color::Indexed(4)),
        height: 6,
        gap: 1,
        bar_width: 2,
    }
}

#[test]
fn scale_is_proportional_and_bounded() {
    assert_eq!(scale(5, 10, 4), 2);
    assert_eq!(scale(10, 10, 4), 4);
    assert_eq!(scale(20, 10, 4), 4);
    assert_eq!(scale(-1, 10, 4), 0);
    assert_eq!(scale(3, 0, 4), 0);
}

#[test]
fn text_box_draws_label_and_wrapped_text() {
    let mut p = Paragraph::new("hello world");
    p.label = Some("msg".into());
    p.height = 4;
    let buf = render(&Widget::TextBox(p), 9, 4);

    assert_eq!(buf.line(0), "┌msg────┐");
    assert_eq!(buf.line(1), "│hello w│");
    assert_eq!(buf.line(2), "│orld   │");
    assert_eq!(buf.line(3), "└───────┘");
}

#[test]
fn wrap_keeps_explicit_newlines() {
    assert_eq!(
        paragraph::wrap("ab\ncdef", 3),
        vec!["ab".to_string(), "cde".to_string(), "f".to_string()]
    );
    assert!(paragraph::wrap("abc", 0).is_empty());
}

#[test]
fn bar_heights_scale_to_the_tallest_bar() {
    let chart = Widget::BarChart(bar_chart(vec![2, 4]));
    // Inner area is 5 rows: 4 for bars, 1 for labels.
    let buf = render(&chart, 8, 7);
    let bar_bg = Some(Color::Indexed(4));
    let filled = |x: u16| (1..5).filter(|&y| buf.cell(x, y).unwrap().style.bg == bar_bg).count();

    assert_eq!(filled(1), 2);
    assert_eq!(filled(4), 4);
    assert_eq!(buf.line(5), "│a  b  │");
}

#[test]
fn bar_values_are_printed_in_the_lowest_bar_row() {
    let buf = render(&Widget::BarChart(bar_chart(vec![7, 3])), 8, 7);
    assert_eq!(buf.cell(1, 4).unwrap().symbol, "7");
    assert_eq!(buf.cell(4, 4).unwrap().symbol, "3");
}

#[test]
fn bars_that_do_not_fit_are_skipped() {
    let chart = bar_chart(vec![1, 1, 1, 1]);
    let buf = render(&Widget::BarChart(chart), 7, 6);
    // Inner width 5 fits two bars of width 2 with a gap of 1.
    assert_eq!(buf.line(4), "│a  b │");
}

#[test]
fn stacked_bars_sum_series() {
    let mut data: [Vec<i64>; STACK_DEPTH] = Default::default();
    data[0] = vec![1, 2];
    data[1] = vec![1, 2];
    let chart = StackedBarChart {
        data,
        labels: vec!["x".into(), "y".into()],
        title: "stack".into(),
        border_style: Style::default(),
        text_style: Style::default(),
        num_style: Style::default(),
        height: 6,
        gap: 1,
        bar_width: 1,
    };
    assert_eq!(chart.bar_count(), 2);
    assert_eq!(chart.total(1), 4);

    let buf = render(&Widget::StackedBarChart(chart), 6, 6);
    // Inner rows 1..=3 hold bars, row 4 holds labels; bar "y" fills all 3 rows.
    let bg = |x, y| buf.cell(x, y).unwrap().style.bg;
    assert!(bg(3, 1).is_some());
    assert!(bg(3, 3).is_some());
    assert_ne!(bg(3, 1), bg(3, 3));
    assert_eq!(bg(1, 1), None);
    assert_eq!(buf.line(4), "│x y │");
}

#[test]
fn table_is_sized_by_content() {
    let table = Table {
        rows: vec![
            vec!["name".into(), "n".into()],
            vec!["a".into(), "1234".into()],
        ],
        title: String::new(),
        border_style: Style::default(),
        text_style: Style::default(),
    };
    assert_eq!(table.height(), 5);
    assert_eq!(table.column_widths(), vec![4, 4]);

    let widget = Widget::Table(table);
    assert_eq!(widget.height(), 5);
    let buf = render(&widget, 14, 5);
    assert_eq!(buf.line(1), "│ name │ n   │");
    assert_eq!(buf.line(2), "│────────────│");
    assert_eq!(buf.line(3), "│ a    │ 1234│");
}

#[test]
fn painting_into_empty_rect_emits_nothing() {
    let mut painter = Painter::new();
    Widget::TextBox(Paragraph::new("x")).paint(&mut painter, Rect::new(0, 0, 0, 3));
    assert!(painter.cmds().is_empty());
}

#[test]
fn kinds_name_every_variant() {
    let p = Paragraph::new("x");
    assert_eq!(Widget::TextBox(p.clone()).kind(), "text_box");
    assert_eq!(Widget::Title(p).kind(), "title");
}
