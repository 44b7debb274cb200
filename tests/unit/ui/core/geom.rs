use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2);
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
}

#[test]
fn inner_strips_one_cell_border_and_saturates() {
    assert_eq!(Rect::new(2, 3, 10, 5).inner(), Rect::new(3, 4, 8, 3));
    assert!(Rect::new(0, 0, 1, 1).inner().is_empty());
}

#[test]
fn intersect_of_disjoint_rects_is_empty() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(10, 10, 2, 2);
    assert!(a.intersect(b).is_empty());
    assert_eq!(a.intersect(Rect::new(2, 2, 4, 4)), Rect::new(2, 2, 2, 2));
}
