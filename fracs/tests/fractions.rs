use fracs::{ElementMetrics, Fractions, Rect, Scroller, Snapshot, WindowMetrics};

#[test]
fn test_subject_equal_to_frame() {
    let rect = Rect::new(10, 10, 50, 40);
    let fracs = Fractions::of(rect, rect);
    assert_eq!(fracs.visible, 1.0);
    assert_eq!(fracs.viewport, 1.0);
    assert_eq!(fracs.possible, 1.0);

    let rects = fracs.rects.expect("full overlap has rects");
    assert_eq!(rects.document, rect);
    assert_eq!(rects.element, Rect::new(0, 0, 50, 40));
    assert_eq!(rects.viewport, Rect::new(0, 0, 50, 40));
}

#[test]
fn test_disjoint_is_default() {
    let fracs = Fractions::of(Rect::new(0, 0, 10, 10), Rect::new(100, 100, 10, 10));
    assert_eq!(fracs, Fractions::default());
    assert_eq!(fracs.visible, 0.0);
    assert_eq!(fracs.viewport, 0.0);
    assert_eq!(fracs.possible, 0.0);
    assert!(fracs.rects.is_none());
    assert!(!fracs.is_visible());
}

#[test]
fn test_absent_subject_is_default() {
    let fracs = Fractions::of(None, Rect::new(0, 0, 100, 100));
    assert_eq!(fracs, Fractions::default());
}

#[test]
fn test_partial_overlap() {
    let fracs = Fractions::of(Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10));
    assert_eq!(fracs.visible, 0.25);
    assert_eq!(fracs.viewport, 0.25);
    assert_eq!(fracs.possible, 0.25);

    let rects = fracs.rects.expect("overlap has rects");
    assert_eq!(rects.document, Rect::new(5, 5, 5, 5));
    assert_eq!(rects.element, Rect::new(5, 5, 5, 5));
    assert_eq!(rects.viewport, Rect::new(0, 0, 5, 5));
}

#[test]
fn test_three_denominators_differ() {
    // Subject 20x10, frame 100x100, subject half outside the frame's left edge.
    let subject = Rect::new(-10, 0, 20, 10);
    let frame = Rect::new(0, 0, 100, 100);
    let fracs = Fractions::of(subject, frame);

    assert_eq!(fracs.visible, 100.0 / 200.0, "overlap / subject area");
    assert_eq!(fracs.viewport, 100.0 / 10_000.0, "overlap / frame area");
    assert_eq!(fracs.possible, 100.0 / 200.0, "overlap / min(w) * min(h)");
}

#[test]
fn test_possible_for_subject_larger_than_frame() {
    let subject = Rect::new(0, 0, 200, 200);
    let frame = Rect::new(50, 50, 100, 100);
    let fracs = Fractions::of(subject, frame);

    assert_eq!(fracs.visible, 0.25);
    assert_eq!(fracs.viewport, 1.0);
    assert_eq!(fracs.possible, 1.0, "the frame is filled as much as possible");
}

#[test]
fn test_zero_area_frame() {
    let fracs = Fractions::of(Rect::new(0, 0, 10, 10), Rect::new(10, 0, 0, 10));
    assert!(fracs.is_visible(), "touching counts as an overlap");
    assert_eq!(fracs.visible, 0.0);
    assert_eq!(fracs.viewport, 0.0);
    assert_eq!(fracs.possible, 0.0);
}

#[test]
fn test_split_equality() {
    let a = Fractions::of(Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10));
    // Same ratios, different place.
    let b = Fractions::of(Rect::new(100, 0, 10, 10), Rect::new(105, 5, 10, 10));

    assert!(a.fracs_eq(&b));
    assert!(!a.rects_eq(&b));
    assert_ne!(a, b);
    assert_eq!(a, a);
}

#[test]
fn test_measure_against_window() {
    let snapshot = Snapshot::new(WindowMetrics {
        document_width: 1000,
        document_height: 3000,
        scroll_left: 0,
        scroll_top: 500,
        width: 1000,
        height: 800,
    })
    .with("hero", ElementMetrics::from_bounds(Rect::new(0, 400, 1000, 200)))
    .with("hidden", ElementMetrics::hidden());

    let fracs = Fractions::measure(&snapshot, &"hero", &Scroller::Window).expect("window attached");
    assert_eq!(fracs.visible, 0.5);
    assert_eq!(
        fracs.rects.map(|r| r.viewport),
        Some(Rect::new(0, 0, 1000, 100))
    );

    let hidden = Fractions::measure(&snapshot, &"hidden", &Scroller::Window);
    assert_eq!(hidden, Some(Fractions::default()));

    let unknown = Fractions::measure(&snapshot, &"hero", &Scroller::Element("missing"));
    assert_eq!(unknown, None, "detached scroller has no frame");
}
