use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fracs::{
    ChangeDetector, ElementMetrics, Fractions, Rect, Registry, Scroller, Snapshot, Subscriber,
    WindowMetrics,
};

type Layout = Rc<RefCell<Snapshot<&'static str>>>;
type Key = (&'static str, Scroller<&'static str>);

fn create_layout() -> Layout {
    Rc::new(RefCell::new(
        Snapshot::new(WindowMetrics {
            document_width: 100,
            document_height: 1000,
            scroll_left: 0,
            scroll_top: 0,
            width: 100,
            height: 100,
        })
        .with("a", ElementMetrics::from_bounds(Rect::new(0, 0, 100, 50)))
        .with("b", ElementMetrics::from_bounds(Rect::new(0, 300, 100, 50))),
    ))
}

fn counter() -> (Subscriber<Fractions>, Rc<Cell<usize>>) {
    let hits = Rc::new(Cell::new(0));
    let counted = Rc::clone(&hits);
    let subscriber = Subscriber::new(move |_: Option<&Fractions>, _: Option<&Fractions>| {
        counted.set(counted.get() + 1);
    });
    (subscriber, hits)
}

fn watch(registry: &mut Registry<Key, Fractions>, layout: &Layout, element: &'static str) -> Rc<Cell<usize>> {
    let (subscriber, hits) = counter();
    let measure = Rc::clone(layout);
    registry.bind((element, Scroller::Window), subscriber, move || {
        ChangeDetector::fractions(measure, element, Scroller::Window)
    });
    hits
}

#[test]
fn test_bind_creates_one_detector_per_key() {
    let layout = create_layout();
    let mut registry = Registry::new();
    watch(&mut registry, &layout, "a");
    watch(&mut registry, &layout, "a");
    watch(&mut registry, &layout, "b");

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry
            .get(&("a", Scroller::Window))
            .map(|d| d.subscriber_count()),
        Some(2)
    );
}

#[test]
fn test_check_all_counts_changes() {
    let layout = create_layout();
    let mut registry = Registry::new();
    let a_hits = watch(&mut registry, &layout, "a");
    let b_hits = watch(&mut registry, &layout, "b");

    assert_eq!(registry.check_all(), 2, "first check announces every value");
    assert_eq!(registry.check_all(), 0);

    layout.borrow_mut().scroll_window_to(0, 280);
    assert_eq!(registry.check_all(), 2);
    assert_eq!(a_hits.get(), 2);
    assert_eq!(b_hits.get(), 2);
}

#[test]
fn test_check_single_key() {
    let layout = create_layout();
    let mut registry = Registry::new();
    let hits = watch(&mut registry, &layout, "a");

    assert!(registry.check(&("a", Scroller::Window)));
    assert!(!registry.check(&("a", Scroller::Window)));
    assert!(!registry.check(&("missing", Scroller::Window)));
    assert_eq!(hits.get(), 1);

    registry.trigger(&("a", Scroller::Window));
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_unbind_last_subscriber_drops_detector() {
    let layout = create_layout();
    let mut registry = Registry::new();
    let (subscriber, _hits) = counter();
    let measure = Rc::clone(&layout);
    registry.bind(("a", Scroller::Window), subscriber.clone(), move || {
        ChangeDetector::fractions(measure, "a", Scroller::Window)
    });
    watch(&mut registry, &layout, "b");

    assert!(registry.unbind(&("a", Scroller::Window), Some(&subscriber)));
    assert!(!registry.contains(&("a", Scroller::Window)));
    assert!(!registry.unbind(&("a", Scroller::Window), None));

    assert!(registry.unbind(&("b", Scroller::Window), None));
    assert!(registry.is_empty());
}

#[test]
fn test_remove() {
    let layout = create_layout();
    let mut registry = Registry::new();
    watch(&mut registry, &layout, "a");

    let detector = registry.remove(&("a", Scroller::Window)).expect("was watched");
    assert_eq!(detector.subscriber_count(), 1);
    assert!(registry.is_empty());
}

#[test]
fn test_check_all_runs_in_bind_order() {
    let layout = create_layout();
    let mut registry: Registry<Key, Fractions> = Registry::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for element in ["b", "a", "c", "d"] {
        let order = Rc::clone(&order);
        let measure = Rc::clone(&layout);
        registry.bind(
            (element, Scroller::Window),
            Subscriber::new(move |_: Option<&Fractions>, _: Option<&Fractions>| {
                order.borrow_mut().push(element);
            }),
            move || ChangeDetector::fractions(measure, element, Scroller::Window),
        );
    }

    registry.check_all();
    assert_eq!(*order.borrow(), vec!["b", "a", "c", "d"]);
}

#[test]
fn test_remove_keeps_bind_order() {
    let layout = create_layout();
    let mut registry = Registry::new();
    for element in ["a", "b", "c", "d"] {
        watch(&mut registry, &layout, element);
    }

    registry.remove(&("b", Scroller::Window));
    let keys: Vec<_> = registry.keys().map(|(element, _)| *element).collect();
    assert_eq!(keys, vec!["a", "c", "d"]);
    assert!(registry.get(&("d", Scroller::Window)).is_some());
    assert!(registry.check(&("d", Scroller::Window)));
}
