//! Highlights the section that shows the most while a page scrolls.
//!
//! Scrolling is simulated by moving the window in a layout snapshot; the
//! detectors are checked after each step the way a resize/scroll handler
//! would check them.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use fracs::{
    ChangeDetector, ElementMetrics, Fractions, Property, RankConfig, Rect, Registry, Scroller,
    Snapshot, Subscriber, WindowMetrics,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const SECTIONS: [&str; 4] = ["intro", "usage", "api", "faq"];

fn main() -> std::io::Result<()> {
    let log_file = File::create("scroll_spy.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut snapshot = Snapshot::new(WindowMetrics {
        document_width: 800,
        document_height: 2400,
        scroll_left: 0,
        scroll_top: 0,
        width: 800,
        height: 600,
    });
    for (i, id) in SECTIONS.iter().enumerate() {
        let bounds = Rect::new(0, i as i32 * 600, 800, 600);
        snapshot.insert(*id, ElementMetrics::from_bounds(bounds));
    }
    let layout = Rc::new(RefCell::new(snapshot));

    let mut spy = ChangeDetector::best(
        Rc::clone(&layout),
        SECTIONS.to_vec(),
        Scroller::Window,
        RankConfig::new(Property::Visible),
    );
    spy.bind(Subscriber::<Option<&str>>::new(|current, previous| {
        println!(
            "active section: {:?} (was {:?})",
            current.copied().flatten(),
            previous.copied().flatten()
        );
    }));

    let mut fractions = Registry::new();
    for id in SECTIONS {
        let measure = Rc::clone(&layout);
        fractions.bind(
            (id, Scroller::<&str>::Window),
            Subscriber::<Fractions>::new(move |current, _| {
                if let Some(fracs) = current {
                    println!("  {id}: {:.0}% visible", fracs.visible * 100.0);
                }
            }),
            move || ChangeDetector::fractions(measure, id, Scroller::Window),
        );
    }

    for top in (0..=1800).step_by(150) {
        layout.borrow_mut().scroll_window_to(0, top);
        println!("scrollTop = {top}");
        spy.check();
        let changed = fractions.check_all();
        log::info!("scrollTop {} changed {} fraction watches", top, changed);
    }

    Ok(())
}
