//! The three ready-made detectors: fractions, best element, scroll state.

use crate::config::RankConfig;
use crate::fractions::Fractions;
use crate::group::Group;
use crate::measure::{Measure, Scroller};
use crate::scroll::ScrollState;

use super::ChangeDetector;

impl ChangeDetector<Fractions> {
    /// Watch the fractions of `element` inside the viewport of `scroller`.
    pub fn fractions<H, M>(measure: M, element: H, scroller: Scroller<H>) -> Self
    where
        H: 'static,
        M: Measure<H> + 'static,
    {
        Self::new(move || Fractions::measure(&measure, &element, &scroller))
    }
}

impl<H> ChangeDetector<Option<H>>
where
    H: Clone + PartialEq + 'static,
{
    /// Watch which of `elements` ranks first.
    ///
    /// The value is the winning element, or `None` when the winner's score
    /// is not positive. An empty set of elements never produces a value,
    /// and having no winner before any winner was announced is not a change.
    pub fn best<M>(measure: M, elements: Vec<H>, scroller: Scroller<H>, config: RankConfig) -> Self
    where
        M: Measure<H> + 'static,
    {
        Self::with_baseline(
            move || {
                let group = Group::in_scroller(&elements, &measure, &scroller)?;
                let best = group.best(config.property, config.order)?;
                Some((best.value > 0.0).then_some(best.element))
            },
            None,
        )
    }
}

impl ChangeDetector<ScrollState> {
    /// Watch the scroll state of `scroller`.
    pub fn scroll_state<H, M>(measure: M, scroller: Scroller<H>) -> Self
    where
        H: 'static,
        M: Measure<H> + 'static,
    {
        Self::new(move || ScrollState::measure(&measure, &scroller))
    }
}
