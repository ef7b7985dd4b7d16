//! The overlap metric of a subject rect inside a frame rect.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::measure::{frame_of, Measure, Scroller};

/// The visible part of a subject, expressed in three coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionRects {
    /// The intersection in document space.
    pub document: Rect,
    /// The intersection relative to the subject's top left corner.
    pub element: Rect,
    /// The intersection relative to the frame's top left corner.
    pub viewport: Rect,
}

/// How much of a subject is visible inside a frame.
///
/// - `visible`: share of the subject's area that is inside the frame.
/// - `viewport`: share of the frame's area covered by the subject.
/// - `possible`: share of the largest overlap the two sizes allow, wherever
///   they are placed.
///
/// The default value (all zero, no rects) means "no measurable overlap".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Fractions {
    pub visible: f64,
    pub viewport: f64,
    pub possible: f64,
    pub rects: Option<FractionRects>,
}

impl Fractions {
    /// Compute the fractions of `subject` inside `frame`.
    ///
    /// An absent subject (not rendered) or a subject outside the frame yields
    /// the default fractions. A zero-area denominator yields a ratio of 0.
    pub fn of(subject: impl Into<Option<Rect>>, frame: Rect) -> Self {
        let Some(subject) = subject.into() else {
            return Self::default();
        };
        let Some(intersection) = subject.intersection(&frame) else {
            return Self::default();
        };

        let intersection_area = intersection.area();
        let possible_area = i64::from(subject.width.min(frame.width))
            * i64::from(subject.height.min(frame.height));

        Self {
            visible: ratio(intersection_area, subject.area()),
            viewport: ratio(intersection_area, frame.area()),
            possible: ratio(intersection_area, possible_area),
            rects: Some(FractionRects {
                document: intersection,
                element: intersection.relative_to(&subject),
                viewport: intersection.relative_to(&frame),
            }),
        }
    }

    /// Measure `element` against the viewport of `scroller`.
    ///
    /// Returns `None` if the scroller is not part of the measured layout.
    pub fn measure<H, M>(measure: &M, element: &H, scroller: &Scroller<H>) -> Option<Self>
    where
        M: Measure<H> + ?Sized,
    {
        let frame = frame_of(measure, scroller)?;
        Some(Self::of(measure.element_rect(element), frame))
    }

    /// Compare only the three ratios.
    pub fn fracs_eq(&self, other: &Fractions) -> bool {
        self.visible == other.visible
            && self.viewport == other.viewport
            && self.possible == other.possible
    }

    /// Compare only the sub-rects.
    pub fn rects_eq(&self, other: &Fractions) -> bool {
        self.rects == other.rects
    }

    /// Whether any part of the subject is inside the frame.
    pub fn is_visible(&self) -> bool {
        self.rects.is_some()
    }
}

impl PartialEq for Fractions {
    fn eq(&self, other: &Self) -> bool {
        self.fracs_eq(other) && self.rects_eq(other)
    }
}

fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
