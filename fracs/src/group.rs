//! Ranking a set of elements by a measured property.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::fractions::Fractions;
use crate::geometry::Rect;
use crate::measure::{frame_of, Measure, Scroller};

/// A scalar that elements can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Width,
    Height,
    Left,
    Right,
    Top,
    Bottom,
    Possible,
    Visible,
    Viewport,
}

impl Property {
    pub const ALL: [Property; 9] = [
        Property::Width,
        Property::Height,
        Property::Left,
        Property::Right,
        Property::Top,
        Property::Bottom,
        Property::Possible,
        Property::Visible,
        Property::Viewport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::Left => "left",
            Property::Right => "right",
            Property::Top => "top",
            Property::Bottom => "bottom",
            Property::Possible => "possible",
            Property::Visible => "visible",
            Property::Viewport => "viewport",
        }
    }

    /// Score an element with bounding box `bounds` inside `frame`.
    /// Elements that are not rendered score 0.
    pub fn value(self, bounds: Option<Rect>, frame: Rect) -> f64 {
        let Some(rect) = bounds else {
            return 0.0;
        };
        match self {
            Property::Width => f64::from(rect.width),
            Property::Height => f64::from(rect.height),
            Property::Left => f64::from(rect.left),
            Property::Right => f64::from(rect.right()),
            Property::Top => f64::from(rect.top),
            Property::Bottom => f64::from(rect.bottom()),
            Property::Possible => Fractions::of(rect, frame).possible,
            Property::Visible => Fractions::of(rect, frame).visible,
            Property::Viewport => Fractions::of(rect, frame).viewport,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| ParseError::UnknownProperty(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for Order {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(ParseError::UnknownOrder(s.to_string())),
        }
    }
}

/// An element paired with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<H> {
    pub element: H,
    pub value: f64,
}

/// A set of elements measured against a shared frame.
pub struct Group<'a, H, M: ?Sized> {
    elements: &'a [H],
    frame: Rect,
    measure: &'a M,
}

impl<'a, H, M> Group<'a, H, M>
where
    H: Clone,
    M: Measure<H> + ?Sized,
{
    pub fn new(elements: &'a [H], frame: Rect, measure: &'a M) -> Self {
        Self {
            elements,
            frame,
            measure,
        }
    }

    /// A group framed by the viewport of `scroller`. `None` if the scroller
    /// is detached.
    pub fn in_scroller(elements: &'a [H], measure: &'a M, scroller: &Scroller<H>) -> Option<Self> {
        let frame = frame_of(measure, scroller)?;
        Some(Self::new(elements, frame, measure))
    }

    pub fn elements(&self) -> &'a [H] {
        self.elements
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every element with its score, sorted by score. Elements with equal
    /// scores keep their input order in both directions.
    pub fn sorted(&self, property: Property, order: Order) -> Vec<Ranked<H>> {
        let ranked = self
            .elements
            .iter()
            .map(|element| Ranked {
                element: element.clone(),
                value: property.value(self.measure.element_rect(element), self.frame),
            })
            .collect();
        sort_ranked(ranked, order)
    }

    /// Like [`Group::sorted`] with the property given by name. An unknown
    /// name scores every element 0.
    pub fn sorted_by_name(&self, property: &str, order: Order) -> Vec<Ranked<H>> {
        match property.parse::<Property>() {
            Ok(property) => self.sorted(property, order),
            Err(err) => {
                log::warn!("[group] {}, scoring all {} elements 0", err, self.elements.len());
                self.elements
                    .iter()
                    .map(|element| Ranked {
                        element: element.clone(),
                        value: 0.0,
                    })
                    .collect()
            }
        }
    }

    /// The first entry of [`Group::sorted`], or `None` for an empty group.
    pub fn best(&self, property: Property, order: Order) -> Option<Ranked<H>> {
        if self.elements.is_empty() {
            return None;
        }
        self.sorted(property, order).into_iter().next()
    }

    pub fn best_by_name(&self, property: &str, order: Order) -> Option<Ranked<H>> {
        self.sorted_by_name(property, order).into_iter().next()
    }

    /// The element with the lowest score.
    pub fn min(&self, property: Property) -> Option<H> {
        self.best(property, Order::Ascending).map(|ranked| ranked.element)
    }

    /// The element with the highest score.
    pub fn max(&self, property: Property) -> Option<H> {
        self.best(property, Order::Descending).map(|ranked| ranked.element)
    }

    /// The elements reordered by score.
    pub fn sort(&self, property: Property, order: Order) -> Vec<H> {
        self.sorted(property, order)
            .into_iter()
            .map(|ranked| ranked.element)
            .collect()
    }

    /// Smallest rect containing every rendered element.
    pub fn envelope(&self) -> Option<Rect> {
        Rect::envelope_all(self.bounds())
    }

    /// Region shared by all elements; `None` if any is hidden or they don't
    /// all overlap.
    pub fn intersection(&self) -> Option<Rect> {
        Rect::intersection_all(self.bounds())
    }

    fn bounds(&self) -> impl Iterator<Item = Option<Rect>> + '_ {
        self.elements
            .iter()
            .map(|element| self.measure.element_rect(element))
    }
}

fn sort_ranked<H>(mut ranked: Vec<Ranked<H>>, order: Order) -> Vec<Ranked<H>> {
    // `sort_by` is stable, so ties keep input order either way.
    match order {
        Order::Ascending => ranked.sort_by(|a, b| compare(a.value, b.value)),
        Order::Descending => ranked.sort_by(|a, b| compare(b.value, a.value)),
    }
    ranked
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
