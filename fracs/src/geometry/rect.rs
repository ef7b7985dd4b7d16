use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer position and size.
///
/// The position may be relative to the document, a viewport or an element,
/// depending on where the rect came from. Width and height are not clamped:
/// subtracting rects can produce negative dimensions, which the operations
/// below treat as "no area".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rect from fractional measurements, rounding each value to the
    /// nearest integer (halves round up).
    pub fn from_f64(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: round_half_up(left),
            top: round_half_up(top),
            width: round_half_up(width),
            height: round_half_up(height),
        }
    }

    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// `width * height`. Negative dimensions give a negative area.
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// This rect translated into the coordinate space whose origin is the
    /// top left corner of `frame`.
    pub const fn relative_to(&self, frame: &Rect) -> Rect {
        Rect::new(
            self.left - frame.left,
            self.top - frame.top,
            self.width,
            self.height,
        )
    }

    /// The overlap of `self` and `other`, or `None` if they don't overlap.
    ///
    /// Rects that only touch along an edge produce a zero-area intersection,
    /// not `None`.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let right = self.right().min(other.right());
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        let width = right - left;
        let height = bottom - top;

        if width >= 0 && height >= 0 {
            Some(Rect::new(left, top, width, height))
        } else {
            None
        }
    }

    /// Like [`Rect::intersection`], but an absent rect intersects nothing.
    pub fn intersection_opt(&self, other: Option<&Rect>) -> Option<Rect> {
        other.and_then(|other| self.intersection(other))
    }

    /// The smallest rect containing both `self` and `other`.
    pub fn envelope(&self, other: &Rect) -> Rect {
        let left = self.left.min(other.left);
        let right = self.right().max(other.right());
        let top = self.top.min(other.top);
        let bottom = self.bottom().max(other.bottom());

        Rect::new(left, top, right - left, bottom - top)
    }

    /// Like [`Rect::envelope`]; an absent rect leaves `self` unchanged.
    pub fn envelope_opt(&self, other: Option<&Rect>) -> Rect {
        match other {
            Some(other) => self.envelope(other),
            None => *self,
        }
    }

    /// Envelope of every present rect. Absent rects are skipped; `None` if
    /// nothing was present.
    pub fn envelope_all<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Option<Rect>>,
    {
        rects
            .into_iter()
            .flatten()
            .reduce(|current, rect| current.envelope(&rect))
    }

    /// The region shared by all rects. `None` if there are no rects, any rect
    /// is absent, or some pair doesn't overlap.
    ///
    /// The fold does not restart after an empty step: once two rects fail to
    /// overlap, the result stays `None` whatever follows.
    pub fn intersection_all<I>(rects: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Option<Rect>>,
    {
        let mut rects = rects.into_iter();
        let mut current = rects.next()??;
        for rect in rects {
            current = current.intersection_opt(rect.as_ref())?;
        }
        Some(current)
    }

    /// Whether `other` lies entirely inside `self` (edges inclusive).
    pub const fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn test_from_f64_rounds_every_field() {
        let rect = Rect::from_f64(0.4, 0.6, 10.5, 9.49);
        assert_eq!(rect, Rect::new(0, 1, 11, 9));
        assert_eq!(rect.right(), 11);
        assert_eq!(rect.bottom(), 10);
    }
}
