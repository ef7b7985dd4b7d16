use serde::{Deserialize, Serialize};

use crate::config::ScrollConfig;
use crate::geometry::Rect;
use crate::measure::{Measure, Scroller, Space};

/// Scroll position of a scroller, in pixels from the content origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub left: i32,
    pub top: i32,
}

impl ScrollOffset {
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Clamp to the range the scroller can actually reach.
    pub fn clamp(self, state: &ScrollState) -> Self {
        let max_left = (state.content.width - state.viewport.width).max(0);
        let max_top = (state.content.height - state.viewport.height).max(0);
        Self {
            left: self.left.clamp(0, max_left),
            top: self.top.clamp(0, max_top),
        }
    }
}

/// How far a viewport has scrolled through its content.
///
/// `width`/`height` are the scroll progress along each axis in `[0, 1]`,
/// or `None` when the content doesn't overflow along that axis. The
/// remaining fields are raw distances in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Content in its own space (always at the origin).
    pub content: Rect,
    /// Viewport in content space; its position is the scroll offset.
    pub viewport: Rect,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Distance scrolled from the left edge.
    pub left: i32,
    /// Distance scrolled from the top edge.
    pub top: i32,
    /// Distance left to scroll to the right edge.
    pub right: i32,
    /// Distance left to scroll to the bottom edge.
    pub bottom: i32,
}

impl ScrollState {
    pub fn new(content: Rect, viewport: Rect) -> Self {
        let w = content.width - viewport.width;
        let h = content.height - viewport.height;

        Self {
            content,
            viewport,
            width: progress(viewport.left, w),
            height: progress(viewport.top, h),
            left: viewport.left,
            top: viewport.top,
            right: content.right() - viewport.right(),
            bottom: content.bottom() - viewport.bottom(),
        }
    }

    /// Read the scroll state of `scroller`. `None` if it is detached.
    pub fn measure<H, M>(measure: &M, scroller: &Scroller<H>) -> Option<Self>
    where
        M: Measure<H> + ?Sized,
    {
        let content = measure.content_rect(scroller, Space::Local)?;
        let viewport = measure.viewport_rect(scroller, Space::Local)?;
        Some(Self::new(content, viewport))
    }

    pub fn offset(&self) -> ScrollOffset {
        ScrollOffset::new(self.left, self.top)
    }

    pub fn can_scroll_horizontal(&self) -> bool {
        self.width.is_some()
    }

    pub fn can_scroll_vertical(&self) -> bool {
        self.height.is_some()
    }
}

fn progress(offset: i32, range: i32) -> Option<f64> {
    if range <= 0 {
        None
    } else {
        Some(f64::from(offset) / f64::from(range))
    }
}

/// A scroller bound to a measure, for working out where to scroll to.
///
/// Only targets are computed here; moving there (and animating the move)
/// is up to the caller.
pub struct Viewport<'m, H, M: ?Sized> {
    scroller: Scroller<H>,
    measure: &'m M,
}

impl<'m, H, M> Viewport<'m, H, M>
where
    M: Measure<H> + ?Sized,
{
    pub fn new(scroller: Scroller<H>, measure: &'m M) -> Self {
        Self { scroller, measure }
    }

    pub fn window(measure: &'m M) -> Self {
        Self::new(Scroller::Window, measure)
    }

    pub fn scroller(&self) -> &Scroller<H> {
        &self.scroller
    }

    pub fn scroll_state(&self) -> Option<ScrollState> {
        ScrollState::measure(self.measure, &self.scroller)
    }

    /// Current offset moved by `(dx, dy)`.
    pub fn target_by(&self, dx: i32, dy: i32) -> Option<ScrollOffset> {
        let current = self.scroll_state()?.offset();
        Some(ScrollOffset::new(current.left + dx, current.top + dy))
    }

    /// Offset that puts `rect` (in content space) at the top left corner,
    /// minus the configured padding.
    pub fn target_for_rect(&self, rect: &Rect, config: &ScrollConfig) -> ScrollOffset {
        ScrollOffset::new(rect.left - config.padding_left, rect.top - config.padding_top)
    }

    /// Offset that brings `element` to the top left corner. `None` if the
    /// element is not rendered or the scroller is detached.
    pub fn target_for_element(&self, element: &H, config: &ScrollConfig) -> Option<ScrollOffset> {
        let bounds = self.measure.element_rect(element)?;
        let content = self.measure.content_rect(&self.scroller, Space::Document)?;
        Some(self.target_for_rect(&bounds.relative_to(&content), config))
    }
}
