//! The boundary to whatever owns the live layout.
//!
//! Nothing in this crate measures anything itself. Callers implement
//! [`Measure`] over their own element handles, or fill a [`Snapshot`] with
//! geometry they already have.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::geometry::Rect;

/// A scrolling container: the top-level window or a scrollable element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scroller<H> {
    Window,
    Element(H),
}

/// Coordinate space of a content or viewport rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// Relative to the scroller's own content origin.
    Local,
    /// Relative to the document origin.
    Document,
}

/// Reads geometry for element handles of type `H` at a point in time.
pub trait Measure<H> {
    /// Bounding box of `element` in document space, including padding and
    /// border. `None` if the element is not rendered.
    fn element_rect(&self, element: &H) -> Option<Rect>;

    /// The full scrollable content of `scroller`. `None` if the scroller is
    /// detached.
    fn content_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect>;

    /// The visible window onto the content of `scroller`. In local space the
    /// position is the scroll offset. `None` if the scroller is detached.
    fn viewport_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect>;
}

/// The frame that fractions are measured against: the scroller's viewport
/// in document space.
pub fn frame_of<H, M>(measure: &M, scroller: &Scroller<H>) -> Option<Rect>
where
    M: Measure<H> + ?Sized,
{
    measure.viewport_rect(scroller, Space::Document)
}

impl<H, T: Measure<H> + ?Sized> Measure<H> for &T {
    fn element_rect(&self, element: &H) -> Option<Rect> {
        (**self).element_rect(element)
    }

    fn content_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        (**self).content_rect(scroller, space)
    }

    fn viewport_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        (**self).viewport_rect(scroller, space)
    }
}

impl<H, T: Measure<H> + ?Sized> Measure<H> for Rc<T> {
    fn element_rect(&self, element: &H) -> Option<Rect> {
        (**self).element_rect(element)
    }

    fn content_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        (**self).content_rect(scroller, space)
    }

    fn viewport_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        (**self).viewport_rect(scroller, space)
    }
}

impl<H, T: Measure<H>> Measure<H> for RefCell<T> {
    fn element_rect(&self, element: &H) -> Option<Rect> {
        self.borrow().element_rect(element)
    }

    fn content_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        self.borrow().content_rect(scroller, space)
    }

    fn viewport_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        self.borrow().viewport_rect(scroller, space)
    }
}

/// Window geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowMetrics {
    /// Size of the whole document.
    pub document_width: i32,
    pub document_height: i32,
    /// Scroll position of the window.
    pub scroll_left: i32,
    pub scroll_top: i32,
    /// Size of the window's viewport.
    pub width: i32,
    pub height: i32,
}

/// Geometry of a single element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementMetrics {
    /// Bounding box in document space; `None` if hidden.
    pub bounds: Option<Rect>,
    /// Position of the element's padding box in document space.
    pub offset_left: i32,
    pub offset_top: i32,
    pub scroll_left: i32,
    pub scroll_top: i32,
    pub scroll_width: i32,
    pub scroll_height: i32,
    pub client_width: i32,
    pub client_height: i32,
}

impl ElementMetrics {
    /// A non-scrolling element whose padding box equals its bounds.
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            offset_left: bounds.left,
            offset_top: bounds.top,
            scroll_left: 0,
            scroll_top: 0,
            scroll_width: bounds.width,
            scroll_height: bounds.height,
            client_width: bounds.width,
            client_height: bounds.height,
        }
    }

    /// An element that is attached but not rendered.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Set the scrollable content size.
    pub fn scroll_size(mut self, width: i32, height: i32) -> Self {
        self.scroll_width = width;
        self.scroll_height = height;
        self
    }

    /// Set the scroll position.
    pub fn scrolled_to(mut self, left: i32, top: i32) -> Self {
        self.scroll_left = left;
        self.scroll_top = top;
        self
    }

    /// Set the size of the visible viewport.
    pub fn client_size(mut self, width: i32, height: i32) -> Self {
        self.client_width = width;
        self.client_height = height;
        self
    }
}

/// Layout geometry captured at one point in time.
///
/// Elements missing from the snapshot are treated as detached: they are
/// not rendered and, as scrollers, have no content or viewport.
#[derive(Debug, Clone)]
pub struct Snapshot<H> {
    window: WindowMetrics,
    elements: HashMap<H, ElementMetrics>,
}

impl<H> Default for Snapshot<H> {
    fn default() -> Self {
        Self {
            window: WindowMetrics::default(),
            elements: HashMap::new(),
        }
    }
}

impl<H: Eq + Hash> Snapshot<H> {
    pub fn new(window: WindowMetrics) -> Self {
        Self {
            window,
            elements: HashMap::new(),
        }
    }

    /// Add an element, builder style.
    pub fn with(mut self, element: H, metrics: ElementMetrics) -> Self {
        self.elements.insert(element, metrics);
        self
    }

    pub fn window(&self) -> WindowMetrics {
        self.window
    }

    pub fn set_window(&mut self, window: WindowMetrics) {
        self.window = window;
    }

    /// Scroll the window, keeping its size.
    pub fn scroll_window_to(&mut self, left: i32, top: i32) {
        self.window.scroll_left = left;
        self.window.scroll_top = top;
    }

    pub fn get(&self, element: &H) -> Option<&ElementMetrics> {
        self.elements.get(element)
    }

    pub fn insert(&mut self, element: H, metrics: ElementMetrics) {
        self.elements.insert(element, metrics);
    }

    pub fn remove(&mut self, element: &H) -> Option<ElementMetrics> {
        self.elements.remove(element)
    }

    /// Scroll an element, keeping its size. Returns false if the element is
    /// not in the snapshot.
    pub fn scroll_element_to(&mut self, element: &H, left: i32, top: i32) -> bool {
        match self.elements.get_mut(element) {
            Some(metrics) => {
                metrics.scroll_left = left;
                metrics.scroll_top = top;
                true
            }
            None => false,
        }
    }
}

impl<H: Eq + Hash> Measure<H> for Snapshot<H> {
    fn element_rect(&self, element: &H) -> Option<Rect> {
        self.elements.get(element)?.bounds
    }

    fn content_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        match scroller {
            Scroller::Window => Some(Rect::from_size(
                self.window.document_width,
                self.window.document_height,
            )),
            Scroller::Element(element) => {
                let m = self.elements.get(element)?;
                Some(match space {
                    Space::Local => Rect::from_size(m.scroll_width, m.scroll_height),
                    Space::Document => Rect::new(
                        m.offset_left - m.scroll_left,
                        m.offset_top - m.scroll_top,
                        m.scroll_width,
                        m.scroll_height,
                    ),
                })
            }
        }
    }

    fn viewport_rect(&self, scroller: &Scroller<H>, space: Space) -> Option<Rect> {
        match scroller {
            Scroller::Window => Some(Rect::new(
                self.window.scroll_left,
                self.window.scroll_top,
                self.window.width,
                self.window.height,
            )),
            Scroller::Element(element) => {
                let m = self.elements.get(element)?;
                Some(match space {
                    Space::Local => Rect::new(
                        m.scroll_left,
                        m.scroll_top,
                        m.client_width,
                        m.client_height,
                    ),
                    Space::Document => Rect::new(
                        m.offset_left,
                        m.offset_top,
                        m.client_width,
                        m.client_height,
                    ),
                })
            }
        }
    }
}
