pub mod config;
pub mod detector;
pub mod error;
pub mod fractions;
pub mod geometry;
pub mod group;
pub mod measure;
pub mod registry;
pub mod scroll;

pub use config::{RankConfig, ScrollConfig};
pub use detector::{ChangeDetector, Subscriber};
pub use error::ParseError;
pub use fractions::{FractionRects, Fractions};
pub use geometry::Rect;
pub use group::{Group, Order, Property, Ranked};
pub use measure::{frame_of, ElementMetrics, Measure, Scroller, Snapshot, Space, WindowMetrics};
pub use registry::Registry;
pub use scroll::{ScrollOffset, ScrollState, Viewport};
