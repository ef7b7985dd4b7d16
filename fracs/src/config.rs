//! Configuration types for watches and scroll targets.

use serde::{Deserialize, Serialize};

use crate::group::{Order, Property};

/// Which entity of a group wins a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Property every entity is scored by.
    pub property: Property,
    /// `Descending` picks the highest score, `Ascending` the lowest.
    pub order: Order,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            property: Property::Visible,
            order: Order::Descending,
        }
    }
}

impl RankConfig {
    /// Rank by `property`, highest first.
    pub fn new(property: Property) -> Self {
        Self {
            property,
            ..Default::default()
        }
    }

    /// Pick the lowest score.
    pub fn ascending(mut self) -> Self {
        self.order = Order::Ascending;
        self
    }

    /// Pick the highest score.
    pub fn descending(mut self) -> Self {
        self.order = Order::Descending;
        self
    }
}

/// Padding applied when computing where to scroll to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Space kept to the left of the target.
    pub padding_left: i32,
    /// Space kept above the target.
    pub padding_top: i32,
}

impl ScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both paddings.
    pub fn padding(mut self, left: i32, top: i32) -> Self {
        self.padding_left = left;
        self.padding_top = top;
        self
    }
}
