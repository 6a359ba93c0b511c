//! In-memory faceted filtering over the static catalogs.
//!
//! Every filter is a pure function of `(catalog slice, state)`: the full
//! slice is re-scanned on each call and the output keeps catalog order.
//! Views own their state in a signal and recompute on every render.

use std::str::FromStr;

mod gallery;
mod rooms;
mod sort;

pub use gallery::GalleryFilter;
pub use rooms::{FilterState, PriceRange, RoomFacets, RoomPredicate};
pub use sort::SortOrder;

/// `<select>` value meaning "no restriction".
pub const ALL: &str = "all";

/// One dropdown selection: either everything or a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    /// Exact-match rule used by enum facets.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parse a control value; [`ALL`] and unknown values mean no restriction.
    pub fn from_control(raw: &str) -> Self {
        if raw == ALL {
            return Self::All;
        }
        raw.parse().map(Self::Only).unwrap_or(Self::All)
    }
}

impl<T: AsRef<str>> Selection<T> {
    pub fn control_value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value.as_ref(),
        }
    }
}
