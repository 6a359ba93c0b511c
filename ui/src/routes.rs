//! Locale-prefixed paths for the site's pages.
//!
//! Components in this crate link with plain path strings, which the
//! platform router parses into its own `Route` enum. Every page path is
//! `/{locale}{Page::path}`.

use strum::EnumIter;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Page {
    Home,
    Rooms,
    Dining,
    Amenities,
    Conferences,
    Gallery,
    Contact,
    Booking,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Rooms => "/rooms",
            Self::Dining => "/dining",
            Self::Amenities => "/amenities",
            Self::Conferences => "/conferences",
            Self::Gallery => "/gallery",
            Self::Contact => "/contact",
            Self::Booking => "/booking",
        }
    }

    pub fn href(self, locale: &str) -> String {
        format!("/{locale}{}", self.path())
    }

    pub fn label(self) -> String {
        match self {
            Self::Home => t!("nav-home"),
            Self::Rooms => t!("nav-rooms"),
            Self::Dining => t!("nav-dining"),
            Self::Amenities => t!("nav-amenities"),
            Self::Conferences => t!("nav-conferences"),
            Self::Gallery => t!("nav-gallery"),
            Self::Contact => t!("nav-contact"),
            Self::Booking => t!("nav-booking"),
        }
    }

    /// Pages listed in the main navigation (booking is a separate CTA).
    pub fn in_navbar(self) -> bool {
        !matches!(self, Self::Booking)
    }
}

pub fn room_href(locale: &str, room_id: &str) -> String {
    format!("/{locale}/rooms/{room_id}")
}

pub fn book_room_href(locale: &str, room_id: &str) -> String {
    format!("/{locale}/rooms/{room_id}/book")
}

/// Same page under another locale: swaps the first path segment.
pub fn relocalize(path: &str, locale: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = trimmed.split_once('/').map(|(_, rest)| rest).unwrap_or("");
    if rest.is_empty() {
        format!("/{locale}")
    } else {
        format!("/{locale}/{rest}")
    }
}
