//! Localized labels for catalog enums.
//!
//! Kept as explicit `match`es over `t!` so every ID is checked against the
//! fallback bundle at compile time.

use crate::catalog::{GalleryCategory, HallLayout, IconName, Meal, RoomCategory, VenueKind, ViewType};
use crate::filter::SortOrder;
use crate::i18n;
use crate::t;

pub fn room_category(category: RoomCategory) -> String {
    match category {
        RoomCategory::Standard => t!("room-category-standard"),
        RoomCategory::Deluxe => t!("room-category-deluxe"),
        RoomCategory::Suite => t!("room-category-suite"),
        RoomCategory::Family => t!("room-category-family"),
        RoomCategory::Corporate => t!("room-category-corporate"),
    }
}

pub fn view_type(view: ViewType) -> String {
    match view {
        ViewType::Sea => t!("view-sea"),
        ViewType::Garden => t!("view-garden"),
        ViewType::Pool => t!("view-pool"),
        ViewType::City => t!("view-city"),
    }
}

pub fn gallery_category(category: GalleryCategory) -> String {
    match category {
        GalleryCategory::Rooms => t!("gallery-category-rooms"),
        GalleryCategory::Dining => t!("gallery-category-dining"),
        GalleryCategory::Beach => t!("gallery-category-beach"),
        GalleryCategory::Pool => t!("gallery-category-pool"),
        GalleryCategory::Spa => t!("gallery-category-spa"),
        GalleryCategory::Events => t!("gallery-category-events"),
    }
}

pub fn venue_kind(kind: VenueKind) -> String {
    match kind {
        VenueKind::Restaurant => t!("venue-kind-restaurant"),
        VenueKind::Bar => t!("venue-kind-bar"),
        VenueKind::Cafe => t!("venue-kind-cafe"),
    }
}

pub fn meal(meal: Meal) -> String {
    match meal {
        Meal::Breakfast => t!("meal-breakfast"),
        Meal::Lunch => t!("meal-lunch"),
        Meal::Dinner => t!("meal-dinner"),
        Meal::Drinks => t!("meal-drinks"),
    }
}

pub fn hall_layout(layout: HallLayout) -> String {
    match layout {
        HallLayout::Theater => t!("hall-layout-theater"),
        HallLayout::Classroom => t!("hall-layout-classroom"),
        HallLayout::Banquet => t!("hall-layout-banquet"),
        HallLayout::Reception => t!("hall-layout-reception"),
    }
}

pub fn sort_order(order: SortOrder) -> String {
    match order {
        SortOrder::Recommended => t!("sort-recommended"),
        SortOrder::PriceAsc => t!("sort-price-asc"),
        SortOrder::PriceDesc => t!("sort-price-desc"),
        SortOrder::CapacityDesc => t!("sort-capacity-desc"),
    }
}

/// Feature tags are data (`"rain-shower"`); their labels live under `feature-<tag>`.
pub fn feature(tag: &str) -> String {
    i18n::translate(&feature_key(tag))
}

pub fn feature_key(tag: &str) -> String {
    format!("feature-{tag}")
}

/// Screen-reader label for an amenity icon.
pub fn icon(name: IconName) -> String {
    match name {
        IconName::Pool => t!("icon-pool"),
        IconName::Spa => t!("icon-spa"),
        IconName::Fitness => t!("icon-fitness"),
        IconName::Beach => t!("icon-beach"),
        IconName::KidsClub => t!("icon-kids-club"),
        IconName::Wifi => t!("icon-wifi"),
        IconName::Parking => t!("icon-parking"),
        IconName::Shuttle => t!("icon-shuttle"),
    }
}
