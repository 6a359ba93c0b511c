use std::collections::BTreeSet;

use super::Selection;
use crate::catalog::{Room, RoomCategory, ViewType};

/// Inclusive nightly price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub lower: f64,
    pub upper: f64,
}

impl PriceRange {
    /// Admits every positive price.
    pub const FULL: Self = Self {
        lower: 0.0,
        upper: f64::INFINITY,
    };

    pub fn new(lower: f64, upper: f64) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.lower <= price && price <= self.upper
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Tightest range covering every room, or `None` for an empty slice.
    pub fn covering(rooms: &[Room]) -> Option<Self> {
        let mut prices = rooms.iter().map(|r| r.base_price);
        let first = prices.next()?;
        let (lower, upper) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { lower, upper })
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Current selections of the rooms filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub category: Selection<RoomCategory>,
    /// Matched as a case-insensitive substring of the room's building label.
    pub building: Selection<String>,
    pub view: Selection<ViewType>,
    pub min_capacity: Option<u32>,
    pub price: PriceRange,
    /// Every tag must be contained (case-insensitively) in some room feature.
    pub amenities: BTreeSet<String>,
}

/// A single active condition derived from [`FilterState`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoomPredicate<'a> {
    Category(RoomCategory),
    Building(&'a str),
    View(ViewType),
    MinCapacity(u32),
    Price(PriceRange),
    Amenities(&'a BTreeSet<String>),
}

impl RoomPredicate<'_> {
    pub fn matches(&self, room: &Room) -> bool {
        match self {
            Self::Category(category) => room.category == *category,
            Self::Building(needle) => room
                .building
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::View(view) => room.view == *view,
            Self::MinCapacity(min) => room.capacity >= *min,
            Self::Price(range) => range.contains(room.base_price),
            Self::Amenities(tags) => tags.iter().all(|tag| {
                let tag = tag.to_lowercase();
                room.features
                    .iter()
                    .any(|feature| feature.to_lowercase().contains(&tag))
            }),
        }
    }
}

impl FilterState {
    /// Predicates that can exclude a room; "all"/unset selections are skipped.
    pub fn predicates(&self) -> Vec<RoomPredicate<'_>> {
        let mut active = Vec::new();
        if let Some(category) = self.category.as_option() {
            active.push(RoomPredicate::Category(*category));
        }
        if let Some(building) = self.building.as_option() {
            active.push(RoomPredicate::Building(building));
        }
        if let Some(view) = self.view.as_option() {
            active.push(RoomPredicate::View(*view));
        }
        if let Some(min) = self.min_capacity {
            active.push(RoomPredicate::MinCapacity(min));
        }
        if !self.price.is_full() {
            active.push(RoomPredicate::Price(self.price));
        }
        if !self.amenities.is_empty() {
            active.push(RoomPredicate::Amenities(&self.amenities));
        }
        active
    }

    /// Ordered subsequence of `rooms` passing every active predicate.
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        let predicates = self.predicates();
        rooms
            .iter()
            .filter(|room| predicates.iter().all(|p| p.matches(room)))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.predicates().len()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_amenity(&mut self, tag: &str) {
        if !self.amenities.remove(tag) {
            self.amenities.insert(tag.to_string());
        }
    }

    /// Slider input for the lower bound; never crosses the upper bound.
    pub fn set_min_price(&mut self, value: f64, bounds: PriceRange) {
        let upper = self.price.upper.min(bounds.upper);
        let lower = value.clamp(bounds.lower, upper);
        self.price = self.normalised_price(lower, upper, bounds);
    }

    /// Slider input for the upper bound; never crosses the lower bound.
    pub fn set_max_price(&mut self, value: f64, bounds: PriceRange) {
        let lower = self.price.lower.max(bounds.lower);
        let upper = value.clamp(lower, bounds.upper);
        self.price = self.normalised_price(lower, upper, bounds);
    }

    /// Collapse a slider range that spans the whole catalog back to
    /// [`PriceRange::FULL`] so it stops counting as an active filter.
    fn normalised_price(&self, lower: f64, upper: f64, bounds: PriceRange) -> PriceRange {
        if lower <= bounds.lower && upper >= bounds.upper {
            PriceRange::FULL
        } else {
            PriceRange::new(lower, upper)
        }
    }
}

/// Options offered by the filter controls, derived from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomFacets {
    pub buildings: Vec<String>,
    pub features: Vec<String>,
    pub price: PriceRange,
    pub max_capacity: u32,
}

impl RoomFacets {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let mut buildings: Vec<String> = Vec::new();
        for room in rooms {
            if !buildings.contains(&room.building) {
                buildings.push(room.building.clone());
            }
        }
        let features: BTreeSet<String> = rooms
            .iter()
            .flat_map(|room| room.features.iter().cloned())
            .collect();

        Self {
            buildings,
            features: features.into_iter().collect(),
            price: PriceRange::covering(rooms).unwrap_or(PriceRange::FULL),
            max_capacity: rooms.iter().map(|r| r.capacity).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, category: RoomCategory, price: f64) -> Room {
        Room {
            id: id.into(),
            name_key: format!("room-{id}-name"),
            description_key: format!("room-{id}-description"),
            capacity: 2,
            size: 30.0,
            base_price: price,
            images: vec![format!("/images/{id}.jpg")],
            features: vec!["king-bed".into(), "Sea-View Balcony".into()],
            view: ViewType::Sea,
            category,
            building: "Beachfront Wing".into(),
            connecting_rooms: false,
        }
    }

    fn ids(rooms: &[&Room]) -> Vec<String> {
        rooms.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn building_match_is_case_insensitive_substring() {
        let rooms = vec![room("a", RoomCategory::Standard, 100.0)];
        let state = FilterState {
            building: Selection::Only("BEACHFRONT".into()),
            ..FilterState::default()
        };
        assert_eq!(state.apply(&rooms).len(), 1);

        let state = FilterState {
            building: Selection::Only("tower".into()),
            ..FilterState::default()
        };
        assert!(state.apply(&rooms).is_empty());
    }

    #[test]
    fn amenity_tags_match_feature_substrings() {
        let rooms = vec![room("a", RoomCategory::Standard, 100.0)];
        let mut state = FilterState::default();
        state.toggle_amenity("balcony");
        state.toggle_amenity("KING");
        assert_eq!(ids(&state.apply(&rooms)), ["a"]);

        state.toggle_amenity("jacuzzi");
        assert!(state.apply(&rooms).is_empty());

        state.toggle_amenity("jacuzzi");
        assert_eq!(state.amenities.len(), 2);
    }

    #[test]
    fn capacity_threshold_is_inclusive() {
        let rooms = vec![room("a", RoomCategory::Family, 100.0)];
        let state = FilterState {
            min_capacity: Some(2),
            ..FilterState::default()
        };
        assert_eq!(state.apply(&rooms).len(), 1);
        let state = FilterState {
            min_capacity: Some(3),
            ..FilterState::default()
        };
        assert!(state.apply(&rooms).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let rooms = vec![room("a", RoomCategory::Standard, 200.0)];
        let state = FilterState {
            price: PriceRange::new(100.0, 200.0),
            ..FilterState::default()
        };
        assert_eq!(state.apply(&rooms).len(), 1);
    }

    #[test]
    fn sliders_never_cross_and_collapse_to_full() {
        let bounds = PriceRange::new(100.0, 500.0);
        let mut state = FilterState::default();

        state.set_max_price(300.0, bounds);
        assert_eq!(state.price, PriceRange::new(100.0, 300.0));

        state.set_min_price(400.0, bounds);
        assert_eq!(state.price, PriceRange::new(300.0, 300.0));

        state.set_min_price(100.0, bounds);
        state.set_max_price(500.0, bounds);
        assert!(state.price.is_full());
        assert!(state.is_default());
    }

    #[test]
    fn active_count_tracks_non_default_selections() {
        let mut state = FilterState::default();
        assert_eq!(state.active_count(), 0);
        state.category = Selection::Only(RoomCategory::Suite);
        state.min_capacity = Some(3);
        state.toggle_amenity("jacuzzi");
        assert_eq!(state.active_count(), 3);
        state.reset();
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn facets_cover_catalog() {
        let rooms = crate::catalog::rooms().items();
        let facets = RoomFacets::from_rooms(rooms);
        assert!(rooms
            .iter()
            .all(|r| facets.buildings.contains(&r.building)));
        assert!(rooms.iter().all(|r| facets.price.contains(r.base_price)));
        assert!(facets.features.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            facets.max_capacity,
            rooms.iter().map(|r| r.capacity).max().unwrap()
        );
    }

    #[test]
    fn covering_empty_slice_is_none() {
        assert!(PriceRange::covering(&[]).is_none());
    }
}
