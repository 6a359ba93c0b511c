use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{require_positive, CatalogRecord};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
    Family,
    Corporate,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewType {
    Sea,
    Garden,
    Pool,
    City,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    pub capacity: u32,
    /// Floor area in square metres.
    pub size: f64,
    /// Nightly rate before taxes.
    pub base_price: f64,
    pub images: Vec<String>,
    /// Free-form feature tags (`"balcony"`, `"rain shower"`, ...).
    pub features: Vec<String>,
    pub view: ViewType,
    pub category: RoomCategory,
    pub building: String,
    #[serde(default)]
    pub connecting_rooms: bool,
}

impl Room {
    /// First image, used as the card cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl CatalogRecord for Room {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be positive".into());
        }
        require_positive("size", self.size)?;
        require_positive("base_price", self.base_price)?;
        if self.images.is_empty() {
            return Err("at least one image is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::rooms;

    #[test]
    fn category_round_trips_through_select_values() {
        assert_eq!("suite".parse::<RoomCategory>().unwrap(), RoomCategory::Suite);
        assert_eq!(RoomCategory::Family.as_ref(), "family");
        assert!("penthouse".parse::<RoomCategory>().is_err());
    }

    #[test]
    fn embedded_rooms_hold_their_invariants() {
        for room in rooms().items() {
            assert!(room.capacity > 0, "{}", room.id);
            assert!(room.base_price > 0.0, "{}", room.id);
            assert!(room.cover_image().is_some(), "{}", room.id);
        }
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let mut room = rooms().items()[0].clone();
        room.capacity = 0;
        assert!(room.check().is_err());
    }
}
