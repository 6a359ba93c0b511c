use serde::{Deserialize, Serialize};

use super::CatalogRecord;

/// Icon identifiers stored in data; components map them to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Pool,
    Spa,
    Fitness,
    Beach,
    KidsClub,
    Wifi,
    Parking,
    Shuttle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub title_key: String,
    pub description_key: String,
    pub icon: IconName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl CatalogRecord for Amenity {
    fn id(&self) -> &str {
        &self.id
    }
}
