use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use super::{require_positive, CatalogRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HallLayout {
    Theater,
    Classroom,
    Banquet,
    Reception,
}

/// Seated/standing capacity per room layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallCapacity {
    pub theater: u32,
    pub classroom: u32,
    pub banquet: u32,
    pub reception: u32,
}

impl HallCapacity {
    pub fn for_layout(&self, layout: HallLayout) -> u32 {
        match layout {
            HallLayout::Theater => self.theater,
            HallLayout::Classroom => self.classroom,
            HallLayout::Banquet => self.banquet,
            HallLayout::Reception => self.reception,
        }
    }

    pub fn largest(&self) -> u32 {
        self.theater
            .max(self.classroom)
            .max(self.banquet)
            .max(self.reception)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceHall {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    pub area: f64,
    pub capacity: HallCapacity,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
}

impl CatalogRecord for ConferenceHall {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), String> {
        require_positive("area", self.area)?;
        if self.capacity.largest() == 0 {
            return Err("hall must seat at least one guest".into());
        }
        Ok(())
    }
}
