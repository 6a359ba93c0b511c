use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use super::CatalogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VenueKind {
    Restaurant,
    Bar,
    Cafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Drinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningVenue {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    pub cuisine_key: String,
    pub kind: VenueKind,
    pub meals: Vec<Meal>,
    /// `HH:MM`, local time.
    pub opens: String,
    pub closes: String,
    pub seats: u32,
    pub image: String,
}

impl DiningVenue {
    pub fn serves(&self, meal: Meal) -> bool {
        self.meals.contains(&meal)
    }
}

impl CatalogRecord for DiningVenue {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), String> {
        if self.seats == 0 {
            return Err("seats must be positive".into());
        }
        if self.meals.is_empty() {
            return Err("a venue must serve at least one meal".into());
        }
        for time in [&self.opens, &self.closes] {
            if !is_clock_time(time) {
                return Err(format!("`{time}` is not an HH:MM time"));
            }
        }
        Ok(())
    }
}

fn is_clock_time(raw: &str) -> bool {
    let Some((hours, minutes)) = raw.split_once(':') else {
        return false;
    };
    matches!(
        (hours.parse::<u8>(), minutes.parse::<u8>()),
        (Ok(h), Ok(m)) if hours.len() == 2 && minutes.len() == 2 && h < 24 && m < 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_times_are_strict() {
        assert!(is_clock_time("07:30"));
        assert!(is_clock_time("23:59"));
        assert!(!is_clock_time("7:30"));
        assert!(!is_clock_time("24:00"));
        assert!(!is_clock_time("noon"));
    }

    #[test]
    fn venues_report_served_meals() {
        let venue = crate::catalog::dining()
            .items()
            .iter()
            .find(|v| v.kind == VenueKind::Bar)
            .expect("at least one bar");
        assert!(venue.serves(Meal::Drinks));
    }
}
