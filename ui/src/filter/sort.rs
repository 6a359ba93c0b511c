use strum::{AsRefStr, EnumIter, EnumString};

use crate::catalog::Room;

/// Presentation order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    CapacityDesc,
}

impl SortOrder {
    /// Stable in-place sort; ties keep catalog order.
    pub fn apply(self, rooms: &mut [&Room]) {
        match self {
            Self::Recommended => {}
            Self::PriceAsc => rooms.sort_by(|a, b| a.base_price.total_cmp(&b.base_price)),
            Self::PriceDesc => rooms.sort_by(|a, b| b.base_price.total_cmp(&a.base_price)),
            Self::CapacityDesc => rooms.sort_by(|a, b| b.capacity.cmp(&a.capacity)),
        }
    }
}
