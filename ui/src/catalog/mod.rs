//! Static catalogs shown by the site: rooms, dining venues, amenities,
//! conference halls and gallery photos.
//!
//! Each catalog is a JSON file under `data/`, embedded at compile time with
//! `rust-embed` and deserialized once on first access. Catalogs are
//! read-only for the lifetime of the process; the only accessor hands out
//! the full ordered slice (plus lookup by identifier).
//!
//! Display copy is not stored here. Records carry Fluent message IDs
//! (`name_key`, `description_key`, ...) which views resolve with
//! [`crate::i18n::translate`].

use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod amenities;
mod conferences;
mod dining;
mod gallery;
mod rooms;

pub use amenities::{Amenity, IconName};
pub use conferences::{ConferenceHall, HallCapacity, HallLayout};
pub use dining::{DiningVenue, Meal, VenueKind};
pub use gallery::{GalleryCategory, GalleryImage};
pub use rooms::{Room, RoomCategory, ViewType};

/// Embedded `data/` folder (catalogs and `site.json`).
#[derive(Embed)]
#[folder = "data"]
pub(crate) struct SiteData;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("`{0}` is not embedded in the build")]
    Missing(String),
    #[error("`{name}` is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{name}` repeats identifier `{id}`")]
    DuplicateId { name: String, id: String },
    #[error("record `{id}` in `{name}` is invalid: {reason}")]
    InvalidRecord {
        name: String,
        id: String,
        reason: String,
    },
}

/// A record that can live in a [`Catalog`].
pub trait CatalogRecord {
    fn id(&self) -> &str;

    /// Record-level invariants (positive figures, non-empty references).
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Immutable ordered collection of records with unique identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: CatalogRecord> Catalog<T> {
    /// Build a catalog, rejecting duplicate identifiers and invalid records.
    pub fn new(name: &str, items: Vec<T>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId {
                    name: name.to_string(),
                    id: item.id().to_string(),
                });
            }
            item.check().map_err(|reason| CatalogError::InvalidRecord {
                name: name.to_string(),
                id: item.id().to_string(),
                reason,
            })?;
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Full ordered sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: CatalogRecord + DeserializeOwned> Catalog<T> {
    pub fn from_json(name: &str, raw: &[u8]) -> Result<Self, CatalogError> {
        let items: Vec<T> =
            serde_json::from_slice(raw).map_err(|source| CatalogError::Malformed {
                name: name.to_string(),
                source,
            })?;
        Self::new(name, items)
    }
}

pub(crate) fn embedded_source(file: &str) -> Result<Cow<'static, [u8]>, CatalogError> {
    SiteData::get(file)
        .map(|embedded| embedded.data)
        .ok_or_else(|| CatalogError::Missing(file.to_string()))
}

fn load_embedded<T: CatalogRecord + DeserializeOwned>(file: &str) -> Catalog<T> {
    match embedded_source(file).and_then(|raw| Catalog::from_json(file, &raw)) {
        Ok(catalog) => {
            tracing::debug!(file, records = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            tracing::error!("catalog unavailable: {err}");
            Catalog::empty()
        }
    }
}

static ROOMS: Lazy<Catalog<Room>> = Lazy::new(|| load_embedded("rooms.json"));
static DINING: Lazy<Catalog<DiningVenue>> = Lazy::new(|| load_embedded("dining.json"));
static AMENITIES: Lazy<Catalog<Amenity>> = Lazy::new(|| load_embedded("amenities.json"));
static HALLS: Lazy<Catalog<ConferenceHall>> = Lazy::new(|| load_embedded("conferences.json"));
static GALLERY: Lazy<Catalog<GalleryImage>> = Lazy::new(|| load_embedded("gallery.json"));

pub fn rooms() -> &'static Catalog<Room> {
    &ROOMS
}

pub fn dining() -> &'static Catalog<DiningVenue> {
    &DINING
}

pub fn amenities() -> &'static Catalog<Amenity> {
    &AMENITIES
}

pub fn conference_halls() -> &'static Catalog<ConferenceHall> {
    &HALLS
}

pub fn gallery() -> &'static Catalog<GalleryImage> {
    &GALLERY
}

pub(crate) fn require_positive(label: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{label} must be positive, got {value}"))
    }
}
