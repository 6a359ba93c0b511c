use strum::IntoEnumIterator;

use super::Selection;
use crate::catalog::{GalleryCategory, GalleryImage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryFilter {
    pub category: Selection<GalleryCategory>,
}

impl GalleryFilter {
    pub fn apply<'a>(&self, images: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        images
            .iter()
            .filter(|image| self.category.admits(&image.category))
            .collect()
    }

    /// Categories that have at least one image, with their counts, in enum order.
    pub fn tabs(images: &[GalleryImage]) -> Vec<(GalleryCategory, usize)> {
        GalleryCategory::iter()
            .map(|category| {
                let count = images.iter().filter(|i| i.category == category).count();
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
