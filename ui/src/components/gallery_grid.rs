use dioxus::prelude::*;

use crate::catalog::GalleryImage;
use crate::{i18n, labels};

/// Thumbnail grid over the filtered gallery; clicking a tile reports its
/// position in `images` so the page can open the lightbox there.
#[component]
pub fn GalleryGrid(images: Vec<GalleryImage>, on_open: EventHandler<usize>) -> Element {
    rsx! {
        ul { class: "gallery-grid",
            for (index, image) in images.into_iter().enumerate() {
                {render_tile(index, image, on_open)}
            }
        }
    }
}

fn render_tile(index: usize, image: GalleryImage, on_open: EventHandler<usize>) -> Element {
    let caption = i18n::translate(&image.caption_key);
    let category = labels::gallery_category(image.category);
    rsx! {
        li { key: "{image.id}", class: "gallery-grid__item",
            button {
                r#type: "button",
                class: "gallery-grid__tile",
                title: "{caption}",
                onclick: move |_| on_open.call(index),
                img { class: "gallery-grid__image", src: "{image.src}", alt: "{caption}" }
                span { class: "gallery-grid__tag", "{category}" }
            }
        }
    }
}
