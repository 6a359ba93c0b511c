use dioxus::prelude::*;

use super::page_title;
use crate::catalog::{self, GalleryCategory, GalleryImage};
use crate::components::{GalleryGrid, Hero, LightboxOverlay};
use crate::filter::{GalleryFilter, Selection};
use crate::lightbox::Lightbox;
use crate::{labels, t};

/// Photo gallery with category tabs and a lightbox over the filtered set.
#[component]
pub fn Gallery(locale: String) -> Element {
    tracing::debug!(locale = %locale, "gallery render");
    let filter = use_signal(GalleryFilter::default);
    let mut lightbox = use_signal(Lightbox::default);

    let all = catalog::gallery().items();
    let visible: Vec<GalleryImage> = filter().apply(all).into_iter().cloned().collect();
    let len = visible.len();
    let active = filter().category;

    let mut tabs: Vec<(Selection<GalleryCategory>, String)> =
        vec![(Selection::All, t!("gallery-all", count = (all.len() as i64)))];
    tabs.extend(GalleryFilter::tabs(all).into_iter().map(|(category, count)| {
        let label = format!("{} ({count})", labels::gallery_category(category));
        (Selection::Only(category), label)
    }));

    let title = page_title(&t!("nav-gallery"));

    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("gallery-title"),
            subtitle: t!("gallery-subtitle"),
            image: "/images/hero/gallery.jpg",
            compact: true,
        }
        section { class: "page page-gallery",
            div { class: "tabs", role: "tablist",
                for (selection, label) in tabs {
                    {render_tab(selection.clone(), label, selection == active, filter, lightbox)}
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", {t!("gallery-empty")} }
            } else {
                GalleryGrid {
                    images: visible.clone(),
                    on_open: move |index: usize| lightbox.set(Lightbox::open(index, len)),
                }
            }

            LightboxOverlay { images: visible, state: lightbox }
        }
    }
}

fn render_tab(
    selection: Selection<GalleryCategory>,
    label: String,
    selected: bool,
    mut filter: Signal<GalleryFilter>,
    mut lightbox: Signal<Lightbox>,
) -> Element {
    let class = if selected { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
    rsx! {
        button {
            r#type: "button",
            role: "tab",
            class: "{class}",
            aria_selected: "{selected}",
            onclick: move |_| {
                let next = GalleryFilter { category: selection.clone() };
                let len = next.apply(catalog::gallery().items()).len();
                filter.set(next);
                lightbox.set(lightbox().rescope(len));
            },
            "{label}"
        }
    }
}
