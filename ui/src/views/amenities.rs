use dioxus::prelude::*;

use super::page_title;
use crate::catalog;
use crate::components::{Hero, Icon};
use crate::{i18n, t};

#[component]
pub fn Amenities(locale: String) -> Element {
    tracing::debug!(locale = %locale, "amenities render");
    let amenities = catalog::amenities().items().to_vec();
    let title = page_title(&t!("nav-amenities"));

    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("amenities-title"),
            subtitle: t!("amenities-subtitle"),
            image: "/images/hero/amenities.jpg",
            compact: true,
        }
        section { class: "page page-amenities",
            ul { class: "amenity-grid",
                for amenity in amenities {
                    li { key: "{amenity.id}", class: "amenity-grid__item",
                        Icon { name: amenity.icon }
                        h2 { class: "amenity-grid__title", "{i18n::translate(&amenity.title_key)}" }
                        p { "{i18n::translate(&amenity.description_key)}" }
                        if let Some(hours) = amenity.hours {
                            p { class: "amenity-grid__hours", {t!("amenities-hours", hours = hours.as_str())} }
                        }
                    }
                }
            }
        }
    }
}
