use dioxus::prelude::*;
use strum::IntoEnumIterator;

use super::page_title;
use crate::catalog::{self, ConferenceHall, HallLayout};
use crate::components::Hero;
use crate::core::format::format_area;
use crate::routes::Page;
use crate::{i18n, labels, t};

#[component]
pub fn Conferences(locale: String) -> Element {
    let halls = catalog::conference_halls().items().to_vec();
    let title = page_title(&t!("nav-conferences"));

    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("conferences-title"),
            subtitle: t!("conferences-subtitle"),
            image: "/images/hero/conferences.jpg",
            compact: true,
            Link { class: "button button--primary", to: Page::Contact.href(&locale), {t!("conferences-cta")} }
        }
        section { class: "page page-conferences",
            for hall in halls {
                HallCard { key: "{hall.id}", hall }
            }
        }
    }
}

#[component]
fn HallCard(hall: ConferenceHall) -> Element {
    let name = i18n::translate(&hall.name_key);
    let features: Vec<String> = hall.features.iter().map(|tag| labels::feature(tag)).collect();
    let rows: Vec<(String, u32)> = HallLayout::iter()
        .map(|layout| (labels::hall_layout(layout), hall.capacity.for_layout(layout)))
        .collect();

    rsx! {
        article { class: "hall-card",
            img { class: "hall-card__image", src: "{hall.image}", alt: "{name}" }
            div { class: "hall-card__body",
                h2 { class: "hall-card__title", "{name}" }
                p { "{i18n::translate(&hall.description_key)}" }
                p { class: "hall-card__area", {t!("conferences-area", area = format_area(hall.area))} }
                table { class: "capacity-table",
                    caption { {t!("conferences-capacity")} }
                    tbody {
                        for (layout, seats) in rows {
                            tr { key: "{layout}",
                                th { scope: "row", "{layout}" }
                                td { "{seats}" }
                            }
                        }
                    }
                }
                ul { class: "tag-list",
                    for feature in features {
                        li { key: "{feature}", class: "tag-list__item", "{feature}" }
                    }
                }
            }
        }
    }
}
