use dioxus::prelude::*;

use super::page_title;
use crate::catalog::{self, DiningVenue};
use crate::components::Hero;
use crate::core::format::format_hours;
use crate::{i18n, labels, t};

#[component]
pub fn Dining(locale: String) -> Element {
    tracing::debug!(locale = %locale, "dining render");
    let venues = catalog::dining().items().to_vec();
    let title = page_title(&t!("nav-dining"));

    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("dining-title"),
            subtitle: t!("dining-subtitle"),
            image: "/images/hero/dining.jpg",
            compact: true,
        }
        section { class: "page page-dining",
            for venue in venues {
                VenueCard { key: "{venue.id}", venue }
            }
        }
    }
}

#[component]
fn VenueCard(venue: DiningVenue) -> Element {
    let name = i18n::translate(&venue.name_key);
    let meals = venue
        .meals
        .iter()
        .map(|meal| labels::meal(*meal))
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        article { class: "venue-card",
            img { class: "venue-card__image", src: "{venue.image}", alt: "{name}" }
            div { class: "venue-card__body",
                span { class: "venue-card__kind", {labels::venue_kind(venue.kind)} }
                h2 { class: "venue-card__title", "{name}" }
                p { class: "venue-card__cuisine", "{i18n::translate(&venue.cuisine_key)}" }
                p { "{i18n::translate(&venue.description_key)}" }
                dl { class: "fact-list",
                    dt { {t!("dining-hours")} }
                    dd { {format_hours(&venue.opens, &venue.closes)} }
                    dt { {t!("dining-meals")} }
                    dd { "{meals}" }
                    dt { {t!("dining-seats-label")} }
                    dd { {t!("dining-seats", count = (venue.seats as i64))} }
                }
            }
        }
    }
}
