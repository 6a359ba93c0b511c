use dioxus::prelude::*;

use super::page_title;
use crate::catalog::{self, RoomCategory};
use crate::components::{Hero, Icon, RoomCard};
use crate::routes::Page;
use crate::{config, i18n, t};

/// Rooms featured on the landing page: the first of each premium category.
const FEATURED_CATEGORIES: [RoomCategory; 3] =
    [RoomCategory::Deluxe, RoomCategory::Suite, RoomCategory::Family];

#[component]
pub fn Home(locale: String) -> Element {
    tracing::debug!(locale = %locale, "home render");

    let rooms = catalog::rooms().items();
    let featured: Vec<_> = FEATURED_CATEGORIES
        .iter()
        .filter_map(|category| rooms.iter().find(|r| r.category == *category))
        .cloned()
        .collect();
    let highlights: Vec<_> = catalog::amenities().items().iter().take(4).cloned().collect();
    let title = page_title(&t!("nav-home"));
    let resort = config::site().resort_name.clone();

    rsx! {
        document::Title { "{title}" }

        Hero {
            title: t!("home-hero-title", resort = resort.as_str()),
            subtitle: t!("home-hero-subtitle"),
            image: "/images/hero/home.jpg",
            Link { class: "button button--primary", to: Page::Booking.href(&locale), {t!("home-cta-book")} }
            Link { class: "button button--ghost", to: Page::Rooms.href(&locale), {t!("home-cta-rooms")} }
        }

        section { class: "page page-home",
            div { class: "section",
                h2 { class: "section__title", {t!("home-intro-title")} }
                p { class: "section__lead", {t!("home-intro-body")} }
            }

            div { class: "section",
                div { class: "section__header",
                    h2 { class: "section__title", {t!("home-rooms-title")} }
                    Link { class: "section__more", to: Page::Rooms.href(&locale), {t!("home-see-all")} }
                }
                div { class: "card-grid",
                    for room in featured {
                        RoomCard { key: "{room.id}", locale: locale.clone(), room }
                    }
                }
            }

            div { class: "section",
                div { class: "section__header",
                    h2 { class: "section__title", {t!("home-amenities-title")} }
                    Link { class: "section__more", to: Page::Amenities.href(&locale), {t!("home-see-all")} }
                }
                ul { class: "feature-strip",
                    for amenity in highlights {
                        li { key: "{amenity.id}", class: "feature-strip__item",
                            Icon { name: amenity.icon }
                            span { "{i18n::translate(&amenity.title_key)}" }
                        }
                    }
                }
            }

            div { class: "section section--split",
                div { class: "teaser",
                    h2 { class: "section__title", {t!("home-dining-title")} }
                    p { {t!("home-dining-body")} }
                    Link { class: "button button--ghost", to: Page::Dining.href(&locale), {t!("nav-dining")} }
                }
                div { class: "teaser",
                    h2 { class: "section__title", {t!("home-events-title")} }
                    p { {t!("home-events-body")} }
                    Link { class: "button button--ghost", to: Page::Conferences.href(&locale), {t!("nav-conferences")} }
                }
            }
        }
    }
}
