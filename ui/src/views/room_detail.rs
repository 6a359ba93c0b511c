use dioxus::prelude::*;

use super::page_title;
use crate::catalog;
use crate::components::Hero;
use crate::core::format::{format_area, format_price};
use crate::routes::{self, Page};
use crate::{config, i18n, labels, t};

#[component]
pub fn RoomDetail(locale: String, id: String) -> Element {
    let Some(room) = catalog::rooms().get(&id) else {
        tracing::warn!(room = %id, "unknown room requested");
        return rsx! { MissingRoom { locale } };
    };

    let name = i18n::translate(&room.name_key);
    let description = i18n::translate(&room.description_key);
    let price = format_price(room.base_price, &config::site().currency);
    let cover = room.cover_image().unwrap_or_default().to_string();
    let features: Vec<String> = room.features.iter().map(|tag| labels::feature(tag)).collect();
    let title = page_title(&name);

    rsx! {
        document::Title { "{title}" }

        Hero {
            title: name.clone(),
            subtitle: labels::room_category(room.category),
            image: cover,
            compact: true,
        }

        section { class: "page page-room",
            div { class: "page-room__main",
                p { class: "section__lead", "{description}" }

                div { class: "photo-strip",
                    for src in room.images.iter() {
                        img { key: "{src}", class: "photo-strip__image", src: "{src}", alt: "{name}" }
                    }
                }

                h2 { class: "section__title", {t!("room-features-title")} }
                ul { class: "tag-list",
                    for feature in features {
                        li { key: "{feature}", class: "tag-list__item", "{feature}" }
                    }
                }
            }

            aside { class: "page-room__sidebar",
                dl { class: "fact-list",
                    dt { {t!("room-fact-guests")} }
                    dd { {t!("room-capacity", count = (room.capacity as i64))} }
                    dt { {t!("room-fact-size")} }
                    dd { {format_area(room.size)} }
                    dt { {t!("room-fact-view")} }
                    dd { {labels::view_type(room.view)} }
                    dt { {t!("room-fact-building")} }
                    dd { "{room.building}" }
                }
                if room.connecting_rooms {
                    p { class: "page-room__note", {t!("room-connecting")} }
                }
                p { class: "page-room__price", {t!("room-price-from", price = price.as_str())} }
                Link { class: "button button--primary", to: routes::book_room_href(&locale, &room.id),
                    {t!("room-book")}
                }
                Link { class: "button button--ghost", to: Page::Rooms.href(&locale),
                    {t!("room-back")}
                }
            }
        }
    }
}

/// Shown for `/rooms/{id}` and `/rooms/{id}/book` with an unknown id.
#[component]
pub(crate) fn MissingRoom(locale: String) -> Element {
    let title = page_title(&t!("room-missing-title"));
    rsx! {
        document::Title { "{title}" }
        section { class: "page page-missing",
            h1 { {t!("room-missing-title")} }
            p { {t!("room-missing-body")} }
            Link { class: "button button--primary", to: Page::Rooms.href(&locale), {t!("room-back")} }
        }
    }
}
