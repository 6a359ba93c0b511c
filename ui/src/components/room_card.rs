use dioxus::prelude::*;

use crate::catalog::Room;
use crate::core::format::{format_area, format_price};
use crate::{config, i18n, labels, routes, t};

/// Feature tags shown on a card before the "+N" overflow marker.
const CARD_FEATURES: usize = 4;

#[component]
pub fn RoomCard(locale: String, room: Room) -> Element {
    let name = i18n::translate(&room.name_key);
    let summary = i18n::translate(&room.description_key);
    let price = format_price(room.base_price, &config::site().currency);
    let cover = room.cover_image().unwrap_or_default().to_string();
    let features: Vec<String> = room
        .features
        .iter()
        .take(CARD_FEATURES)
        .map(|tag| labels::feature(tag))
        .collect();
    let overflow = room.features.len().saturating_sub(CARD_FEATURES);

    rsx! {
        article { class: "room-card",
            img { class: "room-card__image", src: "{cover}", alt: "{name}" }
            div { class: "room-card__body",
                span { class: "room-card__badge", {labels::room_category(room.category)} }
                h3 { class: "room-card__title", "{name}" }
                p { class: "room-card__summary", "{summary}" }

                ul { class: "room-card__facts",
                    li { {t!("room-capacity", count = (room.capacity as i64))} }
                    li { {format_area(room.size)} }
                    li { {labels::view_type(room.view)} }
                }

                ul { class: "room-card__features",
                    for feature in features {
                        li { key: "{feature}", "{feature}" }
                    }
                    if overflow > 0 {
                        li { class: "room-card__features-more", "+{overflow}" }
                    }
                }

                div { class: "room-card__footer",
                    span { class: "room-card__price",
                        {t!("room-price-from", price = price.as_str())}
                    }
                    div { class: "room-card__actions",
                        Link { class: "button button--ghost", to: routes::room_href(&locale, &room.id),
                            {t!("room-details")}
                        }
                        Link { class: "button button--primary", to: routes::book_room_href(&locale, &room.id),
                            {t!("room-book")}
                        }
                    }
                }
            }
        }
    }
}
