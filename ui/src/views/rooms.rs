use dioxus::prelude::*;
use strum::IntoEnumIterator;

use super::page_title;
use crate::catalog::{self, Room};
use crate::components::{Hero, RoomCard, RoomFilterPanel};
use crate::filter::{FilterState, RoomFacets, SortOrder};
use crate::{labels, t};

/// Filterable rooms listing.
///
/// Filter and sort state live in this page's signals and are dropped when
/// the page unmounts. The visible list is recomputed from the full catalog
/// on every render.
#[component]
pub fn Rooms(locale: String) -> Element {
    let mut filters = use_signal(FilterState::default);
    let mut sort = use_signal(SortOrder::default);
    let facets = use_hook(|| RoomFacets::from_rooms(catalog::rooms().items()));

    let mut visible = filters().apply(catalog::rooms().items());
    sort().apply(&mut visible);
    let count = visible.len();
    let total = catalog::rooms().len();
    let visible: Vec<Room> = visible.into_iter().cloned().collect();

    let title = page_title(&t!("nav-rooms"));

    rsx! {
        document::Title { "{title}" }

        Hero {
            title: t!("rooms-title"),
            subtitle: t!("rooms-subtitle"),
            image: "/images/hero/rooms.jpg",
            compact: true,
        }

        section { class: "page page-rooms",
            RoomFilterPanel { filters, facets }

            div { class: "page-rooms__results",
                div { class: "results-bar",
                    p { class: "results-bar__count", role: "status",
                        {t!("rooms-results-count", count = (count as i64), total = (total as i64))}
                    }
                    label { class: "results-bar__sort",
                        span { {t!("rooms-sort-label")} }
                        select {
                            value: "{sort().as_ref()}",
                            onchange: move |evt: FormEvent| {
                                sort.set(evt.value().parse().unwrap_or_default());
                            },
                            for order in SortOrder::iter() {
                                option { key: "{order.as_ref()}", value: "{order.as_ref()}", {labels::sort_order(order)} }
                            }
                        }
                    }
                }

                if visible.is_empty() {
                    div { class: "empty-state",
                        h2 { {t!("rooms-empty-title")} }
                        p { {t!("rooms-empty-body")} }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| filters.with_mut(FilterState::reset),
                            {t!("filters-reset")}
                        }
                    }
                } else {
                    div { class: "card-grid",
                        for room in visible {
                            RoomCard { key: "{room.id}", locale: locale.clone(), room }
                        }
                    }
                }
            }
        }
    }
}
