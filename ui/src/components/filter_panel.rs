use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::catalog::{RoomCategory, ViewType};
use crate::config;
use crate::core::format::format_price;
use crate::filter::{FilterState, RoomFacets, Selection, ALL};
use crate::{labels, t};

/// Controls for the rooms listing. Owns no state: every control writes
/// straight into the page's `FilterState` signal.
#[component]
pub fn RoomFilterPanel(filters: Signal<FilterState>, facets: RoomFacets) -> Element {
    let mut state = filters;
    let current = filters();
    let bounds = facets.price;
    let currency = &config::site().currency;

    let shown_min = current.price.lower.max(bounds.lower);
    let shown_max = current.price.upper.min(bounds.upper);
    let min_label = format_price(shown_min, currency);
    let max_label = format_price(shown_max, currency);
    let active = current.active_count();
    let min_capacity = current
        .min_capacity
        .map(|n| n.to_string())
        .unwrap_or_default();

    let amenity_rows: Vec<(String, String, bool)> = facets
        .features
        .iter()
        .map(|tag| (tag.clone(), labels::feature(tag), current.amenities.contains(tag)))
        .collect();

    rsx! {
        aside { class: "filter-panel",
            div { class: "filter-panel__header",
                h2 { {t!("filters-title")} }
                if active > 0 {
                    span { class: "filter-panel__badge", "{active}" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost filter-panel__reset",
                    disabled: current.is_default(),
                    onclick: move |_| state.with_mut(FilterState::reset),
                    {t!("filters-reset")}
                }
            }

            label { class: "filter-panel__field",
                span { {t!("filters-category")} }
                select {
                    value: "{current.category.control_value()}",
                    onchange: move |evt: FormEvent| {
                        state.with_mut(|f| f.category = Selection::from_control(&evt.value()));
                    },
                    option { value: ALL, {t!("filters-any")} }
                    for category in RoomCategory::iter() {
                        option { key: "{category}", value: "{category}", {labels::room_category(category)} }
                    }
                }
            }

            label { class: "filter-panel__field",
                span { {t!("filters-building")} }
                select {
                    value: "{current.building.control_value()}",
                    onchange: move |evt: FormEvent| {
                        state.with_mut(|f| f.building = Selection::from_control(&evt.value()));
                    },
                    option { value: ALL, {t!("filters-any")} }
                    for building in facets.buildings.iter() {
                        option { key: "{building}", value: "{building.to_lowercase()}", "{building}" }
                    }
                }
            }

            label { class: "filter-panel__field",
                span { {t!("filters-view")} }
                select {
                    value: "{current.view.control_value()}",
                    onchange: move |evt: FormEvent| {
                        state.with_mut(|f| f.view = Selection::from_control(&evt.value()));
                    },
                    option { value: ALL, {t!("filters-any")} }
                    for view in ViewType::iter() {
                        option { key: "{view}", value: "{view}", {labels::view_type(view)} }
                    }
                }
            }

            label { class: "filter-panel__field",
                span { {t!("filters-guests")} }
                select {
                    value: "{min_capacity}",
                    onchange: move |evt: FormEvent| {
                        state.with_mut(|f| f.min_capacity = evt.value().parse().ok());
                    },
                    option { value: "", {t!("filters-any")} }
                    for n in 1..=facets.max_capacity {
                        option { key: "{n}", value: "{n}", {t!("filters-guests-at-least", count = (n as i64))} }
                    }
                }
            }

            fieldset { class: "filter-panel__field filter-panel__price",
                legend { {t!("filters-price")} }
                span { class: "filter-panel__price-values", "{min_label} – {max_label}" }
                input {
                    r#type: "range",
                    aria_label: t!("filters-price-min"),
                    min: "{bounds.lower}",
                    max: "{bounds.upper}",
                    step: "5",
                    value: "{shown_min}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            state.with_mut(|f| f.set_min_price(value, bounds));
                        }
                    },
                }
                input {
                    r#type: "range",
                    aria_label: t!("filters-price-max"),
                    min: "{bounds.lower}",
                    max: "{bounds.upper}",
                    step: "5",
                    value: "{shown_max}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            state.with_mut(|f| f.set_max_price(value, bounds));
                        }
                    },
                }
            }

            fieldset { class: "filter-panel__field filter-panel__amenities",
                legend { {t!("filters-amenities")} }
                for (tag, label, checked) in amenity_rows {
                    {render_amenity_toggle(tag, label, checked, filters)}
                }
            }
        }
    }
}

fn render_amenity_toggle(
    tag: String,
    label: String,
    checked: bool,
    mut filters: Signal<FilterState>,
) -> Element {
    let id = format!("amenity-{tag}");
    rsx! {
        label { class: "filter-panel__check", r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |_| filters.with_mut(|f| f.toggle_amenity(&tag)),
            }
            span { "{label}" }
        }
    }
}
