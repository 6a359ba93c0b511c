use dioxus::prelude::*;

use crate::catalog::IconName;
use crate::labels;

/// Presentation lookup for icon names stored in catalog data.
fn glyph(name: IconName) -> &'static str {
    match name {
        IconName::Pool => "🏊",
        IconName::Spa => "💆",
        IconName::Fitness => "🏋",
        IconName::Beach => "🏖",
        IconName::KidsClub => "🧸",
        IconName::Wifi => "📶",
        IconName::Parking => "🅿",
        IconName::Shuttle => "🚐",
    }
}

#[component]
pub fn Icon(name: IconName) -> Element {
    rsx! {
        span { class: "icon", role: "img", aria_label: labels::icon(name), {glyph(name)} }
    }
}
