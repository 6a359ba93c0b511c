use dioxus::prelude::*;

use super::page_title;
use crate::i18n;
use crate::routes::Page;
use crate::t;

/// Catch-all for unknown paths and unsupported locale prefixes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "no page matches");

    let locale = match segments.first() {
        Some(first) if i18n::is_supported(first) => first.clone(),
        _ => i18n::current_language().to_string(),
    };
    let title = page_title(&t!("not-found-title"));

    rsx! {
        document::Title { "{title}" }
        section { class: "page page-missing",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.as_str())} }
            Link { class: "button button--primary", to: Page::Home.href(&locale), {t!("not-found-home")} }
        }
    }
}
