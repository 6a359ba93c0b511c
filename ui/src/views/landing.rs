use dioxus::prelude::*;

use crate::i18n;

/// `/`: send the visitor to the best matching locale.
///
/// The language list is only read inside the effect, which runs on the
/// client; a server render just emits the fallback link.
#[component]
pub fn Landing() -> Element {
    use_effect(move || {
        let target = format!("/{}", i18n::preferred_locale());
        tracing::debug!("[i18n] redirecting to {target}");
        navigator().replace(target);
    });

    rsx! {
        section { class: "page page-landing",
            Link { class: "button button--primary", to: format!("/{}", i18n::FALLBACK), "Tidewater Bay Resort" }
        }
    }
}
