use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::config;
use crate::i18n;
use crate::routes::{self, Page};
use crate::t;

// Navbar stylesheet (inlined as well for native release builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header: brand, page links, booking CTA and locale switcher.
///
/// `locale` is the route's locale segment and `path` the full current path
/// (`Route::to_string()` in the platform crate). Switching language
/// navigates to the same page under the new locale prefix, so the URL stays
/// the single owner of the active language.
#[component]
pub fn AppNavbar(locale: String, path: String) -> Element {
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let mut menu_open = use_signal(|| false);

    let on_change = {
        let path = path.clone();
        move |evt: FormEvent| {
            let target = evt.value();
            if i18n::is_supported(&target) {
                tracing::debug!("[i18n] switching locale to {target}");
                navigator().push(routes::relocalize(&path, &target));
            }
        }
    };

    let brand = config::site().resort_name.clone();
    let home_href = Page::Home.href(&locale);
    let booking_href = Page::Booking.href(&locale);
    let current = path.trim_end_matches('/').to_string();

    let links = Page::iter().filter(|page| page.in_navbar()).map(|page| {
        let href = page.href(&locale);
        let class = if current == href {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        };
        (href, page.label(), class)
    });
    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    Link { class: "navbar__brand-link", to: home_href,
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_expanded: "{menu_open()}",
                    aria_label: t!("nav-menu-label"),
                    onclick: move |_| menu_open.set(!menu_open()),
                    "☰"
                }

                nav { class: "{links_class}",
                    for (href, label, class) in links {
                        Link {
                            key: "{href}",
                            class: "{class}",
                            to: href.clone(),
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    Link { class: "navbar__cta button button--primary", to: booking_href,
                        {t!("nav-booking")}
                    }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{locale}",
                            onchange: on_change,
                            for code in langs().into_iter() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == locale,
                                    "{i18n::language_name(&code)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
