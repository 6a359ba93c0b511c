use dioxus::prelude::*;

use super::{AppNavbar, SiteFooter};
use crate::i18n::{self, ActiveLocale};
use crate::views::NotFound;

/// Page chrome shared by the platform layouts: navbar, routed content, footer.
///
/// `locale` is the route's first segment. Everything below renders in that
/// locale through an [`ActiveLocale`] context; an unsupported segment shows
/// the not-found page in the fallback language instead of `children`.
#[component]
pub fn SiteFrame(locale: String, path: String, children: Element) -> Element {
    let Some(active) = ActiveLocale::new(&locale) else {
        let segments = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        return rsx! {
            AppNavbar { locale: i18n::FALLBACK.to_string(), path: path.clone() }
            main { class: "site-main", NotFound { segments } }
            SiteFooter { locale: i18n::FALLBACK.to_string() }
        };
    };

    // Keyed so a language switch remounts the subtree with a fresh context.
    rsx! {
        LocaleScope { key: "{locale}", active,
            document::Meta { name: "language", content: "{locale}" }
            AppNavbar { locale: locale.clone(), path }
            main { class: "site-main", lang: "{locale}", {children} }
            SiteFooter { locale: locale.clone() }
        }
    }
}

#[component]
fn LocaleScope(active: ActiveLocale, children: Element) -> Element {
    use_context_provider(|| active);
    rsx! { {children} }
}
