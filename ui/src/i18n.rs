//! Internationalization (i18n) support for `tidewater-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/tidewater-ui.ftl   (fallback/reference)
//!   es-ES/tidewater-ui.ftl
//!   fr-FR/tidewater-ui.ftl
//! ```
//!
//! The active locale is owned by the URL: every page lives under
//! `/{locale}/...`. There is one immutable loader per embedded locale, and
//! the site layout provides the route's locale to its subtree as an
//! [`ActiveLocale`] context. `t!` and [`translate`] resolve against the
//! loader of the nearest [`ActiveLocale`], or the fallback outside any
//! localized subtree. Nothing is switched globally, so concurrent renders
//! (server side rendering) never see each other's language.
//!
//! Catalog records carry message IDs as data, so besides the `t!` macro
//! (literal, compile-time checked) there is [`translate`] for runtime IDs.
//!
//! To add a new locale:
//! 1. Copy `en-US/tidewater-ui.ftl` to `i18n/<lang-id>/tidewater-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
use std::collections::BTreeMap;

use dioxus::prelude::try_consume_context;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
///
/// ```ignore
/// t!("nav-home")
/// t!("rooms-results-count", count = 3, total = 10)
/// ```
///
/// This expands to `fl!(loader(), ...)`, so the lookup uses the locale of
/// the component currently rendering.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader(), $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader(), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "tidewater-ui";

/// Locale used when nothing better matches; also the reference translation.
pub const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// One loader per embedded locale, each with the fallback bundle behind it.
static LOADERS: Lazy<BTreeMap<String, FluentLanguageLoader>> = Lazy::new(|| {
    available_languages()
        .into_iter()
        .filter_map(|tag| match build_loader(&tag) {
            Ok(loader) => Some((tag, loader)),
            Err(err) => {
                tracing::error!("[i18n] failed loading {tag} bundle ({err})");
                None
            }
        })
        .collect()
});

/// Loader used when a locale has no bundle (and outside localized subtrees).
static FALLBACK_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    build_loader(FALLBACK).unwrap_or_else(|err| {
        tracing::error!("[i18n] failed loading fallback bundle ({err})");
        FluentLanguageLoader::new(DOMAIN, LanguageIdentifier::default())
    })
});

fn build_loader(tag: &str) -> Result<FluentLanguageLoader, I18nEmbedError> {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .map_err(|err| I18nEmbedError::ErrorParsingLocale(FALLBACK.to_string(), err))?;
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|err| I18nEmbedError::ErrorParsingLocale(tag.to_string(), err))?;
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    i18n_embed::select(&loader, &Localizations, &[lang])?;
    Ok(loader)
}

/// The locale a component subtree renders in.
///
/// Provided as context by the site layout; only embedded locales can be
/// constructed, so lookups through it always hit a loaded bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLocale(&'static str);

impl ActiveLocale {
    /// `None` for locales that are not embedded.
    pub fn new(locale: &str) -> Option<Self> {
        LOADERS
            .get_key_value(locale)
            .map(|(tag, _)| Self(tag.as_str()))
    }

    pub fn tag(self) -> &'static str {
        self.0
    }

    pub fn loader(self) -> &'static FluentLanguageLoader {
        loader_for(self.0)
    }
}

/// Build every locale bundle up front (idempotent).
pub fn init() {
    Lazy::force(&LOADERS);
    Lazy::force(&FALLBACK_LOADER);
}

/// Loader for `locale`, or the fallback loader for unknown tags.
pub fn loader_for(locale: &str) -> &'static FluentLanguageLoader {
    LOADERS.get(locale).unwrap_or(&*FALLBACK_LOADER)
}

/// Loader for the component currently rendering.
pub fn loader() -> &'static FluentLanguageLoader {
    match try_consume_context::<ActiveLocale>() {
        Some(active) => active.loader(),
        None => &*FALLBACK_LOADER,
    }
}

/// Locale of the component currently rendering ([`FALLBACK`] outside a
/// localized subtree).
pub fn current_language() -> &'static str {
    try_consume_context::<ActiveLocale>()
        .map(ActiveLocale::tag)
        .unwrap_or(FALLBACK)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

pub fn is_supported(locale: &str) -> bool {
    available_languages().iter().any(|l| l == locale)
}

/// Resolve a message ID only known at runtime (catalog data).
pub fn translate(key: &str) -> String {
    loader().get(key)
}

/// Resolve a runtime message ID in an explicit locale.
pub fn translate_in(locale: &str, key: &str) -> String {
    loader_for(locale).get(key)
}

/// Native display name of a locale, for the language switcher.
pub fn language_name(locale: &str) -> &'static str {
    match locale {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        _ => "?",
    }
}

/// Pick the best embedded locale for the user's requested languages.
///
/// Reads the browser (wasm) or OS language list, so call it from client-side
/// code such as an effect, never while rendering on a server.
pub fn preferred_locale() -> String {
    negotiate(&requested_languages(), &available_languages())
}

/// Exact tag match first, then same primary language, else [`FALLBACK`].
pub fn negotiate(requested: &[LanguageIdentifier], available: &[String]) -> String {
    let candidates: Vec<(LanguageIdentifier, &String)> = available
        .iter()
        .filter_map(|tag| tag.parse().ok().map(|id| (id, tag)))
        .collect();

    for wanted in requested {
        if let Some((_, tag)) = candidates.iter().find(|(id, _)| id == wanted) {
            return (*tag).clone();
        }
        if let Some((_, tag)) = candidates
            .iter()
            .find(|(id, _)| id.language == wanted.language)
        {
            return (*tag).clone();
        }
    }
    FALLBACK.to_string()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Arc, Barrier};

    use dioxus::prelude::*;
    use unic_langid::LanguageIdentifier;

    use super::{
        available_languages, current_language, init, is_supported, loader_for, negotiate,
        translate, translate_in, ActiveLocale, FALLBACK,
    };
    use crate::i18n::fl;

    fn ids(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn available() -> Vec<String> {
        vec!["en-US".into(), "es-ES".into(), "fr-FR".into()]
    }

    type Seen = Rc<RefCell<Vec<String>>>;

    fn nav_rooms_label(seen: Seen) -> Element {
        seen.borrow_mut().push(crate::t!("nav-rooms"));
        seen.borrow_mut().push(current_language().to_string());
        rsx! {}
    }

    /// Render `nav_rooms_label` in `locale`, waiting on `barrier` between
    /// building the tree and rendering it.
    fn render_in(locale: &'static str, barrier: Arc<Barrier>) -> Vec<String> {
        let seen: Seen = Rc::default();
        let active = ActiveLocale::new(locale).unwrap();
        let mut dom =
            VirtualDom::new_with_props(nav_rooms_label, seen.clone()).with_root_context(active);
        barrier.wait();
        dom.rebuild_in_place();
        barrier.wait();
        let out = seen.borrow().clone();
        out
    }

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK));
        assert!(is_supported("es-ES"));
        assert!(!is_supported("xx-YY"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(loader_for(FALLBACK), "nav-home");
        assert!(!s.is_empty());
    }

    #[test]
    fn runtime_ids_resolve() {
        let name = translate("room-ocean-deluxe-name");
        assert!(!name.is_empty());
        assert_ne!(name, "room-ocean-deluxe-name");
    }

    #[test]
    fn unknown_locale_has_no_active_locale() {
        assert!(ActiveLocale::new("zz-ZZ").is_none());
        assert_eq!(ActiveLocale::new("fr-FR").map(ActiveLocale::tag), Some("fr-FR"));
        assert_eq!(translate_in("zz-ZZ", "nav-rooms"), translate_in(FALLBACK, "nav-rooms"));
    }

    #[test]
    fn outside_a_localized_tree_the_fallback_is_used() {
        assert_eq!(current_language(), FALLBACK);
        assert_eq!(translate("nav-rooms"), translate_in(FALLBACK, "nav-rooms"));
    }

    #[test]
    fn each_locale_has_its_own_bundle() {
        let fr = translate_in("fr-FR", "nav-rooms");
        let es = translate_in("es-ES", "nav-rooms");
        assert_ne!(fr, es);
        assert_ne!(fr, translate_in(FALLBACK, "nav-rooms"));
    }

    #[test]
    fn concurrent_renders_keep_their_own_locale() {
        let barrier = Arc::new(Barrier::new(2));
        let french = {
            let barrier = barrier.clone();
            std::thread::spawn(move || render_in("fr-FR", barrier))
        };
        let spanish = std::thread::spawn(move || render_in("es-ES", barrier));

        let french = french.join().unwrap();
        let spanish = spanish.join().unwrap();
        assert_eq!(french, [translate_in("fr-FR", "nav-rooms"), "fr-FR".to_string()]);
        assert_eq!(spanish, [translate_in("es-ES", "nav-rooms"), "es-ES".to_string()]);
    }

    #[test]
    fn negotiation_prefers_exact_then_language() {
        assert_eq!(negotiate(&ids(&["fr-FR"]), &available()), "fr-FR");
        assert_eq!(negotiate(&ids(&["es-MX", "en-US"]), &available()), "es-ES");
        assert_eq!(negotiate(&ids(&["de-DE"]), &available()), FALLBACK);
        assert_eq!(negotiate(&[], &available()), FALLBACK);
    }
}
