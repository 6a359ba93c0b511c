//! Shared stylesheet for every platform shell.

use dioxus::prelude::*;

/// Bundled theme for web builds.
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Same file as text, for shells that inline their styles (desktop).
pub const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
