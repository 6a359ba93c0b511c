#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::SiteFrame;
use ui::theme::MAIN_CSS_INLINE;
use ui::views::{
    Amenities, BookRoom, Booking, Conferences, Contact, Dining, Gallery, Home, Landing, NotFound,
    RoomDetail, Rooms,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[nest("/:locale")]
        #[layout(DesktopShell)]
            #[route("/")]
            Home { locale: String },
            #[route("/rooms")]
            Rooms { locale: String },
            #[route("/rooms/:id")]
            RoomDetail { locale: String, id: String },
            #[route("/rooms/:id/book")]
            BookRoom { locale: String, id: String },
            #[route("/booking")]
            Booking { locale: String },
            #[route("/dining")]
            Dining { locale: String },
            #[route("/amenities")]
            Amenities { locale: String },
            #[route("/conferences")]
            Conferences { locale: String },
            #[route("/gallery")]
            Gallery { locale: String },
            #[route("/contact")]
            Contact { locale: String },
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Tidewater Bay Resort – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load photos straight from the ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared `SiteFrame` around this crate's `Outlet`.
#[component]
fn DesktopShell(locale: String) -> Element {
    let path = use_route::<Route>().to_string();
    rsx! {
        SiteFrame { locale, path,
            Outlet::<Route> {}
        }
    }
}
