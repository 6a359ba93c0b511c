use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::SiteFrame;
use ui::theme::MAIN_CSS;
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
        #[layout(WebShell)]
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

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared `SiteFrame` around this crate's `Outlet`.
#[component]
fn WebShell(locale: String) -> Element {
    let path = use_route::<Route>().to_string();
    rsx! {
        SiteFrame { locale, path,
            Outlet::<Route> {}
        }
    }
}
