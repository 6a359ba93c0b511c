//! Shared UI crate for the Tidewater Bay Resort site: catalogs, filtering,
//! forms, localization, components and pages. Platform crates (`web`,
//! `desktop`) only add a `Route` enum and a launcher.

pub mod catalog;
pub mod config;
pub mod core;
pub mod filter;
pub mod forms;
pub mod i18n;
pub mod labels;
pub mod lightbox;
pub mod routes;
pub mod theme;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod contact_form;
    mod filter_panel;
    mod form_field;
    mod gallery_grid;
    mod hero;
    mod icon;
    mod lightbox_overlay;
    mod reservation_form;
    mod room_card;
    mod site_footer;
    mod site_frame;

    pub use contact_form::ContactForm;
    pub use filter_panel::RoomFilterPanel;
    pub use form_field::{FormField, FormStatusBanner};
    pub use gallery_grid::GalleryGrid;
    pub use hero::Hero;
    pub use icon::Icon;
    pub use lightbox_overlay::LightboxOverlay;
    pub use reservation_form::ReservationForm;
    pub use room_card::RoomCard;
    pub use site_footer::SiteFooter;
    pub use site_frame::SiteFrame;
}
