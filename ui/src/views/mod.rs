//! Pages. Each takes the route's locale segment and renders inside the
//! platform's site shell (navbar + footer).

mod amenities;
mod booking;
mod conferences;
mod contact;
mod dining;
mod gallery;
mod home;
mod landing;
mod not_found;
mod room_detail;
mod rooms;

pub use amenities::Amenities;
pub use booking::{BookRoom, Booking};
pub use conferences::Conferences;
pub use contact::Contact;
pub use dining::Dining;
pub use gallery::Gallery;
pub use home::Home;
pub use landing::Landing;
pub use not_found::NotFound;
pub use room_detail::RoomDetail;
pub use rooms::Rooms;

/// `"{page} · {resort}"` for `document::Title`.
pub(crate) fn page_title(page: &str) -> String {
    format!("{page} · {}", crate::config::site().resort_name)
}
