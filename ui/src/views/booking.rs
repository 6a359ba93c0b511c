use dioxus::prelude::*;

use super::page_title;
use super::room_detail::MissingRoom;
use crate::catalog;
use crate::components::{Hero, ReservationForm};
use crate::{config, t};

#[component]
pub fn Booking(locale: String) -> Element {
    let title = page_title(&t!("nav-booking"));
    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("booking-title"),
            subtitle: t!("booking-subtitle"),
            image: "/images/hero/booking.jpg",
            compact: true,
        }
        section { class: "page page-booking",
            ReservationForm { locale }
            BookingNotes {}
        }
    }
}

/// Booking form with the room fixed (`/rooms/{id}/book`).
#[component]
pub fn BookRoom(locale: String, id: String) -> Element {
    if catalog::rooms().get(&id).is_none() {
        return rsx! { MissingRoom { locale } };
    }
    let title = page_title(&t!("nav-booking"));
    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("booking-title"),
            subtitle: t!("booking-subtitle"),
            image: "/images/hero/booking.jpg",
            compact: true,
        }
        section { class: "page page-booking",
            ReservationForm { locale, room_id: id }
            BookingNotes {}
        }
    }
}

#[component]
fn BookingNotes() -> Element {
    let site = config::site();
    rsx! {
        aside { class: "page-booking__notes",
            h2 { {t!("booking-notes-title")} }
            p {
                {t!(
                    "footer-check-times",
                    check_in = site.check_in_time.as_str(),
                    check_out = site.check_out_time.as_str()
                )}
            }
            p { {t!("booking-notes-body")} }
            p {
                {t!("booking-notes-help")}
                " "
                a { href: "tel:{site.contact.phone}", "{site.contact.phone}" }
            }
        }
    }
}
