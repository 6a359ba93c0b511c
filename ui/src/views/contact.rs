use dioxus::prelude::*;

use super::page_title;
use crate::components::{ContactForm, Hero};
use crate::{config, t};

#[component]
pub fn Contact(locale: String) -> Element {
    tracing::debug!(locale = %locale, "contact render");
    let site = config::site();
    let phone_href = format!("tel:{}", site.contact.phone.replace([' ', '(', ')', '-'], ""));
    let title = page_title(&t!("nav-contact"));

    rsx! {
        document::Title { "{title}" }
        Hero {
            title: t!("contact-title"),
            subtitle: t!("contact-subtitle"),
            image: "/images/hero/contact.jpg",
            compact: true,
        }
        section { class: "page page-contact",
            aside { class: "page-contact__details",
                h2 { {t!("contact-details-title")} }
                dl { class: "fact-list",
                    dt { {t!("contact-phone")} }
                    dd { a { href: "{phone_href}", "{site.contact.phone}" } }
                    dt { {t!("contact-email")} }
                    dd { a { href: "mailto:{site.contact.email}", "{site.contact.email}" } }
                    dt { {t!("contact-address")} }
                    dd {
                        address {
                            for line in site.contact.address_lines.iter() {
                                span { key: "{line}", class: "address-line", "{line}" }
                            }
                        }
                    }
                }
                if let Some(map) = site.contact.map_url.as_ref() {
                    a { class: "button button--ghost", href: "{map}", target: "_blank", rel: "noopener",
                        {t!("footer-directions")}
                    }
                }
            }
            ContactForm {}
        }
    }
}
