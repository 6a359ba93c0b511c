use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::config;
use crate::routes::Page;
use crate::t;

#[component]
pub fn SiteFooter(locale: String) -> Element {
    let site = config::site();
    let year = time::OffsetDateTime::now_utc().year();
    let phone_href = format!("tel:{}", site.contact.phone.replace([' ', '(', ')', '-'], ""));
    let mail_href = format!("mailto:{}", site.contact.email);

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__column",
                    h2 { class: "site-footer__brand", "{site.resort_name}" }
                    address { class: "site-footer__address",
                        for line in site.contact.address_lines.iter() {
                            span { key: "{line}", "{line}" }
                        }
                    }
                    if let Some(map) = site.contact.map_url.as_ref() {
                        a { class: "site-footer__link", href: "{map}", target: "_blank", rel: "noopener",
                            {t!("footer-directions")}
                        }
                    }
                }

                div { class: "site-footer__column",
                    h3 { {t!("footer-contact-title")} }
                    a { class: "site-footer__link", href: "{phone_href}", "{site.contact.phone}" }
                    a { class: "site-footer__link", href: "{mail_href}", "{site.contact.email}" }
                    p { class: "site-footer__meta",
                        {t!("footer-check-times", check_in = site.check_in_time.as_str(), check_out = site.check_out_time.as_str())}
                    }
                }

                nav { class: "site-footer__column",
                    h3 { {t!("footer-explore-title")} }
                    for page in Page::iter() {
                        Link { key: "{page.path()}", class: "site-footer__link", to: page.href(&locale),
                            {page.label()}
                        }
                    }
                }

                if !site.social.is_empty() {
                    div { class: "site-footer__column",
                        h3 { {t!("footer-follow-title")} }
                        for social in site.social.iter() {
                            a {
                                key: "{social.network}",
                                class: "site-footer__link",
                                href: "{social.url}",
                                target: "_blank",
                                rel: "noopener",
                                "{social.network}"
                            }
                        }
                    }
                }
            }
            p { class: "site-footer__legal",
                {t!("footer-copyright", year = (year as i64), name = site.resort_name.as_str())}
            }
        }
    }
}
