use dioxus::prelude::*;

use crate::catalog::GalleryImage;
use crate::lightbox::Lightbox;
use crate::{i18n, t};

/// Full-screen viewer for the filtered gallery sequence.
///
/// Renders nothing while `state` is closed. Escape closes, the arrow keys
/// step through `images` with wraparound.
#[component]
pub fn LightboxOverlay(images: Vec<GalleryImage>, state: Signal<Lightbox>) -> Element {
    let mut lightbox = state;
    let len = images.len();
    let Some(index) = lightbox().index() else {
        return rsx! {};
    };
    let Some(image) = images.get(index) else {
        return rsx! {};
    };

    let caption = i18n::translate(&image.caption_key);
    let position = index + 1;

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{caption}",
            tabindex: "0",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                match evt.key().to_string().as_str() {
                    "Escape" => lightbox.set(Lightbox::Closed),
                    "ArrowRight" => lightbox.set(lightbox().next(len)),
                    "ArrowLeft" => lightbox.set(lightbox().previous(len)),
                    _ => {}
                }
            },
            onclick: move |_| lightbox.set(Lightbox::Closed),

            figure {
                class: "lightbox__figure",
                onclick: move |evt| evt.stop_propagation(),
                img { class: "lightbox__image", src: "{image.src}", alt: "{caption}" }
                figcaption { class: "lightbox__caption",
                    span { "{caption}" }
                    span { class: "lightbox__counter", "{position} / {len}" }
                }
            }

            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--prev",
                aria_label: t!("lightbox-previous"),
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.set(lightbox().previous(len));
                },
                "‹"
            }
            button {
                r#type: "button",
                class: "lightbox__nav lightbox__nav--next",
                aria_label: t!("lightbox-next"),
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.set(lightbox().next(len));
                },
                "›"
            }
            button {
                r#type: "button",
                class: "lightbox__close",
                aria_label: t!("lightbox-close"),
                onclick: move |evt| {
                    evt.stop_propagation();
                    lightbox.set(Lightbox::Closed);
                },
                "×"
            }
        }
    }
}
