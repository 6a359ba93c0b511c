use dioxus::prelude::*;

use crate::forms::{FormStatus, InquiryKind};
use crate::t;

/// Labelled input with its inline validation message.
#[component]
pub fn FormField(
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] multiline: bool,
    #[props(default = false)] optional: bool,
    oninput: EventHandler<String>,
) -> Element {
    let id = format!("field-{name}");
    let class = if error.is_some() {
        "form-field form-field--invalid"
    } else {
        "form-field"
    };

    rsx! {
        div { class: "{class}",
            label { class: "form-field__label", r#for: "{id}",
                "{label}"
                if optional {
                    span { class: "form-field__optional", {t!("form-optional")} }
                }
            }
            if multiline {
                textarea {
                    id: "{id}",
                    name: "{name}",
                    class: "form-field__control form-field__control--multiline",
                    rows: "6",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{name}",
                    class: "form-field__control",
                    r#type: "{input_type}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
            if let Some(message) = error {
                p { class: "form-field__error", role: "alert", "{message}" }
            }
        }
    }
}

/// Outcome banner shown above a form once it has been submitted.
#[component]
pub fn FormStatusBanner(status: FormStatus, on_reset: EventHandler<()>) -> Element {
    match status {
        FormStatus::Editing => rsx! {},
        FormStatus::Submitting => rsx! {
            p { class: "form-status form-status--pending", role: "status", {t!("form-sending")} }
        },
        FormStatus::Sent(ack) => {
            let body = match ack.kind {
                InquiryKind::Contact => t!("form-sent-contact", reference = ack.reference.as_str()),
                InquiryKind::Reservation => {
                    t!("form-sent-reservation", reference = ack.reference.as_str())
                }
            };
            rsx! {
                div { class: "form-status form-status--sent", role: "status",
                    h3 { {t!("form-sent-title")} }
                    p { "{body}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_reset.call(()),
                        {t!("form-send-another")}
                    }
                }
            }
        }
        FormStatus::Failed(reason) => rsx! {
            div { class: "form-status form-status--failed", role: "alert",
                p { {t!("form-failed")} }
                p { class: "form-status__detail", "{reason}" }
            }
        },
    }
}
