use dioxus::prelude::*;

use super::{FormField, FormStatusBanner};
use crate::config;
use crate::forms::{self, validate_contact, ContactRequest, FormErrors, FormStatus, InquiryKind};
use crate::t;

#[component]
pub fn ContactForm() -> Element {
    let mut draft = use_signal(ContactRequest::default);
    let mut errors = use_signal(FormErrors::default);
    let mut status = use_signal(FormStatus::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status().is_busy() {
            return;
        }
        let request = draft();
        if let Err(found) = validate_contact(&request) {
            tracing::debug!(fields = found.len(), "contact form rejected");
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        status.set(FormStatus::Submitting);
        let latency = config::site().forms.simulated_latency_ms;
        spawn(async move {
            match forms::submit(InquiryKind::Contact, &request, latency).await {
                Ok(ack) => {
                    draft.set(ContactRequest::default());
                    status.set(FormStatus::Sent(ack));
                }
                Err(err) => {
                    tracing::error!("contact submission failed: {err}");
                    status.set(FormStatus::Failed(err.to_string()));
                }
            }
        });
    };

    let current = draft();
    let issues = errors();
    let busy = status().is_busy();
    let sent = matches!(status(), FormStatus::Sent(_));

    rsx! {
        section { class: "form-card",
            h2 { class: "form-card__title", {t!("contact-form-title")} }
            FormStatusBanner {
                status: status(),
                on_reset: move |_| status.set(FormStatus::Editing),
            }
            if !sent {
                form { class: "form", novalidate: true, onsubmit: on_submit,
                    div { class: "form__row",
                        FormField {
                            label: t!("contact-name"),
                            name: "name",
                            value: current.name.clone(),
                            error: issues.message("name"),
                            oninput: move |v: String| draft.with_mut(|d| d.name = v),
                        }
                        FormField {
                            label: t!("contact-email"),
                            name: "email",
                            input_type: "email",
                            value: current.email.clone(),
                            error: issues.message("email"),
                            oninput: move |v: String| draft.with_mut(|d| d.email = v),
                        }
                    }
                    div { class: "form__row",
                        FormField {
                            label: t!("contact-phone"),
                            name: "phone",
                            input_type: "tel",
                            optional: true,
                            value: current.phone.clone(),
                            error: issues.message("phone"),
                            oninput: move |v: String| draft.with_mut(|d| d.phone = v),
                        }
                        FormField {
                            label: t!("contact-subject"),
                            name: "subject",
                            value: current.subject.clone(),
                            error: issues.message("subject"),
                            oninput: move |v: String| draft.with_mut(|d| d.subject = v),
                        }
                    }
                    FormField {
                        label: t!("contact-message"),
                        name: "message",
                        multiline: true,
                        value: current.message.clone(),
                        error: issues.message("message"),
                        oninput: move |v: String| draft.with_mut(|d| d.message = v),
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary form__submit",
                        disabled: busy,
                        if busy { {t!("form-sending")} } else { {t!("contact-submit")} }
                    }
                }
            }
        }
    }
}
