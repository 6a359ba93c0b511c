use dioxus::prelude::*;
use strum::IntoEnumIterator;
use time::OffsetDateTime;

use super::{FormField, FormStatusBanner};
use crate::catalog::{self, Room, RoomCategory};
use crate::core::format::format_price;
use crate::filter::ALL;
use crate::forms::{
    self, quote_for, validate_reservation, FormErrors, FormStatus, InquiryKind, ReservationRequest,
};
use crate::{config, i18n, labels, routes, t};

/// Reservation request form.
///
/// With `room_id` set (the `/rooms/{id}/book` page) the room is fixed and the
/// category picker is replaced by the room's name.
///
/// The form state is keyed by the room, so moving to another room's booking
/// page starts a fresh draft instead of keeping the previous room.
#[component]
pub fn ReservationForm(locale: String, #[props(default)] room_id: Option<String>) -> Element {
    let key = draft_key(room_id.as_deref());
    rsx! {
        ReservationFormBody { key: "{key}", locale, room_id }
    }
}

fn draft_key(room_id: Option<&str>) -> String {
    match room_id {
        Some(id) => format!("room-{id}"),
        None => "any-room".to_string(),
    }
}

#[component]
fn ReservationFormBody(locale: String, room_id: Option<String>) -> Element {
    let fixed_room = room_id
        .as_deref()
        .and_then(|id| catalog::rooms().get(id))
        .cloned();

    let mut draft = use_signal(|| initial_request(fixed_room.as_ref()));
    let mut errors = use_signal(FormErrors::default);
    let mut status = use_signal(FormStatus::default);

    let settings = &config::site().forms;
    let today = OffsetDateTime::now_utc().date();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status().is_busy() {
            return;
        }
        let request = draft();
        if let Err(found) = validate_reservation(&request, settings, today) {
            tracing::debug!(fields = found.len(), "reservation form rejected");
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        status.set(FormStatus::Submitting);
        let latency = settings.simulated_latency_ms;
        spawn(async move {
            match forms::submit(InquiryKind::Reservation, &request, latency).await {
                Ok(ack) => status.set(FormStatus::Sent(ack)),
                Err(err) => {
                    tracing::error!("reservation submission failed: {err}");
                    status.set(FormStatus::Failed(err.to_string()));
                }
            }
        });
    };

    let current = draft();
    let issues = errors();
    let busy = status().is_busy();
    let sent = matches!(status(), FormStatus::Sent(_));

    let currency = &config::site().currency;
    let quote = quote_for(&current, settings, today, catalog::rooms().items());
    let quote_line = quote.map(|q| {
        t!(
            "booking-quote-line",
            nights = (q.nights as i64),
            rate = format_price(q.nightly_rate, currency),
            total = format_price(q.total, currency)
        )
    });
    let fixed_room_label = fixed_room
        .as_ref()
        .map(|room| (i18n::translate(&room.name_key), routes::room_href(&locale, &room.id)));
    let category_value = current.category.clone();
    let reset_room = fixed_room.clone();
    let adults_value = current.adults.to_string();
    let children_value = current.children.to_string();

    rsx! {
        section { class: "form-card",
            h2 { class: "form-card__title", {t!("booking-form-title")} }
            FormStatusBanner {
                status: status(),
                on_reset: move |_| {
                    draft.set(initial_request(reset_room.as_ref()));
                    status.set(FormStatus::Editing);
                },
            }
            if !sent {
                form { class: "form", novalidate: true, onsubmit: on_submit,
                    div { class: "form__row",
                        FormField {
                            label: t!("booking-check-in"),
                            name: "check_in",
                            input_type: "date",
                            value: current.check_in.clone(),
                            error: issues.message("check_in"),
                            oninput: move |v: String| draft.with_mut(|d| d.check_in = v),
                        }
                        FormField {
                            label: t!("booking-check-out"),
                            name: "check_out",
                            input_type: "date",
                            value: current.check_out.clone(),
                            error: issues.message("check_out"),
                            oninput: move |v: String| draft.with_mut(|d| d.check_out = v),
                        }
                    }

                    div { class: "form__row",
                        div { class: "form-field",
                            label { class: "form-field__label", r#for: "field-adults", {t!("booking-adults")} }
                            select {
                                id: "field-adults",
                                class: "form-field__control",
                                value: "{adults_value}",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(n) = evt.value().parse() {
                                        draft.with_mut(|d| d.adults = n);
                                    }
                                },
                                for n in 1..=settings.max_adults {
                                    option { key: "{n}", value: "{n}", selected: n == current.adults, "{n}" }
                                }
                            }
                            if let Some(message) = issues.message("adults") {
                                p { class: "form-field__error", role: "alert", "{message}" }
                            }
                        }
                        div { class: "form-field",
                            label { class: "form-field__label", r#for: "field-children", {t!("booking-children")} }
                            select {
                                id: "field-children",
                                class: "form-field__control",
                                value: "{children_value}",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(n) = evt.value().parse() {
                                        draft.with_mut(|d| d.children = n);
                                    }
                                },
                                for n in 0..=settings.max_children {
                                    option { key: "{n}", value: "{n}", selected: n == current.children, "{n}" }
                                }
                            }
                            if let Some(message) = issues.message("children") {
                                p { class: "form-field__error", role: "alert", "{message}" }
                            }
                        }
                    }

                    if let Some((name, href)) = fixed_room_label {
                        div { class: "form-field form-field--static",
                            span { class: "form-field__label", {t!("booking-room")} }
                            p { class: "form-field__value",
                                "{name} "
                                Link { class: "form-field__link", to: href, {t!("booking-room-details")} }
                            }
                        }
                    } else {
                        div { class: "form-field",
                            label { class: "form-field__label", r#for: "field-category", {t!("booking-category")} }
                            select {
                                id: "field-category",
                                class: "form-field__control",
                                value: "{category_value}",
                                onchange: move |evt: FormEvent| draft.with_mut(|d| d.category = evt.value()),
                                option { value: ALL, {t!("filters-any")} }
                                for category in RoomCategory::iter() {
                                    option {
                                        key: "{category}",
                                        value: "{category}",
                                        selected: category.as_ref() == category_value,
                                        {labels::room_category(category)}
                                    }
                                }
                            }
                        }
                    }

                    div { class: "form__row",
                        FormField {
                            label: t!("booking-name"),
                            name: "full_name",
                            value: current.full_name.clone(),
                            error: issues.message("full_name"),
                            oninput: move |v: String| draft.with_mut(|d| d.full_name = v),
                        }
                        FormField {
                            label: t!("booking-email"),
                            name: "email",
                            input_type: "email",
                            value: current.email.clone(),
                            error: issues.message("email"),
                            oninput: move |v: String| draft.with_mut(|d| d.email = v),
                        }
                    }
                    FormField {
                        label: t!("booking-phone"),
                        name: "phone",
                        input_type: "tel",
                        optional: true,
                        value: current.phone.clone(),
                        error: issues.message("phone"),
                        oninput: move |v: String| draft.with_mut(|d| d.phone = v),
                    }
                    FormField {
                        label: t!("booking-requests"),
                        name: "requests",
                        multiline: true,
                        optional: true,
                        value: current.requests.clone(),
                        error: issues.message("requests"),
                        oninput: move |v: String| draft.with_mut(|d| d.requests = v),
                    }

                    aside { class: "quote",
                        h3 { class: "quote__title", {t!("booking-quote-title")} }
                        if let Some(line) = quote_line {
                            p { class: "quote__line", "{line}" }
                            p { class: "quote__note", {t!("booking-quote-note")} }
                        } else {
                            p { class: "quote__hint", {t!("booking-quote-hint")} }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--primary form__submit",
                        disabled: busy,
                        if busy { {t!("form-sending")} } else { {t!("booking-submit")} }
                    }
                }
            }
        }
    }
}

fn initial_request(room: Option<&Room>) -> ReservationRequest {
    match room {
        Some(room) => ReservationRequest {
            category: room.category.to_string(),
            room_id: room.id.clone(),
            ..ReservationRequest::default()
        },
        None => ReservationRequest::default(),
    }
}
