use serde::Serialize;
use time::{macros::format_description, Date};
use validator::Validate;

use super::{is_phone, FieldIssue, FormErrors};
use crate::catalog::{Room, RoomCategory};
use crate::config::FormSettings;
use crate::filter::Selection;

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ReservationRequest {
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub check_in: String,
    pub check_out: String,
    #[validate(range(min = 1))]
    pub adults: u32,
    pub children: u32,
    /// Category control value (`"all"` for any).
    pub category: String,
    /// Specific room when booking from a room page; empty otherwise.
    pub room_id: String,
    #[validate(length(min = 2, max = 80))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[validate(length(max = 1000))]
    pub requests: String,
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            adults: 2,
            children: 0,
            category: crate::filter::ALL.to_string(),
            room_id: String::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            requests: String::new(),
        }
    }
}

impl ReservationRequest {
    pub fn category(&self) -> Selection<RoomCategory> {
        Selection::from_control(&self.category)
    }

    pub fn room_id(&self) -> Option<&str> {
        Some(self.room_id.as_str()).filter(|id| !id.is_empty())
    }

    pub fn stay(&self) -> Result<Stay, (&'static str, FieldIssue)> {
        let check_in = parse_date(&self.check_in).ok_or(("check_in", FieldIssue::Date))?;
        let check_out = parse_date(&self.check_out).ok_or(("check_out", FieldIssue::Date))?;
        if check_out <= check_in {
            return Err(("check_out", FieldIssue::StayOrder));
        }
        Ok(Stay {
            check_in,
            check_out,
        })
    }

    /// Stay that passes every date rule: parsable, ordered, not starting in
    /// the past and no longer than the configured maximum.
    pub fn bookable_stay(
        &self,
        settings: &FormSettings,
        today: Date,
    ) -> Result<Stay, Vec<(&'static str, FieldIssue)>> {
        let stay = self.stay().map_err(|issue| vec![issue])?;
        let mut issues = Vec::new();
        if stay.check_in < today {
            issues.push(("check_in", FieldIssue::DateInPast));
        }
        if stay.nights() > settings.max_stay_nights {
            issues.push((
                "check_out",
                FieldIssue::StayTooLong {
                    max_nights: settings.max_stay_nights,
                },
            ));
        }
        if issues.is_empty() {
            Ok(stay)
        } else {
            Err(issues)
        }
    }
}

/// A validated date pair with `check_out > check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: Date,
    pub check_out: Date,
}

impl Stay {
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).whole_days().max(0) as u32
    }
}

/// Indicative price of a stay before taxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub nights: u32,
    pub nightly_rate: f64,
    pub total: f64,
}

impl Quote {
    pub fn new(stay: &Stay, nightly_rate: f64) -> Self {
        let nights = stay.nights();
        Self {
            nights,
            nightly_rate,
            total: nightly_rate * f64::from(nights),
        }
    }
}

/// Rate used for a quote: the chosen room's price, otherwise the cheapest
/// room in the chosen category (or in the whole catalog).
pub fn nightly_rate(
    room_id: Option<&str>,
    category: &Selection<RoomCategory>,
    rooms: &[Room],
) -> Option<f64> {
    if let Some(room) = room_id.and_then(|id| rooms.iter().find(|r| r.id == id)) {
        return Some(room.base_price);
    }
    rooms
        .iter()
        .filter(|room| category.admits(&room.category))
        .map(|room| room.base_price)
        .min_by(f64::total_cmp)
}

/// Quote shown next to the form, once the dates would pass validation.
pub fn quote_for(
    request: &ReservationRequest,
    settings: &FormSettings,
    today: Date,
    rooms: &[Room],
) -> Option<Quote> {
    let stay = request.bookable_stay(settings, today).ok()?;
    nightly_rate(request.room_id(), &request.category(), rooms).map(|rate| Quote::new(&stay, rate))
}

pub fn validate_reservation(
    request: &ReservationRequest,
    settings: &FormSettings,
    today: Date,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::from_validation(request.validate());
    errors.require("full_name", &request.full_name);
    errors.require("email", &request.email);
    errors.require("check_in", &request.check_in);
    errors.require("check_out", &request.check_out);

    if request.adults > settings.max_adults {
        errors.insert(
            "adults",
            FieldIssue::Range {
                min: Some(1),
                max: Some(i64::from(settings.max_adults)),
            },
        );
    }
    if request.children > settings.max_children {
        errors.insert(
            "children",
            FieldIssue::Range {
                min: Some(0),
                max: Some(i64::from(settings.max_children)),
            },
        );
    }
    if !request.phone.trim().is_empty() && !is_phone(&request.phone) {
        errors.insert("phone", FieldIssue::Phone);
    }

    if let Err(issues) = request.bookable_stay(settings, today) {
        for (field, issue) in issues {
            errors.insert(field, issue);
        }
    }

    errors.into_result()
}

fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 03 - 01);

    fn filled() -> ReservationRequest {
        ReservationRequest {
            check_in: "2026-03-10".into(),
            check_out: "2026-03-14".into(),
            full_name: "Jonas Weber".into(),
            email: "jonas@example.com".into(),
            ..ReservationRequest::default()
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(validate_reservation(&filled(), &FormSettings::default(), TODAY).is_ok());
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let request = ReservationRequest {
            check_out: "2026-03-10".into(),
            ..filled()
        };
        let errors = validate_reservation(&request, &FormSettings::default(), TODAY).unwrap_err();
        assert_eq!(errors.get("check_out"), Some(&FieldIssue::StayOrder));
    }

    #[test]
    fn overly_long_stays_are_rejected() {
        let request = ReservationRequest {
            check_out: "2026-05-01".into(),
            ..filled()
        };
        let errors = validate_reservation(&request, &FormSettings::default(), TODAY).unwrap_err();
        assert_eq!(
            errors.get("check_out"),
            Some(&FieldIssue::StayTooLong { max_nights: 30 })
        );
    }

    #[test]
    fn past_and_malformed_dates_are_flagged() {
        let request = ReservationRequest {
            check_in: "2026-02-20".into(),
            ..filled()
        };
        let errors = validate_reservation(&request, &FormSettings::default(), TODAY).unwrap_err();
        assert_eq!(errors.get("check_in"), Some(&FieldIssue::DateInPast));

        let request = ReservationRequest {
            check_in: "10/03/2026".into(),
            ..filled()
        };
        let errors = validate_reservation(&request, &FormSettings::default(), TODAY).unwrap_err();
        assert_eq!(errors.get("check_in"), Some(&FieldIssue::Date));
    }

    #[test]
    fn guest_counts_respect_settings() {
        let request = ReservationRequest {
            adults: 0,
            children: 9,
            ..filled()
        };
        let errors = validate_reservation(&request, &FormSettings::default(), TODAY).unwrap_err();
        assert!(matches!(errors.get("adults"), Some(FieldIssue::Range { .. })));
        assert!(matches!(errors.get("children"), Some(FieldIssue::Range { .. })));
    }

    #[test]
    fn quote_multiplies_nights_by_rate() {
        let stay = filled().stay().unwrap();
        assert_eq!(stay.nights(), 4);
        let quote = Quote::new(&stay, 280.0);
        assert_eq!(quote.total, 1120.0);
    }

    #[test]
    fn bookable_stay_applies_every_date_rule() {
        let settings = FormSettings::default();
        assert_eq!(
            filled().bookable_stay(&settings, TODAY).map(|stay| stay.nights()),
            Ok(4)
        );

        let past = ReservationRequest {
            check_in: "2026-02-20".into(),
            ..filled()
        };
        assert!(past.stay().is_ok());
        assert_eq!(
            past.bookable_stay(&settings, TODAY),
            Err(vec![("check_in", FieldIssue::DateInPast)])
        );

        let too_long = ReservationRequest {
            check_out: "2026-05-01".into(),
            ..filled()
        };
        assert!(too_long.stay().is_ok());
        assert_eq!(
            too_long.bookable_stay(&settings, TODAY),
            Err(vec![("check_out", FieldIssue::StayTooLong { max_nights: 30 })])
        );

        let reversed = ReservationRequest {
            check_out: "2026-03-09".into(),
            ..filled()
        };
        assert_eq!(
            reversed.bookable_stay(&settings, TODAY),
            Err(vec![("check_out", FieldIssue::StayOrder)])
        );
    }

    #[test]
    fn quote_waits_for_valid_dates() {
        let settings = FormSettings::default();
        let rooms = crate::catalog::rooms().items();
        let quote = quote_for(&filled(), &settings, TODAY, rooms).unwrap();
        assert_eq!(quote.nights, 4);

        for request in [
            ReservationRequest {
                check_in: "2026-02-20".into(),
                ..filled()
            },
            ReservationRequest {
                check_out: "2026-05-01".into(),
                ..filled()
            },
            ReservationRequest {
                check_out: String::new(),
                ..filled()
            },
        ] {
            assert_eq!(quote_for(&request, &settings, TODAY, rooms), None);
        }
    }

    #[test]
    fn nightly_rate_prefers_room_then_cheapest_in_category() {
        let rooms = crate::catalog::rooms().items();
        let suite = rooms
            .iter()
            .find(|r| r.category == RoomCategory::Suite)
            .unwrap();
        assert_eq!(
            nightly_rate(Some(&suite.id), &Selection::All, rooms),
            Some(suite.base_price)
        );

        let cheapest_suite = rooms
            .iter()
            .filter(|r| r.category == RoomCategory::Suite)
            .map(|r| r.base_price)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(
            nightly_rate(None, &Selection::Only(RoomCategory::Suite), rooms),
            Some(cheapest_suite)
        );
        assert_eq!(nightly_rate(Some("missing"), &Selection::All, &[]), None);
    }
}
