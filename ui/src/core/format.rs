//! Formatting helpers for presenting catalog figures.

use crate::config::Currency;

/// Whole-unit price with the configured currency symbol, e.g. `$1,250`.
pub fn format_price(amount: f64, currency: &Currency) -> String {
    format!("{}{}", currency.symbol, group_thousands(amount.round() as i64))
}

pub fn format_area(sqm: f64) -> String {
    format!("{sqm:.0} m²")
}

pub fn format_hours(opens: &str, closes: &str) -> String {
    format!("{opens}–{closes}")
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency {
            code: "USD".into(),
            symbol: "$".into(),
        }
    }

    #[test]
    fn prices_are_rounded_and_grouped() {
        assert_eq!(format_price(149.6, &usd()), "$150");
        assert_eq!(format_price(1250.0, &usd()), "$1,250");
        assert_eq!(format_price(1_000_000.0, &usd()), "$1,000,000");
    }

    #[test]
    fn hours_use_en_dash() {
        assert_eq!(format_hours("07:00", "22:30"), "07:00–22:30");
    }
}
