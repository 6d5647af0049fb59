//! Text formatting utilities for UI display
//!
//! Fixed pt-BR formatters: currency as `R$ 1.234,56`, dates as `dd/mm/yyyy`.
//! No locale negotiation happens here; these two shapes are the product.

use chrono::NaiveDate;

/// Formats an amount as Brazilian Real currency.
///
/// Example: `1234.56` -> `"R$ 1.234,56"`; negatives carry a leading sign.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    // Work in cents to sidestep float display quirks
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Formats a date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses an ISO date (`2026-08-05`) or RFC 3339 timestamp and formats it as
/// `dd/mm/yyyy`. Returns `None` for anything else.
pub fn format_date_str(input: &str) -> Option<String> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(format_date(date));
    }
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(format_date(timestamp.date_naive()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(0.5), "R$ 0,50");
        assert_eq!(format_currency(12.0), "R$ 12,00");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(999_999.99), "R$ 999.999,99");
        assert_eq!(format_currency(100.0), "R$ 100,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.56), "-R$ 1.234,56");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_date(date), "05/08/2026");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2026-08-05").unwrap(), "05/08/2026");
        assert_eq!(
            format_date_str("2026-08-05T14:30:00-03:00").unwrap(),
            "05/08/2026"
        );
        assert_eq!(format_date_str("yesterday"), None);
        assert_eq!(format_date_str(""), None);
    }
}
