//! Display formatting for prices and timestamps (Spanish locale, euros).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a price the way `es-ES` renders EUR currency: `999,99 €`,
/// `12.999,99 €`. Four-digit amounts are not grouped in this locale.
pub fn format_price_eur(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let grouped = if int_part.len() > 4 {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part} €")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Formats a server timestamp as `d/m/yyyy`. Timestamps that do not parse are
/// shown verbatim.
pub fn format_date_label(timestamp: &str) -> String {
    parse_date(timestamp)
        .map(|date| date.format("%-d/%-m/%Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}
