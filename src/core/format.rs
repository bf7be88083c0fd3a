//! Dutch-locale display formatting.
//!
//! Every user-facing money surface renders as euros with nl-NL
//! conventions: dot thousands grouping, comma decimal separator,
//! exactly two fraction digits. Callers coerce absent amounts to zero
//! before formatting; there are no error cases here.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;

use super::totals::round2;

/// Format an amount as a euro string: `€ 1.234,56`.
/// Negative amounts render as `€ -1.234,56`.
pub fn format_eur(amount: Decimal) -> String {
    format!("€ {}", format_number(amount))
}

/// Format an amount with nl-NL grouping and two fraction digits,
/// without the currency symbol: `1.234,56`.
pub fn format_number(amount: Decimal) -> String {
    let rounded = round2(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (digits.as_str(), ""),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let mut frac = frac_part.to_string();
    while frac.len() < 2 {
        frac.push('0');
    }
    frac.truncate(2);

    if negative {
        format!("-{grouped},{frac}")
    } else {
        format!("{grouped},{frac}")
    }
}

/// Format a date the short Dutch way: `15-6-2024` (no zero padding).
pub fn format_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// Format a time of day: `14:30:05`.
pub fn format_time(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}
