//! Phone number display formatting

use crate::app::models::PhoneNumber;
use regex::Regex;
use std::sync::LazyLock;

// ASCII only: Unicode digits are multi-byte and not dialable
static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("static regex is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Format a raw phone value as `NNN-NNN-NNNN` when it is a NANP number
///
/// 11 digits with a leading `1` drop the country code for display but keep it
/// for dialing. Anything else passes through as its digits, or as the
/// whitespace-free original when it has no digits at all.
pub fn format_phone_number(raw: &str) -> PhoneNumber {
    let raw = WHITESPACE.replace_all(raw, " ");
    let raw = raw.trim();
    if raw.is_empty() {
        return PhoneNumber::default();
    }

    let digits = NON_DIGITS.replace_all(raw, "").into_owned();

    let national = match digits.len() {
        11 if digits.starts_with('1') => Some(&digits[1..]),
        10 => Some(digits.as_str()),
        _ => None,
    };

    if let Some(ten) = national {
        return PhoneNumber {
            display: format!("{}-{}-{}", &ten[..3], &ten[3..6], &ten[6..]),
            dial: digits.clone(),
        };
    }

    let passthrough = if digits.is_empty() {
        WHITESPACE.replace_all(raw, "").into_owned()
    } else {
        digits
    };

    PhoneNumber {
        display: passthrough.clone(),
        dial: passthrough,
    }
}
