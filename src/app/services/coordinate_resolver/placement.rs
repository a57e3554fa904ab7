//! Deterministic ring placement around a region center
//!
//! Records without a usable fix are spread on a ring around their region
//! center so markers do not stack. The position is derived from a hash of the
//! postal code or city name and is stable for a given input, but it is not a
//! geocoded address.

use crate::app::models::Coordinates;
use crate::constants::placement::{
    ANGLE_MODULUS, CITY_LNG_SCALE, CITY_RADIUS_BASE, CITY_RADIUS_DIVISOR, CITY_RADIUS_MODULUS,
    CITY_ZERO_SEED, ZIP_LNG_SCALE, ZIP_RADIUS_BASE, ZIP_RADIUS_DIVISOR, ZIP_RADIUS_MODULUS,
};

/// `value mod modulus` for the decimal number formed by the ASCII digits of `text`
///
/// Folding digit by digit keeps arbitrarily long postal strings exact.
/// Returns `None` when `text` has no digits.
pub fn digits_modulo(text: &str, modulus: u64) -> Option<u64> {
    let mut seen_digit = false;
    let remainder = text
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            seen_digit = true;
            (acc * 10 + u64::from(digit - b'0')) % modulus
        });
    seen_digit.then_some(remainder)
}

/// Placement from the numeric portion of a postal code
///
/// angle = `zip mod 360` degrees, radius = `0.15 + (zip mod 700) / 1200`,
/// longitude offset stretched by 1.3. `None` when the code has no digits.
pub fn zip_placement(center: Coordinates, zip: &str) -> Option<Coordinates> {
    let angle_degrees = digits_modulo(zip, ANGLE_MODULUS)?;
    let radius_step = digits_modulo(zip, ZIP_RADIUS_MODULUS)?;
    let radius = ZIP_RADIUS_BASE + radius_step as f64 / ZIP_RADIUS_DIVISOR;
    Some(ring_point(center, angle_degrees, radius, ZIP_LNG_SCALE))
}

/// Seed actually mixed into the city hash; zero is replaced by one
pub fn effective_city_seed(seed: u64) -> u64 {
    if seed == 0 { CITY_ZERO_SEED } else { seed }
}

/// Character-code sum of a normalized city name plus its seed
///
/// `city` must already be trimmed and lowercased. Sums UTF-16 code units.
pub fn city_hash(city: &str, seed: u64) -> u64 {
    city.encode_utf16()
        .fold(effective_city_seed(seed), |acc, unit| {
            acc.wrapping_add(u64::from(unit))
        })
}

/// Placement from a normalized city name and seed
///
/// angle = `hash mod 360` degrees, radius = `0.18 + (hash mod 500) / 1400`,
/// longitude offset stretched by 1.25.
pub fn city_placement(center: Coordinates, city: &str, seed: u64) -> Coordinates {
    let hash = city_hash(city, seed);
    let radius = CITY_RADIUS_BASE + (hash % CITY_RADIUS_MODULUS) as f64 / CITY_RADIUS_DIVISOR;
    ring_point(center, hash % ANGLE_MODULUS, radius, CITY_LNG_SCALE)
}

fn ring_point(center: Coordinates, angle_degrees: u64, radius: f64, lng_scale: f64) -> Coordinates {
    let angle = (angle_degrees as f64).to_radians();
    Coordinates::new(
        center.lat + radius * angle.cos(),
        center.lng + radius * angle.sin() * lng_scale,
    )
}

/// Parse the leading decimal number of a string
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and an optional exponent, and ignores anything after that, so
/// `"41.25 N"` parses as `41.25`. Returns `None` when no number leads.
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let s = text.trim_start().as_bytes();
    let mut end = 0;

    if matches!(s.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < s.len() && s[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < s.len() && s[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < s.len() && matches!(s[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < s.len() && matches!(s[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < s.len() && s[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    std::str::from_utf8(&s[..end]).ok()?.parse().ok()
}
