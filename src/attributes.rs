//! Heuristic attribute extractors over resolved body text.
//!
//! Each extractor is independent, operates on the resolved (pre-clean)
//! body, and returns `None` on empty input or no match. They are shape
//! heuristics, not validators: an email is anything email-shaped, a phone
//! is any sufficiently long digit run, a location is a gazetteer hit.

use crate::patterns::{EMAIL, PHONE, PLACE_GAZETTEER};

/// Matches shorter than this many digits are numeric noise, not phone
/// numbers (counts, years, prices).
const MIN_PHONE_DIGITS: usize = 7;

/// First email-shaped substring of `text`.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped substring of `text`, normalized to digits and a
/// leading `+`.
///
/// The matched substring is stripped of every separator; results with
/// fewer than 7 digits are discarded. The underlying pattern is
/// deliberately permissive and may pick up long non-phone numbers; the
/// floor is the only disambiguation applied.
#[must_use]
pub fn extract_phone(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let matched = PHONE.find(text)?;
    let normalized: String = matched
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let digits = normalized.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        None
    } else {
        Some(normalized)
    }
}

/// First built-in gazetteer entry appearing in `text`, in canonical table
/// casing.
///
/// Case-insensitive substring match; ties between multiple present place
/// names are resolved by table position alone.
#[must_use]
pub fn extract_location(text: &str) -> Option<String> {
    extract_location_from(text, PLACE_GAZETTEER.iter().copied())
}

/// Like [`extract_location`], with a caller-supplied gazetteer.
pub fn extract_location_from<'a, I>(text: &str, gazetteer: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    gazetteer
        .into_iter()
        .find(|entry| lowered.contains(&entry.to_lowercase()))
        .map(ToString::to_string)
}
