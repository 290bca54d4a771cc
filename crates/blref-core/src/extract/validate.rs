//! Candidate normalization and plausibility checks.

use super::patterns::{
    CONTAINER_NUMBER, DESLASHED_FORM, LABEL_TAIL, SLASH_FORM, WAYBILL_NUMBER,
};

/// Canonicalize a raw match: strip whitespace, drop slashes from the
/// slash-segmented form (`MI/24/304058` becomes `MI24304058`).
pub fn normalize_candidate(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if SLASH_FORM.is_match(&compact) {
        compact.replace('/', "")
    } else {
        compact
    }
}

/// Check whether a normalized value can plausibly be a B/L or waybill number.
pub fn is_valid_bl_number(value: &str) -> bool {
    let s = value.trim();

    if s.is_empty() || s.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let len = s.chars().count();
    if !(6..=20).contains(&len) {
        return false;
    }

    // Numeric waybills carry no letters; everything else needs an uppercase
    // letter, which also keeps lowercase prose like "digits1234567890" out.
    let is_waybill = WAYBILL_NUMBER.is_match(s);
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = s.chars().any(|c| c.is_ascii_digit());
    if !has_digit || !(has_upper || is_waybill) {
        return false;
    }

    if !s.ends_with(|c: char| c.is_ascii_digit()) {
        return false;
    }

    if CONTAINER_NUMBER.is_match(s) {
        return false;
    }

    is_waybill || DESLASHED_FORM.is_match(s) || LABEL_TAIL.is_match(s)
}
