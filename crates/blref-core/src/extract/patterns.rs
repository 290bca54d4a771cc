//! Regex patterns for B/L and air waybill number extraction.
//!
//! The `regex` crate has no look-around, so the global pattern consumes one
//! boundary character (or a text edge) on each side of the value instead.
//! Callers read the value from capture group 1 and resume scanning at its
//! end, which keeps the trailing boundary available to the next match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Label followed by a reference value. `\s*` lets the value sit on the
    // next line.
    pub static ref LABEL_PATTERN: Regex = Regex::new(concat!(
        r"(?i)",
        r"(?:B/?L\.?\s*No\.?|Bill\s*of\s*Lading\s*No\.?|Air\s*Waybill|Waybill\s*No\.?",
        r"|MAWB\s*No\.?|HAWB\s*No\.?|H(?:ouse)?\s*(?:B/?L|BL)\s*No\.?)",
        r"\s*(?:[.:：#-]*\s*)",
        r"(",
        r"[A-Z]{1,4}/[0-9]{2}/[0-9]{5,}",
        r"|[A-Z]{2,10}[\s-]?[A-Z0-9]{1,10}",
        r"|[0-9]{3}[-\s]?(?:[0-9]{8}|[0-9]{4}[-\s]?[0-9]{4}|[0-9]{3}[-\s]?[0-9]{5})",
        r")",
    ))
    .unwrap();

    // Unlabeled value bounded by non-alphanumerics. The mixed shape needs at
    // least 6 trailing digits here since there is no label context.
    pub static ref GLOBAL_PATTERN: Regex = Regex::new(concat!(
        r"(?i)",
        r"(?:^|[^A-Z0-9])",
        r"(",
        r"[A-Z]{1,4}/[0-9]{2}/[0-9]{5,}",
        r"|[A-Z]{2,6}[\s-]?[0-9]{6,10}",
        r"|[0-9]{3}[-\s]?(?:[0-9]{8}|[0-9]{4}[-\s]?[0-9]{4}|[0-9]{3}[-\s]?[0-9]{5})",
        r")",
        r"(?:[^A-Z0-9]|$)",
    ))
    .unwrap();

    // Whole-value shapes used by normalization and validation.
    pub static ref SLASH_FORM: Regex = Regex::new(
        r"(?i)^[A-Z]{1,4}/[0-9]{2}/[0-9]{5,}$"
    ).unwrap();

    pub static ref DESLASHED_FORM: Regex = Regex::new(
        r"(?i)^[A-Z]{1,4}[0-9]{7,}$"
    ).unwrap();

    pub static ref WAYBILL_NUMBER: Regex = Regex::new(
        r"^[0-9]{3}[-\s]?(?:[0-9]{8}|[0-9]{4}[-\s]?[0-9]{4}|[0-9]{3}[-\s]?[0-9]{5})$"
    ).unwrap();

    pub static ref LABEL_TAIL: Regex = Regex::new(
        r"(?i)^[A-Z]{2,10}-?[A-Z0-9]{1,12}$"
    ).unwrap();

    // ISO 6346 container number: owner code + category (4 letters), 7 digits.
    pub static ref CONTAINER_NUMBER: Regex = Regex::new(
        r"(?i)^[A-Z]{4}[0-9]{7}$"
    ).unwrap();

    // Scoring shapes.
    pub static ref STRONG_SHAPE: Regex = Regex::new(
        r"(?i)^[A-Z]{3,4}[A-Z0-9]{0,4}[0-9]{6,}$"
    ).unwrap();

    pub static ref MODERATE_SHAPE: Regex = Regex::new(
        r"(?i)^[A-Z]{2,6}-?[0-9]{6,10}$"
    ).unwrap();
}
