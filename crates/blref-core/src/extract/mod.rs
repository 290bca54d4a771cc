//! B/L number extraction module.
//!
//! Stages run strictly forward: [`normalize`] cleans the transcript,
//! [`locator`] runs the label-anchored and global passes, [`validate`]
//! canonicalizes and filters raw matches, and [`score`] accumulates and
//! ranks the survivors.

mod extractor;
pub mod locator;
pub mod normalize;
pub mod patterns;
pub mod score;
pub mod validate;

pub use extractor::BlNumberExtractor;
pub use normalize::normalize_text;
pub use validate::{is_valid_bl_number, normalize_candidate};

use crate::models::candidate::Candidate;

/// Returned by primary extraction when no candidate survives.
pub const NOT_FOUND: &str = "B/L number not found";

/// Trait for reference number extractors.
pub trait ReferenceExtractor {
    /// Ranked candidates with scores, best first.
    fn extract_ranked(&self, text: &str) -> Vec<Candidate>;

    /// Ranked normalized values, best first.
    fn extract_all(&self, text: &str) -> Vec<String> {
        self.extract_ranked(text)
            .into_iter()
            .map(|c| c.value)
            .collect()
    }

    /// Best candidate, or [`NOT_FOUND`].
    fn extract_primary(&self, text: &str) -> String {
        self.extract_all(text)
            .into_iter()
            .next()
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

/// Extract ranked B/L numbers from an OCR transcript. Absent text yields none.
pub fn extract_bl_numbers<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    text.into()
        .map(|t| BlNumberExtractor::new().extract_all(t))
        .unwrap_or_default()
}

/// Extract the best B/L number, or [`NOT_FOUND`].
pub fn extract_primary_bl_number<'a>(text: impl Into<Option<&'a str>>) -> String {
    extract_bl_numbers(text)
        .into_iter()
        .next()
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
