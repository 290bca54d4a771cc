//! Core library for B/L number extraction from OCR transcripts.
//!
//! This crate provides:
//! - Unicode cleanup of OCR transcripts (NFKC, zero-width and dash folding)
//! - Label-anchored and global pattern passes over the cleaned text
//! - Candidate normalization, validation and shape scoring
//! - Ranked, deduplicated reference numbers plus a primary best guess
//!
//! Extraction is pure and synchronous. Patterns are compiled once and
//! shared read-only, so a [`BlNumberExtractor`] can be used from many
//! threads at once.

pub mod error;
pub mod models;
pub mod extract;

pub use error::{BlrefError, Result};
pub use models::candidate::{Candidate, ExtractionReport, MatchPass, RawMatch};
pub use models::config::BlrefConfig;
pub use models::trace::{DebugTrace, PassTrace};
pub use extract::{
    extract_bl_numbers, extract_primary_bl_number, normalize_text, BlNumberExtractor,
    ReferenceExtractor, NOT_FOUND,
};
