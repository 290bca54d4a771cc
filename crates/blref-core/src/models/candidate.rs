//! Candidate reference numbers and extraction results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which pattern pass produced a raw match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPass {
    /// Value found directly after a recognized label ("B/L No.", "MAWB No.", ...).
    Label,
    /// Value found by shape alone, without a label.
    Global,
}

impl MatchPass {
    /// Score contributed by a single match from this pass.
    pub fn bonus(self) -> i32 {
        match self {
            Self::Label => 2,
            Self::Global => 0,
        }
    }
}

impl fmt::Display for MatchPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => write!(f, "LABEL"),
            Self::Global => write!(f, "GLOBAL"),
        }
    }
}

/// A substring occurrence from one of the pattern passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    /// Pass that produced the match.
    pub pass: MatchPass,
    /// Full matched text (label included for the label pass).
    pub matched: String,
    /// Captured value, before normalization.
    pub value: String,
    /// Byte span of the captured value in the normalized text.
    pub position: (usize, usize),
}

/// A normalized reference number with its accumulated score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical form: whitespace stripped, slash form de-slashed.
    pub value: String,
    /// True if any label-anchored match produced this value.
    pub from_label: bool,
    /// Additive score across passes and shape rules.
    pub score: i32,
}

impl Candidate {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            from_label: false,
            score: 0,
        }
    }
}

/// Serializable outcome of one extraction call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    /// Ranked reference numbers, best first.
    pub bl_numbers: Vec<String>,

    /// Number of ranked reference numbers.
    pub bl_number_count: usize,

    /// Best candidate, or the "not found" sentinel.
    pub primary: String,

    /// Ranked candidates with scores, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionReport {
    /// True if at least one reference number was found.
    pub fn is_found(&self) -> bool {
        !self.bl_numbers.is_empty()
    }

    /// Numbered listing of ranked values, or the primary sentinel when empty.
    pub fn to_listing(&self) -> String {
        if !self.is_found() {
            return self.primary.clone();
        }

        let mut output = String::from("=== Extracted B/L numbers (by priority) ===\n");
        for (i, value) in self.bl_numbers.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, value));
        }
        output
    }
}
