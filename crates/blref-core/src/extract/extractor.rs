//! Two-pass B/L number extractor.

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::models::candidate::{Candidate, ExtractionReport, MatchPass, RawMatch};
use crate::models::config::ExtractionConfig;
use crate::models::trace::{DebugTrace, PassTrace};

use super::locator::locate;
use super::normalize::normalize_text;
use super::patterns::{GLOBAL_PATTERN, LABEL_PATTERN};
use super::score::CandidateSet;
use super::validate::{is_valid_bl_number, normalize_candidate};
use super::{ReferenceExtractor, NOT_FOUND};

/// Pass order. Label matches go first so their values are seen first.
const PASSES: [MatchPass; 2] = [MatchPass::Label, MatchPass::Global];

/// B/L and air waybill number extractor.
///
/// Holds only output settings; patterns are process-wide statics, so the
/// extractor is cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct BlNumberExtractor {
    /// Maximum ranked candidates to return (0 = unlimited).
    max_candidates: usize,
    /// Attach scored candidates to reports.
    include_scores: bool,
}

impl BlNumberExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_candidates: config.max_candidates,
            include_scores: config.include_scores,
        }
    }

    /// Limit the number of ranked candidates (0 = unlimited).
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Attach scored candidates to reports.
    pub fn with_scores(mut self, include: bool) -> Self {
        self.include_scores = include;
        self
    }

    /// Extract and package the ranked result with timing.
    pub fn report(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let ranked = self.extract_ranked(text);

        let bl_numbers: Vec<String> = ranked.iter().map(|c| c.value.clone()).collect();
        let primary = bl_numbers
            .first()
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.to_string());

        ExtractionReport {
            bl_number_count: bl_numbers.len(),
            bl_numbers,
            primary,
            candidates: self.include_scores.then_some(ranked),
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Numbered listing of ranked values, or the sentinel when none are found.
    pub fn ranked_listing(&self, text: &str) -> String {
        self.report(text).to_listing()
    }

    /// Raw matches of both passes with their pattern text.
    pub fn debug_trace(&self, text: &str) -> DebugTrace {
        let text = normalize_text(text);

        let passes = PASSES
            .iter()
            .map(|&pass| {
                let pattern = match pass {
                    MatchPass::Label => LABEL_PATTERN.as_str(),
                    MatchPass::Global => GLOBAL_PATTERN.as_str(),
                };
                PassTrace {
                    pass,
                    pattern: pattern.to_string(),
                    matches: locate(&text, pass),
                }
            })
            .collect();

        DebugTrace { passes }
    }

    fn collect(&self, candidates: &mut CandidateSet, matches: &[RawMatch]) {
        for m in matches {
            let value = normalize_candidate(&m.value);
            if value.is_empty() {
                continue;
            }
            if !is_valid_bl_number(&value) {
                trace!("Rejected {} candidate {:?}", m.pass, value);
                continue;
            }
            candidates.record(&value, m.pass);
        }
    }
}

impl ReferenceExtractor for BlNumberExtractor {
    fn extract_ranked(&self, text: &str) -> Vec<Candidate> {
        let text = normalize_text(text);
        info!(
            "Extracting B/L numbers from {} characters of text",
            text.chars().count()
        );

        let mut candidates = CandidateSet::new();
        for pass in PASSES {
            let matches = locate(&text, pass);
            debug!("{} pass found {} raw matches", pass, matches.len());
            self.collect(&mut candidates, &matches);
        }

        if candidates.is_empty() {
            debug!("No candidates survived validation");
            return Vec::new();
        }
        debug!("{} distinct candidates after validation", candidates.len());

        let mut ranked = candidates.into_ranked();
        if self.max_candidates > 0 {
            ranked.truncate(self.max_candidates);
        }

        debug!(
            "Ranked {} candidates, primary {:?}",
            ranked.len(),
            ranked.first().map(|c| c.value.as_str())
        );

        ranked
    }
}
