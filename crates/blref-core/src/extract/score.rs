//! Candidate accumulation, shape scoring and ranking.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::candidate::{Candidate, MatchPass};

use super::patterns::{MODERATE_SHAPE, STRONG_SHAPE};

/// Shape-fitness bonus for a normalized value.
///
/// +1 for a length of 10..=12, then +2 for the strong shape or else +1 for
/// the moderate shape.
pub fn shape_score(value: &str) -> i32 {
    let mut score = 0;

    if (10..=12).contains(&value.chars().count()) {
        score += 1;
    }

    if STRONG_SHAPE.is_match(value) {
        score += 2;
    } else if MODERATE_SHAPE.is_match(value) {
        score += 1;
    }

    score
}

/// Insertion-ordered set of candidates keyed by normalized value.
///
/// Owned by a single extraction call; repeated values merge into the
/// first-seen entry.
#[derive(Debug, Default)]
pub struct CandidateSet {
    index: HashMap<String, usize>,
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validated value found by `pass`.
    pub fn record(&mut self, value: &str, pass: MatchPass) {
        let idx = match self.index.get(value) {
            Some(&idx) => idx,
            None => {
                let idx = self.candidates.len();
                self.candidates.push(Candidate::new(value));
                self.index.insert(value.to_string(), idx);
                idx
            }
        };

        let candidate = &mut self.candidates[idx];
        candidate.score += pass.bonus();
        if pass == MatchPass::Label {
            candidate.from_label = true;
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Apply shape bonuses and return candidates by descending score.
    ///
    /// The sort is stable, so ties keep first-seen order.
    pub fn into_ranked(self) -> Vec<Candidate> {
        let mut ranked = self.candidates;
        for candidate in &mut ranked {
            candidate.score += shape_score(&candidate.value);
        }
        ranked.sort_by_key(|c| Reverse(c.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shape_score() {
        // length 11, no shape bonus
        assert_eq!(shape_score("CHLY720Q013"), 1);
        // length 13, strong
        assert_eq!(shape_score("MJNGB24060093"), 2);
        // length 10, strong
        assert_eq!(shape_score("MEI1255061"), 3);
        // length 12, moderate only
        assert_eq!(shape_score("MJLS-2406034"), 2);
        // length 8, nothing
        assert_eq!(shape_score("AEBDEL36"), 0);
        // length 12, numeric waybill
        assert_eq!(shape_score("176-12345678"), 1);
    }

    #[test]
    fn test_strong_takes_precedence_over_moderate() {
        // Matches both; only the strong bonus applies.
        assert!(MODERATE_SHAPE.is_match("ABC1234567"));
        assert_eq!(shape_score("ABC1234567"), 3);
    }

    #[test]
    fn test_record_merges_duplicates() {
        let mut set = CandidateSet::new();
        set.record("MEI1255061", MatchPass::Global);
        set.record("MEI1255061", MatchPass::Label);
        set.record("MEI1255061", MatchPass::Label);

        assert_eq!(set.len(), 1);
        let ranked = set.into_ranked();
        assert_eq!(ranked[0].score, 4 + 3);
        assert!(ranked[0].from_label);
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let mut set = CandidateSet::new();
        set.record("XYZ7654321", MatchPass::Global);
        set.record("ABC1234567", MatchPass::Global);
        set.record("AEBDEL36", MatchPass::Label);

        let ranked: Vec<String> = set.into_ranked().into_iter().map(|c| c.value).collect();
        assert_eq!(ranked, vec!["XYZ7654321", "ABC1234567", "AEBDEL36"]);
    }

    #[test]
    fn test_label_outranks_same_shape() {
        let mut set = CandidateSet::new();
        set.record("XYZ7654321", MatchPass::Global);
        set.record("ABC1234567", MatchPass::Label);

        let ranked = set.into_ranked();
        assert_eq!(ranked[0].value, "ABC1234567");
        assert_eq!(ranked[0].score, 5);
        assert!(!ranked[1].from_label);
    }

    #[test]
    fn test_empty_set() {
        let set = CandidateSet::new();
        assert!(set.is_empty());
        assert!(set.into_ranked().is_empty());
    }
}
