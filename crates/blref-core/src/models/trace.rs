//! Diagnostic trace of the pattern passes, used when tuning the patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::{MatchPass, RawMatch};

/// Raw matches of a single pattern pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassTrace {
    pub pass: MatchPass,
    /// Source text of the compiled pattern.
    pub pattern: String,
    pub matches: Vec<RawMatch>,
}

/// Human-readable report of both passes over one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugTrace {
    pub passes: Vec<PassTrace>,
}

impl DebugTrace {
    /// Total number of raw matches across all passes.
    pub fn match_count(&self) -> usize {
        self.passes.iter().map(|p| p.matches.len()).sum()
    }
}

impl fmt::Display for PassTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} pattern ===", self.pass)?;
        writeln!(f, "{}", self.pattern)?;
        writeln!(f)?;

        if self.matches.is_empty() {
            return writeln!(f, "no match");
        }

        for m in &self.matches {
            writeln!(f, "match: {}", m.matched)?;
            writeln!(f, "  value: {}", m.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for DebugTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pass) in self.passes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", pass)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_match_marker() {
        let trace = PassTrace {
            pass: MatchPass::Global,
            pattern: "x".to_string(),
            matches: Vec::new(),
        };
        let text = trace.to_string();
        assert!(text.starts_with("=== GLOBAL pattern ===\nx\n"));
        assert!(text.ends_with("no match\n"));
    }

    #[test]
    fn test_display_lists_matches() {
        let trace = DebugTrace {
            passes: vec![PassTrace {
                pass: MatchPass::Label,
                pattern: "p".to_string(),
                matches: vec![RawMatch {
                    pass: MatchPass::Label,
                    matched: "B/L No: MI/24/304058".to_string(),
                    value: "MI/24/304058".to_string(),
                    position: (8, 20),
                }],
            }],
        };
        let text = trace.to_string();
        assert!(text.contains("match: B/L No: MI/24/304058\n"));
        assert!(text.contains("  value: MI/24/304058\n"));
        assert_eq!(trace.match_count(), 1);
    }
}
