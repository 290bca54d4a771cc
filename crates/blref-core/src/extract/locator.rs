//! Label-anchored and global pattern passes over normalized text.

use crate::models::candidate::{MatchPass, RawMatch};

use super::patterns::{GLOBAL_PATTERN, LABEL_PATTERN};

/// Collect every label-anchored match, in scan order.
pub fn label_matches(text: &str) -> Vec<RawMatch> {
    LABEL_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let value = caps.get(1)?;
            Some(RawMatch {
                pass: MatchPass::Label,
                matched: full.as_str().to_string(),
                value: value.as_str().to_string(),
                position: (value.start(), value.end()),
            })
        })
        .collect()
}

/// Collect every unlabeled match bounded by non-alphanumerics, in scan order.
///
/// Scanning resumes at the end of each captured value rather than the end of
/// the whole match, so a boundary character can close one value and open
/// the next.
pub fn global_matches(text: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = GLOBAL_PATTERN.captures_at(text, pos) else {
            break;
        };
        let Some(value) = caps.get(1) else {
            break;
        };

        matches.push(RawMatch {
            pass: MatchPass::Global,
            matched: value.as_str().to_string(),
            value: value.as_str().to_string(),
            position: (value.start(), value.end()),
        });
        pos = value.end();
    }

    matches
}

/// Run one pass by kind.
pub fn locate(text: &str, pass: MatchPass) -> Vec<RawMatch> {
    match pass {
        MatchPass::Label => label_matches(text),
        MatchPass::Global => global_matches(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(matches: &[RawMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn test_label_matches_all_occurrences() {
        let text = "B/L No: MI/24/304058\nHAWB No. AEBDEL36\nMAWB No. 176-12345678";
        let matches = label_matches(text);
        assert_eq!(
            values(&matches),
            vec!["MI/24/304058", "AEBDEL36", "176-12345678"]
        );
        assert!(matches.iter().all(|m| m.pass == MatchPass::Label));
        assert_eq!(matches[0].matched, "B/L No: MI/24/304058");
    }

    #[test]
    fn test_label_match_position_points_at_value() {
        let text = "xx B/L No: MI/24/304058";
        let m = &label_matches(text)[0];
        assert_eq!(&text[m.position.0..m.position.1], "MI/24/304058");
    }

    #[test]
    fn test_global_matches_share_boundary() {
        // A single space separates both values; both must be found.
        let text = "ABC1234567 XYZ7654321";
        assert_eq!(
            values(&global_matches(text)),
            vec!["ABC1234567", "XYZ7654321"]
        );
    }

    #[test]
    fn test_global_matches_skip_longer_runs() {
        let text = "ABC123456789012 ok 176-12345678";
        assert_eq!(values(&global_matches(text)), vec!["176-12345678"]);
    }

    #[test]
    fn test_global_matches_slash_form() {
        let text = "ref MI/24/304058, thanks";
        let matches = global_matches(text);
        assert_eq!(values(&matches), vec!["MI/24/304058"]);
        assert_eq!(matches[0].matched, "MI/24/304058");
    }

    #[test]
    fn test_empty_text() {
        assert!(label_matches("").is_empty());
        assert!(global_matches("").is_empty());
    }

    #[test]
    fn test_locate_dispatches_by_pass() {
        let text = "B/L No: MI/24/304058";
        assert_eq!(locate(text, MatchPass::Label), label_matches(text));
        assert_eq!(locate(text, MatchPass::Global), global_matches(text));
    }
}
