//! Unicode cleanup of OCR transcripts before pattern matching.

use unicode_normalization::UnicodeNormalization;

/// Normalize an OCR transcript so pattern matching is engine-independent.
///
/// Applies NFKC, drops zero-width characters, folds non-breaking space
/// variants to ASCII space and dash variants to ASCII hyphen. Absent input
/// yields an empty string.
pub fn normalize_text<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };

    input
        .nfkc()
        .filter(|c| !is_zero_width(*c))
        .map(|c| {
            if is_space_variant(c) {
                ' '
            } else if is_dash_variant(c) {
                '-'
            } else {
                c
            }
        })
        .collect()
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

fn is_space_variant(c: char) -> bool {
    matches!(c, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

// Hyphen, non-breaking hyphen, figure dash, en/em dash, horizontal bar,
// minus sign, small em dash, small and full-width hyphen-minus.
fn is_dash_variant(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}'
    )
}
