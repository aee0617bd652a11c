//! Casing classification shared by both substitutors.
//!
//! A replacement never copies case character-for-character; instead the
//! matched span is classified into one of four modes and the replacement's
//! literal text is re-cased accordingly. Captured text is exempt and always
//! passes through untouched.

use crate::lang::LangEntry;

/// How literal replacement text should be cased for one substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingMode {
    /// Everything lower-cased.
    Lower,
    /// Everything upper-cased.
    Upper,
    /// First character of the first literal segment upper-cased, the rest
    /// lower-cased.
    Title,
    /// Last character of the last literal segment upper-cased, the rest
    /// lower-cased.
    ReverseTitle,
}

/// Infer the casing mode from the first and last signal characters of a
/// match.
///
/// `single_signal` means first and last are the same character position. In
/// that case the last character only counts as upper when a neighbouring
/// character outside the match is upper too; a lone capital inside an
/// all-caps run must classify as `Upper`, not `Title`. This neighbour check
/// is a heuristic with known imprecision for long matches; it is kept
/// exactly as is because downstream tables depend on its output.
pub(crate) fn classify(
    first: char,
    last: char,
    single_signal: bool,
    before: Option<char>,
    after: Option<char>,
) -> CasingMode {
    let first_upper = first.is_uppercase();
    let mut last_upper = last.is_uppercase();
    if last_upper && single_signal {
        last_upper =
            after.is_some_and(char::is_uppercase) || before.is_some_and(char::is_uppercase);
    }
    match (first_upper, last_upper) {
        (false, false) => CasingMode::Lower,
        (true, true) => CasingMode::Upper,
        (true, false) => CasingMode::Title,
        (false, true) => CasingMode::ReverseTitle,
    }
}

/// Re-case one literal segment into `out` under the given mode.
///
/// `Title` and `ReverseTitle` here mean "this segment carries the cased
/// character"; segment placement across a multi-part template is decided by
/// the template renderer.
pub(crate) fn render_cased(segment: &str, mode: CasingMode, entry: &LangEntry, out: &mut String) {
    match mode {
        CasingMode::Lower => {
            for c in segment.chars() {
                entry.push_lower(c, out);
            }
        }
        CasingMode::Upper => {
            for c in segment.chars() {
                entry.push_upper(c, out);
            }
        }
        CasingMode::Title => {
            let mut chars = segment.chars();
            if let Some(c) = chars.next() {
                entry.push_upper(c, out);
            }
            for c in chars {
                entry.push_lower(c, out);
            }
        }
        CasingMode::ReverseTitle => {
            let Some((last_at, _)) = segment.char_indices().next_back() else {
                return;
            };
            for c in segment[..last_at].chars() {
                entry.push_lower(c, out);
            }
            for c in segment[last_at..].chars() {
                entry.push_upper(c, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::lang::data::{ENG, TUR};

    #[test]
    fn two_signal_classification() {
        assert_eq!(classify('a', 'b', false, None, None), CasingMode::Lower);
        assert_eq!(classify('A', 'B', false, None, None), CasingMode::Upper);
        assert_eq!(classify('A', 'b', false, None, None), CasingMode::Title);
        assert_eq!(
            classify('a', 'B', false, None, None),
            CasingMode::ReverseTitle
        );
    }

    #[test]
    fn single_signal_needs_upper_neighbour() {
        // A lone capital with lower-case surroundings reads as title case.
        assert_eq!(
            classify('P', 'P', true, Some('δ'), Some('δ')),
            CasingMode::Title
        );
        // Inside an all-caps run it reads as upper case.
        assert_eq!(
            classify('P', 'P', true, None, Some('Δ')),
            CasingMode::Upper
        );
        assert_eq!(
            classify('P', 'P', true, Some('Δ'), None),
            CasingMode::Upper
        );
        // Lower-case signal is unaffected by neighbours.
        assert_eq!(
            classify('p', 'p', true, Some('Δ'), Some('Δ')),
            CasingMode::Lower
        );
    }

    #[test]
    fn render_modes() {
        let ctx = Context::new(ENG);
        let mut out = String::new();
        render_cased("rh", CasingMode::Lower, &ctx.lang_entry, &mut out);
        assert_eq!(out, "rh");

        out.clear();
        render_cased("rh", CasingMode::Upper, &ctx.lang_entry, &mut out);
        assert_eq!(out, "RH");

        out.clear();
        render_cased("rh", CasingMode::Title, &ctx.lang_entry, &mut out);
        assert_eq!(out, "Rh");

        out.clear();
        render_cased("rh", CasingMode::ReverseTitle, &ctx.lang_entry, &mut out);
        assert_eq!(out, "rH");
    }

    #[test]
    fn render_respects_locale() {
        let ctx = Context::new(TUR);
        let mut out = String::new();
        render_cased("iz", CasingMode::Upper, &ctx.lang_entry, &mut out);
        assert_eq!(out, "İZ");

        out.clear();
        render_cased("IZ", CasingMode::Lower, &ctx.lang_entry, &mut out);
        assert_eq!(out, "ız");
    }

    #[test]
    fn render_empty_segment() {
        let ctx = Context::new(ENG);
        let mut out = String::new();
        render_cased("", CasingMode::Title, &ctx.lang_entry, &mut out);
        render_cased("", CasingMode::ReverseTitle, &ctx.lang_entry, &mut out);
        assert_eq!(out, "");
    }
}
