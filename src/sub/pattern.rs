//! sub/pattern.rs – **Case-aware pattern substitution**
//!
//! A rule pairs a case-insensitive pattern with a template. For every match
//! the rule infers a casing mode from the match's *signal characters* (the
//! characters not claimed by any capture group), renders the template under
//! that mode, and splices the result in. Captured text is never re-cased;
//! only the template's literal segments are.

use std::borrow::Cow;

use regex::{Captures, Match, Regex, RegexBuilder};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    casing::{self, CasingMode},
    context::Context,
    sub::Sub,
    template::{Template, TemplateError},
};

/// Construction-time rule defects; fatal to the writing-system author.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// One compiled substitution rule. Immutable and stateless across calls.
#[derive(Debug)]
pub struct PatternRule {
    regex: Regex,
    template: Template,
    count_captures_in_casing: bool,
}

impl PatternRule {
    /// Compile a rule with default modifiers. Patterns always match
    /// case-insensitively; casing is reconstructed on output instead.
    pub fn new(pattern: &str, template: &str) -> Result<Self, RuleError> {
        Self::builder(pattern, template).build()
    }

    pub fn builder(pattern: &str, template: &str) -> PatternRuleBuilder {
        PatternRuleBuilder {
            pattern: pattern.to_owned(),
            template: template.to_owned(),
            count_captures_in_casing: false,
            multi_line: false,
        }
    }

    /// Replace every non-overlapping match, leftmost first. Text outside
    /// matches is copied verbatim; no match at all returns the input
    /// unchanged and unallocated.
    pub fn substitute<'a>(&self, text: &'a str, ctx: &Context) -> Cow<'a, str> {
        let mut out: Option<String> = None;
        let mut last_end = 0;
        let mut values: SmallVec<[&str; 10]> = SmallVec::new();

        for caps in self.regex.captures_iter(text) {
            let m = caps.get(0).expect("group 0 always participates");
            let out = out.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[last_end..m.start()]);

            let mode = self.classify(text, &caps, m);
            values.clear();
            values.extend((1..caps.len()).map(|g| caps.get(g).map_or("", |c| c.as_str())));
            let rendered = self
                .template
                .render(mode, &values, ctx)
                .expect("capture count validated at construction");
            out.push_str(&rendered);
            last_end = m.end();
        }

        match out {
            Some(mut s) => {
                s.push_str(&text[last_end..]);
                Cow::Owned(s)
            }
            None => Cow::Borrowed(text),
        }
    }

    /// Find the first and last signal character of the match and classify.
    ///
    /// Signal characters are those outside every capture-group span, unless
    /// the rule opts captured characters in. A match with no signal
    /// characters defaults to lower case.
    fn classify(&self, text: &str, caps: &Captures<'_>, m: Match<'_>) -> CasingMode {
        let spans: SmallVec<[(usize, usize); 10]> = if self.count_captures_in_casing {
            SmallVec::new()
        } else {
            (1..caps.len())
                .filter_map(|g| caps.get(g))
                .map(|c| (c.start(), c.end()))
                .collect()
        };

        let mut first = None;
        let mut last = None;
        for (offset, c) in text[m.start()..m.end()].char_indices() {
            let pos = m.start() + offset;
            if spans.iter().any(|&(s, e)| pos >= s && pos < e) {
                continue;
            }
            if first.is_none() {
                first = Some((pos, c));
            }
            last = Some((pos, c));
        }

        let (Some((first_pos, first_c)), Some((last_pos, last_c))) = (first, last) else {
            return CasingMode::Lower;
        };

        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        casing::classify(first_c, last_c, first_pos == last_pos, before, after)
    }
}

impl Sub for PatternRule {
    fn name(&self) -> &'static str {
        "pattern"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        self.regex.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => self.substitute(s, ctx),
            Cow::Owned(s) => {
                let replaced = match self.substitute(&s, ctx) {
                    Cow::Owned(o) => Some(o),
                    Cow::Borrowed(_) => None,
                };
                match replaced {
                    Some(o) => Cow::Owned(o),
                    None => Cow::Owned(s),
                }
            }
        }
    }
}

pub struct PatternRuleBuilder {
    pattern: String,
    template: String,
    count_captures_in_casing: bool,
    multi_line: bool,
}

impl PatternRuleBuilder {
    /// Let characters inside capture groups act as casing signal.
    pub fn count_captures_in_casing(mut self, yes: bool) -> Self {
        self.count_captures_in_casing = yes;
        self
    }

    /// `^`/`$` match line boundaries instead of text boundaries.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Compile pattern and template and cross-check their capture counts.
    /// Rejecting the mismatch here keeps substitution itself infallible.
    pub fn build(self) -> Result<PatternRule, RuleError> {
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(true)
            .multi_line(self.multi_line)
            .build()?;
        let template = Template::compile(&self.template);
        template.check_captures(regex.captures_len() - 1)?;
        Ok(PatternRule {
            regex,
            template,
            count_captures_in_casing: self.count_captures_in_casing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::ENG;

    fn ctx() -> Context {
        Context::new(ENG)
    }

    #[test]
    fn literal_rule_reconstructs_case() {
        let rule = PatternRule::new("ρ", "rh").unwrap();
        assert_eq!(rule.substitute("ρδδ", &ctx()), "rhδδ");
        assert_eq!(rule.substitute("Ρδδ", &ctx()), "Rhδδ");
        assert_eq!(rule.substitute("ΡΔΔ", &ctx()), "RHΔΔ");
    }

    #[test]
    fn capture_values_keep_their_case() {
        let rule = PatternRule::new("a(bcd)e(fg)hi", "z$0z$1zz").unwrap();
        assert_eq!(rule.substitute("abcdefghi", &ctx()), "zbcdzfgzz");
        assert_eq!(rule.substitute("Abcdefghi", &ctx()), "Zbcdzfgzz");
    }

    #[test]
    fn reverse_title_from_trailing_capital() {
        let rule = PatternRule::new("a(bcd)e(fg)hI", "z$0z$1zz").unwrap();
        assert_eq!(rule.substitute("abcdefghI", &ctx()), "zbcdzfgzZ");
    }

    #[test]
    fn signal_skips_capture_groups() {
        // 'e' and 'i' are the only signal characters; the captured spans may
        // be any case without affecting classification.
        let rule = PatternRule::new("(ab)e(cd)i", "x$0$1").unwrap();
        assert_eq!(rule.substitute("ABeCDi", &ctx()), "xABCD");
        assert_eq!(rule.substitute("ABECDI", &ctx()), "XABCD");
    }

    #[test]
    fn captures_opted_into_casing() {
        let rule = PatternRule::builder("(a)bc", "x$0y")
            .count_captures_in_casing(true)
            .build()
            .unwrap();
        // With the flag, the leading captured 'A' is the first signal.
        assert_eq!(rule.substitute("Abc", &ctx()), "XAy");
        assert_eq!(rule.substitute("abc", &ctx()), "xay");
    }

    #[test]
    fn all_captured_match_defaults_to_lower() {
        let rule = PatternRule::new("(AB)", "x$0").unwrap();
        assert_eq!(rule.substitute("AB", &ctx()), "xAB");
    }

    #[test]
    fn multiple_matches_and_gaps() {
        let rule = PatternRule::new("ψ", "ps").unwrap();
        assert_eq!(rule.substitute("αψβψγ", &ctx()), "αpsβpsγ");
    }

    #[test]
    fn no_match_is_identity_and_zero_copy() {
        let rule = PatternRule::new("ψ", "ps").unwrap();
        let input = "nothing to do";
        let result = rule.substitute(input, &ctx());
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn empty_input() {
        let rule = PatternRule::new("ψ", "ps").unwrap();
        assert_eq!(rule.substitute("", &ctx()), "");
    }

    #[test]
    fn capture_count_mismatch_rejected_at_construction() {
        let err = PatternRule::new("(a)(b)", "$0").unwrap_err();
        assert!(matches!(err, RuleError::Template(_)));
        let err = PatternRule::new("ab", "$0").unwrap_err();
        assert!(matches!(err, RuleError::Template(_)));
    }

    #[test]
    fn invalid_pattern_rejected() {
        assert!(matches!(
            PatternRule::new("(", "x"),
            Err(RuleError::Pattern(_))
        ));
    }

    #[test]
    fn multi_line_modifier() {
        let rule = PatternRule::builder("^ρ", "rh").multi_line(true).build().unwrap();
        assert_eq!(rule.substitute("ρα\nρβ", &ctx()), "rhα\nrhβ");
    }
}
