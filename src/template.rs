//! Substitution templates – literal text interleaved with numbered
//! references to captured spans (`$0`…`$9`).
//!
//! Compilation is total: a `$` not followed by a decimal digit is ordinary
//! literal text. Rendering re-cases literal parts under a [`CasingMode`]
//! while captured text always passes through untouched.

use std::mem;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    casing::{self, CasingMode},
    context::Context,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template references {expected} capture(s) but {found} were supplied")]
    CaptureCountMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Verbatim(String),
    Capture(usize),
}

/// A compiled template. Immutable; one per substitution rule.
#[derive(Debug, Clone)]
pub struct Template {
    parts: SmallVec<[Part; 8]>,
    expected_captures: usize,
    // Placement metadata for title casing. Highest referenced capture index
    // is tracked so a rule like `$3` against a two-group pattern is caught
    // up front.
    first_verbatim: Option<usize>,
    last_verbatim: Option<usize>,
    max_capture: Option<usize>,
    verbatim_bytes: usize,
}

impl Template {
    /// Parse a template string. Adjacent literal runs end up in a single
    /// part and empty literal parts never materialise, so part order is
    /// also segment order.
    pub fn compile(source: &str) -> Template {
        let mut parts: SmallVec<[Part; 8]> = SmallVec::new();
        let mut literal = String::new();
        let mut expected = 0usize;
        let mut max_capture = None;

        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '$'
                && let Some(digit) = chars.peek().and_then(|d| d.to_digit(10))
            {
                chars.next();
                if !literal.is_empty() {
                    parts.push(Part::Verbatim(mem::take(&mut literal)));
                }
                let index = digit as usize;
                parts.push(Part::Capture(index));
                expected += 1;
                max_capture = Some(max_capture.map_or(index, |m: usize| m.max(index)));
            } else {
                literal.push(c);
            }
        }
        if !literal.is_empty() {
            parts.push(Part::Verbatim(literal));
        }

        let mut verbatim_bytes = 0;
        let mut first_verbatim = None;
        let mut last_verbatim = None;
        for (idx, part) in parts.iter().enumerate() {
            if let Part::Verbatim(seg) = part {
                verbatim_bytes += seg.len();
                if first_verbatim.is_none() {
                    first_verbatim = Some(idx);
                }
                last_verbatim = Some(idx);
            }
        }

        Template {
            parts,
            expected_captures: expected,
            first_verbatim,
            last_verbatim,
            max_capture,
            verbatim_bytes,
        }
    }

    /// Number of capture references found at compile time.
    #[inline]
    pub fn expected_captures(&self) -> usize {
        self.expected_captures
    }

    /// Would `supplied` capture values satisfy every reference?
    pub(crate) fn check_captures(&self, supplied: usize) -> Result<(), TemplateError> {
        if supplied != self.expected_captures || self.max_capture.is_some_and(|m| m >= supplied) {
            return Err(TemplateError::CaptureCountMismatch {
                expected: self.expected_captures,
                found: supplied,
            });
        }
        Ok(())
    }

    /// Render the template under a casing mode.
    ///
    /// Literal parts are re-cased; `Title` puts the capital on the first
    /// literal part, `ReverseTitle` on the last, every other literal part is
    /// lower-cased. Capture values are appended verbatim.
    pub fn render(
        &self,
        mode: CasingMode,
        captures: &[&str],
        ctx: &Context,
    ) -> Result<String, TemplateError> {
        self.check_captures(captures.len())?;

        let captured_bytes: usize = captures.iter().map(|c| c.len()).sum();
        let mut out = String::with_capacity(self.verbatim_bytes + captured_bytes);
        for (idx, part) in self.parts.iter().enumerate() {
            match part {
                Part::Capture(i) => out.push_str(captures[*i]),
                Part::Verbatim(seg) => {
                    let effective = match mode {
                        CasingMode::Title if Some(idx) == self.first_verbatim => CasingMode::Title,
                        CasingMode::ReverseTitle if Some(idx) == self.last_verbatim => {
                            CasingMode::ReverseTitle
                        }
                        CasingMode::Upper => CasingMode::Upper,
                        _ => CasingMode::Lower,
                    };
                    casing::render_cased(seg, effective, &ctx.lang_entry, &mut out);
                }
            }
        }
        Ok(out)
    }
}
