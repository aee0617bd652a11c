//! sub/longest_match.rs – **Greedy longest-match chart substitution**
//! * At every position the longest key wins; ties cannot arise
//! * A matched key is always consumed, even when its replacement is empty
//! * Optionally case-aware: replacement text is re-cased from the matched span
//! * Zero-copy when no key matches anywhere

use std::borrow::Cow;

use crate::{casing, chart::Chart, context::Context, sub::Sub};

/// One left-to-right scan over `text`.
///
/// At each position the candidate window shrinks from the chart's longest
/// key length down to one character; the first (longest) hit is taken and
/// the cursor advances past it. Matching is local: no key can match across a
/// span consumed by an earlier match, and a shorter key is never preferred
/// over a longer one starting at the same position. Positions with no hit
/// are copied through one character at a time.
pub fn substitute_from_chart<'a>(
    text: &'a str,
    chart: &Chart,
    case_aware: bool,
    ctx: &Context,
) -> Cow<'a, str> {
    if text.is_empty() || chart.is_empty() {
        return Cow::Borrowed(text);
    }

    let bounds: Vec<(usize, char)> = text.char_indices().collect();
    let total = bounds.len();
    let mut out: Option<String> = None;
    let mut i = 0;

    while i < total {
        let window = chart.longest_key_chars().min(total - i);
        let mut hit = None;
        for width in (1..=window).rev() {
            let start = bounds[i].0;
            let end = match bounds.get(i + width) {
                Some(&(b, _)) => b,
                None => text.len(),
            };
            if let Some(replacement) = chart.lookup(&text[start..end]) {
                hit = Some((width, replacement));
                break;
            }
        }

        match hit {
            Some((width, replacement)) => {
                let out = out.get_or_insert_with(|| {
                    let mut s = String::with_capacity(text.len());
                    s.push_str(&text[..bounds[i].0]);
                    s
                });
                if !replacement.is_empty() {
                    if case_aware {
                        let first = bounds[i].1;
                        let last = bounds[i + width - 1].1;
                        let before = if i > 0 { Some(bounds[i - 1].1) } else { None };
                        let after = bounds.get(i + width).map(|&(_, c)| c);
                        let mode = casing::classify(first, last, width == 1, before, after);
                        casing::render_cased(replacement, mode, &ctx.lang_entry, out);
                    } else {
                        out.push_str(replacement);
                    }
                }
                i += width;
            }
            None => {
                if let Some(out) = out.as_mut() {
                    out.push(bounds[i].1);
                }
                i += 1;
            }
        }
    }

    match out {
        Some(s) => Cow::Owned(s),
        None => Cow::Borrowed(text),
    }
}

/// Chart substitution as a pipeline step.
pub struct ChartSub {
    chart: Chart,
    case_aware: bool,
}

impl ChartSub {
    /// Replacements are appended exactly as stored in the chart.
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            case_aware: false,
        }
    }

    /// Replacements are re-cased from the matched span.
    pub fn case_aware(chart: Chart) -> Self {
        Self {
            chart,
            case_aware: true,
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }
}

impl Sub for ChartSub {
    fn name(&self) -> &'static str {
        "longest_match"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        text.chars().any(|c| self.chart.can_start(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => substitute_from_chart(s, &self.chart, self.case_aware, ctx),
            Cow::Owned(s) => {
                let replaced = match substitute_from_chart(&s, &self.chart, self.case_aware, ctx) {
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
