//! Core substitution step abstraction.
//!
//! A writing system is expressed as an ordered sequence of substitution
//! steps; each step consumes the previous step's full output. Steps are
//! built once from literal rule data, never mutated afterwards, and are safe
//! for unlimited concurrent read-only use.
//!
//! Runtime substitution is total: there is no malformed input at this layer,
//! so `apply` cannot fail. Everything that can go wrong (duplicate chart
//! keys, capture-count mismatches) is a rule-data defect surfaced when the
//! step is constructed.

pub mod longest_match;
pub mod pattern;

use crate::context::Context;
use std::borrow::Cow;

/// A single substitution step.
pub trait Sub: Send + Sync {
    /// Human-readable name – used for debugging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole step.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct; returns the
    /// input untouched when nothing matches.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
