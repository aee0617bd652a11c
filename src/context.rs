// src/context.rs
// This file is the single source of truth for language configuration in hot paths.
// It is deliberately tiny, Copy, and contains only 'static data.

use crate::lang::{DEFAULT_LANG, Lang, LangEntry, data::LANG_TABLE};

/// Casing locale passed explicitly to every substitution call.
///
/// Contains:
/// - `lang`: human identifier (for error messages and debugging)
/// - `lang_entry`: the casing rules used in every hot path (zero-cost)
///
/// There is no process-global locale; one `Context` scopes all casing
/// decisions inside a call chain.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Create a context using the canonical static data for a language.
    #[inline(always)]
    pub fn new(lang: Lang) -> Self {
        let lang_entry = LANG_TABLE
            .get(lang.code())
            .copied()
            .expect("language not present in LANG_TABLE – this is a bug");
        Self { lang, lang_entry }
    }
}
