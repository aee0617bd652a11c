//! Chart – an insert-only map from key spans to replacement text, used for
//! greedy longest-match substitution.
//!
//! Construction goes through [`ChartBuilder`]; the built [`Chart`] is
//! immutable and safe for unlimited concurrent read-only use. An empty
//! replacement means "delete the matched key".

use std::collections::HashMap;
use thiserror::Error;

/// Construction-time chart defects. These indicate a bug in a writing
/// system's rule data, never in user input, and are not recoverable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("chart keys must be non-empty")]
    EmptyKey,

    #[error("duplicate chart key `{0}`")]
    DuplicateKey(String),
}

/// Insert-only builder; keys are write-once.
#[derive(Debug, Default)]
pub struct ChartBuilder {
    map: HashMap<String, String>,
    longest_key_chars: usize,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key/replacement pair. Empty and already-present keys are
    /// rejected.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self, ChartError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ChartError::EmptyKey);
        }
        if self.map.contains_key(&key) {
            return Err(ChartError::DuplicateKey(key));
        }
        self.longest_key_chars = self.longest_key_chars.max(key.chars().count());
        self.map.insert(key, value.into());
        Ok(self)
    }

    /// Bulk `add`, stopping at the first defect.
    pub fn add_all<'a>(
        mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ChartError> {
        for (key, value) in pairs {
            self = self.add(key, value)?;
        }
        Ok(self)
    }

    /// Used by writing-system glue to avoid re-adding generated case
    /// variants that collide (Greek σ and ς both upper-case to Σ).
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn build(self) -> Chart {
        let mut leading: Vec<char> = self
            .map
            .keys()
            .filter_map(|k| k.chars().next())
            .collect();
        leading.sort_unstable();
        leading.dedup();
        Chart {
            map: self.map,
            longest_key_chars: self.longest_key_chars,
            leading: leading.into_boxed_slice(),
        }
    }
}

/// Immutable key → replacement map with a cached longest-key length.
#[derive(Debug, Clone)]
pub struct Chart {
    map: HashMap<String, String>,
    longest_key_chars: usize,
    // First characters of all keys, sorted; lets `needs_apply` pre-checks
    // skip texts that cannot contain a match.
    leading: Box<[char]>,
}

impl Chart {
    pub fn builder() -> ChartBuilder {
        ChartBuilder::new()
    }

    /// Exact lookup; `span` must equal a key in full.
    #[inline]
    pub fn lookup(&self, span: &str) -> Option<&str> {
        self.map.get(span).map(String::as_str)
    }

    /// Length in chars of the longest key present.
    #[inline]
    pub fn longest_key_chars(&self) -> usize {
        self.longest_key_chars
    }

    /// Could a key start with this character?
    #[inline]
    pub fn can_start(&self, c: char) -> bool {
        self.leading.binary_search(&c).is_ok()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
