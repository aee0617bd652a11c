use crate::lang::LangEntry;

/// -------------------------------------------------------------------------
/// Case conversion helpers
///
/// Every case conversion in the crate goes through these, so that one
/// `LangEntry` consistently governs a whole substitution call. The language
/// map wins over the Unicode default (Turkish 'I' lowercases to 'ı', not
/// 'i'); characters without an entry use the full Unicode mappings, which
/// may expand (German 'ß' uppercases to "SS").
/// -------------------------------------------------------------------------
impl LangEntry {
    #[inline(always)]
    pub fn push_lower(&self, c: char, out: &mut String) {
        if let Some(m) = self.lower_map.iter().find(|m| m.from == c) {
            out.push(m.to);
        } else {
            out.extend(c.to_lowercase());
        }
    }

    #[inline(always)]
    pub fn push_upper(&self, c: char, out: &mut String) {
        if let Some(m) = self.upper_map.iter().find(|m| m.from == c) {
            out.push(m.to);
        } else {
            out.extend(c.to_uppercase());
        }
    }

    #[inline]
    pub fn lower_str(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_lower(c, &mut out);
        }
        out
    }

    #[inline]
    pub fn upper_str(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            self.push_upper(c, &mut out);
        }
        out
    }
}
