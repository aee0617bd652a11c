use crate::lang::{CaseMap, Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $name:literal,
        upper: [ $($ufrom:expr => $uto:expr),* $(,)? ],
        lower: [ $($lfrom:expr => $lto:expr),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static UPPER: &[CaseMap] = &[
                        $(CaseMap { from: $ufrom, to: $uto }),*
                    ];

                    pub static LOWER: &[CaseMap] = &[
                        $(CaseMap { from: $lfrom, to: $lto }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        upper_map: [<$code:lower _data>]::UPPER,
                        lower_map: [<$code:lower _data>]::LOWER,
                    }
                ),*
            };
        }

        // Helper: `from_code`
        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Only the casing exceptions live here; every unlisted character falls
//    back to the Unicode one-to-full case mappings.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "ENG", "English",
        upper: [],
        lower: [],

    TUR, "TUR", "Turkish",
        upper: [ 'i' => 'İ', 'ı' => 'I' ],
        lower: [ 'I' => 'ı', 'İ' => 'i' ],

    AZE, "AZE", "Azerbaijani",
        upper: [ 'i' => 'İ', 'ı' => 'I' ],
        lower: [ 'I' => 'ı', 'İ' => 'i' ],

    ELL, "ELL", "Greek",
        upper: [],
        lower: [],

    RUS, "RUS", "Russian",
        upper: [],
        lower: [],

    DEU, "DEU", "German",
        upper: [],
        lower: [],
}
