//! Built-in writing systems, assembled once from literal data.
//!
//! These are the reference users of the engine: each system is an ordered
//! pipeline of pattern rules and charts built at first use. Tables live here
//! as literals; nothing is loaded from files.

use std::sync::LazyLock;

use crate::{
    chart::{Chart, ChartError},
    lang::data::{ELL, RUS},
    romy::Romy,
    sub::{longest_match::ChartSub, pattern::PatternRule},
};

/// Lower-case chart data; upper-case and title-case key variants are
/// generated, all mapping to the same lower-case replacement. Case-aware
/// substitution re-cases the output from the matched span, so the values
/// here stay lower-case.
fn cased_chart(pairs: &[(&str, &str)]) -> Result<Chart, ChartError> {
    let mut builder = Chart::builder();
    for &(key, value) in pairs {
        builder = builder.add(key, value)?;

        let mut title = String::new();
        let mut chars = key.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
        let upper = key.to_uppercase();

        // Generated variants can collide (Greek σ and ς both upper-case to
        // Σ); first writer wins, matching the lower-case table order.
        if title != key && !builder.contains(&title) {
            builder = builder.add(title.as_str(), value)?;
        }
        if upper != key && upper != title && !builder.contains(&upper) {
            builder = builder.add(upper.as_str(), value)?;
        }
    }
    Ok(builder.build())
}

// ---------------------------------------------------------------------------
//    Greek
// ---------------------------------------------------------------------------

// Digraphs first in the table for readability only; the longest-match scan
// prefers them regardless of insertion order.
static GREEK_CHART: &[(&str, &str)] = &[
    ("αυ", "av"),
    ("αύ", "av"),
    ("ευ", "ev"),
    ("εύ", "ev"),
    ("ου", "ou"),
    ("ού", "ou"),
    ("α", "a"),
    ("ά", "a"),
    ("β", "v"),
    ("γ", "g"),
    ("δ", "d"),
    ("ε", "e"),
    ("έ", "e"),
    ("ζ", "z"),
    ("η", "i"),
    ("ή", "i"),
    ("θ", "th"),
    ("ι", "i"),
    ("ί", "i"),
    ("ϊ", "i"),
    ("ΐ", "i"),
    ("κ", "k"),
    ("λ", "l"),
    ("μ", "m"),
    ("ν", "n"),
    ("ξ", "x"),
    ("ο", "o"),
    ("ό", "o"),
    ("π", "p"),
    ("ρ", "r"),
    ("σ", "s"),
    ("ς", "s"),
    ("τ", "t"),
    ("υ", "y"),
    ("ύ", "y"),
    ("ϋ", "y"),
    ("ΰ", "y"),
    ("φ", "f"),
    ("χ", "ch"),
    ("ψ", "ps"),
    ("ω", "o"),
    ("ώ", "o"),
];

static GREEK: LazyLock<Romy> = LazyLock::new(|| {
    let chart = cased_chart(GREEK_CHART).expect("greek chart data is inconsistent");

    // Gamma nasalises before velars; rho takes rough breathing word-initially
    // and when doubled. The Greek letters these rules emit are finished by
    // the chart pass.
    let nasal_gamma =
        PatternRule::new(r"γ([γκξχ])", "n$0").expect("greek nasal-gamma rule is invalid");
    let initial_rho = PatternRule::new(r"\bρ", "rh").expect("greek initial-rho rule is invalid");
    let double_rho = PatternRule::new(r"(ρ)ρ", "$0rh").expect("greek double-rho rule is invalid");

    Romy::builder()
        .lang(ELL)
        .add_sub(nasal_gamma)
        .add_sub(initial_rho)
        .add_sub(double_rho)
        .add_sub(ChartSub::case_aware(chart))
        .build()
});

/// Greek to Latin.
pub fn greek() -> &'static Romy {
    &GREEK
}

// ---------------------------------------------------------------------------
//    Russian
// ---------------------------------------------------------------------------

static RUSSIAN_CHART: &[(&str, &str)] = &[
    ("а", "a"),
    ("б", "b"),
    ("в", "v"),
    ("г", "g"),
    ("д", "d"),
    ("е", "e"),
    ("ё", "yo"),
    ("ж", "zh"),
    ("з", "z"),
    ("и", "i"),
    ("й", "y"),
    ("к", "k"),
    ("л", "l"),
    ("м", "m"),
    ("н", "n"),
    ("о", "o"),
    ("п", "p"),
    ("р", "r"),
    ("с", "s"),
    ("т", "t"),
    ("у", "u"),
    ("ф", "f"),
    ("х", "kh"),
    ("ц", "ts"),
    ("ч", "ch"),
    ("ш", "sh"),
    ("щ", "shch"),
    ("ъ", ""), // hard sign is dropped
    ("ы", "y"),
    ("ь", ""), // soft sign is dropped
    ("э", "e"),
    ("ю", "yu"),
    ("я", "ya"),
];

static RUSSIAN: LazyLock<Romy> = LazyLock::new(|| {
    let chart = cased_chart(RUSSIAN_CHART).expect("russian chart data is inconsistent");
    Romy::builder()
        .lang(RUS)
        .add_sub(ChartSub::case_aware(chart))
        .build()
});

/// Russian to Latin.
pub fn russian() -> &'static Romy {
    &RUSSIAN
}
