//! Arabic text normalization utilities
//!
//! Canonicalizes Arabic words so that optional orthographic detail does not
//! affect word identity:
//! - Remove diacritics (tashkeel)
//! - Remove tatweel (kashida)
//! - Normalize alef variants to plain alef
//! - Collapse whitespace
//!
//! Further folds (alef wasla, alef maqsura, ta marbuta, punctuation) are
//! available through [`NormalizerConfig`] and are off by default.

use crate::config::NormalizerConfig;

/// Tatweel / kashida elongation mark.
const TATWEEL: char = '\u{0640}';

/// Plain alef (ا)
const ALEF: char = '\u{0627}';

/// Alef variants that should be normalized to plain alef (ا)
const ALEF_VARIANTS: &[char] = &[
    '\u{0622}', // Alef with madda (آ)
    '\u{0623}', // Alef with hamza above (أ)
    '\u{0625}', // Alef with hamza below (إ)
];

const ALEF_WASLA: char = '\u{0671}';
const ALEF_MAQSURA: char = '\u{0649}';
const YA: char = '\u{064A}';
const TA_MARBUTA: char = '\u{0629}';
const HA: char = '\u{0647}';

/// Combining marks: U+064B (fathatan) through U+065F (wavy hamza below),
/// plus the superscript alef U+0670.
#[inline]
fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}'
}

/// Letters, digits and the marks this module knows about; everything else is
/// punctuation or a Quranic annotation sign (۝ ۞ ، ؟ ...).
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_diacritic(c) || c == TATWEEL
}

/// Normalize Arabic text for comparison with the default rules.
///
/// Removes diacritics and tatweel, maps أ إ آ to ا, collapses runs of
/// whitespace to one space and trims both ends. Never fails; the empty
/// string maps to itself.
pub fn normalize_arabic(text: &str) -> String {
    normalize_arabic_with(text, &NormalizerConfig::default())
}

/// Normalize Arabic text using an explicit set of rules.
pub fn normalize_arabic_with(text: &str, config: &NormalizerConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(text.len());
    let mut last_was_space = true; // Start true to skip leading spaces

    for c in text.chars() {
        if config.strip_diacritics && is_diacritic(c) {
            continue;
        }
        if config.strip_tatweel && c == TATWEEL {
            continue;
        }

        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
            continue;
        }

        let mapped = match c {
            c if config.unify_alef && ALEF_VARIANTS.contains(&c) => ALEF,
            ALEF_WASLA if config.unify_alef_wasla => ALEF,
            ALEF_MAQSURA if config.alef_maqsura_to_ya => YA,
            TA_MARBUTA if config.ta_marbuta_to_ha => HA,
            c => c,
        };

        if config.strip_punctuation && !is_word_char(mapped) {
            continue;
        }

        result.push(mapped);
        last_was_space = false;
    }

    // Remove trailing space
    if result.ends_with(' ') {
        result.pop();
    }

    result
}
