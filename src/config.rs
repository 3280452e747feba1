//! Normalizer settings and their JSON configuration file.

use std::path::Path;

use serde::Deserialize;

use crate::error::WerError;

/// Which canonicalizations [`crate::normalize_arabic_with`] applies.
///
/// The defaults strip tashkeel and tatweel and fold أ إ آ into ا. The other
/// folds are opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub strip_diacritics: bool,
    pub strip_tatweel: bool,
    pub unify_alef: bool,
    /// Fold ٱ (alef wasla, common in Uthmani script) into ا.
    pub unify_alef_wasla: bool,
    pub alef_maqsura_to_ya: bool,
    pub ta_marbuta_to_ha: bool,
    /// Drop anything that is not a letter, digit or known mark.
    pub strip_punctuation: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            strip_tatweel: true,
            unify_alef: true,
            unify_alef_wasla: false,
            alef_maqsura_to_ya: false,
            ta_marbuta_to_ha: false,
            strip_punctuation: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WerConfig {
    pub normalizer: NormalizerConfig,
}

impl WerConfig {
    pub fn load(path: &Path) -> Result<Self, WerError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| WerError::io("read WER config", e))?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, WerError> {
        serde_json::from_str(data).map_err(|e| WerError::json("parse WER config", e))
    }
}
