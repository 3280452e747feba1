//! Tajweed WER Core Library
//!
//! Word-level scoring of a Quran recitation transcript against the verse:
//! - Arabic text normalization
//! - Whitespace tokenization
//! - Dynamic programming alignment with an explicit word trace
//! - Word error rate and the accuracy contribution derived from it

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;

mod arabic;
pub mod config;
mod dp_core;
pub mod error;
pub mod report;
mod scoring;
mod tokenize;
pub mod types;

pub use arabic::{normalize_arabic, normalize_arabic_with};
pub use config::{NormalizerConfig, WerConfig};
pub use dp_core::{align, align_with, CostTable};
pub use error::WerError;
pub use report::{WerReport, WerRequest};
pub use scoring::{error_rate, wer_to_accuracy};
pub use tokenize::tokenize;
pub use types::{AlignedPair, AlignmentResult, MatchKind};

/// Score a transcript against the expected verse text.
///
/// Total over all inputs: empty texts fall back to the empty-reference
/// rules (100 if anything was transcribed, 0 otherwise).
pub fn calculate_wer(expected_text: &str, transcribed_text: &str) -> AlignmentResult {
    calculate_wer_with(expected_text, transcribed_text, &NormalizerConfig::default())
}

/// Score a transcript using an explicit normalizer configuration.
pub fn calculate_wer_with(
    expected_text: &str,
    transcribed_text: &str,
    config: &NormalizerConfig,
) -> AlignmentResult {
    let expected = tokenize(expected_text);
    let transcribed = tokenize(transcribed_text);
    align_with(&expected, &transcribed, config)
}

/// Score many recitations in parallel. Output order follows input order.
pub fn calculate_wer_batch(
    requests: &[WerRequest],
    config: &NormalizerConfig,
) -> Vec<AlignmentResult> {
    tracing::debug!(batch = requests.len(), "scoring recitation batch");
    requests
        .par_iter()
        .map(|r| calculate_wer_with(&r.expected, &r.transcribed, config))
        .collect()
}

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn tajweed_wer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_normalize_arabic, m)?)?;
    m.add_function(wrap_pyfunction!(py_tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_wer, m)?)?;
    m.add_function(wrap_pyfunction!(py_wer_to_accuracy, m)?)?;
    m.add_function(wrap_pyfunction!(py_batch_wer, m)?)?;
    Ok(())
}

/// Normalize Arabic text for comparison (Python binding)
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "normalize_arabic")]
fn py_normalize_arabic(text: &str) -> String {
    normalize_arabic(text)
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "tokenize")]
fn py_tokenize(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(str::to_string).collect()
}

/// Aligned pair as seen from Python: (expected, transcribed, match)
#[cfg(feature = "python")]
type PyAlignedPair = (Option<String>, Option<String>, &'static str);

/// Full WER computation (Python binding)
///
/// Returns (wer, matched_words, total_expected, total_transcribed,
/// substitutions, insertions, deletions, aligned_pairs).
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "calculate_wer")]
fn py_calculate_wer(
    expected_text: &str,
    transcribed_text: &str,
) -> (u32, usize, usize, usize, usize, usize, usize, Vec<PyAlignedPair>) {
    let r = calculate_wer(expected_text, transcribed_text);
    let pairs = r
        .aligned_pairs
        .iter()
        .map(|p| {
            let kind = match p.kind() {
                MatchKind::Correct => "correct",
                MatchKind::Substitution => "substitution",
                MatchKind::Insertion => "insertion",
                MatchKind::Deletion => "deletion",
            };
            (
                p.expected().map(str::to_string),
                p.transcribed().map(str::to_string),
                kind,
            )
        })
        .collect();
    (
        r.wer,
        r.matched_words,
        r.total_expected,
        r.total_transcribed,
        r.substitutions,
        r.insertions,
        r.deletions,
        pairs,
    )
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "wer_to_accuracy")]
fn py_wer_to_accuracy(wer: f64) -> f64 {
    wer_to_accuracy(wer)
}

/// Batch WER computation for parallel processing (Python binding)
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "batch_wer")]
fn py_batch_wer(pairs: Vec<(String, String)>) -> Vec<u32> {
    pairs
        .par_iter()
        .map(|(expected, transcribed)| calculate_wer(expected, transcribed).wer)
        .collect()
}
