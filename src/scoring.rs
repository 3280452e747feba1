//! Scores derived from an alignment
//!
//! - Word error rate as a whole percentage in [0, 100]
//! - The half-scale (0-50) accuracy contribution built from it

/// Word error rate for an alignment, as a whole percentage.
///
/// `round(edit_distance / total_expected * 100)`, capped at 100. With an
/// empty reference the rate is 100 when anything was transcribed and 0
/// otherwise.
pub fn error_rate(edit_distance: usize, total_expected: usize) -> u32 {
    if total_expected == 0 {
        return if edit_distance > 0 { 100 } else { 0 };
    }

    // Half-up rounding in integers: floor(d * 100 / m + 1/2).
    let rate = (200 * edit_distance + total_expected) / (2 * total_expected);
    rate.min(100) as u32
}

/// Map a WER percentage onto the 0-50 half of a composite score.
///
/// 0% error gives 50, 100% gives 0, linear in between, never negative.
pub fn wer_to_accuracy(wer: f64) -> f64 {
    (50.0 - wer * 0.5).max(0.0)
}
