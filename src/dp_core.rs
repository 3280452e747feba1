//! Core Dynamic Programming alignment algorithm
//!
//! Word-level Levenshtein alignment of a transcribed recitation against the
//! reference verse text, with backtracking to recover which words were
//! recited correctly, substituted, inserted or skipped.

use crate::arabic::normalize_arabic_with;
use crate::config::NormalizerConfig;
use crate::scoring::error_rate;
use crate::types::{AlignedPair, AlignmentResult};

/// The `(m + 1) x (n + 1)` edit-distance matrix.
///
/// `cell(i, j)` is the cost of aligning the first `i` reference words with
/// the first `j` transcribed words.
#[derive(Clone, Debug)]
pub struct CostTable {
    cols: usize,
    cells: Vec<usize>,
}

impl CostTable {
    /// Fill the table for two sequences of normalized words.
    pub fn build<S: AsRef<str>>(reference: &[S], hypothesis: &[S]) -> Self {
        let m = reference.len();
        let n = hypothesis.len();
        let cols = n + 1;
        let mut cells = vec![0usize; (m + 1) * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 1..=m {
            cells[i * cols] = i;
            for j in 1..=n {
                let cost = usize::from(reference[i - 1].as_ref() != hypothesis[j - 1].as_ref());
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let diagonal = cells[(i - 1) * cols + j - 1] + cost;
                cells[i * cols + j] = deletion.min(insertion).min(diagonal);
            }
        }

        Self { cols, cells }
    }

    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total edit distance, the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.cell(self.rows() - 1, self.cols - 1)
    }
}

/// Align reference and transcribed words with the default normalizer.
pub fn align<S: AsRef<str>>(reference: &[S], hypothesis: &[S]) -> AlignmentResult {
    align_with(reference, hypothesis, &NormalizerConfig::default())
}

/// Pair each word with its normalized form, dropping words that normalize to
/// nothing (a lone shadda, a run of tatweel).
fn normalized_words<'a, S: AsRef<str>>(
    words: &'a [S],
    config: &NormalizerConfig,
) -> (Vec<&'a str>, Vec<String>) {
    words
        .iter()
        .map(|w| (w.as_ref(), normalize_arabic_with(w.as_ref(), config)))
        .filter(|(_, norm)| !norm.is_empty())
        .unzip()
}

/// Align reference and transcribed words.
///
/// Words are compared by their normalized forms; the trace keeps the
/// original spelling. Words with no letters left after normalization are
/// not counted on either side. Among equally cheap alignments the backtrack
/// prefers, at each cell: exact match, then substitution, then insertion,
/// then deletion.
pub fn align_with<S: AsRef<str>>(
    reference: &[S],
    hypothesis: &[S],
    config: &NormalizerConfig,
) -> AlignmentResult {
    let (reference, ref_norm) = normalized_words(reference, config);
    let (hypothesis, hyp_norm) = normalized_words(hypothesis, config);

    let table = CostTable::build(&ref_norm, &hyp_norm);

    let m = reference.len();
    let n = hypothesis.len();
    let mut pairs: Vec<AlignedPair> = Vec::with_capacity(m.max(n));
    let (mut substitutions, mut insertions, mut deletions) = (0, 0, 0);
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        let here = table.cell(i, j);

        if i > 0 && j > 0 && ref_norm[i - 1] == hyp_norm[j - 1] {
            pairs.push(AlignedPair::Correct {
                expected: reference[i - 1].to_string(),
                transcribed: hypothesis[j - 1].to_string(),
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && here == table.cell(i - 1, j - 1) + 1 {
            pairs.push(AlignedPair::Substitution {
                expected: reference[i - 1].to_string(),
                transcribed: hypothesis[j - 1].to_string(),
            });
            substitutions += 1;
            i -= 1;
            j -= 1;
        } else if j > 0 && here == table.cell(i, j - 1) + 1 {
            pairs.push(AlignedPair::Insertion {
                transcribed: hypothesis[j - 1].to_string(),
            });
            insertions += 1;
            j -= 1;
        } else {
            pairs.push(AlignedPair::Deletion {
                expected: reference[i - 1].to_string(),
            });
            deletions += 1;
            i -= 1;
        }
    }

    pairs.reverse();

    let edit_distance = table.distance();
    let wer = error_rate(edit_distance, m);

    tracing::debug!(
        expected = m,
        transcribed = n,
        edit_distance,
        substitutions,
        insertions,
        deletions,
        wer,
        "aligned recitation"
    );

    AlignmentResult {
        wer,
        matched_words: m - substitutions - deletions,
        total_expected: m,
        total_transcribed: n,
        substitutions,
        insertions,
        deletions,
        edit_distance,
        aligned_pairs: pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchKind;

    fn kinds(result: &AlignmentResult) -> Vec<MatchKind> {
        result.aligned_pairs.iter().map(AlignedPair::kind).collect()
    }

    #[test]
    fn test_cost_table_borders() {
        let table = CostTable::build(&["a", "b", "c"], &["a", "x"]);
        assert_eq!(table.rows(), 4);
        assert_eq!(table.cols(), 3);
        for i in 0..4 {
            assert_eq!(table.cell(i, 0), i);
        }
        for j in 0..3 {
            assert_eq!(table.cell(0, j), j);
        }
        assert_eq!(table.distance(), 2);
    }

    #[test]
    fn test_cost_table_empty() {
        let empty: [&str; 0] = [];
        let table = CostTable::build(&empty, &empty);
        assert_eq!(table.distance(), 0);
        assert_eq!(CostTable::build(&empty, &["a", "b"]).distance(), 2);
        assert_eq!(CostTable::build(&["a", "b"], &empty).distance(), 2);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = ["قل", "هو", "الله", "احد"];
        let b = ["قل", "الله", "الصمد", "احد", "لم"];
        assert_eq!(
            CostTable::build(&a, &b).distance(),
            CostTable::build(&b, &a).distance()
        );
    }

    #[test]
    fn test_align_perfect() {
        let words = ["بسم", "الله", "الرحمن", "الرحيم"];
        let result = align(&words, &words);
        assert_eq!(result.wer, 0);
        assert_eq!(result.edit_distance, 0);
        assert_eq!(result.matched_words, 4);
        assert!(kinds(&result).iter().all(|k| *k == MatchKind::Correct));
    }

    #[test]
    fn test_align_keeps_original_spelling() {
        let result = align(&["بِسْمِ", "اللَّهِ"], &["بسم", "الله"]);
        assert_eq!(result.wer, 0);
        assert_eq!(
            result.aligned_pairs[0],
            AlignedPair::Correct {
                expected: "بِسْمِ".to_string(),
                transcribed: "بسم".to_string(),
            }
        );
    }

    #[test]
    fn test_single_word_substitution() {
        // One substitution (cost 1) rather than a deletion plus an insertion.
        let result = align(&["a"], &["b"]);
        assert_eq!(kinds(&result), vec![MatchKind::Substitution]);
    }

    #[test]
    fn test_tie_break_pins_trace() {
        // ["a","b"] vs ["c"]: "sub a/c + del b" and "del a + sub b/c" both
        // cost 2. Backtracking from (2,1) substitutes b/c first.
        let result = align(&["a", "b"], &["c"]);
        assert_eq!(
            kinds(&result),
            vec![MatchKind::Deletion, MatchKind::Substitution]
        );

        // Swapped words: two substitutions beat "del, match, ins".
        let result = align(&["a", "b"], &["b", "a"]);
        assert_eq!(
            kinds(&result),
            vec![MatchKind::Substitution, MatchKind::Substitution]
        );

        let result = align(&["a"], &["x", "a"]);
        assert_eq!(kinds(&result), vec![MatchKind::Insertion, MatchKind::Correct]);

        let result = align(&["a"], &["a", "x"]);
        assert_eq!(kinds(&result), vec![MatchKind::Correct, MatchKind::Insertion]);
    }

    #[test]
    fn test_align_mixed_operations() {
        let reference = ["الحمد", "لله", "رب", "العالمين"];
        let hypothesis = ["الحمد", "للا", "رب"];
        let result = align(&reference, &hypothesis);
        assert_eq!(
            kinds(&result),
            vec![
                MatchKind::Correct,
                MatchKind::Substitution,
                MatchKind::Correct,
                MatchKind::Deletion,
            ]
        );
        assert_eq!(result.edit_distance, 2);
        assert_eq!(result.wer, 50);
    }

    #[test]
    fn test_align_skips_words_without_letters() {
        let result = align(&["بسم", "\u{0651}", "الله"], &["بسم", "الله", "\u{0640}\u{0640}"]);
        assert_eq!(result.total_expected, 2);
        assert_eq!(result.total_transcribed, 2);
        assert_eq!(result.wer, 0);
        assert_eq!(kinds(&result), vec![MatchKind::Correct, MatchKind::Correct]);
    }

    #[test]
    fn test_align_config_changes_word_identity() {
        let reference = ["ٱلْحَمْدُ"];
        let hypothesis = ["الحمد"];
        assert_eq!(align(&reference, &hypothesis).substitutions, 1);

        let config = NormalizerConfig {
            unify_alef_wasla: true,
            ..NormalizerConfig::default()
        };
        let result = align_with(&reference, &hypothesis, &config);
        assert_eq!(result.substitutions, 0);
        assert_eq!(result.matched_words, 1);
    }
}
