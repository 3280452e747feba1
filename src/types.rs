//! Alignment trace and result types.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// How one position of the alignment trace was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Correct,
    Substitution,
    Insertion,
    Deletion,
}

/// One unit of the alignment trace.
///
/// Each variant carries exactly the tokens it needs, so a pair can never
/// lack both sides. Tokens keep their original orthography.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignedPair {
    Correct { expected: String, transcribed: String },
    Substitution { expected: String, transcribed: String },
    /// A transcribed word with no counterpart in the reference.
    Insertion { transcribed: String },
    /// A reference word the reciter skipped.
    Deletion { expected: String },
}

impl AlignedPair {
    /// Which of the four edit operations produced this pair.
    pub fn kind(&self) -> MatchKind {
        match self {
            Self::Correct { .. } => MatchKind::Correct,
            Self::Substitution { .. } => MatchKind::Substitution,
            Self::Insertion { .. } => MatchKind::Insertion,
            Self::Deletion { .. } => MatchKind::Deletion,
        }
    }

    /// The reference word, absent for an insertion.
    pub fn expected(&self) -> Option<&str> {
        match self {
            Self::Correct { expected, .. }
            | Self::Substitution { expected, .. }
            | Self::Deletion { expected } => Some(expected),
            Self::Insertion { .. } => None,
        }
    }

    /// The transcribed word, absent for a deletion.
    pub fn transcribed(&self) -> Option<&str> {
        match self {
            Self::Correct { transcribed, .. }
            | Self::Substitution { transcribed, .. }
            | Self::Insertion { transcribed } => Some(transcribed),
            Self::Deletion { .. } => None,
        }
    }
}

// Flat `{ expected, transcribed, match }` object, nulls for the absent side.
impl Serialize for AlignedPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AlignedPair", 3)?;
        state.serialize_field("expected", &self.expected())?;
        state.serialize_field("transcribed", &self.transcribed())?;
        state.serialize_field("match", &self.kind())?;
        state.end()
    }
}

/// Output of one alignment run.
///
/// Invariants:
/// - `matched_words + substitutions + deletions == total_expected`
/// - `matched_words + substitutions + insertions == total_transcribed`
/// - `wer` is in `[0, 100]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentResult {
    /// Word error rate as a whole percentage.
    pub wer: u32,
    pub matched_words: usize,
    pub total_expected: usize,
    pub total_transcribed: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
    /// Minimum edit distance between the two token sequences.
    pub edit_distance: usize,
    pub aligned_pairs: Vec<AlignedPair>,
}

impl AlignmentResult {
    /// Reference tokens recovered from the trace, in order.
    pub fn expected_tokens(&self) -> Vec<&str> {
        self.aligned_pairs
            .iter()
            .filter_map(AlignedPair::expected)
            .collect()
    }

    /// Hypothesis tokens recovered from the trace, in order.
    pub fn transcribed_tokens(&self) -> Vec<&str> {
        self.aligned_pairs
            .iter()
            .filter_map(AlignedPair::transcribed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors_follow_variant() {
        let pair = AlignedPair::Insertion {
            transcribed: "امين".to_string(),
        };
        assert_eq!(pair.kind(), MatchKind::Insertion);
        assert_eq!(pair.expected(), None);
        assert_eq!(pair.transcribed(), Some("امين"));

        let pair = AlignedPair::Deletion {
            expected: "رب".to_string(),
        };
        assert_eq!(pair.kind(), MatchKind::Deletion);
        assert_eq!(pair.expected(), Some("رب"));
        assert_eq!(pair.transcribed(), None);

        let pair = AlignedPair::Substitution {
            expected: "لله".to_string(),
            transcribed: "للا".to_string(),
        };
        assert_eq!(pair.kind(), MatchKind::Substitution);
        assert_eq!(pair.expected(), Some("لله"));
        assert_eq!(pair.transcribed(), Some("للا"));
    }

    #[test]
    fn test_pair_serializes_flat() {
        let pair = AlignedPair::Deletion {
            expected: "العالمين".to_string(),
        };
        let value = serde_json::to_value(&pair).expect("serializable");
        assert_eq!(
            value,
            serde_json::json!({
                "expected": "العالمين",
                "transcribed": null,
                "match": "deletion"
            })
        );
    }
}
