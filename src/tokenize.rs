//! Word tokenization
//!
//! Tokens borrow from the input and keep their original orthography;
//! normalization happens per token at comparison time.

/// Split text into words on runs of whitespace, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("بسم الله"), vec!["بسم", "الله"]);
    }

    #[test]
    fn test_tokenize_keeps_diacritics() {
        assert_eq!(tokenize("بِسْمِ  اللَّهِ"), vec!["بِسْمِ", "اللَّهِ"]);
    }

    #[test]
    fn test_tokenize_mixed_whitespace() {
        assert_eq!(
            tokenize("\tالحمد\n\nلله   رب\r\n"),
            vec!["الحمد", "لله", "رب"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }
}
