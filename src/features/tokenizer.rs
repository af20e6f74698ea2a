//! Whitespace tokenization

/// Splits review text into tokens on whitespace
///
/// Case is preserved by default; lowercasing can be enabled for
/// case-insensitive feature spaces.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { lowercase: false }
    }

    /// Fold tokens to lowercase
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize text, dropping empty tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|t| {
                if self.lowercase {
                    t.to_lowercase()
                } else {
                    t.to_string()
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_on_whitespace() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.tokenize("great movie"), vec!["great", "movie"]);
    }

    #[test]
    fn test_collapses_runs_of_whitespace() {
        let tokenizer = Tokenizer::new();

        assert_eq!(
            tokenizer.tokenize("  a   very\tfine  film "),
            vec!["a", "very", "fine", "film"]
        );
    }

    #[test]
    fn test_preserves_case_by_default() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.tokenize("Great Movie"), vec!["Great", "Movie"]);
    }

    #[test]
    fn test_lowercase_option() {
        let tokenizer = Tokenizer::new().with_lowercase(true);

        assert_eq!(tokenizer.tokenize("Great Movie"), vec!["great", "movie"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }
}
