//! Text preprocessing helpers

/// Normalize text for keyword matching: lowercase, strip everything that is
/// not alphanumeric or whitespace, collapse surrounding whitespace.
pub fn preprocess(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split preprocessed text into word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    preprocess(text)
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_strips_punctuation() {
        assert_eq!(preprocess("Hello, World!"), "hello world");
        assert_eq!(preprocess("  I'm 170cm.  "), "im 170cm");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Calories in an apple?"), vec!["calories", "in", "an", "apple"]);
        assert!(tokenize("   ").is_empty());
    }
}
