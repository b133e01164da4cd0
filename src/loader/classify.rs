// src/loader/classify.rs
// =============================================================================
// Decides whether a file should become a document.
//
// Two checks, in this order:
// 1. Binary: the extension is in the static binary table. Skipped silently.
// 2. Ignored: the path matches one of the configured ignore rules.
//
// The binary check only looks at the extension. A binary file with an
// unfamiliar extension is treated as text.
// =============================================================================

use crate::binary_extensions::is_binary_extension;
use crate::config::IgnoreRule;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Binary,
    /// Index of the rule that matched
    Ignored(usize),
    Eligible,
}

/// Lower-cased extension without the dot. "logo.PNG" -> Some("png")
pub fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Classify a repo-relative file path
pub fn classify(path: &str, rules: &[IgnoreRule]) -> Result<Classification> {
    if extension_of(path).is_some_and(|ext| is_binary_extension(&ext)) {
        return Ok(Classification::Binary);
    }

    for (index, rule) in rules.iter().enumerate() {
        if rule.matches(path)? {
            return Ok(Classification::Ignored(index));
        }
    }

    Ok(Classification::Eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathPattern;
    use crate::error::LoaderError;

    #[derive(Debug)]
    struct Broken;

    impl PathPattern for Broken {
        fn test(&self, _path: &str) -> std::result::Result<bool, String> {
            Err("cannot test".to_string())
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("logo.PNG").as_deref(), Some("png"));
        assert_eq!(extension_of("src/main.ts").as_deref(), Some("ts"));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of(".gitignore"), None);
    }

    #[test]
    fn test_binary_wins_over_rules() {
        // A broken rule is never consulted for a binary file
        let rules = vec![IgnoreRule::pattern(Broken)];
        assert_eq!(
            classify("assets/logo.png", &rules).unwrap(),
            Classification::Binary
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = vec![
            IgnoreRule::literal("README.md"),
            IgnoreRule::regex(r"\.md$").unwrap(),
            IgnoreRule::pattern(Broken),
        ];
        assert_eq!(
            classify("README.md", &rules).unwrap(),
            Classification::Ignored(0)
        );
        assert_eq!(
            classify("docs/guide.md", &rules).unwrap(),
            Classification::Ignored(1)
        );
    }

    #[test]
    fn test_unmatched_file_is_eligible() {
        let rules = vec![IgnoreRule::literal("README.md")];
        assert_eq!(
            classify("src/main.ts", &rules).unwrap(),
            Classification::Eligible
        );
    }

    #[test]
    fn test_broken_rule_surfaces() {
        let rules = vec![IgnoreRule::pattern(Broken)];
        let err = classify("src/main.ts", &rules).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidIgnoreRule { .. }));
    }
}
