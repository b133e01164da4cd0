// src/document.rs
// =============================================================================
// The output of a load: one document per eligible file.
//
// A document is just text plus where it came from. The loader only ever
// creates these; it never reads one back.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Metadata attached to each document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Path of the file relative to the repository root, using '/' separators
    pub source: String,
}

/// A loaded text file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }

    /// Convenience accessor for metadata.source
    pub fn source(&self) -> &str {
        &self.metadata.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_with_nested_metadata() {
        let doc = Document::new(
            "hello".to_string(),
            DocumentMetadata {
                source: "README.md".to_string(),
            },
        );
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["content"], "hello");
        assert_eq!(json["metadata"]["source"], "README.md");
        assert_eq!(doc.source(), "README.md");
    }
}
