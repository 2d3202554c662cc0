//! Error types for the content registry.

use std::path::PathBuf;

use thiserror::Error;

use crate::key::PageKey;

/// Main error type for content loading and lookup.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No content is bound to the requested path.
    #[error("Content not found for path: {0}")]
    NotFound(String),

    /// A string did not name any page in the closed key set.
    #[error("Unknown page key: '{0}'")]
    UnknownPageKey(String),

    /// A source answered a lookup with another page's content.
    #[error("Content for '{path}' does not match the {expected} schema")]
    SchemaMismatch { path: String, expected: PageKey },

    /// Two items in the same list share an id.
    #[error("Duplicate id '{id}' in {page} {list}")]
    DuplicateId {
        page: String,
        list: String,
        id: String,
    },

    /// A content document exceeds the size limit.
    #[error("Content document {name} is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },

    /// YAML deserialization failed.
    #[error("Failed to parse content document {name}: {source}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Reading a content document from disk failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ContentError::NotFound("blog-page".to_string());
        assert_eq!(err.to_string(), "Content not found for path: blog-page");
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = ContentError::SchemaMismatch {
            path: "about-us".to_string(),
            expected: PageKey::TexasPage,
        };
        assert_eq!(
            err.to_string(),
            "Content for 'about-us' does not match the texas-page schema"
        );
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = ContentError::DuplicateId {
            page: "about-us".to_string(),
            list: "team.members".to_string(),
            id: "deno".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate id 'deno' in about-us team.members");
    }
}
