//! Error types for the site.

use std::path::PathBuf;

use garage_cowboy_content::ContentError;
use thiserror::Error;

/// Main error type for the site library and binary.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Content could not be loaded.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Filesystem access failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The HTTP server failed to bind or stopped with an error.
    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_is_transparent() {
        let err: SiteError = ContentError::NotFound("blog".to_string()).into();
        assert_eq!(err.to_string(), "Content not found for path: blog");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = SiteError::Io {
            path: PathBuf::from("/tmp/out/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "IO error on /tmp/out/index.html: denied");
    }
}
