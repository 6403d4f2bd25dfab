//! Overlay error type.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by external collaborators (theme context, variables source).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = OverlayError> = std::result::Result<T, E>;

/// Error type for overlay lookups.
///
/// A missing theme override is *not* an error: the overlay simply falls
/// through to the base provider. Errors only surface when a collaborator
/// fails or the base provider has nothing to serve.
///
/// # Example
///
/// ```ignore
/// match provider.get_file("/Themes/Flex/site.less", &ctx) {
///     Ok(file) => { /* serve */ }
///     Err(OverlayError::NotFound(path)) => eprintln!("404: {path}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The theme/store context could not be resolved.
    #[error("theme context unavailable: {0}")]
    Context(#[source] BoxError),

    /// The variables source failed to render a variable set.
    #[error("failed to render theme variables: {0}")]
    Variables(#[source] BoxError),

    /// The base provider has no file at this virtual path.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Reading a physical file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Physical path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(String),
}

impl OverlayError {
    /// Create an IO error for the given physical path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means "no such file" (as opposed to a failure).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(OverlayError::NotFound("/a.css".into()).is_not_found());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(OverlayError::io("/tmp/a.css", io).is_not_found());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(!OverlayError::io("/tmp/a.css", denied).is_not_found());
        assert!(!OverlayError::InvalidUtf8("/a.css".into()).is_not_found());
    }

    #[test]
    fn test_context_error_keeps_source() {
        let err = OverlayError::Context("no store bound to request".into());
        assert_eq!(
            err.to_string(),
            "theme context unavailable: no store bound to request"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
