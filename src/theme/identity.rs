//! Theme identity and the per-request context that supplies it.

use crate::error::{BoxError, OverlayError, Result};

/// Identifies the scope of a theme variable set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeIdentity {
    /// Name of the active theme (e.g. `"Flex"`).
    pub theme_name: String,
    /// Id of the active store.
    pub store_id: u32,
}

impl ThemeIdentity {
    /// Create a new identity.
    pub fn new(theme_name: impl Into<String>, store_id: u32) -> Self {
        Self {
            theme_name: theme_name.into(),
            store_id,
        }
    }
}

impl std::fmt::Display for ThemeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.theme_name, self.store_id)
    }
}

/// Supplies the active theme and store for the current request.
///
/// The overlay never looks this up ambiently; callers pass a context into
/// every public entry point. Failures are returned to the caller as
/// [`OverlayError::Context`].
pub trait ThemeContext: Send + Sync {
    /// Name of the active theme.
    fn current_theme(&self) -> Result<String, BoxError>;

    /// Id of the active store.
    fn current_store_id(&self) -> Result<u32, BoxError>;

    /// Resolve both into a [`ThemeIdentity`].
    fn identity(&self) -> Result<ThemeIdentity> {
        let theme_name = self.current_theme().map_err(OverlayError::Context)?;
        let store_id = self.current_store_id().map_err(OverlayError::Context)?;
        Ok(ThemeIdentity {
            theme_name,
            store_id,
        })
    }
}

/// A context that always reports the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticThemeContext(pub ThemeIdentity);

impl StaticThemeContext {
    /// Create a context for the given theme and store.
    pub fn new(theme_name: impl Into<String>, store_id: u32) -> Self {
        Self(ThemeIdentity::new(theme_name, store_id))
    }
}

impl ThemeContext for StaticThemeContext {
    fn current_theme(&self) -> Result<String, BoxError> {
        Ok(self.0.theme_name.clone())
    }

    fn current_store_id(&self) -> Result<u32, BoxError> {
        Ok(self.0.store_id)
    }

    fn identity(&self) -> Result<ThemeIdentity> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoStore;

    impl ThemeContext for NoStore {
        fn current_theme(&self) -> Result<String, BoxError> {
            Ok("Flex".into())
        }

        fn current_store_id(&self) -> Result<u32, BoxError> {
            Err("request has no store".into())
        }
    }

    #[test]
    fn test_static_context() {
        let ctx = StaticThemeContext::new("Flex", 1);
        assert_eq!(ctx.identity().unwrap(), ThemeIdentity::new("Flex", 1));
        assert_eq!(ctx.0.to_string(), "Flex@1");
    }

    #[test]
    fn test_context_failure_propagates() {
        let err = NoStore.identity().unwrap_err();
        assert!(matches!(err, OverlayError::Context(_)));
        assert!(err.to_string().contains("request has no store"));
    }
}
