//! Logical cache keys for theme variable sets.

use crate::config::Config;

/// Builds the cache key under which a theme's variable set is stored.
///
/// Must be deterministic: identical inputs give identical keys.
pub trait CacheKeyBuilder: Send + Sync {
    /// Key for the variables of `theme_name` in store `store_id`.
    fn build_variables_key(&self, theme_name: &str, store_id: u32) -> String;
}

/// Builds keys of the form `{prefix}:{namespace}-{theme}-{store_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCacheKeyBuilder {
    prefix: String,
    namespace: String,
}

impl DefaultCacheKeyBuilder {
    /// Create a builder with explicit prefix and namespace.
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            namespace: namespace.into(),
        }
    }

    /// Create a builder from [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.key_prefix.clone(), config.variables_namespace.clone())
    }
}

impl Default for DefaultCacheKeyBuilder {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CacheKeyBuilder for DefaultCacheKeyBuilder {
    fn build_variables_key(&self, theme_name: &str, store_id: u32) -> String {
        format!("{}:{}-{theme_name}-{store_id}", self.prefix, self.namespace)
    }
}
