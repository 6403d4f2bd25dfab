//! Configuration for theme-overlay.
//!
//! [`Config`] carries the naming conventions the default collaborators use:
//! which file name marks the synthetic variables source, how variable cache
//! keys are spelled, and where themes live in the virtual namespace.
//! Build one with [`ConfigBuilder`] and hand it to
//! [`OverlayBuilder::with_config`](crate::overlay::OverlayBuilder::with_config).

/// Default file name of the synthetic theme variables import.
pub const DEFAULT_VARIABLES_FILE: &str = "themevars.less";

/// Default prefix prepended to every cache key.
pub const DEFAULT_KEY_PREFIX: &str = "overlay";

/// Default cache-key namespace for theme variable sets.
pub const DEFAULT_VARIABLES_NAMESPACE: &str = "themevars";

/// Default virtual directory holding all themes (`/Themes/{name}/...`).
pub const DEFAULT_THEMES_SEGMENT: &str = "Themes";

/// Runtime configuration for theme-overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File name (final path segment) of the synthetic variables import.
    /// Matched case-insensitively. Example: "themevars.less"
    pub variables_file: String,
    /// Prefix for all cache keys built by the default key builder.
    pub key_prefix: String,
    /// Namespace for theme variable cache keys.
    pub variables_namespace: String,
    /// First virtual path segment under which themes live.
    pub themes_segment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variables_file: DEFAULT_VARIABLES_FILE.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            variables_namespace: DEFAULT_VARIABLES_NAMESPACE.to_string(),
            themes_segment: DEFAULT_THEMES_SEGMENT.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    variables_file: Option<String>,
    key_prefix: Option<String>,
    variables_namespace: Option<String>,
    themes_segment: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name that marks the synthetic variables import.
    ///
    /// Default: "themevars.less"
    ///
    /// # Example
    ///
    /// ```
    /// use theme_overlay::config::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new()
    ///     .variables_file("variables.less")
    ///     .build();
    /// assert_eq!(config.variables_file, "variables.less");
    /// ```
    pub fn variables_file(mut self, name: impl Into<String>) -> Self {
        self.variables_file = Some(name.into());
        self
    }

    /// Set the cache-key prefix.
    ///
    /// Default: "overlay"
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the cache-key namespace for theme variable sets.
    ///
    /// Default: "themevars"
    pub fn variables_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.variables_namespace = Some(namespace.into());
        self
    }

    /// Set the virtual directory that holds themes.
    ///
    /// Default: "Themes"
    pub fn themes_segment(mut self, segment: impl Into<String>) -> Self {
        self.themes_segment = Some(segment.into());
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            variables_file: self.variables_file.unwrap_or(defaults.variables_file),
            key_prefix: self.key_prefix.unwrap_or(defaults.key_prefix),
            variables_namespace: self
                .variables_namespace
                .unwrap_or(defaults.variables_namespace),
            themes_segment: self.themes_segment.unwrap_or(defaults.themes_segment),
        }
    }
}
