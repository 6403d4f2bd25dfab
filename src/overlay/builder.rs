//! Builder pattern for `ThemingFileProvider`.

use std::sync::Arc;

use super::core::ThemingFileProvider;
use crate::classify::{PathClassifier, SuffixVariablesPredicate, VariablesPredicate};
use crate::config::Config;
use crate::dependency::{
    BundleRegistry, CacheKeyBuilder, DefaultCacheKeyBuilder, DependencyComposer, NoBundles,
    PathMapper,
};
use crate::file::BaseFileProvider;
use crate::theme::{
    MapVariablesSource, NoThemeResolver, OverlayResolver, ThemeFileResolver, VariablesSource,
    VariablesSynthesizer,
};

/// Builder for configuring `ThemingFileProvider`.
///
/// Use `ThemingFileProvider::builder()` to create a builder. Only the base
/// provider is required; every other collaborator has a default:
///
/// | Collaborator | Default |
/// |---|---|
/// | theme resolver | [`NoThemeResolver`] |
/// | bundle registry | [`NoBundles`] |
/// | cache keys | [`DefaultCacheKeyBuilder`] from config |
/// | variables predicate | [`SuffixVariablesPredicate`] from config |
/// | variables source | empty [`MapVariablesSource`] |
pub struct OverlayBuilder {
    base: Arc<dyn BaseFileProvider>,
    config: Config,
    resolver: Option<Arc<dyn ThemeFileResolver>>,
    bundles: Option<Arc<dyn BundleRegistry>>,
    keys: Option<Arc<dyn CacheKeyBuilder>>,
    predicate: Option<Arc<dyn VariablesPredicate>>,
    variables: Option<Arc<dyn VariablesSource>>,
}

impl OverlayBuilder {
    /// Create a new builder wrapping `base`.
    pub(crate) fn new(base: Arc<dyn BaseFileProvider>) -> Self {
        Self {
            base,
            config: Config::default(),
            resolver: None,
            bundles: None,
            keys: None,
            predicate: None,
            variables: None,
        }
    }

    /// Use `config` for the default collaborators.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Resolve theme overrides with `resolver`.
    pub fn with_resolver(mut self, resolver: Arc<dyn ThemeFileResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Decide bundler-managed CSS with `bundles`.
    pub fn with_bundles(mut self, bundles: Arc<dyn BundleRegistry>) -> Self {
        self.bundles = Some(bundles);
        self
    }

    /// Build variables cache keys with `keys`.
    pub fn with_cache_keys(mut self, keys: Arc<dyn CacheKeyBuilder>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Recognize the synthetic variables path with `predicate`.
    pub fn with_variables_predicate(mut self, predicate: Arc<dyn VariablesPredicate>) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Render the synthetic variables file with `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use theme_overlay::file::MapFileProvider;
    /// use theme_overlay::theme::{MapVariablesSource, ThemeIdentity};
    /// use theme_overlay::ThemingFileProvider;
    ///
    /// let vars = Arc::new(MapVariablesSource::new());
    /// let provider = ThemingFileProvider::builder(Arc::new(MapFileProvider::new("/srv/app")))
    ///     .with_variables(Arc::clone(&vars) as _)
    ///     .build();
    ///
    /// // Variables can change after the provider is built.
    /// vars.set_var(&ThemeIdentity::new("Flex", 1), "brand", "#333");
    /// # let _ = provider;
    /// ```
    pub fn with_variables(mut self, source: Arc<dyn VariablesSource>) -> Self {
        self.variables = Some(source);
        self
    }

    /// Build the `ThemingFileProvider`.
    pub fn build(self) -> ThemingFileProvider {
        let predicate = self
            .predicate
            .unwrap_or_else(|| Arc::new(SuffixVariablesPredicate::from_config(&self.config)));
        let classifier = PathClassifier::new(predicate);

        let resolver = OverlayResolver::new(self.resolver.unwrap_or_else(|| Arc::new(NoThemeResolver)));
        let mapper = PathMapper::new(resolver.clone(), Arc::clone(&self.base));

        let keys = self
            .keys
            .unwrap_or_else(|| Arc::new(DefaultCacheKeyBuilder::from_config(&self.config)));
        let bundles = self.bundles.unwrap_or_else(|| Arc::new(NoBundles));
        let composer = DependencyComposer::new(classifier.clone(), mapper.clone(), bundles, keys);

        let variables = self
            .variables
            .unwrap_or_else(|| Arc::new(MapVariablesSource::new()));
        let synthesizer = VariablesSynthesizer::new(classifier.clone(), variables);

        ThemingFileProvider::new(
            self.config,
            classifier,
            resolver,
            self.base,
            mapper,
            synthesizer,
            composer,
        )
    }
}
