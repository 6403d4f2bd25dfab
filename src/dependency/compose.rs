//! Cache-dependency composition.
//!
//! Compiled stylesheet output depends on real files *and* on theme variable
//! values. Files are handed to the host's file watcher; the variables have
//! no file, so they become a logical cache key instead:
//!
//! ```text
//! site.less  deps: [base.less, themevars.less, mixins.less]
//!                      │            │               │
//!                 PathMapper   CacheKeyBuilder  PathMapper
//!                      │            │               │
//!   physical_paths: {/…/base.less,  │          /…/mixins.less}
//!   logical_keys:   {overlay:themevars-Flex-1}
//! ```
//!
//! Variables are only tracked for outputs that go through the LESS pipeline
//! or the bundler. Other outputs map their dependencies as-is.

use std::sync::Arc;

use super::bundle::BundleRegistry;
use super::key::CacheKeyBuilder;
use super::mapper::PathMapper;
use super::set::{DependencySet, Timestamp};
use crate::classify::{Classification, PathClassifier};
use crate::error::Result;
use crate::theme::ThemeContext;

/// Builds the [`DependencySet`] for an output artifact.
#[derive(Clone)]
pub struct DependencyComposer {
    classifier: PathClassifier,
    mapper: PathMapper,
    bundles: Arc<dyn BundleRegistry>,
    keys: Arc<dyn CacheKeyBuilder>,
}

impl DependencyComposer {
    /// Create a composer.
    pub fn new(
        classifier: PathClassifier,
        mapper: PathMapper,
        bundles: Arc<dyn BundleRegistry>,
        keys: Arc<dyn CacheKeyBuilder>,
    ) -> Self {
        Self {
            classifier,
            mapper,
            bundles,
            keys,
        }
    }

    /// Compose the dependency set for `output_path`.
    ///
    /// Returns `Ok(None)` when `declared` is empty: there is nothing to watch
    /// and the host must not invalidate automatically. The context is only
    /// consulted when a tracked output imports the variables file; its
    /// failures are returned unchanged.
    pub fn compose<S: AsRef<str>>(
        &self,
        output_path: &str,
        declared: &[S],
        start: Timestamp,
        ctx: &dyn ThemeContext,
    ) -> Result<Option<DependencySet>> {
        if declared.is_empty() {
            log::debug!("{output_path}: no dependencies, nothing to watch");
            return Ok(None);
        }

        let (variables, files): (Vec<&str>, Vec<&str>) = declared
            .iter()
            .map(AsRef::as_ref)
            .partition(|path| self.classifier.is_variables_path(path));

        let mut set = DependencySet::new(start);

        if !variables.is_empty() {
            if self.tracks_variables(output_path) {
                let identity = ctx.identity()?;
                let key = self
                    .keys
                    .build_variables_key(&identity.theme_name, identity.store_id);
                log::trace!("{output_path}: watching variables of {identity} as {key}");
                set.logical_keys.insert(key);
            } else {
                log::trace!("{output_path}: untracked output, skipping {variables:?}");
            }
        }

        set.physical_paths
            .extend(files.into_iter().map(|path| self.mapper.map_to_physical(path)));

        log::debug!("{output_path}: {set}");
        Ok(Some(set))
    }

    /// Whether `output_path` must be invalidated when theme variables change.
    ///
    /// True for LESS output and for bundler-registered CSS output. A `.css`
    /// output with a registered bundle goes through the variables search the
    /// same way the wrapped provider's bundler path does.
    pub fn tracks_variables(&self, output_path: &str) -> bool {
        match self.classifier.classify(output_path) {
            Classification::CompiledStylesheet { is_less: true } => true,
            Classification::CompiledStylesheet { is_less: false } => {
                self.bundles.bundle_for(output_path).is_some()
            }
            Classification::SyntheticVariables | Classification::PlainResource => false,
        }
    }
}

impl std::fmt::Debug for DependencyComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyComposer")
            .field("classifier", &self.classifier)
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}
