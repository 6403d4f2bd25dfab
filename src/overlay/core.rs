//! `ThemingFileProvider`: the surface the hosting environment talks to.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use theme_overlay::file::MapFileProvider;
//! use theme_overlay::theme::StaticThemeContext;
//! use theme_overlay::ThemingFileProvider;
//!
//! let mut base = MapFileProvider::new("/srv/app");
//! base.insert("/Themes/Flex/site.less", "@import 'themevars.less';");
//!
//! let provider = ThemingFileProvider::builder(Arc::new(base)).build();
//! let ctx = StaticThemeContext::new("Flex", 1);
//!
//! assert!(provider.file_exists("/Themes/Flex/themevars.less"));
//!
//! let deps = provider
//!     .get_cache_dependency(
//!         "/Themes/Flex/site.less",
//!         &["/Themes/Flex/site.less", "/Themes/Flex/themevars.less"],
//!         Utc::now(),
//!         &ctx,
//!     )
//!     .unwrap()
//!     .unwrap();
//! assert!(deps.watches_key("overlay:themevars-Flex-1"));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use super::builder::OverlayBuilder;
use crate::classify::{Classification, PathClassifier};
use crate::config::Config;
use crate::dependency::{DependencyComposer, DependencySet, PathMapper, Timestamp};
use crate::error::Result;
use crate::file::{BaseFileProvider, InheritedFile, VirtualFile};
use crate::theme::{OverlayResolver, ThemeContext, VariablesSynthesizer};

/// Theme-aware overlay over a base file provider.
///
/// Holds only immutable collaborator references; every call is independent
/// and may run concurrently with any other.
pub struct ThemingFileProvider {
    config: Config,
    classifier: PathClassifier,
    resolver: OverlayResolver,
    base: Arc<dyn BaseFileProvider>,
    mapper: PathMapper,
    synthesizer: VariablesSynthesizer,
    composer: DependencyComposer,
}

impl ThemingFileProvider {
    /// Create a builder wrapping `base`.
    pub fn builder(base: Arc<dyn BaseFileProvider>) -> OverlayBuilder {
        OverlayBuilder::new(base)
    }

    // =========================================================================
    // Internal Constructor
    // =========================================================================

    pub(crate) fn new(
        config: Config,
        classifier: PathClassifier,
        resolver: OverlayResolver,
        base: Arc<dyn BaseFileProvider>,
        mapper: PathMapper,
        synthesizer: VariablesSynthesizer,
        composer: DependencyComposer,
    ) -> Self {
        Self {
            config,
            classifier,
            resolver,
            base,
            mapper,
            synthesizer,
            composer,
        }
    }

    /// The configuration the default collaborators were built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The wrapped base provider.
    pub fn base(&self) -> &dyn BaseFileProvider {
        self.base.as_ref()
    }

    // =========================================================================
    // File Lookup
    // =========================================================================

    /// Check whether `path` exists in the overlay.
    ///
    /// The variables path always exists; overrides exist; anything else is
    /// up to the base provider.
    pub fn file_exists(&self, path: &str) -> bool {
        if self.classifier.is_variables_path(path) {
            return true;
        }
        if self.resolver.resolve(path).is_some() {
            return true;
        }
        self.base.exists(path)
    }

    /// Get the file at `path` for the theme/store in `ctx`.
    pub fn get_file(&self, path: &str, ctx: &dyn ThemeContext) -> Result<VirtualFile> {
        if self.classifier.is_variables_path(path) {
            return self.synthesizer.synthesize(path, ctx).map(VirtualFile::ThemeVars);
        }
        if let Some(result) = self.resolver.resolve(path) {
            return Ok(VirtualFile::Inherited(InheritedFile::new(result)));
        }
        self.base.get_file(path)
    }

    // =========================================================================
    // Cache Dependencies
    // =========================================================================

    /// Describe what the cached `output_path` must watch.
    ///
    /// `declared` is the dependency list reported by the compiler or bundler.
    /// Returns `Ok(None)` if there is nothing to watch.
    pub fn get_cache_dependency<S: AsRef<str>>(
        &self,
        output_path: &str,
        declared: &[S],
        start: Timestamp,
        ctx: &dyn ThemeContext,
    ) -> Result<Option<DependencySet>> {
        self.composer.compose(output_path, declared, start, ctx)
    }

    /// Physical location of `path` (override first, then base).
    pub fn map_path(&self, path: &str) -> PathBuf {
        self.mapper.map_to_physical(path)
    }

    /// Classify `path`.
    pub fn classify(&self, path: &str) -> Classification {
        self.classifier.classify(path)
    }

    pub(crate) fn composer(&self) -> &DependencyComposer {
        &self.composer
    }
}

impl std::fmt::Debug for ThemingFileProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemingFileProvider")
            .field("config", &self.config)
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::dependency::{Bundle, MapBundleRegistry};
    use crate::file::MapFileProvider;
    use crate::theme::StaticThemeContext;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_never_overriding_resolver_is_transparent() {
        init_logger();
        let mut base = MapFileProvider::new("/srv/app");
        base.insert("/Content/a.css", "a{}");
        let base = Arc::new(base);
        let provider = ThemingFileProvider::builder(base.clone()).build();
        let ctx = StaticThemeContext::new("Flex", 1);

        for path in ["/Content/a.css", "/Content/b.css", "/img/logo.png"] {
            assert_eq!(provider.file_exists(path), base.exists(path), "{path}");
            assert_eq!(
                provider.get_file(path, &ctx).ok().map(|f| f.read().unwrap()),
                base.get_file(path).ok().map(|f| f.read().unwrap()),
                "{path}"
            );
            assert_eq!(provider.map_path(path), base.map_to_physical_path(path));
        }
    }

    #[test]
    fn test_registered_bundle_tracks_variables() {
        init_logger();
        let bundles = Arc::new(MapBundleRegistry::new());
        let provider = ThemingFileProvider::builder(Arc::new(MapFileProvider::new("/srv/app")))
            .with_bundles(bundles.clone())
            .build();
        let ctx = StaticThemeContext::new("Flex", 1);
        let declared = ["/Content/a.less", "/Content/themevars.less"];

        let before = provider
            .get_cache_dependency("/bundles/site.css", &declared, Utc::now(), &ctx)
            .unwrap()
            .unwrap();
        assert!(before.logical_keys.is_empty());

        bundles.register(Bundle::new("/bundles/site.css", ["/Content/a.less"]));
        let after = provider
            .get_cache_dependency("/bundles/site.css", &declared, Utc::now(), &ctx)
            .unwrap()
            .unwrap();
        assert!(after.watches_key("overlay:themevars-Flex-1"));
        assert_eq!(after.physical_paths, before.physical_paths);
    }

    #[test]
    fn test_custom_config_changes_conventions() {
        init_logger();
        let config = Config::builder()
            .variables_file("variables.less")
            .key_prefix("shop")
            .build();
        let provider = ThemingFileProvider::builder(Arc::new(MapFileProvider::new("/srv/app")))
            .with_config(config)
            .build();
        let ctx = StaticThemeContext::new("Flex", 4);

        assert!(provider.classify("/x/variables.less").is_synthetic());
        assert!(!provider.classify("/x/themevars.less").is_synthetic());

        let set = provider
            .get_cache_dependency("/site.less", &["/x/variables.less"], Utc::now(), &ctx)
            .unwrap()
            .unwrap();
        assert_eq!(set.sorted_keys(), vec!["shop:themevars-Flex-4"]);
    }

    #[cfg(feature = "chain")]
    mod inheritance {
        use std::fs;
        use std::path::Path;

        use tempfile::TempDir;

        use super::*;
        use crate::error::OverlayError;
        use crate::file::PhysicalFileProvider;
        use crate::theme::{ChainThemeResolver, MapVariablesSource, ThemeIdentity};

        fn write(root: &Path, rel: &str, content: &str) {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        /// Base theme with site.less + mixins.less, child theme overriding mixins.less.
        fn themed_app() -> (TempDir, ThemingFileProvider, Arc<MapVariablesSource>) {
            init_logger();
            let dir = TempDir::new().unwrap();
            write(dir.path(), "Themes/Base/Content/site.less", "@import 'themevars.less';");
            write(dir.path(), "Themes/Base/Content/mixins.less", ".base() {}");
            write(dir.path(), "Themes/Child/Content/mixins.less", ".child() {}");
            write(dir.path(), "Content/reset.css", "* { margin: 0 }");

            let config = Config::default();
            let resolver = ChainThemeResolver::new(dir.path(), &config).with_parent("Child", "Base");
            let vars = Arc::new(MapVariablesSource::new());

            let provider = ThemingFileProvider::builder(Arc::new(PhysicalFileProvider::new(dir.path())))
                .with_config(config)
                .with_resolver(Arc::new(resolver))
                .with_variables(vars.clone())
                .build();
            (dir, provider, vars)
        }

        #[test]
        fn test_variables_file_is_synthesized() {
            let (_dir, provider, vars) = themed_app();
            let ctx = StaticThemeContext::new("Child", 3);
            vars.set_var(&ThemeIdentity::new("Child", 3), "brand", "#c00");

            let path = "/Themes/Child/Content/themevars.less";
            assert!(provider.file_exists(path));

            let file = provider.get_file(path, &ctx).unwrap();
            assert!(file.is_synthetic());
            assert_eq!(file.physical_path(), None);
            assert_eq!(file.read_to_string().unwrap(), "@brand: #c00;\n");
        }

        #[test]
        fn test_inherited_file_comes_from_parent() {
            let (dir, provider, _) = themed_app();
            let ctx = StaticThemeContext::new("Child", 1);

            let path = "~/Themes/Child/Content/site.less";
            assert!(provider.file_exists(path));

            let file = provider.get_file(path, &ctx).unwrap();
            let VirtualFile::Inherited(inherited) = &file else {
                panic!("expected inherited file, got {file:?}");
            };
            assert_eq!(inherited.origin_theme(), "Base");
            assert_eq!(
                file.physical_path(),
                Some(dir.path().join("Themes/Base/Content/site.less").as_path())
            );
        }

        #[test]
        fn test_own_file_falls_through_to_base() {
            let (_dir, provider, _) = themed_app();
            let ctx = StaticThemeContext::new("Child", 1);

            let file = provider.get_file("/Themes/Child/Content/mixins.less", &ctx).unwrap();
            assert!(matches!(file, VirtualFile::Physical(_)));
            assert_eq!(file.read_to_string().unwrap(), ".child() {}");

            assert!(!provider.file_exists("/Themes/Child/Content/missing.less"));
            assert!(matches!(
                provider.get_file("/Themes/Child/Content/missing.less", &ctx),
                Err(OverlayError::NotFound(_))
            ));
        }

        #[test]
        fn test_dependencies_across_inheritance_chain() {
            let (dir, provider, _) = themed_app();
            let ctx = StaticThemeContext::new("Child", 2);
            let start = Utc::now();

            let set = provider
                .get_cache_dependency(
                    "/Themes/Child/Content/site.less",
                    &[
                        "/Themes/Child/Content/site.less",
                        "/Themes/Child/Content/mixins.less",
                        "/Themes/Child/Content/themevars.less",
                    ],
                    start,
                    &ctx,
                )
                .unwrap()
                .unwrap();

            assert_eq!(set.start, start);
            assert_eq!(
                set.sorted_paths(),
                vec![
                    dir.path().join("Themes/Base/Content/site.less"),
                    dir.path().join("Themes/Child/Content/mixins.less"),
                ]
            );
            assert_eq!(set.sorted_keys(), vec!["overlay:themevars-Child-2"]);
        }
    }
}
