//! Reference [`ThemeFileResolver`] over a themes directory on disk.
//!
//! Enabled by the `chain` feature (on by default).

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::resolver::{ResolveResult, ThemeFileResolver};
use crate::config::Config;
use crate::path::{normalize, split_theme, to_physical};

/// Walks a theme's inheritance chain on disk.
///
/// Themes live under `{app_root}/{themes_segment}/{name}`. A request for
/// `/Themes/Child/x.less` returns `None` if the child itself has the file
/// (the base provider maps it directly), otherwise the first ancestor that
/// has it.
#[derive(Debug, Clone)]
pub struct ChainThemeResolver {
    app_root: PathBuf,
    themes_segment: String,
    parents: FxHashMap<String, String>,
}

impl ChainThemeResolver {
    /// Create a resolver over an application root directory.
    pub fn new(app_root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            app_root: app_root.into(),
            themes_segment: config.themes_segment.clone(),
            parents: FxHashMap::default(),
        }
    }

    /// Declare that `theme` inherits from `parent`.
    pub fn with_parent(mut self, theme: impl Into<String>, parent: impl Into<String>) -> Self {
        self.parents.insert(theme.into(), parent.into());
        self
    }

    /// The application root directory.
    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// The inheritance chain of `theme`, starting with `theme` itself.
    ///
    /// Cycles in the declared parents terminate the chain.
    pub fn chain<'a>(&'a self, theme: &'a str) -> Vec<&'a str> {
        let mut chain = vec![theme];
        let mut current = theme;
        while let Some(parent) = self.parents.get(current).map(String::as_str) {
            if chain.contains(&parent) {
                log::warn!("theme inheritance cycle at {parent}");
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn theme_file(&self, theme: &str, rest: &str) -> (String, PathBuf) {
        let virtual_path = normalize(&format!("/{}/{theme}/{rest}", self.themes_segment));
        let physical = to_physical(&self.app_root, &virtual_path);
        (virtual_path, physical)
    }
}

impl ThemeFileResolver for ChainThemeResolver {
    fn resolve(&self, path: &str) -> Option<ResolveResult> {
        let (theme, rest) = split_theme(path, &self.themes_segment)?;
        let mut chain = self.chain(theme).into_iter();

        // The requested theme owns the file: nothing to override.
        let own = chain.next()?;
        if self.theme_file(own, rest).1.is_file() {
            return None;
        }

        chain.find_map(|ancestor| {
            let (result_path, physical_path) = self.theme_file(ancestor, rest);
            physical_path.is_file().then(|| ResolveResult {
                requested_path: normalize(path),
                result_path,
                physical_path,
                origin_theme: ancestor.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_chain_resolver_finds_ancestor() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Themes/Base/Content/site.less", "// base");
        write(dir.path(), "Themes/Base/Content/mixins.less", "// base mixins");
        write(dir.path(), "Themes/Child/Content/mixins.less", "// child mixins");

        let resolver = ChainThemeResolver::new(dir.path(), &Config::default())
            .with_parent("Child", "Base");

        let hit = resolver.resolve("~/Themes/Child/Content/site.less").unwrap();
        assert_eq!(hit.origin_theme, "Base");
        assert_eq!(hit.result_path, "/Themes/Base/Content/site.less");
        assert_eq!(
            hit.physical_path,
            dir.path().join("Themes").join("Base").join("Content").join("site.less")
        );

        // The child owns mixins.less, so there is nothing to override.
        assert!(resolver.resolve("/Themes/Child/Content/mixins.less").is_none());
        // Missing everywhere.
        assert!(resolver.resolve("/Themes/Child/Content/none.less").is_none());
        // Not a theme path at all.
        assert!(resolver.resolve("/Content/site.less").is_none());
    }

    #[test]
    fn test_chain_stops_on_cycle() {
        let resolver = ChainThemeResolver::new("/srv", &Config::default())
            .with_parent("A", "B")
            .with_parent("B", "A");
        assert_eq!(resolver.chain("A"), vec!["A", "B"]);
    }
}
