//! Theme override resolution.
//!
//! [`ThemeFileResolver`] is the extension point for the theme-inheritance
//! algorithm. [`OverlayResolver`] is the thin, non-caching front the rest of
//! the crate talks to.
//!
//! ```text
//! /Themes/Child/Content/site.less
//!        │
//!        ├─► Child/Content/site.less exists?  ── yes ─► None (base provider serves it)
//!        ├─► Parent/Content/site.less exists? ── yes ─► Some(ResolveResult { origin: Parent })
//!        └─► ... up the chain ...             ──  no ─► None
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::path::normalize;

// =============================================================================
// ResolveResult
// =============================================================================

/// A theme override found for a virtual path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolveResult {
    /// The virtual path that was asked for.
    pub requested_path: String,
    /// The virtual path the asset actually lives at.
    pub result_path: String,
    /// Physical location of the asset.
    pub physical_path: PathBuf,
    /// Theme that supplied the asset.
    pub origin_theme: String,
}

// =============================================================================
// ThemeFileResolver Trait
// =============================================================================

/// Resolves a virtual path within the active theme's inheritance chain.
///
/// Return `Some(result)` when an override exists, `None` to defer to the
/// base file provider. `None` is the expected answer for most paths.
///
/// # Example
///
/// ```
/// use theme_overlay::theme::{ResolveResult, ThemeFileResolver};
///
/// struct Everything;
///
/// impl ThemeFileResolver for Everything {
///     fn resolve(&self, path: &str) -> Option<ResolveResult> {
///         Some(ResolveResult {
///             requested_path: path.to_string(),
///             result_path: path.to_string(),
///             physical_path: format!("/srv{path}").into(),
///             origin_theme: "Base".into(),
///         })
///     }
/// }
/// ```
pub trait ThemeFileResolver: Send + Sync {
    /// Look up an override for `path`.
    fn resolve(&self, path: &str) -> Option<ResolveResult>;
}

/// Resolver that never finds an override.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThemeResolver;

impl ThemeFileResolver for NoThemeResolver {
    fn resolve(&self, _path: &str) -> Option<ResolveResult> {
        None
    }
}

// =============================================================================
// MapThemeResolver
// =============================================================================

/// A map-based resolver with explicitly registered overrides.
///
/// Keys are normalized virtual paths, so `~/a.css` and `/a.css` match
/// the same entry.
#[derive(Debug, Default, Clone)]
pub struct MapThemeResolver {
    overrides: FxHashMap<String, ResolveResult>,
}

impl MapThemeResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for `path`.
    pub fn insert(
        &mut self,
        path: &str,
        physical_path: impl Into<PathBuf>,
        origin_theme: impl Into<String>,
    ) {
        let key = normalize(path);
        self.overrides.insert(
            key.clone(),
            ResolveResult {
                requested_path: key.clone(),
                result_path: key,
                physical_path: physical_path.into(),
                origin_theme: origin_theme.into(),
            },
        );
    }

    /// Number of registered overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl ThemeFileResolver for MapThemeResolver {
    fn resolve(&self, path: &str) -> Option<ResolveResult> {
        self.overrides.get(&normalize(path)).cloned()
    }
}

// =============================================================================
// OverlayResolver
// =============================================================================

/// Non-caching front for the injected [`ThemeFileResolver`].
///
/// Caching and invalidation belong to the hosting cache layer, which is
/// driven by the composed dependency sets.
#[derive(Clone)]
pub struct OverlayResolver {
    inner: Arc<dyn ThemeFileResolver>,
}

impl OverlayResolver {
    /// Wrap a theme file resolver.
    pub fn new(inner: Arc<dyn ThemeFileResolver>) -> Self {
        Self { inner }
    }

    /// Resolve an override for `path`, or `None` to fall back.
    pub fn resolve(&self, path: &str) -> Option<ResolveResult> {
        let result = self.inner.resolve(path);
        match &result {
            Some(hit) => log::trace!(
                "override {path} -> {} ({})",
                hit.physical_path.display(),
                hit.origin_theme
            ),
            None => log::trace!("no override for {path}"),
        }
        result
    }
}

impl std::fmt::Debug for OverlayResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_resolver_normalizes_keys() {
        let mut resolver = MapThemeResolver::new();
        resolver.insert("~/Themes/Flex/site.less", "/srv/base/site.less", "Base");

        let hit = resolver.resolve("/Themes/Flex/site.less").unwrap();
        assert_eq!(hit.origin_theme, "Base");
        assert_eq!(hit.physical_path, PathBuf::from("/srv/base/site.less"));
        assert!(resolver.resolve("/Themes/Flex/other.less").is_none());
    }

    #[test]
    fn test_overlay_resolver_delegates() {
        let overlay = OverlayResolver::new(Arc::new(NoThemeResolver));
        assert!(overlay.resolve("/Themes/Flex/site.less").is_none());
    }
}
