//! Bundle registry lookup.
//!
//! A `.css` output is only tracked for theme variables when the bundler
//! manages it; plain `.css` requests skip the variables search.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::path::normalize;

/// A bundle as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Virtual path the bundle is served under.
    pub virtual_path: String,
    /// Virtual paths of the bundled files.
    pub members: Vec<String>,
}

impl Bundle {
    /// Create a bundle.
    pub fn new<I, S>(virtual_path: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            virtual_path: virtual_path.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Looks up the bundle registered for an output path.
pub trait BundleRegistry: Send + Sync {
    /// The bundle served at `path`, if any.
    fn bundle_for(&self, path: &str) -> Option<Bundle>;
}

/// Registry with no bundles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBundles;

impl BundleRegistry for NoBundles {
    fn bundle_for(&self, _path: &str) -> Option<Bundle> {
        None
    }
}

/// In-memory registry; bundles may be registered at any time.
#[derive(Debug, Default)]
pub struct MapBundleRegistry {
    bundles: RwLock<FxHashMap<String, Bundle>>,
}

impl MapBundleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a bundle under its virtual path.
    pub fn register(&self, bundle: Bundle) {
        let key = normalize(&bundle.virtual_path);
        log::trace!("registering bundle {key} ({} members)", bundle.members.len());
        self.bundles.write().insert(key, bundle);
    }

    /// Remove a bundle.
    pub fn unregister(&self, path: &str) -> Option<Bundle> {
        self.bundles.write().remove(&normalize(path))
    }

    /// Number of registered bundles.
    pub fn len(&self) -> usize {
        self.bundles.read().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.bundles.read().is_empty()
    }
}

impl BundleRegistry for MapBundleRegistry {
    fn bundle_for(&self, path: &str) -> Option<Bundle> {
        self.bundles.read().get(&normalize(path)).cloned()
    }
}
