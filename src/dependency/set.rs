//! Dependency sets: what a cached artifact must watch.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;

/// Point in time from which changes count as invalidating.
pub type Timestamp = DateTime<Utc>;

/// Everything a cache entry must watch to know when it is stale.
///
/// Both collections are sets: order is irrelevant and duplicates collapse.
/// `physical_paths` never holds a location derived from the synthetic
/// variables import; variables are watched through `logical_keys` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    /// Files the host's file watcher should monitor.
    pub physical_paths: FxHashSet<PathBuf>,
    /// Cache keys whose eviction also invalidates the artifact.
    pub logical_keys: FxHashSet<String>,
    /// Changes before this instant are ignored.
    pub start: Timestamp,
}

impl DependencySet {
    /// Create an empty set starting at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            physical_paths: FxHashSet::default(),
            logical_keys: FxHashSet::default(),
            start,
        }
    }

    /// Check whether the set watches nothing at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.physical_paths.is_empty() && self.logical_keys.is_empty()
    }

    /// Check whether `path` is watched.
    #[inline]
    pub fn watches_path(&self, path: &Path) -> bool {
        self.physical_paths.contains(path)
    }

    /// Check whether the logical `key` is watched.
    #[inline]
    pub fn watches_key(&self, key: &str) -> bool {
        self.logical_keys.contains(key)
    }

    /// Physical paths in sorted order (for display and stable output).
    pub fn sorted_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.physical_paths.iter().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }

    /// Logical keys in sorted order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.logical_keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl std::fmt::Display for DependencySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s), {} key(s) since {}",
            self.physical_paths.len(),
            self.logical_keys.len(),
            self.start.to_rfc3339()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_semantics() {
        let mut set = DependencySet::new(Utc::now());
        assert!(set.is_empty());

        set.physical_paths.insert(PathBuf::from("/b.less"));
        set.physical_paths.insert(PathBuf::from("/a.less"));
        set.physical_paths.insert(PathBuf::from("/a.less"));
        set.logical_keys.insert("overlay:themevars-Flex-1".into());

        assert!(!set.is_empty());
        assert_eq!(set.sorted_paths(), vec![Path::new("/a.less"), Path::new("/b.less")]);
        assert!(set.watches_path(Path::new("/b.less")));
        assert!(set.watches_key("overlay:themevars-Flex-1"));
        assert_eq!(set.sorted_keys(), vec!["overlay:themevars-Flex-1"]);
        assert!(set.to_string().starts_with("2 file(s), 1 key(s) since "));
    }
}
