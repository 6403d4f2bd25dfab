//! The wrapped base file provider.
//!
//! The overlay never replaces the application's own provider; it holds a
//! reference to it and delegates every path it does not handle itself.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::handle::{MemoryFile, PhysicalFile, VirtualFile};
use crate::error::{OverlayError, Result};
use crate::path::{normalize, to_physical};

// =============================================================================
// BaseFileProvider Trait
// =============================================================================

/// The pre-existing file provider the overlay wraps.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use theme_overlay::error::{OverlayError, Result};
/// use theme_overlay::file::{BaseFileProvider, VirtualFile};
///
/// struct Empty;
///
/// impl BaseFileProvider for Empty {
///     fn exists(&self, _path: &str) -> bool {
///         false
///     }
///
///     fn get_file(&self, path: &str) -> Result<VirtualFile> {
///         Err(OverlayError::NotFound(path.to_string()))
///     }
///
///     fn map_to_physical_path(&self, path: &str) -> PathBuf {
///         PathBuf::from("/srv/app").join(path.trim_start_matches('/'))
///     }
/// }
/// ```
pub trait BaseFileProvider: Send + Sync {
    /// Check whether a file exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Get the file at `path`.
    fn get_file(&self, path: &str) -> Result<VirtualFile>;

    /// Map a virtual path to its physical location.
    ///
    /// Total: paths reaching this call have already passed existence checks.
    fn map_to_physical_path(&self, path: &str) -> PathBuf;
}

// =============================================================================
// PhysicalFileProvider
// =============================================================================

/// Serves files from a directory on disk.
#[derive(Debug, Clone)]
pub struct PhysicalFileProvider {
    root: PathBuf,
}

impl PhysicalFileProvider {
    /// Create a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The application root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BaseFileProvider for PhysicalFileProvider {
    fn exists(&self, path: &str) -> bool {
        self.map_to_physical_path(path).is_file()
    }

    fn get_file(&self, path: &str) -> Result<VirtualFile> {
        let physical_path = self.map_to_physical_path(path);
        if !physical_path.is_file() {
            return Err(OverlayError::NotFound(path.to_string()));
        }
        Ok(VirtualFile::Physical(PhysicalFile {
            virtual_path: path.to_string(),
            physical_path,
        }))
    }

    fn map_to_physical_path(&self, path: &str) -> PathBuf {
        to_physical(&self.root, path)
    }
}

// =============================================================================
// MapFileProvider
// =============================================================================

/// A simple map-based provider for embedding and tests.
///
/// Physical paths are synthesized under a nominal root so dependency sets
/// stay meaningful.
///
/// # Example
///
/// ```
/// use theme_overlay::file::{BaseFileProvider, MapFileProvider};
///
/// let mut base = MapFileProvider::new("/srv/app");
/// base.insert("~/Content/reset.css", "* { margin: 0 }");
/// assert!(base.exists("/Content/reset.css"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapFileProvider {
    root: PathBuf,
    files: FxHashMap<String, Vec<u8>>,
}

impl MapFileProvider {
    /// Create an empty provider with a nominal physical root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: FxHashMap::default(),
        }
    }

    /// Insert a file with string content.
    pub fn insert(&mut self, path: &str, content: impl AsRef<str>) {
        self.insert_bytes(path, content.as_ref().as_bytes().to_vec());
    }

    /// Insert a file with binary content.
    pub fn insert_bytes(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(normalize(path), content.into());
    }

    /// Remove a file.
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(&normalize(path))
    }

    /// Get the number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl BaseFileProvider for MapFileProvider {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(&normalize(path))
    }

    fn get_file(&self, path: &str) -> Result<VirtualFile> {
        self.files
            .get(&normalize(path))
            .map(|content| {
                VirtualFile::Memory(MemoryFile {
                    virtual_path: path.to_string(),
                    content: content.clone(),
                })
            })
            .ok_or_else(|| OverlayError::NotFound(path.to_string()))
    }

    fn map_to_physical_path(&self, path: &str) -> PathBuf {
        to_physical(&self.root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_physical_provider() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Content")).unwrap();
        fs::write(dir.path().join("Content").join("site.css"), "a{}").unwrap();

        let base = PhysicalFileProvider::new(dir.path());
        assert!(base.exists("~/Content/site.css"));
        assert!(!base.exists("/Content/missing.css"));
        assert!(!base.exists("/Content"));

        let file = base.get_file("/Content/site.css").unwrap();
        assert_eq!(file.read_to_string().unwrap(), "a{}");
        assert!(matches!(
            base.get_file("/Content/missing.css"),
            Err(OverlayError::NotFound(_))
        ));
    }

    #[test]
    fn test_map_provider() {
        let mut base = MapFileProvider::new("/srv/app");
        base.insert("/Content/reset.css", "*{}");
        assert_eq!(base.len(), 1);
        assert!(base.exists("~/Content/reset.css"));
        assert_eq!(
            base.map_to_physical_path("/Content/reset.css"),
            Path::new("/srv/app/Content/reset.css")
        );
        assert_eq!(
            base.get_file("/Content/reset.css").unwrap().read().unwrap(),
            b"*{}"
        );
        assert!(base.remove("/Content/reset.css").is_some());
        assert!(base.is_empty());
    }
}
