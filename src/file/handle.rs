//! File handles returned by [`get_file`](crate::ThemingFileProvider::get_file).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OverlayError, Result};
use crate::theme::{ResolveResult, ThemeVarsFile};

/// A file served by the overlay.
#[derive(Debug, Clone)]
pub enum VirtualFile {
    /// A file on disk, served by the base provider.
    Physical(PhysicalFile),
    /// A file inherited from another theme in the chain.
    Inherited(InheritedFile),
    /// The synthetic theme variables file.
    ThemeVars(ThemeVarsFile),
    /// An in-memory file, served by the base provider.
    Memory(MemoryFile),
}

impl VirtualFile {
    /// The virtual path the file was requested under.
    pub fn virtual_path(&self) -> &str {
        match self {
            Self::Physical(f) => &f.virtual_path,
            Self::Inherited(f) => &f.result.requested_path,
            Self::ThemeVars(f) => f.virtual_path(),
            Self::Memory(f) => &f.virtual_path,
        }
    }

    /// Physical location, if the file has one.
    pub fn physical_path(&self) -> Option<&Path> {
        match self {
            Self::Physical(f) => Some(&f.physical_path),
            Self::Inherited(f) => Some(&f.result.physical_path),
            Self::ThemeVars(_) | Self::Memory(_) => None,
        }
    }

    /// Whether the content is generated rather than stored.
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::ThemeVars(_))
    }

    /// Read the raw content.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Physical(f) => read_disk(&f.physical_path),
            Self::Inherited(f) => read_disk(&f.result.physical_path),
            Self::ThemeVars(f) => f.read_to_string().map(String::into_bytes),
            Self::Memory(f) => Ok(f.content.clone()),
        }
    }

    /// Read the content as UTF-8 text, stripping a BOM if present.
    pub fn read_to_string(&self) -> Result<String> {
        if let Self::ThemeVars(f) = self {
            return f.read_to_string();
        }
        let bytes = self.read()?;
        decode_utf8(&bytes)
            .map(str::to_owned)
            .ok_or_else(|| OverlayError::InvalidUtf8(self.virtual_path().to_string()))
    }
}

/// A base-provider file backed by disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalFile {
    /// Requested virtual path.
    pub virtual_path: String,
    /// Location on disk.
    pub physical_path: PathBuf,
}

/// A file resolved through the theme inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedFile {
    result: ResolveResult,
}

impl InheritedFile {
    /// Wrap a resolve result.
    pub fn new(result: ResolveResult) -> Self {
        Self { result }
    }

    /// The resolve result this file came from.
    pub fn result(&self) -> &ResolveResult {
        &self.result
    }

    /// Theme that supplied the file.
    pub fn origin_theme(&self) -> &str {
        &self.result.origin_theme
    }
}

/// A base-provider file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    /// Requested virtual path.
    pub virtual_path: String,
    /// File content.
    pub content: Vec<u8>,
}

/// Decode bytes as UTF-8, stripping BOM if present.
pub fn decode_utf8(buf: &[u8]) -> Option<&str> {
    let buf = buf.strip_prefix(b"\xef\xbb\xbf").unwrap_or(buf);
    std::str::from_utf8(buf).ok()
}

/// Read file from disk.
fn read_disk(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| OverlayError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decode_utf8_strips_bom() {
        assert_eq!(decode_utf8(b"\xef\xbb\xbf@a: 1;"), Some("@a: 1;"));
        assert_eq!(decode_utf8(b"\xff\xfe"), None);
    }

    #[test]
    fn test_inherited_file_reads_origin() {
        let dir = TempDir::new().unwrap();
        let physical = dir.path().join("site.less");
        fs::write(&physical, "body { color: red; }").unwrap();

        let file = VirtualFile::Inherited(InheritedFile::new(ResolveResult {
            requested_path: "/Themes/Child/site.less".into(),
            result_path: "/Themes/Base/site.less".into(),
            physical_path: physical.clone(),
            origin_theme: "Base".into(),
        }));

        assert_eq!(file.virtual_path(), "/Themes/Child/site.less");
        assert_eq!(file.physical_path(), Some(physical.as_path()));
        assert_eq!(file.read_to_string().unwrap(), "body { color: red; }");
        assert!(!file.is_synthetic());
    }

    #[test]
    fn test_missing_physical_file_is_io_not_found() {
        let file = VirtualFile::Physical(PhysicalFile {
            virtual_path: "/gone.css".into(),
            physical_path: PathBuf::from("/definitely/not/here/gone.css"),
        });
        let err = file.read().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_memory_file_invalid_utf8() {
        let file = VirtualFile::Memory(MemoryFile {
            virtual_path: "/bin.css".into(),
            content: vec![0xff, 0xfe, 0x00],
        });
        assert!(matches!(
            file.read_to_string(),
            Err(OverlayError::InvalidUtf8(path)) if path == "/bin.css"
        ));
    }
}
