//! Virtual dependency path to physical path.

use std::path::PathBuf;
use std::sync::Arc;

use crate::file::BaseFileProvider;
use crate::theme::OverlayResolver;

/// Maps a virtual path to the file the host should watch.
///
/// A theme override wins; anything else is the base provider's location.
#[derive(Clone)]
pub struct PathMapper {
    resolver: OverlayResolver,
    base: Arc<dyn BaseFileProvider>,
}

impl PathMapper {
    /// Create a mapper.
    pub fn new(resolver: OverlayResolver, base: Arc<dyn BaseFileProvider>) -> Self {
        Self { resolver, base }
    }

    /// Physical location of `path`. Never fails.
    pub fn map_to_physical(&self, path: &str) -> PathBuf {
        match self.resolver.resolve(path) {
            Some(result) => result.physical_path,
            None => self.base.map_to_physical_path(path),
        }
    }
}

impl std::fmt::Debug for PathMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathMapper")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
