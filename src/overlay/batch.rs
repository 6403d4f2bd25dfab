//! Parallel dependency composition.
//!
//! Warming a bundle cache means computing dependency sets for many outputs
//! at once. Each composition is independent, so they run on rayon's pool.
//!
//! # Example
//!
//! ```ignore
//! let requests = vec![
//!     DependencyRequest::new("/Themes/Flex/site.less", ["/Themes/Flex/themevars.less"], start),
//!     DependencyRequest::new("/bundles/vendor.css", ["/Content/reset.css"], start),
//! ];
//! for result in provider.get_cache_dependencies(&requests, &ctx) {
//!     // results are in request order
//! }
//! ```

use super::core::ThemingFileProvider;
use crate::dependency::{DependencySet, Timestamp};
use crate::error::Result;
use crate::theme::ThemeContext;

/// One output artifact and the dependencies its compiler reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRequest {
    /// Virtual path of the output.
    pub output_path: String,
    /// Declared dependencies.
    pub dependencies: Vec<String>,
    /// Start of the watch window.
    pub start: Timestamp,
}

impl DependencyRequest {
    /// Create a request.
    pub fn new<I, S>(output_path: impl Into<String>, dependencies: I, start: Timestamp) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output_path: output_path.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            start,
        }
    }
}

impl ThemingFileProvider {
    /// Compose dependency sets for many outputs in parallel.
    ///
    /// Returns results in the same order as `requests`. A failing request
    /// does not affect the others.
    pub fn get_cache_dependencies(
        &self,
        requests: &[DependencyRequest],
        ctx: &dyn ThemeContext,
    ) -> Vec<Result<Option<DependencySet>>> {
        use rayon::prelude::*;

        if requests.is_empty() {
            return vec![];
        }

        let composer = self.composer();
        requests
            .par_iter()
            .map(|request| {
                composer.compose(&request.output_path, &request.dependencies, request.start, ctx)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::file::MapFileProvider;
    use crate::theme::StaticThemeContext;

    #[test]
    fn test_batch_matches_sequential() {
        let provider = ThemingFileProvider::builder(Arc::new(MapFileProvider::new("/srv/app"))).build();
        let ctx = StaticThemeContext::new("Flex", 1);
        let start = Utc::now();

        let requests: Vec<DependencyRequest> = (0..32)
            .map(|i| {
                DependencyRequest::new(
                    format!("/out/{i}.less"),
                    [format!("/src/{i}.less"), "/src/themevars.less".to_string()],
                    start,
                )
            })
            .chain([DependencyRequest::new("/out/empty.less", Vec::<String>::new(), start)])
            .collect();

        let results = provider.get_cache_dependencies(&requests, &ctx);
        assert_eq!(results.len(), requests.len());

        for (request, result) in requests.iter().zip(results) {
            let sequential = provider
                .get_cache_dependency(&request.output_path, &request.dependencies, start, &ctx)
                .unwrap();
            assert_eq!(result.unwrap(), sequential);
        }
    }

    #[test]
    fn test_empty_batch() {
        let provider = ThemingFileProvider::builder(Arc::new(MapFileProvider::new("/srv/app"))).build();
        assert!(provider
            .get_cache_dependencies(&[], &StaticThemeContext::new("Flex", 1))
            .is_empty());
    }
}
