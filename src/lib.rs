//! # theme-overlay
//!
//! A theme-aware virtual file overlay for stylesheet assets.
//!
//! The overlay wraps an application's existing file provider and answers
//! three questions for the hosting environment:
//!
//! - **Does this file exist?** Theme overrides and the synthetic variables
//!   file exist even where the base provider has nothing.
//! - **What is in it?** Overrides come from the theme inheritance chain, the
//!   variables file is rendered from the active theme/store variable set,
//!   everything else comes from the base provider.
//! - **What must the cached output watch?** Compiled stylesheets depend on
//!   real files *and* on theme variables. Files become physical watch paths;
//!   variables become a logical cache key per theme and store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use theme_overlay::prelude::*;
//!
//! let provider = ThemingFileProvider::builder(Arc::new(PhysicalFileProvider::new(app_root)))
//!     .with_resolver(Arc::new(
//!         ChainThemeResolver::new(app_root, &Config::default()).with_parent("Child", "Base"),
//!     ))
//!     .with_variables(variables.clone())
//!     .build();
//!
//! let ctx = StaticThemeContext::new("Child", 1);
//! let file = provider.get_file("/Themes/Child/Content/site.less", &ctx)?;
//! let deps = provider.get_cache_dependency(
//!     "/Themes/Child/Content/site.less",
//!     &imports,
//!     chrono::Utc::now(),
//!     &ctx,
//! )?;
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Naming conventions (variables file name, cache-key scheme)
//! - [`classify`]: Path classification
//! - [`theme`]: Theme context, override resolution, synthetic variables
//! - [`mod@file`]: File handles and the wrapped base provider
//! - [`dependency`]: Cache-dependency composition
//! - [`overlay`]: The provider the hosting environment talks to

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod dependency;
pub mod error;
pub mod file;
pub mod overlay;
pub mod path;
pub mod prelude;
pub mod theme;

// =============================================================================
// High-Level API
// =============================================================================

pub use overlay::{OverlayBuilder, ThemingFileProvider};
#[cfg(feature = "batch")]
pub use overlay::DependencyRequest;

// =============================================================================
// Core Types
// =============================================================================

pub use classify::Classification;
pub use dependency::{DependencySet, Timestamp};
pub use error::{OverlayError, Result};
pub use file::VirtualFile;
pub use theme::{ResolveResult, ThemeIdentity};

// =============================================================================
// Infrastructure
// =============================================================================

pub use config::{Config, ConfigBuilder};
