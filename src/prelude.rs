//! Prelude module for convenient imports.
//!
//! ```ignore
//! use theme_overlay::prelude::*;
//! ```

// Provider (Builder API)
pub use crate::overlay::{OverlayBuilder, ThemingFileProvider};
#[cfg(feature = "batch")]
pub use crate::overlay::DependencyRequest;

// Errors
pub use crate::error::{BoxError, OverlayError};

// Configuration
pub use crate::config::{Config, ConfigBuilder};

// Classification
pub use crate::classify::{Classification, PathClassifier, SuffixVariablesPredicate, VariablesPredicate};

// Theme collaborators
pub use crate::theme::{
    MapThemeResolver, MapVariablesSource, NoThemeResolver, ResolveResult, StaticThemeContext,
    ThemeContext, ThemeFileResolver, ThemeIdentity, ThemeVarsFile, VariablesSource,
};
#[cfg(feature = "chain")]
pub use crate::theme::ChainThemeResolver;

// Files
pub use crate::file::{BaseFileProvider, MapFileProvider, PhysicalFileProvider, VirtualFile};

// Dependencies
pub use crate::dependency::{
    Bundle, BundleRegistry, CacheKeyBuilder, DefaultCacheKeyBuilder, DependencySet,
    MapBundleRegistry, NoBundles, Timestamp,
};
