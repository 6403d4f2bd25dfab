//! Virtual path classification.
//!
//! Every path falls into exactly one [`Classification`]:
//!
//! ```text
//! is_variables_path(path)?  ──yes──► SyntheticVariables
//!          │ no
//!   ends with .less?        ──yes──► CompiledStylesheet { is_less: true }
//!          │ no
//!   ends with .css?         ──yes──► CompiledStylesheet { is_less: false }
//!          │ no
//!          └──────────────────────► PlainResource
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::path::{file_name, has_extension};

/// The category a virtual path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The synthetic theme variables import. Has no physical backing.
    SyntheticVariables,
    /// A stylesheet that goes through the LESS pipeline or the bundler.
    CompiledStylesheet {
        /// `true` for `.less`, `false` for `.css`.
        is_less: bool,
    },
    /// Anything else.
    PlainResource,
}

impl Classification {
    /// Whether this is the synthetic variables source.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::SyntheticVariables)
    }
}

// =============================================================================
// VariablesPredicate
// =============================================================================

/// Decides whether a virtual path is the synthetic theme variables import.
///
/// Any `Fn(&str) -> bool` closure is a predicate:
///
/// ```
/// use theme_overlay::classify::VariablesPredicate;
///
/// let pred = |path: &str| path.ends_with("/vars.less");
/// assert!(pred.is_variables_path("/Themes/Flex/vars.less"));
/// ```
pub trait VariablesPredicate: Send + Sync {
    /// Return `true` if `path` addresses the synthetic variables source.
    fn is_variables_path(&self, path: &str) -> bool;
}

impl<F> VariablesPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_variables_path(&self, path: &str) -> bool {
        self(path)
    }
}

/// Matches paths whose final segment equals a fixed file name.
#[derive(Debug, Clone)]
pub struct SuffixVariablesPredicate {
    file_name: String,
}

impl SuffixVariablesPredicate {
    /// Create a predicate for the given file name (e.g. `"themevars.less"`).
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Create a predicate from [`Config::variables_file`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.variables_file.clone())
    }
}

impl Default for SuffixVariablesPredicate {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl VariablesPredicate for SuffixVariablesPredicate {
    fn is_variables_path(&self, path: &str) -> bool {
        file_name(path).eq_ignore_ascii_case(&self.file_name)
    }
}

// =============================================================================
// PathClassifier
// =============================================================================

/// Pure, total classifier over a path's suffix and the variables predicate.
#[derive(Clone)]
pub struct PathClassifier {
    predicate: Arc<dyn VariablesPredicate>,
}

impl PathClassifier {
    /// Create a classifier around the given predicate.
    pub fn new(predicate: Arc<dyn VariablesPredicate>) -> Self {
        Self { predicate }
    }

    /// Classify a virtual path.
    pub fn classify(&self, path: &str) -> Classification {
        if self.predicate.is_variables_path(path) {
            Classification::SyntheticVariables
        } else if has_extension(path, "less") {
            Classification::CompiledStylesheet { is_less: true }
        } else if has_extension(path, "css") {
            Classification::CompiledStylesheet { is_less: false }
        } else {
            Classification::PlainResource
        }
    }

    /// Shorthand for `classify(path).is_synthetic()`.
    #[inline]
    pub fn is_variables_path(&self, path: &str) -> bool {
        self.predicate.is_variables_path(path)
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(Arc::new(SuffixVariablesPredicate::default()))
    }
}

impl std::fmt::Debug for PathClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathClassifier").finish_non_exhaustive()
    }
}
