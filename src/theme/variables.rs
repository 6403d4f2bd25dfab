//! Synthetic theme variables file.
//!
//! Stylesheets import the variables file (e.g. `themevars.less`) like any
//! other file, but no such file exists on disk. Its content is rendered on
//! read from the variable set of the active theme and store.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use super::identity::{ThemeContext, ThemeIdentity};
use crate::classify::PathClassifier;
use crate::error::{BoxError, OverlayError, Result};

// =============================================================================
// VariablesSource Trait
// =============================================================================

/// Renders the variable set of a theme/store as stylesheet source.
pub trait VariablesSource: Send + Sync {
    /// Render the variables for `identity`.
    fn render(&self, identity: &ThemeIdentity) -> Result<String, BoxError>;
}

/// A named variable set: `name -> value`.
pub type VariableSet = BTreeMap<String, String>;

/// In-memory variable sets keyed by [`ThemeIdentity`].
///
/// Renders LESS declarations, one per line, sorted by name:
///
/// ```text
/// @brand-primary: #0a6ebd;
/// @font-size-base: 14px;
/// ```
///
/// An identity without a registered set renders as an empty file.
#[derive(Default)]
pub struct MapVariablesSource {
    sets: RwLock<FxHashMap<ThemeIdentity, VariableSet>>,
}

impl MapVariablesSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the variable set for `identity`.
    pub fn set(&self, identity: ThemeIdentity, vars: VariableSet) {
        self.sets.write().insert(identity, vars);
    }

    /// Set a single variable for `identity`.
    pub fn set_var(&self, identity: &ThemeIdentity, name: impl Into<String>, value: impl Into<String>) {
        self.sets
            .write()
            .entry(identity.clone())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Load the variable set for `identity` from a JSON object.
    ///
    /// Strings are taken verbatim, numbers and booleans are printed,
    /// `null` and nested values are skipped.
    pub fn set_json(&self, identity: ThemeIdentity, json: &str) -> Result<(), serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        let vars = object
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::String(s) => Some((name, s)),
                Value::Number(n) => Some((name, n.to_string())),
                Value::Bool(b) => Some((name, b.to_string())),
                Value::Null => None,
                Value::Array(_) | Value::Object(_) => {
                    log::warn!("skipping nested theme variable {name} for {identity}");
                    None
                }
            })
            .collect();
        self.set(identity, vars);
        Ok(())
    }

    /// Drop the variable set for `identity`.
    pub fn remove(&self, identity: &ThemeIdentity) -> Option<VariableSet> {
        self.sets.write().remove(identity)
    }
}

impl VariablesSource for MapVariablesSource {
    fn render(&self, identity: &ThemeIdentity) -> Result<String, BoxError> {
        let sets = self.sets.read();
        let Some(vars) = sets.get(identity) else {
            return Ok(String::new());
        };
        Ok(vars
            .iter()
            .map(|(name, value)| format!("@{}: {value};\n", name.trim_start_matches('@')))
            .collect())
    }
}

// =============================================================================
// ThemeVarsFile
// =============================================================================

/// The synthetic variables file for one theme/store.
///
/// Content is rendered each time it is read and never persisted.
#[derive(Clone)]
pub struct ThemeVarsFile {
    virtual_path: String,
    identity: ThemeIdentity,
    source: Arc<dyn VariablesSource>,
}

impl ThemeVarsFile {
    /// Virtual path the file was requested under.
    pub fn virtual_path(&self) -> &str {
        &self.virtual_path
    }

    /// Theme/store whose variables this file renders.
    pub fn identity(&self) -> &ThemeIdentity {
        &self.identity
    }

    /// Render the variables.
    pub fn read_to_string(&self) -> Result<String> {
        self.source
            .render(&self.identity)
            .map_err(OverlayError::Variables)
    }
}

impl std::fmt::Debug for ThemeVarsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeVarsFile")
            .field("virtual_path", &self.virtual_path)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// VariablesSynthesizer
// =============================================================================

/// Produces [`ThemeVarsFile`]s for synthetic variables paths.
#[derive(Clone)]
pub struct VariablesSynthesizer {
    classifier: PathClassifier,
    source: Arc<dyn VariablesSource>,
}

impl VariablesSynthesizer {
    /// Create a synthesizer.
    pub fn new(classifier: PathClassifier, source: Arc<dyn VariablesSource>) -> Self {
        Self { classifier, source }
    }

    /// Build the variables file for `path` in the theme/store given by `ctx`.
    ///
    /// `path` must classify as synthetic; callers classify first.
    pub fn synthesize(&self, path: &str, ctx: &dyn ThemeContext) -> Result<ThemeVarsFile> {
        debug_assert!(
            self.classifier.is_variables_path(path),
            "{path} is not a variables path"
        );
        let identity = ctx.identity()?;
        log::trace!("synthesizing {path} for {identity}");
        Ok(ThemeVarsFile {
            virtual_path: path.to_string(),
            identity,
            source: Arc::clone(&self.source),
        })
    }
}

impl std::fmt::Debug for VariablesSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariablesSynthesizer")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}
