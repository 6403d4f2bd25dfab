//! Theme collaborators: identity/context, override resolution, variables.

#[cfg(feature = "chain")]
mod chain;
mod identity;
mod resolver;
mod variables;

pub use identity::{StaticThemeContext, ThemeContext, ThemeIdentity};
#[cfg(feature = "chain")]
pub use chain::ChainThemeResolver;
pub use resolver::{
    MapThemeResolver, NoThemeResolver, OverlayResolver, ResolveResult, ThemeFileResolver,
};
pub use variables::{
    MapVariablesSource, ThemeVarsFile, VariableSet, VariablesSource, VariablesSynthesizer,
};
