//! The theming file provider and its builder.

#[cfg(feature = "batch")]
mod batch;
mod builder;
mod core;

#[cfg(feature = "batch")]
pub use batch::DependencyRequest;
pub use builder::OverlayBuilder;
pub use self::core::ThemingFileProvider;
