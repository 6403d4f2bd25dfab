//! Cache-dependency composition for compiled and bundled output.

mod bundle;
mod compose;
mod key;
mod mapper;
mod set;

pub use bundle::{Bundle, BundleRegistry, MapBundleRegistry, NoBundles};
pub use compose::DependencyComposer;
pub use key::{CacheKeyBuilder, DefaultCacheKeyBuilder};
pub use mapper::PathMapper;
pub use set::{DependencySet, Timestamp};
