//! File handles and the wrapped base provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      File Access Flow                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  path ──► get_file(path, ctx)                               │
//! │                 │                                           │
//! │                 ├─► Variables path (themevars.less)         │
//! │                 │   └─► VirtualFile::ThemeVars              │
//! │                 │                                           │
//! │                 ├─► Theme override (inheritance chain)      │
//! │                 │   └─► VirtualFile::Inherited              │
//! │                 │                                           │
//! │                 └─► Base provider                           │
//! │                     └─► VirtualFile::Physical / Memory      │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod handle;
mod provider;

pub use handle::{decode_utf8, InheritedFile, MemoryFile, PhysicalFile, VirtualFile};
pub use provider::{BaseFileProvider, MapFileProvider, PhysicalFileProvider};
