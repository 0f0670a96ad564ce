//! Platform abstraction layer for native/web compatibility.
//!
//! [`Storage`] abstracts persistence of the target mix and preferences:
//! the filesystem on native, LocalStorage in the browser, and an in-memory
//! map for tests and ephemeral runs.

mod memory;
mod storage;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use memory::MemoryStorage;
pub use storage::{Storage, StorageError};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(feature = "web")]
pub use web::WebStorage;
