pub mod format;
#[cfg(feature = "native")]
pub mod io;
pub mod styles;
