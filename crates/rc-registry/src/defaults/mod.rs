//! Built-in setting tables
//!
//! Host overrides are registered first, then the library's own settings,
//! so registration order groups host keys ahead of library keys.

mod host;
mod library;

pub(crate) use host::host_options;
pub(crate) use library::library_options;
