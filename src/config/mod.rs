//! Application configuration access.
//!
//! The report layer never touches the filesystem directly; it reads
//! settings through the [`ConfigStore`] trait. Two implementations exist:
//!
//! - [`FileConfigStore`] — loads `config.yml` from the installation root,
//!   overlaid on built-in defaults
//! - [`MemoryConfigStore`] — programmatic store for embedding and tests
//!
//! Config failures are fatal by design: a report without a well-formed
//! version and settings snapshot is not worth printing.
//!
//! # Example
//!
//! ```
//! use ftsctl::config::{ConfigStore, MemoryConfigStore, INSTALLED_VERSION};
//!
//! let store = MemoryConfigStore::new().with_str(INSTALLED_VERSION, "2.0.0");
//! assert_eq!(store.value(INSTALLED_VERSION).unwrap(), "2.0.0");
//! ```

pub mod store;

pub use store::{
    ConfigStore, FileConfigStore, MemoryConfigStore, CONFIG_FILE, INSTALLED_VERSION,
    SEARCH_PLATFORM,
};
