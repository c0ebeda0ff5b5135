//! ftsctl - Installation diagnostics for the full text search framework.
//!
//! ftsctl inspects an installation of the search-indexing framework and
//! reports its status: the installed version, the application settings,
//! the registered search platform backends and the registered content
//! providers. Subsystems that fail to answer degrade into error entries
//! instead of aborting the report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Application configuration access
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Platform and provider descriptors and their registry
//! - [`report`] - Report assembly and rendering
//! - [`ui`] - Terminal output abstraction
//!
//! # Example
//!
//! ```
//! use ftsctl::config::{MemoryConfigStore, INSTALLED_VERSION};
//! use ftsctl::registry::SubsystemRegistry;
//! use ftsctl::report::ReportBuilder;
//!
//! let store = MemoryConfigStore::new().with_str(INSTALLED_VERSION, "2.0.0");
//! let registry = SubsystemRegistry::new();
//!
//! let report = ReportBuilder::new(&store, &registry).build().unwrap();
//! assert_eq!(report.fulltextsearch.version, "2.0.0");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod ui;

pub use error::{FtsctlError, RegistryError, Result};
