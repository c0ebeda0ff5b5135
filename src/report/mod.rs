//! Installation report assembly and rendering.
//!
//! This module is the heart of `ftsctl check`:
//!
//! - [`model`] - the immutable [`Report`] structure and its sections
//! - [`builder`] - [`ReportBuilder`], which queries the config store and
//!   the subsystem registry and isolates subsystem failures
//! - [`render`] - pure formatters producing the JSON document or the
//!   line-oriented text summary
//!
//! Construction is pure and side-effect free; only the command layer
//! writes to the terminal.

pub mod builder;
pub mod model;
pub mod render;

pub use builder::ReportBuilder;
pub use model::{
    ActivePlatform, AppReport, ErrorReport, PlatformReport, PlatformSection, ProviderReport,
    ProvidersSection, Report,
};
