//! Template-driven conversion of alerts from arbitrary alerting systems into
//! Alertmanager-shaped alerts.
//!
//! A template maps output field names to lookup specifications: a single key
//! name searched for anywhere in the source alert, or a path of key names
//! that narrows the search one step at a time.
pub mod core;
pub mod logging;
pub mod utils;

pub use crate::core::{AppError, Converter, Document, ErrorCategory, LookupSpec};

/// Current crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Result<T> = std::result::Result<T, anyhow::Error>;
