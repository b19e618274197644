//! cadiff Store - everything that touches the filesystem
//!
//! Provides:
//! - Design document loading (cadnano JSON → `Document`)
//! - Configuration file loading and merging with command-line values
//! - Source pattern resolution (`~` expansion and glob matching)

pub mod config;
pub mod errors;
pub mod loader;
pub mod resolve;

// Re-export key types
pub use config::{load_config, DiffConfig, LogFormat, LogLevelSetting, OutputFormat};
pub use errors::Result;
pub use loader::{load_document, parse_document, LoaderOptions};
pub use resolve::{resolve_sources, Resolution};
