//! cadiff Engine - Orchestration layer
//!
//! Provides the command functions that resolve, load and compare two
//! design documents, coordinating the store and the core comparison
//! engine and owning operation lifecycle logging.

pub mod commands;
pub mod samples;

pub use commands::diff::{
    diff_documents, diff_sources, render_json, run_self_test, DiffOptions, DiffOutcome,
};
pub use commands::engine_command::{apply_engine_command, EngineCommand};
