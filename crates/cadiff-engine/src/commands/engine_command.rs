//! Engine-level commands.

#![allow(clippy::result_large_err)]

use crate::commands::diff::{diff_sources, run_self_test, DiffOptions, DiffOutcome};
use cadiff_store::errors::Result;
use std::path::PathBuf;

/// Commands the engine can run.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Compare two design files.
    Diff {
        sources: Vec<PathBuf>,
        options: DiffOptions,
    },
    /// Compare the built-in sample designs.
    SelfTest { options: DiffOptions },
}

/// Apply an engine command.
pub fn apply_engine_command(cmd: EngineCommand) -> Result<DiffOutcome> {
    match cmd {
        EngineCommand::Diff { sources, options } => diff_sources(&sources, &options),
        EngineCommand::SelfTest { options } => run_self_test(&options),
    }
}
