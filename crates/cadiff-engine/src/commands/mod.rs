//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! source resolution, document loading and the core comparison engine.

pub mod diff;
pub mod engine_command;
