//! Structured logging facility for cadiff
//!
//! This module provides:
//! - Single initialization point via `init(profile)` / `init_with_filter(profile, filter)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The comparison engine itself never logs; operation boundaries are logged
//! by the orchestration layer that calls it.
//!
//! # Usage
//!
//! ```rust
//! use cadiff_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, init_with_filter, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
