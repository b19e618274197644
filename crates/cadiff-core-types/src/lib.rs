//! Core types shared across cadiff facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! structured logging macros and by error reporting.

pub mod schema;
