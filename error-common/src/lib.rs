//! Common error handling utilities for Paroki Engine
//!
//! Standardized error types and reporting helpers shared by all Paroki Engine
//! crates. Request-scoped failures (validation, gate lookups, database reads)
//! carry their own error kinds in the owning crate; this crate holds the
//! top-level enum the binary speaks.

pub mod types;

pub use types::*;
