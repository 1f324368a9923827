//! Unified error types for slk2csv.
//!
//! This module provides the crate-wide error type. Format-specific errors
//! (such as SYLK record parse failures) convert into it so that every public
//! operation returns the same `Result`.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
