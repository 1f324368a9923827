//! Common types and utilities shared across formats.
//!
//! This module holds the crate-wide error type together with the byte-level
//! helpers (BOM handling, text decoding) that every text format needs before
//! its own parser runs.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use bom::{BomKind, write_bom};
pub use error::{Error, Result};
