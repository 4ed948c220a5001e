//! Common types and utilities shared across cellsort crates.
//!
//! This crate defines the comparator options, observability helpers, and the
//! shared error type used throughout the cellsort workspace. It is kept small
//! so the comparator crate can depend on it without pulling in the config
//! stack.
//!
//! # Overview
//!
//! - [`SorterOptions`]: how extracted cell text is compared
//! - [`TextOrdering`]: code-point vs UTF-16 code-unit ordering
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`CellsortError`] and [`Result`]: Shared error handling
//!
//! # Examples
//!
//! ```rust
//! use cellsort_common::{SorterOptions, TextOrdering};
//!
//! let opts = SorterOptions::default();
//! assert_eq!(opts.ordering, TextOrdering::CodePoint);
//! assert!(opts.trim);
//! ```
use serde::{Deserialize, Serialize};

pub mod observability;

/// Lexicographic order applied to extracted cell text.
///
/// Both variants are case sensitive: `"Zebra"` sorts before `"apple"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrdering {
    /// Unicode scalar value order (Rust's `str` ordering).
    #[default]
    CodePoint,
    /// UTF-16 code-unit order, as browser-side JavaScript compares strings.
    #[serde(alias = "utf_16")]
    Utf16,
}

/// Options consumed by the HTML comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterOptions {
    /// Ordering used for the string comparison.
    pub ordering: TextOrdering,
    /// Strip leading/trailing white space from extracted text.
    pub trim: bool,
}

impl Default for SorterOptions {
    fn default() -> Self {
        Self {
            ordering: TextOrdering::CodePoint,
            trim: true,
        }
    }
}

/// Error types used across the cellsort workspace.
///
/// Comparison itself never fails; only loading configuration can.
#[derive(thiserror::Error, Debug)]
pub enum CellsortError {
    /// Configuration was missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`CellsortError`].
pub type Result<T> = std::result::Result<T, CellsortError>;
