//! Foundation types for the impex toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other impex modules.

pub use line_index::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
