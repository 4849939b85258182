//! IDE feature tests
//!
//! Tests for:
//! - Folding regions (single-node and line-range passes)
//! - Placeholder text
//! - Folding settings

pub mod tests_folding;
