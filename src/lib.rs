//! # impex-base
//!
//! Lossless parsing and code folding for impex data files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Code folding (classification, grouping, placeholders)
//!   ↓
//! parser    → Logos lexer, line-oriented parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex
pub mod base;

/// Parser: Logos lexer, line-oriented parser, rowan CST
pub mod parser;

/// IDE features: code folding
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
