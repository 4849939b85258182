//! IDE features: high-level APIs for editor hosts.
//!
//! This module sits between the parsed impex tree and the editor. The
//! main feature is code folding; the building blocks (classification,
//! element filters, placeholders, settings) are exposed so hosts can reuse
//! them.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a tree in, return regions out
//! 2. **No editor types**: Uses our own types, converted at the host boundary
//! 3. **Recomputed per request**: Nothing is cached between calls
//!
//! ## Usage
//!
//! ```
//! use impex::ide::{FoldingBuilder, FoldingSettings};
//! use impex::parser::parse;
//!
//! let source = "INSERT_UPDATE Product;code[unique=true]\n;p1\n;p2\n";
//! let root = parse(source).syntax();
//!
//! let builder = FoldingBuilder::new(FoldingSettings::default());
//! let regions = builder.build_fold_regions(&root, false).unwrap();
//! assert_eq!(regions.len(), 2);
//! ```

pub mod classify;
mod error;
pub mod filter;
mod folding;
mod placeholder;
mod settings;

pub use classify::LineClass;
pub use error::FoldingError;
pub use filter::{foldable_elements, line_elements};
pub use folding::{
    FoldDescriptor, FoldGroup, FoldingBuilder, FoldingRange, GroupSpace, LazyPlaceholder,
    Placeholder, RUN_PLACEHOLDER, folding_ranges, is_collapsed_by_default,
};
pub use placeholder::{PlaceholderResolver, PlainPlaceholders, SmartPlaceholders, resolver_for};
pub use settings::{FoldingSettings, SharedSettings};
