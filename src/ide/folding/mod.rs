//! Code folding for impex files.
//!
//! Two passes run over the parsed tree:
//!
//! 1. **Single-node**: modifier blocks and comments fold individually;
//!    everything folded on one line shares a [`FoldGroup`].
//! 2. **Line ranges**: runs of two or more value lines between header or
//!    user-rights lines fold into one region.
//!
//! [`FoldingBuilder`] runs both and returns [`FoldDescriptor`]s (byte
//! ranges). [`folding_ranges`] is the one-call version that parses source
//! text and returns line/column [`FoldingRange`]s with placeholders resolved.

mod builder;
mod descriptor;
mod group;
mod line_range;
mod single_node;

pub use builder::FoldingBuilder;
pub use descriptor::{FoldDescriptor, LazyPlaceholder, Placeholder, is_collapsed_by_default};
pub use group::{FoldGroup, GroupSpace};
pub use line_range::RUN_PLACEHOLDER;

use smol_str::SmolStr;

use crate::base::LineIndex;
use crate::ide::settings::FoldingSettings;
use crate::parser::parse;

/// A fold region in line/column coordinates (0-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldingRange {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub group: FoldGroup,
    pub placeholder: Option<SmolStr>,
    pub collapsed_by_default: bool,
}

impl FoldingRange {
    fn new(descriptor: &FoldDescriptor, index: &LineIndex, placeholder: Option<SmolStr>) -> Self {
        let start = index.line_col(descriptor.range.start());
        let end = index.line_col(descriptor.range.end());
        Self {
            start_line: start.line,
            start_col: start.col,
            end_line: end.line,
            end_col: end.col,
            group: descriptor.group,
            placeholder,
            collapsed_by_default: descriptor.collapsed_by_default,
        }
    }
}

/// Parse `source` and compute its folding ranges.
pub fn folding_ranges(source: &str, settings: &FoldingSettings) -> Vec<FoldingRange> {
    let root = parse(source).syntax();
    let builder = FoldingBuilder::new(*settings);

    let descriptors = match builder.build_fold_regions(&root, false) {
        Ok(descriptors) => descriptors,
        Err(err) => {
            tracing::warn!("[FOLDING] {}", err);
            return Vec::new();
        }
    };

    let index = LineIndex::new(source);
    descriptors
        .iter()
        .map(|d| FoldingRange::new(d, &index, builder.descriptor_placeholder(d)))
        .collect()
}
