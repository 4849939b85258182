//! Helpers for running the folding builder over source text.

use impex::ide::{FoldDescriptor, FoldingBuilder, FoldingSettings};
use impex::parser::{SyntaxKind, parse};

/// Build fold regions for `source` with default settings.
pub fn folds(source: &str) -> Vec<FoldDescriptor> {
    folds_with(source, FoldingSettings::default())
}

/// Build fold regions for `source` with the given settings.
pub fn folds_with(source: &str, settings: FoldingSettings) -> Vec<FoldDescriptor> {
    let root = parse(source).syntax();
    FoldingBuilder::new(settings)
        .build_fold_regions(&root, false)
        .expect("parse always yields a SOURCE_FILE root")
}

/// Only the line-range regions (anchored at value lines).
pub fn line_folds(source: &str) -> Vec<FoldDescriptor> {
    folds(source)
        .into_iter()
        .filter(|d| d.node.kind() == SyntaxKind::VALUE_LINE)
        .collect()
}

/// Only the single-node regions.
pub fn node_folds(source: &str) -> Vec<FoldDescriptor> {
    folds(source)
        .into_iter()
        .filter(|d| d.node.kind() != SyntaxKind::VALUE_LINE)
        .collect()
}

/// The source text each region covers.
pub fn folded_texts<'a>(source: &'a str, descriptors: &[FoldDescriptor]) -> Vec<&'a str> {
    descriptors.iter().map(|d| &source[d.range]).collect()
}
