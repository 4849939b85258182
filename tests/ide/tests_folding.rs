//! Folding region tests for the IDE layer.

use rstest::rstest;

use crate::helpers::fold_helpers::*;
use crate::helpers::source_fixtures::*;
use impex::TextSize;
use impex::ide::{FoldingBuilder, FoldingSettings, GroupSpace, RUN_PLACEHOLDER};
use impex::parser::{SyntaxKind, parse};

// =============================================================================
// FOLDING - NOTHING TO FOLD
// =============================================================================

#[rstest]
#[case::empty(EMPTY)]
#[case::blank_lines(ONLY_BLANK_LINES)]
#[case::single_header(SINGLE_HEADER)]
#[case::single_row(";p1")]
fn test_no_foldable_nodes(#[case] source: &str) {
    assert!(folds(source).is_empty(), "unexpected folds for {:?}", source);
}

#[rstest]
#[case(TWO_BLOCKS)]
#[case(MACROS_AND_USER_RIGHTS)]
#[case(COMMENTED_BLOCK)]
fn test_disabled_folding_returns_nothing(#[case] source: &str) {
    assert!(!folds(source).is_empty());
    assert!(folds_with(source, FoldingSettings::disabled()).is_empty());
}

// =============================================================================
// FOLDING - RANGES
// =============================================================================

#[rstest]
#[case(TWO_BLOCKS)]
#[case(MACROS_AND_USER_RIGHTS)]
#[case(COMMENTED_BLOCK)]
#[case(MIXED_LINE_ENDINGS)]
#[case(ONLY_COMMENTS)]
fn test_ranges_within_document(#[case] source: &str) {
    let end = TextSize::of(source);
    for descriptor in folds(source) {
        assert!(descriptor.range.end() <= end, "{:?} past {:?}", descriptor.range, end);
        assert!(!descriptor.range.is_empty());
    }
}

#[test]
fn test_folding_is_idempotent() {
    let root = parse(TWO_BLOCKS).syntax();
    let builder = FoldingBuilder::default();

    let first = builder.build_fold_regions(&root, false).unwrap();
    let second = builder.build_fold_regions(&root, false).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.range, b.range);
        assert_eq!(
            builder.descriptor_placeholder(a),
            builder.descriptor_placeholder(b)
        );
    }
}

#[test]
fn test_node_folds_come_before_line_folds() {
    let descriptors = folds(TWO_BLOCKS);
    let first_line_fold = descriptors
        .iter()
        .position(|d| d.group.space() == GroupSpace::Line)
        .unwrap();
    assert!(
        descriptors[first_line_fold..]
            .iter()
            .all(|d| d.group.space() == GroupSpace::Line)
    );
}

// =============================================================================
// FOLDING - SINGLE NODE GROUPS
// =============================================================================

#[test]
fn test_modifiers_on_one_line_share_group() {
    let descriptors = node_folds(TWO_BLOCKS);
    assert_eq!(
        folded_texts(TWO_BLOCKS, &descriptors),
        vec!["[unique=true]", "[lang=en]", "[unique=true]"]
    );
    assert_eq!(descriptors[0].group, descriptors[1].group);
    assert_ne!(descriptors[1].group, descriptors[2].group);
}

#[test]
fn test_blank_lines_reset_group_once() {
    let source = "INSERT A;b[unique=true]\n\n\n\nINSERT C;d[unique=true]";
    let descriptors = node_folds(source);
    assert_eq!(descriptors.len(), 2);
    assert_ne!(descriptors[0].group, descriptors[1].group);
}

#[test]
fn test_macro_declaration_modifiers() {
    let descriptors = node_folds(MACROS_AND_USER_RIGHTS);
    assert_eq!(descriptors.len(), 3);
    assert!(descriptors.iter().all(|d| d.node.kind() == SyntaxKind::MODIFIERS));
    assert!(descriptors.iter().all(|d| d.group == descriptors[0].group));
}

#[test]
fn test_groups_never_shared_between_passes() {
    let descriptors = folds(TWO_BLOCKS);
    for node in descriptors.iter().filter(|d| d.group.space() == GroupSpace::Node) {
        for line in descriptors.iter().filter(|d| d.group.space() == GroupSpace::Line) {
            assert_ne!(node.group, line.group);
        }
    }
}

// =============================================================================
// FOLDING - LINE RANGES
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 1)]
#[case(10, 1)]
fn test_run_length_threshold(#[case] rows: usize, #[case] expected: usize) {
    let mut source = String::from("INSERT Product;code\n");
    for i in 0..rows {
        source.push_str(&format!(";p{i}\n"));
    }
    source.push_str("INSERT Category;code\n");

    assert_eq!(line_folds(&source).len(), expected);
}

#[test]
fn test_two_blocks_example() {
    let descriptors = line_folds(TWO_BLOCKS);
    assert_eq!(
        folded_texts(TWO_BLOCKS, &descriptors),
        vec![";p1;One\n;p2;Two\n;p3;Three\n;p4;Four"]
    );

    let builder = FoldingBuilder::default();
    assert_eq!(
        builder.descriptor_placeholder(&descriptors[0]).as_deref(),
        Some(RUN_PLACEHOLDER)
    );
    assert!(!descriptors[0].collapsed_by_default);
}

#[test]
fn test_user_rights_block() {
    let descriptors = line_folds(MACROS_AND_USER_RIGHTS);
    assert_eq!(
        folded_texts(MACROS_AND_USER_RIGHTS, &descriptors),
        vec!["Type;UID;MemberOfGroups;Password;Target;read;change\nUserGroup;employeegroup;;;;;\n;;;;Product;+;-"]
    );
    let builder = FoldingBuilder::default();
    assert_eq!(
        builder.descriptor_placeholder(&descriptors[0]).as_deref(),
        Some(RUN_PLACEHOLDER)
    );
}

#[test]
fn test_run_after_comment_has_empty_placeholder() {
    let descriptors = line_folds(COMMENTED_BLOCK);
    assert_eq!(folded_texts(COMMENTED_BLOCK, &descriptors), vec![";p1\n;p2"]);
    let builder = FoldingBuilder::default();
    assert_eq!(builder.descriptor_placeholder(&descriptors[0]).as_deref(), Some(""));
}

#[test]
fn test_mixed_line_endings() {
    let descriptors = line_folds(MIXED_LINE_ENDINGS);
    assert_eq!(
        folded_texts(MIXED_LINE_ENDINGS, &descriptors),
        vec![";p1\r\n;p2\n;p3"]
    );
}

#[rstest]
#[case::one_line(";p1", 0)]
#[case::two_lines(";p1\n;p2", 1)]
#[case::header_only("INSERT A;b", 0)]
#[case::header_and_one_line("INSERT A;b\n;p1", 0)]
fn test_short_documents(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(line_folds(source).len(), expected);
}

// =============================================================================
// FOLDING - LINE/COLUMN RANGES
// =============================================================================

#[test]
fn test_folding_ranges_match_descriptors() {
    let ranges = impex::ide::folding_ranges(TWO_BLOCKS, &FoldingSettings::default());
    let run = ranges.last().unwrap();
    assert_eq!((run.start_line, run.start_col), (1, 0));
    assert_eq!((run.end_line, run.end_col), (4, 8));
    assert_eq!(run.placeholder.as_deref(), Some(RUN_PLACEHOLDER));
    for range in &ranges {
        assert!(range.end_line >= range.start_line);
    }
}
