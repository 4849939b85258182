//! Line-range pass: fold runs of value lines between headers.
//!
//! A run is the value lines between two boundaries (header or user-rights
//! lines, or the ends of the document). Runs of two or more lines fold into
//! one region from the run's first line to its last.

use smol_str::SmolStr;

use crate::parser::{SyntaxElement, SyntaxNode, TextRange};

use super::descriptor::FoldDescriptor;
use super::group::{FoldGroup, GroupAllocator, GroupSpace};
use crate::ide::classify::{
    LineClass, classify, next_element_is_header_line, next_element_is_user_rights_macro,
    prev_non_whitespace_element,
};

/// Placeholder for a run that directly follows its header or macro line.
pub const RUN_PLACEHOLDER: &str = ";....;....";

/// Shortest run worth folding.
const MIN_RUN_LINES: usize = 2;

struct LinePass {
    groups: GroupAllocator,
    current: Option<FoldGroup>,
    /// First line of the pending run
    start: Option<SyntaxNode>,
    /// A run ended since the last boundary; the next boundary opens a new group
    run_ended: bool,
    value_lines: usize,
}

impl LinePass {
    fn visit(
        &mut self,
        lines: &[SyntaxNode],
        index: usize,
        descriptors: &mut Vec<FoldDescriptor>,
    ) {
        let line = &lines[index];
        let next_index = (index + 1).min(lines.len() - 1);
        let class = LineClass::of_kind(line.kind());

        if class == LineClass::ValueLine {
            self.value_lines += 1;
        }

        if class.is_boundary() {
            self.start = Some(lines[next_index].clone());
            if self.run_ended {
                self.current = None;
                self.value_lines = 0;
                self.run_ended = false;
            }
            return;
        }

        let is_last = index + 1 == lines.len();
        if !(is_last
            || next_element_is_header_line(line)
            || next_element_is_user_rights_macro(line))
        {
            return;
        }

        if self.value_lines >= MIN_RUN_LINES {
            if let Some(start) = &self.start {
                let groups = &mut self.groups;
                let group = *self.current.get_or_insert_with(|| groups.new_group());
                let range = TextRange::new(start.text_range().start(), line.text_range().end());
                tracing::trace!(
                    "[FOLDING] Run of {} value lines at {:?}",
                    self.value_lines,
                    range
                );
                descriptors.push(FoldDescriptor::for_range(
                    start.clone(),
                    range,
                    group,
                    run_placeholder,
                ));
            }
        }
        self.run_ended = true;
    }
}

/// `;....;....` when the run directly follows a header or macro line.
fn run_placeholder(anchor: &SyntaxNode) -> SmolStr {
    let anchor = SyntaxElement::Node(anchor.clone());
    match prev_non_whitespace_element(&anchor) {
        Some(prev) if classify(&prev).is_boundary() => SmolStr::new_static(RUN_PLACEHOLDER),
        _ => SmolStr::default(),
    }
}

/// Append one descriptor per qualifying run in `lines`.
pub(crate) fn build_line_range_folds(lines: &[SyntaxNode], descriptors: &mut Vec<FoldDescriptor>) {
    let mut pass = LinePass {
        groups: GroupAllocator::new(GroupSpace::Line),
        current: None,
        start: lines.first().cloned(),
        run_ended: false,
        value_lines: 0,
    };
    for index in 0..lines.len() {
        pass.visit(lines, index, descriptors);
    }
}
