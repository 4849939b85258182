//! Single-node pass: one region per foldable element.
//!
//! Elements on the same line share a group, so all modifier blocks of a
//! header expand together. A line break closes the group.

use crate::parser::{NodeOrToken, SyntaxElement};

use super::descriptor::FoldDescriptor;
use super::group::{FoldGroup, GroupAllocator, GroupSpace};
use crate::ide::classify::{LineClass, classify};

struct NodePass {
    groups: GroupAllocator,
    /// Group of the current line; `None` until a descriptor needs one, so
    /// runs of blank lines never allocate.
    current: Option<FoldGroup>,
}

impl NodePass {
    fn visit(&mut self, element: &SyntaxElement, descriptors: &mut Vec<FoldDescriptor>) {
        if classify(element) == LineClass::LineBreak {
            self.current = None;
            return;
        }

        // Tokens other than line breaks are never foldable on their own
        let NodeOrToken::Node(node) = element else {
            return;
        };

        let groups = &mut self.groups;
        let group = *self.current.get_or_insert_with(|| groups.new_group());
        descriptors.push(FoldDescriptor::for_node(node.clone(), group));
    }
}

/// Append a descriptor for every non-break element of `elements`.
pub(crate) fn build_single_node_folds(
    elements: &[SyntaxElement],
    descriptors: &mut Vec<FoldDescriptor>,
) {
    let mut pass = NodePass {
        groups: GroupAllocator::new(GroupSpace::Node),
        current: None,
    };
    for element in elements {
        pass.visit(element, descriptors);
    }
}
