//! Fold groups: regions sharing a group expand and collapse together.

/// Which pass a group was allocated by.
///
/// Each pass draws from its own space, so a single-node group can never
/// be equal to a line-range group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupSpace {
    Node,
    Line,
}

impl GroupSpace {
    pub fn name(self) -> &'static str {
        match self {
            Self::Node => "impex",
            Self::Line => "impex_fold_line",
        }
    }
}

/// Opaque synchronization token for fold regions.
///
/// Identity is only meaningful within one folding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldGroup {
    space: GroupSpace,
    id: u32,
}

impl FoldGroup {
    pub fn space(&self) -> GroupSpace {
        self.space
    }

    /// Allocation order within the group's space, starting at 0.
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Hands out fresh groups of one space.
#[derive(Debug)]
pub(crate) struct GroupAllocator {
    space: GroupSpace,
    next: u32,
}

impl GroupAllocator {
    pub(crate) fn new(space: GroupSpace) -> Self {
        Self { space, next: 0 }
    }

    pub(crate) fn new_group(&mut self) -> FoldGroup {
        let group = FoldGroup {
            space: self.space,
            id: self.next,
        };
        self.next += 1;
        tracing::trace!("[FOLDING] New {} group #{}", self.space.name(), group.id);
        group
    }
}
