//! Block identifier for control flow graphs.
//!
//! This module provides the [`BlockId`] type, a strongly-typed identifier for
//! basic blocks within a control flow graph. The newtype wrapper prevents
//! accidental confusion between block ordinals and other integer values.

use std::fmt;

/// A strongly-typed identifier for a basic block.
///
/// `BlockId` wraps a dense `usize` ordinal assigned at graph construction,
/// starting from 0. The ordinal doubles as a stable index into per-block
/// side tables, which is how the engine stores its in/out state vectors.
///
/// Block 0 is always the entry block of its graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    /// Creates a `BlockId` from a raw ordinal.
    ///
    /// Primarily intended for tests; normal usage obtains identifiers from
    /// [`ControlFlowGraph::blocks`](crate::cfg::ControlFlowGraph::blocks).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        BlockId(index)
    }

    /// Returns the raw ordinal, usable as an index into per-block tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({})", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bb{}", self.0)
    }
}
