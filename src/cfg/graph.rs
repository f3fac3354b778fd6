//! Control flow graph representation and traversal.
//!
//! This module provides [`ControlFlowGraph`], the adjacency structure the
//! analysis engine consumes: per-block successor and predecessor sets, the
//! distinguished entry block, and the breadth-first traversal that seeds the
//! solver's worklist.

use std::collections::VecDeque;

use crate::{cfg::BlockId, Error, Result};

/// A control flow graph over opaque basic blocks.
///
/// Blocks carry no payload here; they are dense ordinals. Callers lowering a
/// concrete program representation assign one ordinal per basic block,
/// declare the edges, and hand the graph to the solver. Block 0 is the entry;
/// blocks without successors are the exits.
///
/// # Examples
///
/// ```rust
/// use bitflow::ControlFlowGraph;
///
/// // entry -> {1, 2} -> 3
/// let mut cfg = ControlFlowGraph::new(4)?;
/// let b: Vec<_> = cfg.blocks().collect();
/// cfg.add_edge(b[0], b[1])?;
/// cfg.add_edge(b[0], b[2])?;
/// cfg.add_edge(b[1], b[3])?;
/// cfg.add_edge(b[2], b[3])?;
///
/// assert_eq!(cfg.entry(), b[0]);
/// assert_eq!(cfg.successors(b[0]), &[b[1], b[2]]);
/// assert!(cfg.is_exit(b[3]));
/// # Ok::<(), bitflow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ControlFlowGraph {
    /// Successor sets, indexed by block ordinal.
    successors: Vec<Vec<BlockId>>,
    /// Predecessor sets, indexed by block ordinal.
    predecessors: Vec<Vec<BlockId>>,
}

impl ControlFlowGraph {
    /// Creates a graph with `block_count` blocks and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if `block_count` is zero; a graph needs
    /// at least its entry block.
    pub fn new(block_count: usize) -> Result<Self> {
        if block_count == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(Self {
            successors: vec![Vec::new(); block_count],
            predecessors: vec![Vec::new(); block_count],
        })
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Duplicate edges are ignored, so each block appears at most once in a
    /// neighbor set. Self edges are permitted; a block looping to itself is
    /// its own predecessor and successor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockOutOfRange`] if either endpoint does not name a
    /// block of this graph.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a new edge was added, `Ok(false)` if it already existed.
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) -> Result<bool> {
        for endpoint in [from, to] {
            if endpoint.index() >= self.block_count() {
                return Err(Error::BlockOutOfRange(endpoint.index()));
            }
        }
        if self.successors[from.index()].contains(&to) {
            return Ok(false);
        }
        self.successors[from.index()].push(to);
        self.predecessors[to.index()].push(from);
        Ok(true)
    }

    /// Returns the number of blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.successors.len()
    }

    /// Returns an iterator over all blocks, in ordinal order.
    pub fn blocks(&self) -> impl Iterator<Item = BlockId> {
        (0..self.block_count()).map(BlockId::new)
    }

    /// Returns the entry block.
    #[must_use]
    pub const fn entry(&self) -> BlockId {
        BlockId(0)
    }

    /// Returns the successor set of a block.
    ///
    /// # Panics
    ///
    /// Panics if `block` does not belong to this graph.
    #[must_use]
    pub fn successors(&self, block: BlockId) -> &[BlockId] {
        &self.successors[block.index()]
    }

    /// Returns the predecessor set of a block.
    ///
    /// # Panics
    ///
    /// Panics if `block` does not belong to this graph.
    #[must_use]
    pub fn predecessors(&self, block: BlockId) -> &[BlockId] {
        &self.predecessors[block.index()]
    }

    /// Returns `true` if the block has no successors.
    #[must_use]
    pub fn is_exit(&self, block: BlockId) -> bool {
        self.successors[block.index()].is_empty()
    }

    /// Returns an iterator over all exit blocks.
    pub fn exit_blocks(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks().filter(|&b| self.is_exit(b))
    }

    /// Returns the blocks reachable from the entry, in breadth-first order.
    ///
    /// Each reachable block appears exactly once; a visited set keeps cycles
    /// from looping the traversal. This order seeds the solver's worklist;
    /// correctness does not depend on it, only convergence speed does.
    #[must_use]
    pub fn breadth_first_order(&self) -> Vec<BlockId> {
        let mut order = Vec::with_capacity(self.block_count());
        let mut visited = vec![false; self.block_count()];
        let mut queue = VecDeque::new();

        visited[self.entry().index()] = true;
        queue.push_back(self.entry());

        while let Some(block) = queue.pop_front() {
            order.push(block);
            for &succ in self.successors(block) {
                if !visited[succ.index()] {
                    visited[succ.index()] = true;
                    queue.push_back(succ);
                }
            }
        }
        order
    }
}
