//! Worklist-based fixpoint solver.
//!
//! This module provides the iterative engine that drives a
//! [`DataFlowAnalysis`] to its fixpoint over a [`ControlFlowGraph`].
//!
//! # Algorithm
//!
//! 1. Allocate one in/out pair per block: the side the fold computes starts
//!    at the analysis's initial interior point, the other side at a copy of
//!    top (a placeholder, overwritten before it is ever folded).
//! 2. Forward runs apply the boundary condition to the entry's `in` up front;
//!    backward runs apply it to each exit's `out` as the exit is evaluated.
//! 3. Seed the worklist with the breadth-first order from the entry, reversed
//!    for backward runs so blocks nearer the exits come first.
//! 4. Pop a block, recompute its folded side from its neighbors, apply the
//!    transfer function, and compare the candidate against the stored value.
//!    On change, commit the candidate and append the affected neighbors to
//!    the worklist tail; otherwise drop it.
//! 5. When the worklist drains, the stored state is the fixpoint.
//!
//! The worklist admits duplicates. Re-evaluating a block that is already at
//! its fixpoint recomputes the same vectors and commits nothing, so the
//! duplicates cost time but never correctness.
//!
//! # Termination
//!
//! Guaranteed only for monotone meet/transfer over the finite-height
//! bit-vector lattice: each block's state can then change at most once per
//! bit, bounding the number of commits by `blocks * width`. The solver does
//! not detect a non-monotone contract; it simply never terminates.

use std::collections::VecDeque;

use crate::{
    bitvector::BitVector,
    cfg::{BlockId, ControlFlowGraph},
    dataflow::framework::{AnalysisResults, DataFlowAnalysis, Direction},
};

/// Iterative worklist solver for a single analysis run.
///
/// The solver exclusively owns every state vector for the duration of the
/// run: the per-block in/out pairs live in two ordinal-indexed tables, and
/// the transient vector produced by each transfer call is either committed
/// into a table or dropped before the next worklist pop.
///
/// # Usage
///
/// ```rust,ignore
/// use bitflow::{ControlFlowGraph, DataFlowSolver};
///
/// let analysis = MyGenKillAnalysis::new(&cfg);
/// let results = DataFlowSolver::new(analysis).solve(&cfg);
///
/// let live_in = results.in_state(cfg.entry());
/// ```
pub struct DataFlowSolver<A: DataFlowAnalysis> {
    /// The analysis being solved.
    analysis: A,
    /// `in` vector for each block, indexed by ordinal.
    in_states: Vec<BitVector>,
    /// `out` vector for each block, indexed by ordinal.
    out_states: Vec<BitVector>,
    /// Blocks awaiting (re-)evaluation; duplicates permitted.
    worklist: VecDeque<BlockId>,
}

impl<A: DataFlowAnalysis> DataFlowSolver<A> {
    /// Creates a solver for one run of the given analysis.
    #[must_use]
    pub fn new(analysis: A) -> Self {
        Self {
            analysis,
            in_states: Vec::new(),
            out_states: Vec::new(),
            worklist: VecDeque::new(),
        }
    }

    /// Runs the analysis to its fixpoint and returns the final state.
    pub fn solve(mut self, cfg: &ControlFlowGraph) -> AnalysisResults {
        self.initialize(cfg);

        while let Some(block) = self.worklist.pop_front() {
            match A::DIRECTION {
                Direction::Forward => self.step_forward(block, cfg),
                Direction::Backward => self.step_backward(block, cfg),
            }
        }

        AnalysisResults::new(self.in_states, self.out_states)
    }

    /// Allocates the per-block state store and seeds the worklist.
    fn initialize(&mut self, cfg: &ControlFlowGraph) {
        self.in_states.reserve(cfg.block_count());
        self.out_states.reserve(cfg.block_count());
        for block in cfg.blocks() {
            let interior = self.analysis.initial_interior_point(block);
            let placeholder = self.analysis.top().clone();
            match A::DIRECTION {
                Direction::Forward => {
                    self.in_states.push(placeholder);
                    self.out_states.push(interior);
                }
                Direction::Backward => {
                    self.in_states.push(interior);
                    self.out_states.push(placeholder);
                }
            }
        }

        if A::DIRECTION == Direction::Forward {
            self.analysis
                .boundary_condition(&mut self.in_states[cfg.entry().index()]);
        }

        let mut order = cfg.breadth_first_order();
        if A::DIRECTION == Direction::Backward {
            // process nearer-to-exit blocks first
            order.reverse();
        }
        self.worklist.extend(order);
    }

    /// Re-evaluates `block` for a forward run.
    fn step_forward(&mut self, block: BlockId, cfg: &ControlFlowGraph) {
        let preds = cfg.predecessors(block);
        if block != cfg.entry() && !preds.is_empty() {
            // in[b] = meet over out[p]; the entry is exempt so the fold can
            // never overwrite its boundary value, even via a back edge.
            self.in_states[block.index()] = Self::meet_fold(&self.analysis, &self.out_states, preds);
        }

        let candidate = self
            .analysis
            .transfer(block, &self.in_states[block.index()]);
        if candidate != self.out_states[block.index()] {
            self.out_states[block.index()] = candidate;
            self.worklist
                .extend(cfg.successors(block).iter().copied());
        }
    }

    /// Re-evaluates `block` for a backward run.
    fn step_backward(&mut self, block: BlockId, cfg: &ControlFlowGraph) {
        let succs = cfg.successors(block);
        if succs.is_empty() {
            // exit block: the boundary condition is imposed here, each time
            // the block is evaluated
            self.analysis
                .boundary_condition(&mut self.out_states[block.index()]);
        } else {
            // out[b] = meet over in[s]
            self.out_states[block.index()] = Self::meet_fold(&self.analysis, &self.in_states, succs);
        }

        let candidate = self
            .analysis
            .transfer(block, &self.out_states[block.index()]);
        if candidate != self.in_states[block.index()] {
            self.in_states[block.index()] = candidate;
            self.worklist
                .extend(cfg.predecessors(block).iter().copied());
        }
    }

    /// Folds the analysis's meet over the neighbors' stored vectors.
    ///
    /// Seeds the fold with a copy of the first neighbor's vector, then meets
    /// the rest in one at a time. `neighbors` must be non-empty.
    fn meet_fold(analysis: &A, states: &[BitVector], neighbors: &[BlockId]) -> BitVector {
        let mut folded = states[neighbors[0].index()].clone();
        for neighbor in &neighbors[1..] {
            analysis.meet(&mut folded, &states[neighbor.index()]);
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Forward analysis that passes state through unchanged, with a fixed
    /// bit pattern as its boundary.
    struct ForwardIdentity {
        top: BitVector,
    }

    impl ForwardIdentity {
        fn new(width: usize) -> Self {
            Self {
                top: BitVector::new(width),
            }
        }
    }

    impl DataFlowAnalysis for ForwardIdentity {
        const DIRECTION: Direction = Direction::Forward;

        fn top(&self) -> &BitVector {
            &self.top
        }

        fn boundary_condition(&self, state: &mut BitVector) {
            state.clear();
            state.insert(0);
        }

        fn meet(&self, target: &mut BitVector, source: &BitVector) {
            target.union_with(source);
        }

        fn initial_interior_point(&self, _block: BlockId) -> BitVector {
            BitVector::new(self.top.len())
        }

        fn transfer(&self, _block: BlockId, input: &BitVector) -> BitVector {
            input.clone()
        }
    }

    /// Backward counterpart of [`ForwardIdentity`].
    struct BackwardIdentity {
        top: BitVector,
    }

    impl DataFlowAnalysis for BackwardIdentity {
        const DIRECTION: Direction = Direction::Backward;

        fn top(&self) -> &BitVector {
            &self.top
        }

        fn boundary_condition(&self, state: &mut BitVector) {
            state.clear();
            state.insert(1);
        }

        fn meet(&self, target: &mut BitVector, source: &BitVector) {
            target.union_with(source);
        }

        fn initial_interior_point(&self, _block: BlockId) -> BitVector {
            BitVector::new(self.top.len())
        }

        fn transfer(&self, _block: BlockId, input: &BitVector) -> BitVector {
            input.clone()
        }
    }

    #[test]
    fn forward_single_block() {
        let cfg = ControlFlowGraph::new(1).unwrap();
        let results = DataFlowSolver::new(ForwardIdentity::new(4)).solve(&cfg);

        let mut expected = BitVector::new(4);
        expected.insert(0);

        // in[entry] holds the boundary; out[entry] is its transfer image
        assert_eq!(results.in_state(cfg.entry()), Some(&expected));
        assert_eq!(results.out_state(cfg.entry()), Some(&expected));
    }

    #[test]
    fn backward_single_block_boundary_applied_at_evaluation() {
        let cfg = ControlFlowGraph::new(1).unwrap();
        let solver = DataFlowSolver::new(BackwardIdentity {
            top: BitVector::new(4),
        });
        let results = solver.solve(&cfg);

        let mut expected = BitVector::new(4);
        expected.insert(1);

        assert_eq!(results.out_state(cfg.entry()), Some(&expected));
        assert_eq!(results.in_state(cfg.entry()), Some(&expected));
    }

    #[test]
    fn forward_chain_propagates_boundary() {
        // 0 -> 1 -> 2
        let mut cfg = ControlFlowGraph::new(3).unwrap();
        let b: Vec<_> = cfg.blocks().collect();
        cfg.add_edge(b[0], b[1]).unwrap();
        cfg.add_edge(b[1], b[2]).unwrap();

        let results = DataFlowSolver::new(ForwardIdentity::new(4)).solve(&cfg);

        let mut expected = BitVector::new(4);
        expected.insert(0);
        for block in &b {
            assert_eq!(results.in_state(*block), Some(&expected));
            assert_eq!(results.out_state(*block), Some(&expected));
        }
    }

    #[test]
    fn entry_back_edge_keeps_boundary() {
        // 0 -> 1 -> 0: the entry has a predecessor, but its `in` must stay
        // at the boundary value.
        let mut cfg = ControlFlowGraph::new(2).unwrap();
        let b: Vec<_> = cfg.blocks().collect();
        cfg.add_edge(b[0], b[1]).unwrap();
        cfg.add_edge(b[1], b[0]).unwrap();

        let results = DataFlowSolver::new(ForwardIdentity::new(4)).solve(&cfg);

        let mut expected = BitVector::new(4);
        expected.insert(0);
        assert_eq!(results.in_state(b[0]), Some(&expected));
    }
}
