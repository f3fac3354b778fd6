//! Analysis contract and result store.
//!
//! This module defines the interface a concrete dataflow analysis implements
//! to run on the solver, plus the [`AnalysisResults`] container the solver
//! returns. Any specific analysis (reaching definitions, liveness, available
//! expressions) supplies four operations (boundary condition, meet, initial
//! interior value, transfer) and the solver handles iteration to a fixpoint.

use crate::{bitvector::BitVector, cfg::BlockId};

/// Direction of a dataflow analysis.
///
/// The direction determines how information propagates through the CFG:
/// which side of each block is computed by folding neighbor state, where the
/// boundary condition applies, and which neighbors are re-enqueued when a
/// block's state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Information flows from entry to exits.
    ///
    /// `in[b]` is the meet over predecessor `out` vectors, `out[b] =
    /// transfer(b, in[b])`, and the boundary condition applies once to the
    /// entry block's `in` before iteration starts.
    ///
    /// Examples: reaching definitions, available expressions.
    Forward,

    /// Information flows from exits to entry.
    ///
    /// `out[b]` is the meet over successor `in` vectors, `in[b] =
    /// transfer(b, out[b])`, and the boundary condition applies to each exit
    /// block's `out` as that block is evaluated.
    ///
    /// Examples: live variables, very busy expressions.
    Backward,
}

/// The capability set a concrete dataflow analysis implements.
///
/// The four operations below are the sole extension surface of the engine.
/// All state is a fixed-width [`BitVector`]; the width of [`top`](Self::top)
/// fixes the width for the whole run, and every vector the analysis produces
/// or mutates must share it.
///
/// # Preconditions
///
/// The solver terminates only if `meet` and `transfer` are monotone over a
/// lattice of finite height (bounded by the vector width). Neither property
/// is checked at run time; violating them makes the solver loop forever or
/// produce meaningless state, which is a caller contract violation rather
/// than a reported error.
///
/// # Example
///
/// ```rust
/// use bitflow::{BitVector, BlockId, DataFlowAnalysis, Direction};
///
/// /// A forward gen/kill analysis with union as its meet.
/// struct GenKill {
///     top: BitVector,
///     gen: Vec<BitVector>,
///     kill: Vec<BitVector>,
/// }
///
/// impl DataFlowAnalysis for GenKill {
///     const DIRECTION: Direction = Direction::Forward;
///
///     fn top(&self) -> &BitVector {
///         &self.top
///     }
///
///     fn boundary_condition(&self, state: &mut BitVector) {
///         state.clear();
///     }
///
///     fn meet(&self, target: &mut BitVector, source: &BitVector) {
///         target.union_with(source);
///     }
///
///     fn initial_interior_point(&self, _block: BlockId) -> BitVector {
///         BitVector::new(self.top.len())
///     }
///
///     fn transfer(&self, block: BlockId, input: &BitVector) -> BitVector {
///         let mut out = input.clone();
///         out.difference_with(&self.kill[block.index()]);
///         out.union_with(&self.gen[block.index()]);
///         out
///     }
/// }
/// ```
pub trait DataFlowAnalysis {
    /// The direction of this analysis.
    const DIRECTION: Direction;

    /// Returns the neutral element of the meet, so `meet(x, top) == x`.
    ///
    /// Its width fixes the vector width for the entire run; the solver clones
    /// it to pre-fill the side of each in/out pair that the fold has not yet
    /// computed.
    fn top(&self) -> &BitVector;

    /// Sets `state` to the fixed value imposed at a flow boundary.
    ///
    /// Forward: applied once to the entry block's `in` before iteration.
    /// Backward: applied to an exit block's `out` each time that block is
    /// evaluated.
    fn boundary_condition(&self, state: &mut BitVector);

    /// Combines `source` into `target` in place.
    ///
    /// Must be associative, commutative, idempotent, and monotone with
    /// respect to the lattice order for the solver to terminate.
    fn meet(&self, target: &mut BitVector, source: &BitVector);

    /// Returns the starting value for the side of a block's in/out pair that
    /// the fold computes.
    ///
    /// Typically a copy of top or the lattice bottom. Must have the width of
    /// [`top`](Self::top).
    fn initial_interior_point(&self, block: BlockId) -> BitVector;

    /// Computes the effect of flowing through `block`.
    ///
    /// `input` is the opposing-side state: `in[block]` for a forward
    /// analysis, `out[block]` for a backward one. Ownership of the returned
    /// vector passes to the solver, which commits it if it differs from the
    /// stored value and discards it otherwise, in either case within the
    /// same scheduler step.
    fn transfer(&self, block: BlockId, input: &BitVector) -> BitVector;
}

/// The final per-block state of a completed analysis run.
///
/// Owns one `in` and one `out` vector per block, indexed by block ordinal.
/// These are the vectors the solver mutated in place during iteration, moved
/// out once the worklist drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResults {
    in_states: Vec<BitVector>,
    out_states: Vec<BitVector>,
}

impl AnalysisResults {
    pub(crate) fn new(in_states: Vec<BitVector>, out_states: Vec<BitVector>) -> Self {
        debug_assert_eq!(in_states.len(), out_states.len());
        Self {
            in_states,
            out_states,
        }
    }

    /// Returns the `in` vector of a block, or `None` if the ordinal is out
    /// of range.
    #[must_use]
    pub fn in_state(&self, block: BlockId) -> Option<&BitVector> {
        self.in_states.get(block.index())
    }

    /// Returns the `out` vector of a block, or `None` if the ordinal is out
    /// of range.
    #[must_use]
    pub fn out_state(&self, block: BlockId) -> Option<&BitVector> {
        self.out_states.get(block.index())
    }

    /// Returns the number of blocks the run covered.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.in_states.len()
    }
}
