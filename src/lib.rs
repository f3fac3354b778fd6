// Copyright 2026 The bitflow authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # bitflow
//!
//! A generic, direction-parameterized iterative dataflow analysis engine.
//!
//! Given a control flow graph of basic blocks and a caller-supplied lattice
//! (a bit-vector domain, a meet operator, a transfer function, and a boundary
//! condition), `bitflow` computes the unique fixpoint of per-block "in" and
//! "out" state vectors that classic static analyses (liveness, reaching
//! definitions, available expressions) are built on.
//!
//! ## Features
//!
//! - **Forward and backward flow** - One solver handles both directions, with
//!   boundary conditions at the entry (forward) or at every exit (backward)
//! - **Worklist scheduling** - Breadth-first seeding from the entry, then
//!   change-driven re-evaluation until convergence
//! - **Compact state** - Word-packed fixed-width bit vectors with in-place
//!   set operations
//! - **Small contract** - A concrete analysis implements four operations and
//!   nothing else
//!
//! ## Quick Start
//!
//! ```rust
//! use bitflow::{
//!     BitVector, BlockId, ControlFlowGraph, DataFlowAnalysis, DataFlowSolver, Direction,
//! };
//!
//! // A forward "may" analysis: each block generates its own bit.
//! struct BlockBits {
//!     top: BitVector,
//! }
//!
//! impl DataFlowAnalysis for BlockBits {
//!     const DIRECTION: Direction = Direction::Forward;
//!
//!     fn top(&self) -> &BitVector {
//!         &self.top
//!     }
//!
//!     fn boundary_condition(&self, state: &mut BitVector) {
//!         state.clear();
//!     }
//!
//!     fn meet(&self, target: &mut BitVector, source: &BitVector) {
//!         target.union_with(source);
//!     }
//!
//!     fn initial_interior_point(&self, _block: BlockId) -> BitVector {
//!         BitVector::new(self.top.len())
//!     }
//!
//!     fn transfer(&self, block: BlockId, input: &BitVector) -> BitVector {
//!         let mut out = input.clone();
//!         out.insert(block.index());
//!         out
//!     }
//! }
//!
//! // entry -> {1, 2} -> 3
//! let mut cfg = ControlFlowGraph::new(4)?;
//! let b: Vec<_> = cfg.blocks().collect();
//! cfg.add_edge(b[0], b[1])?;
//! cfg.add_edge(b[0], b[2])?;
//! cfg.add_edge(b[1], b[3])?;
//! cfg.add_edge(b[2], b[3])?;
//!
//! let analysis = BlockBits {
//!     top: BitVector::new(4),
//! };
//! let results = DataFlowSolver::new(analysis).solve(&cfg);
//!
//! // Every block's bit reaches the join block.
//! let merged = results.in_state(b[3]).unwrap();
//! assert_eq!(merged.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! # Ok::<(), bitflow::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`cfg`] - Block identifiers, successor/predecessor sets, and the
//!   breadth-first traversal that seeds the solver
//! - [`dataflow`] - The [`DataFlowAnalysis`] contract, the worklist solver,
//!   and the result store
//! - [`BitVector`] - The fixed-width state representation
//!
//! ## Caller contract
//!
//! The engine performs no runtime validation of its preconditions: all
//! vectors of one run must share the width of the analysis's top element, and
//! meet/transfer must be monotone over a finite-height lattice. A violated
//! contract ends in a panic on mismatched widths or a solver that never
//! terminates, never in an `Err`. The only fallible surface is graph
//! construction, covered by [`Error`].

pub mod cfg;
pub mod dataflow;

mod bitvector;
mod error;

pub use bitvector::{BitIter, BitVector};
pub use cfg::{BlockId, ControlFlowGraph};
pub use dataflow::{AnalysisResults, DataFlowAnalysis, DataFlowSolver, Direction};
pub use error::{Error, Result};
