//! Control flow graphs consumed by the analysis engine.
//!
//! The engine is agnostic to what a basic block contains; it only needs the
//! shape of the graph. This module provides that shape:
//!
//! - [`BlockId`] - A dense, strongly-typed per-block ordinal
//! - [`ControlFlowGraph`] - Successor/predecessor sets, entry block, and the
//!   breadth-first traversal used to seed the solver's worklist
//!
//! Callers lowering a concrete program representation build one
//! [`ControlFlowGraph`] per function and keep their own mapping from
//! [`BlockId`] to whatever their blocks actually are.

mod block;
mod graph;

pub use block::BlockId;
pub use graph::ControlFlowGraph;
