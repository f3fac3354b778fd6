//! Generic iterative dataflow analysis.
//!
//! This module provides a direction-parameterized framework for computing
//! properties that propagate along control flow edges, using a worklist-based
//! fixpoint solver over fixed-width bit vectors.
//!
//! # Architecture
//!
//! The framework is built around three abstractions:
//!
//! - **State**: every propagated value is a [`BitVector`](crate::BitVector)
//!   of one per-run width
//! - **Contract**: a concrete analysis implements [`DataFlowAnalysis`]:
//!   boundary condition, meet, initial interior value, transfer
//! - **Solver**: [`DataFlowSolver`] iterates blocks from a worklist until no
//!   block's state changes, then hands back [`AnalysisResults`]
//!
//! Classic clients are liveness (backward, meet = union), reaching
//! definitions (forward, meet = union), and available expressions (forward,
//! meet = intersection). None of them ship with the crate; each is a few
//! dozen lines against [`DataFlowAnalysis`].

mod framework;
mod solver;

pub use framework::{AnalysisResults, DataFlowAnalysis, Direction};
pub use solver::DataFlowSolver;
