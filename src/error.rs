use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The analysis engine itself raises no errors: a run either completes with a valid fixpoint or
/// diverges because a caller violated the monotonicity precondition. All fallible operations
/// belong to control flow graph construction, and this enum covers those failure modes.
#[derive(Error, Debug)]
pub enum Error {
    /// A control flow graph was requested with no blocks.
    ///
    /// Every graph must contain at least one block, since the entry block is
    /// defined to be block 0 and the engine applies its boundary condition there.
    #[error("Control flow graph must contain at least one block")]
    EmptyGraph,

    /// An edge endpoint referenced a block outside the graph.
    ///
    /// Block identifiers are dense ordinals assigned at graph construction;
    /// any identifier at or above the block count is invalid.
    #[error("Block {0} is out of range for this graph")]
    BlockOutOfRange(usize),
}

/// Convenience `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
