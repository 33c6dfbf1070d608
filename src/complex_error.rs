//! CellComplexError: Unified error type for cell-complex public APIs
//!
//! Every fallible operation on a [`CellComplex`](crate::topology::complex::CellComplex)
//! returns this error instead of panicking. Node identifiers are rendered with
//! their `Debug` representation so the error type stays free of generics.

use thiserror::Error;

/// Coarse classification of a [`CellComplexError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Malformed input: bad boundary length, missing rank, rejected non-regular cell.
    Validation,
    /// The requested cell or node does not exist.
    Lookup,
    /// A rank outside the supported range `0..=2`.
    Dimension,
    /// Internal bookkeeping is inconsistent (only reported by invariant checks).
    Invariant,
}

/// Unified error type for cell-complex operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellComplexError {
    /// A 2-cell needs at least three boundary nodes.
    #[error("cell boundary must contain at least 3 nodes, got {len}")]
    BoundaryTooShort { len: usize },
    /// A raw node sequence does not match the node count of the requested rank.
    #[error("rank {rank} expects {expected} nodes, got {found}")]
    NodeCountMismatch {
        rank: usize,
        expected: &'static str,
        found: usize,
    },
    /// A raw node sequence was given without a rank.
    #[error("rank must be given when adding a raw node sequence")]
    MissingRank,
    /// A prebuilt cell is always a 2-cell.
    #[error("prebuilt cells have rank 2, but rank {given} was requested")]
    RankConflict { given: usize },
    /// An edge whose endpoints coincide.
    #[error("edge endpoints must be distinct, got `{node}` twice")]
    DegenerateEdge { node: String },
    /// The complex only accepts regular cells.
    #[error("non-regular cell `{boundary}` rejected by a regular complex")]
    NonRegularCell { boundary: String },
    /// No stored cell is equivalent to the given boundary.
    #[error("no cell with boundary `{boundary}` in the complex")]
    CellNotFound { boundary: String },
    /// The node is not part of the complex.
    #[error("node `{node}` not found in the complex")]
    NodeNotFound { node: String },
    /// Operators exist only for ranks `0..=max`.
    #[error("rank {rank} is out of range (maximum rank is {max})")]
    RankOutOfRange { rank: usize, max: usize },
    /// Internal consistency check failed.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl CellComplexError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CellComplexError::BoundaryTooShort { .. }
            | CellComplexError::NodeCountMismatch { .. }
            | CellComplexError::MissingRank
            | CellComplexError::RankConflict { .. }
            | CellComplexError::DegenerateEdge { .. }
            | CellComplexError::NonRegularCell { .. } => ErrorKind::Validation,
            CellComplexError::CellNotFound { .. } | CellComplexError::NodeNotFound { .. } => {
                ErrorKind::Lookup
            }
            CellComplexError::RankOutOfRange { .. } => ErrorKind::Dimension,
            CellComplexError::InvariantViolation(_) => ErrorKind::Invariant,
        }
    }
}
