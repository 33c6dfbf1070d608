//! Algorithms over a [`CellComplex`](crate::topology::complex::CellComplex).
//!
//! - [`incidence`]: boundary operators `B0`, `B1`, `B2`
//! - [`laplacian`]: adjacency, coadjacency and Laplacians built from them
//! - [`sparse`]: the sparse-matrix type and small helpers

pub mod incidence;
pub mod laplacian;
pub mod sparse;

pub use incidence::incidence_matrix;
pub use laplacian::{
    adjacency_matrix, coadjacency_matrix, down_laplacian_matrix, hodge_laplacian_matrix,
    up_laplacian_matrix,
};
pub use sparse::SparseMatrix;
