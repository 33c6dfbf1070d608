//! Operators derived from the incidence matrices: adjacency, coadjacency and
//! the up/down/Hodge Laplacians.
//!
//! With `B_r` the signed incidence matrix of rank `r`:
//! - `L_up(r)   = B_{r+1} B_{r+1}ᵗ` (zero at the top rank),
//! - `L_down(r) = B_rᵗ B_r`         (zero at rank 0),
//! - `L_hodge(r) = L_up(r) + L_down(r)`.
//!
//! Every operator is recomputed from the current complex.

use crate::algs::incidence::{basis_len, incidence_matrix};
use crate::algs::sparse::{self, SparseMatrix};
use crate::complex_error::CellComplexError;
use crate::topology::bounds::NodeLike;
use crate::topology::complex::{CellComplex, MAX_RANK};

/// Up-Laplacian of `rank`.
pub fn up_laplacian_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
) -> Result<SparseMatrix, CellComplexError> {
    let n = basis_len(cx, rank)?;
    if rank == MAX_RANK {
        return Ok(sparse::zeros(n, n));
    }
    let b = incidence_matrix(cx, rank + 1, true)?;
    Ok(&b * &b.transpose())
}

/// Down-Laplacian of `rank`.
pub fn down_laplacian_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
) -> Result<SparseMatrix, CellComplexError> {
    let n = basis_len(cx, rank)?;
    if rank == 0 {
        return Ok(sparse::zeros(n, n));
    }
    let b = incidence_matrix(cx, rank, true)?;
    Ok(&b.transpose() * &b)
}

/// Hodge Laplacian of `rank`: up plus down.
pub fn hodge_laplacian_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
) -> Result<SparseMatrix, CellComplexError> {
    let up = up_laplacian_matrix(cx, rank)?;
    let down = down_laplacian_matrix(cx, rank)?;
    let hodge = &up + &down;
    log::trace!("L{rank} hodge is {}x{}", hodge.nrows(), hodge.ncols());
    Ok(hodge)
}

/// Symmetric 0/1 adjacency of rank-`rank` elements: two elements are adjacent
/// iff they bound a common element of rank `rank + 1`. Zero diagonal.
pub fn adjacency_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
) -> Result<SparseMatrix, CellComplexError> {
    let n = basis_len(cx, rank)?;
    if rank == MAX_RANK {
        return Ok(sparse::zeros(n, n));
    }
    let b = incidence_matrix(cx, rank + 1, false)?;
    Ok(sparse::binarize_off_diagonal(&(&b * &b.transpose())))
}

/// Symmetric 0/1 coadjacency of rank-`rank` elements: two elements are
/// coadjacent iff they share a common face of rank `rank - 1`. Zero diagonal.
pub fn coadjacency_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
) -> Result<SparseMatrix, CellComplexError> {
    let n = basis_len(cx, rank)?;
    if rank == 0 {
        return Ok(sparse::zeros(n, n));
    }
    let b = incidence_matrix(cx, rank, false)?;
    Ok(sparse::binarize_off_diagonal(&(&b.transpose() * &b)))
}

impl<N: NodeLike> CellComplex<N> {
    /// See [`up_laplacian_matrix`].
    pub fn up_laplacian_matrix(&self, rank: usize) -> Result<SparseMatrix, CellComplexError> {
        up_laplacian_matrix(self, rank)
    }

    /// See [`down_laplacian_matrix`].
    pub fn down_laplacian_matrix(&self, rank: usize) -> Result<SparseMatrix, CellComplexError> {
        down_laplacian_matrix(self, rank)
    }

    /// See [`hodge_laplacian_matrix`].
    pub fn hodge_laplacian_matrix(&self, rank: usize) -> Result<SparseMatrix, CellComplexError> {
        hodge_laplacian_matrix(self, rank)
    }

    /// See [`adjacency_matrix`].
    pub fn adjacency_matrix(&self, rank: usize) -> Result<SparseMatrix, CellComplexError> {
        adjacency_matrix(self, rank)
    }

    /// See [`coadjacency_matrix`].
    pub fn coadjacency_matrix(&self, rank: usize) -> Result<SparseMatrix, CellComplexError> {
        coadjacency_matrix(self, rank)
    }
}
