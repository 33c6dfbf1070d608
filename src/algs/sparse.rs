//! Sparse-matrix helpers shared by the operator builders.
//!
//! Operators are returned as [`SparseMatrix`] (`nalgebra_sparse::CsrMatrix<f64>`),
//! which already provides shape queries, `transpose()`, `&a * &b` and `&a + &b`.
//! The helpers here cover construction and the few element-wise passes the
//! builders need.

use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Sparse operator type produced by this crate.
pub type SparseMatrix = CsrMatrix<f64>;

/// All-zero `nrows × ncols` operator.
#[inline]
pub fn zeros(nrows: usize, ncols: usize) -> SparseMatrix {
    CsrMatrix::zeros(nrows, ncols)
}

/// Assemble from `(row, col, value)` triplets; duplicate positions are summed.
pub fn from_triplets(
    nrows: usize,
    ncols: usize,
    triplets: impl IntoIterator<Item = (usize, usize, f64)>,
) -> SparseMatrix {
    let mut coo = CooMatrix::new(nrows, ncols);
    for (i, j, v) in triplets {
        coo.push(i, j, v);
    }
    CsrMatrix::from(&coo)
}

/// Dense copy, for small operators and tests.
pub fn to_dense(m: &SparseMatrix) -> DMatrix<f64> {
    DMatrix::from(m)
}

/// 0/1 pattern of the nonzero off-diagonal entries of `m`.
pub fn binarize_off_diagonal(m: &SparseMatrix) -> SparseMatrix {
    from_triplets(
        m.nrows(),
        m.ncols(),
        m.triplet_iter()
            .filter(|&(i, j, v)| i != j && *v != 0.0)
            .map(|(i, j, _)| (i, j, 1.0)),
    )
}

/// True when every stored entry is zero.
pub fn is_zero(m: &SparseMatrix) -> bool {
    m.values().iter().all(|v| *v == 0.0)
}
