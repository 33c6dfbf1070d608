//! Boundary operators (incidence matrices) between consecutive ranks.
//!
//! Basis order, shared by every operator built from the same complex state:
//! - rank 0: nodes ascending,
//! - rank 1: edges ascending by canonical `(min, max)` pair,
//! - rank 2: cells in insertion order.
//!
//! Because both `B1` and `B2` read the same edge order, `B1 · B2 = 0` holds
//! for every complex.
//!
//! Nothing is cached: every call reads the current complex.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::algs::sparse::{self, SparseMatrix};
use crate::complex_error::CellComplexError;
use crate::topology::bounds::NodeLike;
use crate::topology::complex::{CellComplex, MAX_RANK};
use crate::topology::edge::Edge;

/// Incidence matrix `B_rank`.
///
/// - `rank = 0`: the empty `0 × |nodes|` operator (nodes have no faces).
/// - `rank = 1`: `|nodes| × |edges|`; column `(u, v)` holds `-1` at `u` and
///   `+1` at `v` when `signed`, `1` at both otherwise.
/// - `rank = 2`: `|edges| × |cells|`; each boundary traversal contributes
///   `+1` along the canonical edge direction and `-1` against it when `signed`;
///   unsigned entries count traversals. Repeated traversals accumulate.
///
/// Fails with [`CellComplexError::RankOutOfRange`] for `rank > 2`.
pub fn incidence_matrix<N: NodeLike>(
    cx: &CellComplex<N>,
    rank: usize,
    signed: bool,
) -> Result<SparseMatrix, CellComplexError> {
    let b = match rank {
        0 => sparse::zeros(0, cx.skeleton().node_count()),
        1 => node_edge_incidence(&cx.nodes(), &cx.edges(), signed)?,
        2 => edge_cell_incidence(cx, &cx.edges(), signed)?,
        r => {
            return Err(CellComplexError::RankOutOfRange {
                rank: r,
                max: MAX_RANK,
            });
        }
    };
    log::trace!(
        "B{rank} (signed: {signed}) is {}x{} with {} nonzeros",
        b.nrows(),
        b.ncols(),
        b.nnz()
    );
    Ok(b)
}

fn index_of<T: Copy + Eq + std::hash::Hash>(basis: &[T]) -> HashMap<T, usize> {
    basis.iter().enumerate().map(|(i, &x)| (x, i)).collect()
}

fn node_edge_incidence<N: NodeLike>(
    nodes: &[N],
    edges: &[Edge<N>],
    signed: bool,
) -> Result<SparseMatrix, CellComplexError> {
    let node_index = index_of(nodes);
    let (tail, head) = if signed { (-1.0, 1.0) } else { (1.0, 1.0) };
    let mut triplets = Vec::with_capacity(2 * edges.len());
    for (j, edge) in edges.iter().enumerate() {
        let (lo, hi) = edge.endpoints();
        let (Some(&u), Some(&v)) = (node_index.get(&lo), node_index.get(&hi)) else {
            return Err(CellComplexError::InvariantViolation(format!(
                "edge {edge:?} has an endpoint outside the node basis"
            )));
        };
        triplets.push((u, j, tail));
        triplets.push((v, j, head));
    }
    Ok(sparse::from_triplets(nodes.len(), edges.len(), triplets))
}

fn edge_cell_incidence<N: NodeLike>(
    cx: &CellComplex<N>,
    edges: &[Edge<N>],
    signed: bool,
) -> Result<SparseMatrix, CellComplexError> {
    let edge_index = index_of(edges);
    let cells = cx.cells();
    let mut triplets = Vec::new();
    for (j, cell) in cells.iter().enumerate() {
        let mut column: BTreeMap<usize, f64> = BTreeMap::new();
        for (edge, orientation) in cell.edges() {
            if edge.is_degenerate() {
                continue;
            }
            let Some(&i) = edge_index.get(&edge) else {
                return Err(CellComplexError::InvariantViolation(format!(
                    "edge {edge:?} of cell {:?} is not in the edge basis",
                    cell.boundary()
                )));
            };
            let delta = if signed {
                f64::from(orientation.sign())
            } else {
                1.0
            };
            *column.entry(i).or_insert(0.0) += delta;
        }
        triplets.extend(
            column
                .into_iter()
                .filter(|&(_, v)| v != 0.0)
                .map(|(i, v)| (i, j, v)),
        );
    }
    Ok(sparse::from_triplets(edges.len(), cells.len(), triplets))
}

/// Number of basis elements of `rank`.
pub fn basis_len<N: NodeLike>(cx: &CellComplex<N>, rank: usize) -> Result<usize, CellComplexError> {
    let (nodes, edges, cells) = cx.shape();
    match rank {
        0 => Ok(nodes),
        1 => Ok(edges),
        2 => Ok(cells),
        r => Err(CellComplexError::RankOutOfRange {
            rank: r,
            max: MAX_RANK,
        }),
    }
}

impl<N: NodeLike> CellComplex<N> {
    /// See [`incidence_matrix`].
    pub fn incidence_matrix(&self, rank: usize, signed: bool) -> Result<SparseMatrix, CellComplexError> {
        incidence_matrix(self, rank, signed)
    }
}
