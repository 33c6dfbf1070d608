#![cfg_attr(docsrs, feature(doc_cfg))]
//! # cell-complex
//!
//! cell-complex models two-dimensional cell complexes: nodes, edges and
//! polygonal 2-cells bounded by cycles of nodes. It supports incremental
//! construction and removal, regularity checks, and the operators used for
//! signal processing and learning on topological domains: signed and unsigned
//! incidence matrices, adjacency and coadjacency, and up/down/Hodge Laplacians.
//!
//! ## Features
//! - [`CellComplex`](topology::complex::CellComplex) with a regular and a
//!   non-regular insertion policy
//! - Cell identity up to rotation and reversal of the boundary cycle
//! - Open attribute bags on nodes, edges and cells
//! - Seeding from petgraph graphs via [`GraphSource`](topology::graph_source::GraphSource)
//! - Sparse operators as `nalgebra_sparse::CsrMatrix<f64>`
//!
//! ## Determinism
//!
//! Operator bases are ordered deterministically: nodes ascending, edges
//! ascending by canonical `(min, max)` pair, cells in insertion order. The same
//! complex state therefore always yields the same matrices, and `B1 · B2 = 0`.
//!
//! ## Usage
//! ```rust
//! use cell_complex::prelude::*;
//! use cell_complex::attrs;
//!
//! let mut cx = CellComplex::new();
//! cx.add_cell([1, 2, 3], Some(2), attrs! { "color" => "red" }).unwrap();
//! cx.add_cell([2, 3, 4], Some(2), attrs! {}).unwrap();
//! assert_eq!(cx.shape(), (4, 5, 2));
//!
//! let b1 = cx.incidence_matrix(1, true).unwrap();
//! let b2 = cx.incidence_matrix(2, true).unwrap();
//! assert!((&b1 * &b2).values().iter().all(|v| *v == 0.0));
//! ```
//!
//! ## Invariant checks
//! Debug builds re-validate the complex after every mutation. Enable the
//! `strict-invariants` or `check-invariants` feature to keep the checks in
//! release builds.

pub mod algs;
pub mod complex_error;
pub mod debug_invariants;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::sparse::SparseMatrix;
    pub use crate::complex_error::{CellComplexError, ErrorKind};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::attributes::{AttrValue, Attributes};
    pub use crate::topology::bounds::NodeLike;
    pub use crate::topology::cell::{Cell, CellKey};
    pub use crate::topology::complex::{CellComplex, CellSpec, CellsView, ComplexOpts};
    pub use crate::topology::edge::{Edge, EdgeOrientation};
    pub use crate::topology::graph_source::GraphSource;
    pub use crate::topology::skeleton::Skeleton;
}
