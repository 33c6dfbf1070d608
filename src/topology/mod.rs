//! Top-level module for cell-complex topology.
//!
//! This module provides the combinatorial side of the crate:
//! - node bounds, edges and their canonical orientation
//! - 2-cells with regularity and canonical identity
//! - the 0/1-skeleton and the graph collaborator used to seed it
//! - the [`CellComplex`] aggregate
//!
//! Operators over a complex live in [`crate::algs`].

pub mod attributes;
pub mod bounds;
pub mod cell;
pub mod complex;
pub mod edge;
pub mod graph_source;
pub mod skeleton;

pub use attributes::{AttrValue, Attributes};
pub use cell::{Cell, CellKey};
pub use complex::{CellComplex, CellSpec, CellsView, ComplexOpts};
pub use edge::{Edge, EdgeOrientation};
pub use graph_source::GraphSource;
pub use skeleton::Skeleton;
