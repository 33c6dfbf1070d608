//! 2-cells: polygonal faces described by a cyclic boundary of nodes.
//!
//! A [`Cell`] keeps the boundary exactly as given (its orientation feeds the
//! signed incidence matrix) together with a regularity flag and an open
//! attribute bag. Cell identity is orientation- and rotation-free: two cells
//! are the same cell when their boundaries agree up to cyclic rotation and
//! reversal. [`CellKey`] is the canonical representative of that class.

use std::cmp::Ordering;
use std::ops::Index;

use hashbrown::HashSet;
use itertools::Itertools;

use crate::complex_error::CellComplexError;
use crate::topology::attributes::{AttrValue, Attributes};
use crate::topology::bounds::NodeLike;
use crate::topology::edge::{Edge, EdgeOrientation};

/// Minimum number of boundary nodes of a 2-cell.
pub const MIN_BOUNDARY_LEN: usize = 3;

/// Canonical form of a boundary cycle: the lexicographically smallest rotation
/// of the sequence or of its reverse.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CellKey<N>(Vec<N>);

impl<N: NodeLike> CellKey<N> {
    pub fn from_boundary(boundary: &[N]) -> Self {
        CellKey(canonical_boundary(boundary))
    }

    pub fn as_slice(&self) -> &[N] {
        &self.0
    }
}

/// A rank-2 cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<N> {
    boundary: Vec<N>,
    regular: bool,
    attributes: Attributes,
}

impl<N: NodeLike> Cell<N> {
    /// Build a regular cell.
    ///
    /// Fails with [`CellComplexError::BoundaryTooShort`] for fewer than three
    /// nodes and with [`CellComplexError::NonRegularCell`] when the boundary
    /// traverses some edge twice.
    pub fn new(boundary: impl IntoIterator<Item = N>) -> Result<Self, CellComplexError> {
        let cell = Self::non_regular(boundary)?;
        if !cell.regular {
            return Err(CellComplexError::NonRegularCell {
                boundary: format!("{:?}", cell.boundary),
            });
        }
        Ok(cell)
    }

    /// Build a cell that is allowed to be non-regular.
    ///
    /// The regularity flag is still computed from the boundary, so a regular
    /// boundary yields a regular cell.
    pub fn non_regular(boundary: impl IntoIterator<Item = N>) -> Result<Self, CellComplexError> {
        let boundary: Vec<N> = boundary.into_iter().collect();
        if boundary.len() < MIN_BOUNDARY_LEN {
            return Err(CellComplexError::BoundaryTooShort {
                len: boundary.len(),
            });
        }
        let regular = boundary_is_regular(&boundary);
        Ok(Cell {
            boundary,
            regular,
            attributes: Attributes::new(),
        })
    }

    /// Build a cell with the given regularity requirement.
    pub fn with_regularity(
        boundary: impl IntoIterator<Item = N>,
        regular: bool,
    ) -> Result<Self, CellComplexError> {
        if regular {
            Self::new(boundary)
        } else {
            Self::non_regular(boundary)
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attrs: Attributes) -> Self {
        crate::topology::attributes::merge(&mut self.attributes, attrs);
        self
    }

    /// Boundary cycle in the order it was given.
    #[inline]
    pub fn boundary(&self) -> &[N] {
        &self.boundary
    }

    /// Number of boundary positions (counting repeats).
    #[inline]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.regular
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub(crate) fn into_attributes(self) -> Attributes {
        self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Distinct boundary nodes in order of first appearance.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.boundary.iter().copied().unique()
    }

    /// Directed boundary traversals, including the wrap-around pair, as
    /// canonical edges with the orientation of each traversal.
    ///
    /// Degenerate pairs `(u, u)` of non-regular cells are yielded too; callers
    /// that index into the skeleton must skip them.
    pub fn edges(&self) -> impl Iterator<Item = (Edge<N>, EdgeOrientation)> + '_ {
        self.boundary
            .iter()
            .copied()
            .circular_tuple_windows::<(N, N)>()
            .map(|(a, b)| Edge::oriented(a, b))
    }

    /// Distinct non-degenerate edges induced by the boundary.
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge<N>> + '_ {
        self.edges()
            .map(|(e, _)| e)
            .filter(|e| !e.is_degenerate())
            .unique()
    }

    pub fn key(&self) -> CellKey<N> {
        CellKey::from_boundary(&self.boundary)
    }

    /// True when `boundary` describes the same unoriented polygon.
    pub fn is_equivalent(&self, boundary: &[N]) -> bool {
        self.boundary.len() == boundary.len() && self.key() == CellKey::from_boundary(boundary)
    }
}

impl<N: NodeLike> Index<&str> for Cell<N> {
    type Output = AttrValue;

    fn index(&self, key: &str) -> &AttrValue {
        &self.attributes[key]
    }
}

/// True iff no cyclic consecutive pair repeats an edge or collapses onto a
/// single node.
pub fn boundary_is_regular<N: NodeLike>(boundary: &[N]) -> bool {
    if boundary.len() < 2 {
        return false;
    }
    let mut seen = HashSet::with_capacity(boundary.len());
    boundary
        .iter()
        .copied()
        .circular_tuple_windows::<(N, N)>()
        .all(|(a, b)| a != b && seen.insert(Edge::new(a, b)))
}

/// Lexicographically smallest rotation of `boundary` or of its reverse.
pub fn canonical_boundary<N: NodeLike>(boundary: &[N]) -> Vec<N> {
    let k = boundary.len();
    if k == 0 {
        return Vec::new();
    }
    let reversed: Vec<N> = boundary.iter().rev().copied().collect();

    let mut best: (&[N], usize) = (boundary, 0);
    for seq in [boundary, reversed.as_slice()] {
        for shift in 0..k {
            if rotation(seq, shift).cmp(rotation(best.0, best.1)) == Ordering::Less {
                best = (seq, shift);
            }
        }
    }
    rotation(best.0, best.1).collect()
}

fn rotation<N: Copy>(seq: &[N], shift: usize) -> impl Iterator<Item = N> + '_ {
    seq[shift..].iter().chain(&seq[..shift]).copied()
}
