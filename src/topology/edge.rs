//! Undirected edges with a canonical orientation.
//!
//! An [`Edge`] stores its endpoints sorted, so `(u, v)` and `(v, u)` are the
//! same edge. The sorted order doubles as the reference orientation used by
//! the signed incidence matrices: traversing `lo → hi` is
//! [`EdgeOrientation::Forward`].

use std::fmt;

use crate::topology::bounds::NodeLike;

/// Relative orientation of a traversal with respect to the canonical edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EdgeOrientation {
    /// Traversal from the smaller to the larger endpoint.
    Forward,
    /// Traversal from the larger to the smaller endpoint.
    Reverse,
}

impl EdgeOrientation {
    /// `+1` for forward traversals, `-1` for reverse ones.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            EdgeOrientation::Forward => 1,
            EdgeOrientation::Reverse => -1,
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            EdgeOrientation::Forward => EdgeOrientation::Reverse,
            EdgeOrientation::Reverse => EdgeOrientation::Forward,
        }
    }
}

/// An undirected edge in canonical `(min, max)` form.
///
/// `Ord` compares `(lo, hi)` lexicographically, which is the edge basis order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Edge<N> {
    lo: N,
    hi: N,
}

impl<N: NodeLike> Edge<N> {
    /// Canonicalize the pair `{a, b}`.
    #[inline]
    pub fn new(a: N, b: N) -> Self {
        if a <= b {
            Edge { lo: a, hi: b }
        } else {
            Edge { lo: b, hi: a }
        }
    }

    /// Canonicalize the directed pair `a → b` and report its orientation.
    #[inline]
    pub fn oriented(a: N, b: N) -> (Self, EdgeOrientation) {
        let orientation = if a <= b {
            EdgeOrientation::Forward
        } else {
            EdgeOrientation::Reverse
        };
        (Edge::new(a, b), orientation)
    }

    /// Smaller endpoint.
    #[inline]
    pub fn lo(&self) -> N {
        self.lo
    }

    /// Larger endpoint.
    #[inline]
    pub fn hi(&self) -> N {
        self.hi
    }

    #[inline]
    pub fn endpoints(&self) -> (N, N) {
        (self.lo, self.hi)
    }

    /// True for a self-loop `(u, u)`. Such pairs never enter a skeleton.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn contains(&self, n: N) -> bool {
        self.lo == n || self.hi == n
    }
}

impl<N: NodeLike> From<(N, N)> for Edge<N> {
    fn from((a, b): (N, N)) -> Self {
        Edge::new(a, b)
    }
}

impl<N: NodeLike> PartialEq<(N, N)> for Edge<N> {
    fn eq(&self, other: &(N, N)) -> bool {
        *self == Edge::new(other.0, other.1)
    }
}

impl<N: fmt::Debug> fmt::Debug for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Edge").field(&self.lo).field(&self.hi).finish()
    }
}
