//! Common bound aliases used across topology code.
//!
//! The blanket impl means any identifier satisfying the underlying bounds
//! (`u32`, `usize`, `char`, small `Copy` newtypes, ...) is a node.

/// Canonical bound set for node identifiers.
///
/// - `Copy` for cheap pass-by-value and for the map-backed skeleton graph
/// - `Eq + Hash` for index lookups
/// - `Ord` for canonical edge orientation, canonical cell keys, and a
///   deterministic basis order
/// - `Debug` for error messages and invariant checks
pub trait NodeLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> NodeLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
