//! The two-dimensional cell complex.
//!
//! [`CellComplex`] owns a [`Skeleton`] (nodes and edges) and an
//! insertion-ordered collection of 2-cells keyed by their canonical boundary
//! ([`CellKey`]). Adding a cell implies its nodes and boundary edges; removing a
//! cell leaves them in place.
//!
//! # Cell identity
//! Boundaries that agree up to cyclic rotation and reversal name the same
//! cell. Re-adding an equivalent boundary merges attributes into the stored
//! cell and keeps the orientation it was first inserted with.
//!
//! # Basis order
//! Operators index nodes and edges in ascending order and cells in insertion
//! order; see [`crate::algs::incidence`].

use std::ops::Index;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::complex_error::CellComplexError;
use crate::debug_invariants::DebugInvariants;
use crate::topology::attributes::{self, AttrValue, Attributes};
use crate::topology::bounds::NodeLike;
use crate::topology::cell::{Cell, CellKey, MIN_BOUNDARY_LEN, boundary_is_regular};
use crate::topology::edge::Edge;
use crate::topology::graph_source::GraphSource;
use crate::topology::skeleton::Skeleton;

/// Highest rank a complex can hold.
pub const MAX_RANK: usize = 2;

/// Construction options for a [`CellComplex`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComplexOpts {
    /// Reject non-regular cells on insertion (default `true`).
    pub regular: bool,
}

impl Default for ComplexOpts {
    fn default() -> Self {
        Self { regular: true }
    }
}

/// Argument of [`CellComplex::add_cell`] and friends: a prebuilt [`Cell`] or a
/// raw node sequence whose rank is given separately.
#[derive(Clone, Debug, PartialEq)]
pub enum CellSpec<N> {
    Cell(Cell<N>),
    Nodes(Vec<N>),
}

impl<N: NodeLike> CellSpec<N> {
    fn nodes(&self) -> &[N] {
        match self {
            CellSpec::Cell(c) => c.boundary(),
            CellSpec::Nodes(nodes) => nodes,
        }
    }
}

impl<N: NodeLike> From<Cell<N>> for CellSpec<N> {
    fn from(c: Cell<N>) -> Self {
        CellSpec::Cell(c)
    }
}

impl<N: NodeLike> From<&Cell<N>> for CellSpec<N> {
    fn from(c: &Cell<N>) -> Self {
        CellSpec::Cell(c.clone())
    }
}

impl<N: NodeLike> From<Vec<N>> for CellSpec<N> {
    fn from(nodes: Vec<N>) -> Self {
        CellSpec::Nodes(nodes)
    }
}

impl<N: NodeLike> From<&[N]> for CellSpec<N> {
    fn from(nodes: &[N]) -> Self {
        CellSpec::Nodes(nodes.to_vec())
    }
}

impl<N: NodeLike, const K: usize> From<[N; K]> for CellSpec<N> {
    fn from(nodes: [N; K]) -> Self {
        CellSpec::Nodes(nodes.to_vec())
    }
}

/// A cell complex of rank at most two.
#[derive(Clone, Debug)]
pub struct CellComplex<N: NodeLike> {
    skeleton: Skeleton<N>,
    cells: IndexMap<CellKey<N>, Cell<N>>,
    opts: ComplexOpts,
}

impl<N: NodeLike> Default for CellComplex<N> {
    fn default() -> Self {
        Self::with_opts(ComplexOpts::default())
    }
}

impl<N: NodeLike> CellComplex<N> {
    /// Empty complex that only accepts regular cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty complex that also accepts non-regular cells.
    pub fn non_regular() -> Self {
        Self::with_opts(ComplexOpts { regular: false })
    }

    pub fn with_opts(opts: ComplexOpts) -> Self {
        Self {
            skeleton: Skeleton::new(),
            cells: IndexMap::new(),
            opts,
        }
    }

    /// Build a complex from prebuilt cells, failing on the first rejected one.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell<N>>,
        opts: ComplexOpts,
    ) -> Result<Self, CellComplexError> {
        let mut cx = Self::with_opts(opts);
        for cell in cells {
            cx.insert_cell(cell)?;
        }
        Ok(cx)
    }

    /// Seed the 1-skeleton from an external graph; the result has no 2-cells.
    pub fn from_graph<G: GraphSource<Node = N> + ?Sized>(graph: &G, opts: ComplexOpts) -> Self {
        let skeleton = Skeleton::from_graph(graph);
        log::debug!(
            "Seeded complex from graph: {} nodes, {} edges",
            skeleton.node_count(),
            skeleton.edge_count()
        );
        Self {
            skeleton,
            cells: IndexMap::new(),
            opts,
        }
    }

    #[inline]
    pub fn opts(&self) -> ComplexOpts {
        self.opts
    }

    // ---------- mutation ----------

    /// Add a node (rank 0), an edge (rank 1) or a 2-cell.
    ///
    /// A raw node sequence needs an explicit `rank`: one node for rank 0, two
    /// distinct nodes for rank 1, at least three for rank 2. A prebuilt
    /// [`Cell`] is always rank 2; passing any other rank is an error.
    /// `attrs` are merged into the attributes of the (possibly pre-existing)
    /// element.
    pub fn add_cell(
        &mut self,
        cell: impl Into<CellSpec<N>>,
        rank: Option<usize>,
        attrs: Attributes,
    ) -> Result<(), CellComplexError> {
        let spec: CellSpec<N> = cell.into();
        match (spec, rank) {
            (_, Some(r)) if r > MAX_RANK => Err(CellComplexError::RankOutOfRange {
                rank: r,
                max: MAX_RANK,
            }),
            (CellSpec::Cell(c), None | Some(2)) => self.insert_cell(c.with_attributes(attrs)),
            (CellSpec::Cell(_), Some(r)) => Err(CellComplexError::RankConflict { given: r }),
            (CellSpec::Nodes(_), None) => Err(CellComplexError::MissingRank),
            (CellSpec::Nodes(nodes), Some(0)) => match nodes.as_slice() {
                &[n] => {
                    self.skeleton.merge_node_attributes(n, attrs);
                    Ok(())
                }
                _ => Err(CellComplexError::NodeCountMismatch {
                    rank: 0,
                    expected: "exactly 1",
                    found: nodes.len(),
                }),
            },
            (CellSpec::Nodes(nodes), Some(1)) => match nodes.as_slice() {
                &[a, b] => {
                    self.skeleton.add_edge(a, b, attrs)?;
                    Ok(())
                }
                _ => Err(CellComplexError::NodeCountMismatch {
                    rank: 1,
                    expected: "exactly 2",
                    found: nodes.len(),
                }),
            },
            (CellSpec::Nodes(nodes), Some(_)) => {
                if nodes.len() < MIN_BOUNDARY_LEN {
                    return Err(CellComplexError::NodeCountMismatch {
                        rank: 2,
                        expected: "at least 3",
                        found: nodes.len(),
                    });
                }
                let cell = Cell::non_regular(nodes)?.with_attributes(attrs);
                self.insert_cell(cell)
            }
        }
    }

    /// Add every element of `cells` in order.
    ///
    /// Prebuilt [`Cell`]s carry their own rank; raw node sequences use `rank`.
    /// The batch is not transactional: a rejected element is logged and
    /// skipped, earlier and later elements are still inserted, and the first
    /// error is returned once the whole batch has been processed.
    pub fn add_cells_from<S>(
        &mut self,
        cells: impl IntoIterator<Item = S>,
        rank: Option<usize>,
        attrs: Attributes,
    ) -> Result<(), CellComplexError>
    where
        S: Into<CellSpec<N>>,
    {
        let mut first_err = None;
        for (i, spec) in cells.into_iter().enumerate() {
            let spec: CellSpec<N> = spec.into();
            let rank = match spec {
                CellSpec::Cell(_) => None,
                CellSpec::Nodes(_) => rank,
            };
            if let Err(e) = self.add_cell(spec, rank, attrs.clone()) {
                log::warn!("add_cells_from: skipping element {i}: {e}");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn insert_cell(&mut self, cell: Cell<N>) -> Result<(), CellComplexError> {
        if self.opts.regular && !cell.is_regular() {
            return Err(CellComplexError::NonRegularCell {
                boundary: format!("{:?}", cell.boundary()),
            });
        }
        for n in cell.nodes() {
            self.skeleton.add_node(n);
        }
        for e in cell.boundary_edges() {
            self.skeleton.add_edge(e.lo(), e.hi(), Attributes::new())?;
        }
        match self.cells.entry(cell.key()) {
            Entry::Occupied(mut slot) => {
                log::debug!("Merging attributes into cell {:?}", slot.get().boundary());
                attributes::merge(slot.get_mut().attributes_mut(), cell.into_attributes());
            }
            Entry::Vacant(slot) => {
                log::debug!(
                    "Inserted cell {:?} (regular: {})",
                    cell.boundary(),
                    cell.is_regular()
                );
                slot.insert(cell);
            }
        }
        crate::debug_invariants!(self.validate_invariants(), "CellComplex::add_cell");
        Ok(())
    }

    /// Add a node without attributes.
    pub fn add_node(&mut self, n: N) -> bool {
        self.skeleton.add_node(n)
    }

    /// Add the edge `{a, b}` without attributes.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<bool, CellComplexError> {
        self.skeleton.add_edge(a, b, Attributes::new())
    }

    /// Remove the stored cell equivalent to `cell`, returning it.
    ///
    /// Its nodes and edges stay in the skeleton.
    pub fn remove_cell(&mut self, cell: impl Into<CellSpec<N>>) -> Result<Cell<N>, CellComplexError> {
        let spec: CellSpec<N> = cell.into();
        let key = CellKey::from_boundary(spec.nodes());
        match self.cells.shift_remove(&key) {
            Some(removed) => {
                log::debug!("Removed cell {:?}", removed.boundary());
                crate::debug_invariants!(self.validate_invariants(), "CellComplex::remove_cell");
                Ok(removed)
            }
            None => Err(CellComplexError::CellNotFound {
                boundary: format!("{:?}", spec.nodes()),
            }),
        }
    }

    /// Remove several cells; not transactional, see [`Self::add_cells_from`].
    pub fn remove_cells<S>(&mut self, cells: impl IntoIterator<Item = S>) -> Result<(), CellComplexError>
    where
        S: Into<CellSpec<N>>,
    {
        let mut first_err = None;
        for spec in cells {
            if let Err(e) = self.remove_cell(spec) {
                log::warn!("remove_cells: {e}");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Remove `n`, its incident edges, and every cell whose boundary visits it.
    pub fn remove_node(&mut self, n: N) -> Result<(), CellComplexError> {
        if !self.skeleton.contains_node(n) {
            return Err(CellComplexError::NodeNotFound {
                node: format!("{n:?}"),
            });
        }
        let before = self.cells.len();
        self.cells.retain(|_, c| !c.boundary().contains(&n));
        self.skeleton.remove_node(n);
        log::debug!(
            "Removed node {n:?} and {} incident cell(s)",
            before - self.cells.len()
        );
        crate::debug_invariants!(self.validate_invariants(), "CellComplex::remove_node");
        Ok(())
    }

    /// Reset to the empty complex; the options are kept.
    pub fn clear(&mut self) {
        self.skeleton.clear();
        self.cells.clear();
        log::debug!("Cleared complex");
    }

    // ---------- views ----------

    /// 2 if any 2-cell exists, else 1 if any edge exists, else 0.
    pub fn dim(&self) -> usize {
        if !self.cells.is_empty() {
            2
        } else if self.skeleton.edge_count() > 0 {
            1
        } else {
            0
        }
    }

    /// True iff every stored cell is regular (vacuously true without cells).
    pub fn is_regular(&self) -> bool {
        self.cells.values().all(Cell::is_regular)
    }

    /// Nodes in basis (ascending) order.
    pub fn nodes(&self) -> Vec<N> {
        self.skeleton.nodes()
    }

    /// Edges in basis (ascending canonical) order.
    pub fn edges(&self) -> Vec<Edge<N>> {
        self.skeleton.edges()
    }

    /// 2-cells in basis (insertion) order.
    pub fn cells(&self) -> CellsView<'_, N> {
        CellsView { cells: &self.cells }
    }

    #[inline]
    pub fn skeleton(&self) -> &Skeleton<N> {
        &self.skeleton
    }

    #[inline]
    pub fn contains_node(&self, n: N) -> bool {
        self.skeleton.contains_node(n)
    }

    #[inline]
    pub fn contains_edge(&self, a: N, b: N) -> bool {
        self.skeleton.contains_edge(Edge::new(a, b))
    }

    /// `(nodes, edges, cells)` counts.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.skeleton.node_count(),
            self.skeleton.edge_count(),
            self.cells.len(),
        )
    }

    /// V − E + F.
    pub fn euler_characteristic(&self) -> i64 {
        let (v, e, f) = self.shape();
        v as i64 - e as i64 + f as i64
    }

    pub fn degree(&self, n: N) -> Option<usize> {
        self.skeleton.degree(n)
    }

    pub fn neighbors(&self, n: N) -> Vec<N> {
        self.skeleton.neighbors(n)
    }

    /// Would `add_cell(boundary, Some(2), ..)` accept this boundary?
    pub fn is_insertable_cycle(&self, boundary: &[N]) -> bool {
        boundary.len() >= MIN_BOUNDARY_LEN && (!self.opts.regular || boundary_is_regular(boundary))
    }

    // ---------- attributes ----------

    pub fn cell_attributes_mut(&mut self, boundary: &[N]) -> Option<&mut Attributes> {
        self.cells
            .get_mut(&CellKey::from_boundary(boundary))
            .map(Cell::attributes_mut)
    }

    /// Set attribute `name` on several cells.
    ///
    /// Unknown boundaries are skipped and the first one is reported after
    /// all known cells have been updated.
    pub fn set_cell_attribute<B, V>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (B, V)>,
    ) -> Result<(), CellComplexError>
    where
        B: AsRef<[N]>,
        V: Into<AttrValue>,
    {
        let mut first_err = None;
        for (boundary, value) in values {
            let boundary = boundary.as_ref();
            match self.cell_attributes_mut(boundary) {
                Some(attrs) => {
                    attrs.insert(name.to_owned(), value.into());
                }
                None => {
                    first_err.get_or_insert(CellComplexError::CellNotFound {
                        boundary: format!("{boundary:?}"),
                    });
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Cells carrying attribute `name`, in basis order, with its value.
    pub fn cell_attribute(&self, name: &str) -> Vec<(&Cell<N>, &AttrValue)> {
        self.cells
            .values()
            .filter_map(|c| c.get(name).map(|v| (c, v)))
            .collect()
    }

    pub fn edge_attributes(&self, a: N, b: N) -> Option<&Attributes> {
        self.skeleton.edge_attributes(Edge::new(a, b))
    }

    pub fn edge_attributes_mut(&mut self, a: N, b: N) -> Option<&mut Attributes> {
        self.skeleton.edge_attributes_mut(Edge::new(a, b))
    }

    pub fn node_attributes(&self, n: N) -> Option<&Attributes> {
        self.skeleton.node_attributes(n)
    }
}

impl<N: NodeLike> DebugInvariants for CellComplex<N> {
    fn validate_invariants(&self) -> Result<(), CellComplexError> {
        for (key, cell) in &self.cells {
            if *key != cell.key() {
                return Err(CellComplexError::InvariantViolation(format!(
                    "cell {:?} stored under key {:?}",
                    cell.boundary(),
                    key.as_slice()
                )));
            }
            if self.opts.regular && !cell.is_regular() {
                return Err(CellComplexError::InvariantViolation(format!(
                    "non-regular cell {:?} in a regular complex",
                    cell.boundary()
                )));
            }
            if let Some(n) = cell.nodes().find(|&n| !self.skeleton.contains_node(n)) {
                return Err(CellComplexError::InvariantViolation(format!(
                    "node {n:?} of cell {:?} missing from skeleton",
                    cell.boundary()
                )));
            }
            if let Some(e) = cell.boundary_edges().find(|&e| !self.skeleton.contains_edge(e)) {
                return Err(CellComplexError::InvariantViolation(format!(
                    "edge {e:?} of cell {:?} missing from skeleton",
                    cell.boundary()
                )));
            }
        }
        Ok(())
    }
}

/// Read-only view of the 2-cells of a complex, in insertion order.
#[derive(Clone, Copy, Debug)]
pub struct CellsView<'a, N: NodeLike> {
    cells: &'a IndexMap<CellKey<N>, Cell<N>>,
}

impl<'a, N: NodeLike> CellsView<'a, N> {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is a cell equivalent to `boundary` stored?
    pub fn contains(&self, boundary: &[N]) -> bool {
        self.cells.contains_key(&CellKey::from_boundary(boundary))
    }

    /// Stored cell equivalent to `boundary`.
    pub fn get(&self, boundary: &[N]) -> Option<&'a Cell<N>> {
        self.cells.get(&CellKey::from_boundary(boundary))
    }

    /// Column index of the cell in rank-2 operators.
    pub fn position(&self, boundary: &[N]) -> Option<usize> {
        self.cells.get_index_of(&CellKey::from_boundary(boundary))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cell<N>> + use<'a, N> {
        self.cells.values()
    }
}

impl<N: NodeLike> Index<&[N]> for CellsView<'_, N> {
    type Output = Cell<N>;

    fn index(&self, boundary: &[N]) -> &Cell<N> {
        match self.get(boundary) {
            Some(cell) => cell,
            None => panic!("no cell with boundary {boundary:?}"),
        }
    }
}
