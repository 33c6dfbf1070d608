//! The 0/1-skeleton of a cell complex: nodes and undirected edges.
//!
//! Storage is delegated to a petgraph [`UnGraphMap`] whose edge weights are the
//! edge attribute bags. Node attributes live beside the graph. All listing
//! methods return the deterministic basis order: nodes ascending, edges
//! ascending by their canonical `(min, max)` pair.

use hashbrown::HashMap;
use petgraph::graphmap::UnGraphMap;

use crate::complex_error::CellComplexError;
use crate::topology::attributes::{self, Attributes};
use crate::topology::bounds::NodeLike;
use crate::topology::edge::Edge;
use crate::topology::graph_source::GraphSource;

static NO_ATTRIBUTES: Attributes = Attributes::new();

/// Nodes and edges of a complex.
#[derive(Clone, Debug)]
pub struct Skeleton<N: NodeLike> {
    graph: UnGraphMap<N, Attributes>,
    node_attrs: HashMap<N, Attributes>,
}

impl<N: NodeLike> Default for Skeleton<N> {
    fn default() -> Self {
        Self {
            graph: UnGraphMap::new(),
            node_attrs: HashMap::new(),
        }
    }
}

impl<N: NodeLike> Skeleton<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed nodes and edges from an external graph. Self-loops are skipped.
    pub fn from_graph<G: GraphSource<Node = N> + ?Sized>(graph: &G) -> Self {
        let mut skeleton = Self::default();
        for n in graph.source_nodes() {
            skeleton.add_node(n);
        }
        for (a, b) in graph.source_edges() {
            if a == b {
                log::debug!("Skipping self-loop on {a:?} while seeding skeleton");
                continue;
            }
            skeleton.insert_edge(Edge::new(a, b), Attributes::new());
        }
        skeleton
    }

    /// Insert `n`; returns `true` if it was not present.
    pub fn add_node(&mut self, n: N) -> bool {
        if self.graph.contains_node(n) {
            return false;
        }
        self.graph.add_node(n);
        true
    }

    /// Insert the edge `{a, b}` (and its endpoints), merging `attrs` into any
    /// existing edge attributes. Returns `true` if the edge is new.
    pub fn add_edge(&mut self, a: N, b: N, attrs: Attributes) -> Result<bool, CellComplexError> {
        let edge = Edge::new(a, b);
        if edge.is_degenerate() {
            return Err(CellComplexError::DegenerateEdge {
                node: format!("{a:?}"),
            });
        }
        Ok(self.insert_edge(edge, attrs))
    }

    fn insert_edge(&mut self, edge: Edge<N>, attrs: Attributes) -> bool {
        let (lo, hi) = edge.endpoints();
        match self.graph.edge_weight_mut(lo, hi) {
            Some(existing) => {
                attributes::merge(existing, attrs);
                false
            }
            None => {
                self.graph.add_edge(lo, hi, attrs);
                true
            }
        }
    }

    #[inline]
    pub fn contains_node(&self, n: N) -> bool {
        self.graph.contains_node(n)
    }

    #[inline]
    pub fn contains_edge(&self, edge: Edge<N>) -> bool {
        self.graph.contains_edge(edge.lo(), edge.hi())
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self.graph.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Edges in ascending canonical order.
    pub fn edges(&self) -> Vec<Edge<N>> {
        let mut edges: Vec<Edge<N>> = self
            .graph
            .all_edges()
            .map(|(a, b, _)| Edge::new(a, b))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Number of edges at `n`, or `None` if `n` is absent.
    pub fn degree(&self, n: N) -> Option<usize> {
        self.contains_node(n)
            .then(|| self.graph.neighbors(n).count())
    }

    /// Neighbors of `n` in ascending order (empty if `n` is absent).
    pub fn neighbors(&self, n: N) -> Vec<N> {
        let mut out: Vec<N> = self.graph.neighbors(n).collect();
        out.sort_unstable();
        out
    }

    pub fn edge_attributes(&self, edge: Edge<N>) -> Option<&Attributes> {
        self.graph.edge_weight(edge.lo(), edge.hi())
    }

    pub fn edge_attributes_mut(&mut self, edge: Edge<N>) -> Option<&mut Attributes> {
        self.graph.edge_weight_mut(edge.lo(), edge.hi())
    }

    /// Attributes of `n`; an attribute-less node yields an empty bag.
    pub fn node_attributes(&self, n: N) -> Option<&Attributes> {
        if !self.contains_node(n) {
            return None;
        }
        Some(self.node_attrs.get(&n).unwrap_or(&NO_ATTRIBUTES))
    }

    /// Insert `n` if needed and merge `attrs` into its attributes.
    pub fn merge_node_attributes(&mut self, n: N, attrs: Attributes) {
        self.add_node(n);
        if !attrs.is_empty() {
            attributes::merge(self.node_attrs.entry(n).or_default(), attrs);
        }
    }

    /// Remove `n` and every edge incident to it.
    pub fn remove_node(&mut self, n: N) -> bool {
        self.node_attrs.remove(&n);
        self.graph.remove_node(n)
    }

    /// Remove an edge, leaving its endpoints in place.
    pub fn remove_edge(&mut self, edge: Edge<N>) -> Option<Attributes> {
        self.graph.remove_edge(edge.lo(), edge.hi())
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_attrs.clear();
    }
}

impl<N: NodeLike> GraphSource for Skeleton<N> {
    type Node = N;

    fn source_nodes(&self) -> Vec<N> {
        self.nodes()
    }

    fn source_edges(&self) -> Vec<(N, N)> {
        self.edges().into_iter().map(|e| e.endpoints()).collect()
    }
}
