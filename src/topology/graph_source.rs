// Graph collaborator abstraction for seeding a complex's 1-skeleton
use petgraph::graph::{Graph, IndexType};
use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::EdgeType;

use crate::topology::bounds::NodeLike;

/// Read-only view of an external graph, consumed once when a
/// [`CellComplex`](crate::topology::complex::CellComplex) is seeded from it.
///
/// Edge direction is ignored. Self-loops are skipped by the consumer.
pub trait GraphSource {
    /// Node identifier type.
    type Node: NodeLike;

    /// All nodes, including isolated ones.
    fn source_nodes(&self) -> Vec<Self::Node>;

    /// All edges as endpoint pairs, in any orientation.
    fn source_edges(&self) -> Vec<(Self::Node, Self::Node)>;
}

impl<N, E, Ty> GraphSource for GraphMap<N, E, Ty>
where
    N: NodeLike + NodeTrait,
    Ty: EdgeType,
{
    type Node = N;

    fn source_nodes(&self) -> Vec<N> {
        self.nodes().collect()
    }

    fn source_edges(&self) -> Vec<(N, N)> {
        self.all_edges().map(|(a, b, _)| (a, b)).collect()
    }
}

/// Node weights of an index-based graph are the node identifiers.
impl<N, E, Ty, Ix> GraphSource for Graph<N, E, Ty, Ix>
where
    N: NodeLike,
    Ty: EdgeType,
    Ix: IndexType,
{
    type Node = N;

    fn source_nodes(&self) -> Vec<N> {
        self.node_weights().copied().collect()
    }

    fn source_edges(&self) -> Vec<(N, N)> {
        self.raw_edges()
            .iter()
            .map(|e| (self[e.source()], self[e.target()]))
            .collect()
    }
}

/// A bare edge list; the node set is the set of endpoints.
impl<N: NodeLike> GraphSource for [(N, N)] {
    type Node = N;

    fn source_nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self.iter().flat_map(|&(a, b)| [a, b]).collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes
    }

    fn source_edges(&self) -> Vec<(N, N)> {
        self.to_vec()
    }
}
