use crate::graph::store::Graph;
use crate::graph::types::{Node, Weight};

/// Trait for providing adjacency to the routing queries
pub trait GraphView {
    /// Outgoing edges from `node`, ordered by destination
    fn outgoing(&self, node: Node) -> Vec<(Node, Weight)>;

    /// Weight of the edge `from -> to`, if recorded
    fn edge_weight(&self, from: Node, to: Node) -> Option<Weight>;
}

impl GraphView for Graph {
    fn outgoing(&self, node: Node) -> Vec<(Node, Weight)> {
        self.neighbors(node)
    }

    fn edge_weight(&self, from: Node, to: Node) -> Option<Weight> {
        self.edge_weight(from, to)
    }
}
