use serde::Serialize;

/// Node label in the network. Labels form a small caller-defined alphabet
/// of single characters.
pub type Node = char;

/// Edge weight. Strictly positive; enforced at insertion.
pub type Weight = u32;

/// Accumulated distance along a route or walk
pub type Distance = u32;

/// Number of walks matched by a bounded counter. Walk counts grow
/// combinatorially with the bound, hence the wide type.
pub type WalkCount = u64;

/// One traversed edge in a reconstructed path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteLeg {
    pub from: Node,
    pub to: Node,
    pub weight: Weight,
}

/// A shortest path spelled out, leg by leg
#[derive(Debug, Clone, Serialize)]
pub struct RoutePath {
    pub from: Node,
    pub to: Node,
    pub distance: Distance,
    /// Number of legs traversed
    pub hops: usize,
    /// Node sequence from `from` to `to` inclusive
    pub nodes: Vec<Node>,
    pub legs: Vec<RouteLeg>,
}
