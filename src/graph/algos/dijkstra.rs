//! Priority-frontier shortest-distance queries
//!
//! Classic non-negative-weight relaxation: pop the minimum frontier entry,
//! relax its outgoing edges, repeat. Stale frontier entries are skipped on
//! pop against the visited set instead of being removed and reinserted.
//! Two termination policies share the machinery: first arrival at a
//! distinct target, and return-to-origin for closed walks.

use crate::error::{Result, TrunklineError};
use crate::graph::traversal::GraphView;
use crate::graph::types::{Distance, Node, RouteLeg, RoutePath};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry. Field order makes the derived ordering
/// (distance, node) ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Distance,
    pub node: Node,
}

/// True when `candidate` beats the recorded tentative distance for `node`.
/// An absent entry stands for infinity.
fn improves(tentative: &HashMap<Node, Distance>, node: Node, candidate: Distance) -> bool {
    tentative.get(&node).is_none_or(|&best| candidate < best)
}

/// Shortest distance from `start` to a different node `end` (first-arrival
/// policy).
///
/// Terminates the moment the extracted frontier node is `end` with a
/// non-zero distance. For closed walks (`start == end`) use
/// [`shortest_return_distance`]; under this policy the zero-length arrival
/// at `start` is not a route.
#[tracing::instrument(skip(graph))]
pub fn shortest_distance(graph: &dyn GraphView, start: Node, end: Node) -> Result<Distance> {
    let mut tentative: HashMap<Node, Distance> = HashMap::new();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    tentative.insert(start, 0);
    frontier.push(Reverse(HeapEntry {
        distance: 0,
        node: start,
    }));

    while let Some(Reverse(HeapEntry { distance, node })) = frontier.pop() {
        if node == end && distance > 0 {
            return Ok(distance);
        }
        if visited.contains(&node) {
            continue; // stale frontier entry
        }
        relax_neighbors(graph, node, distance, &mut tentative, &mut frontier, None);
        visited.insert(node);
    }

    Err(TrunklineError::Unreachable {
        from: start,
        to: end,
    })
}

/// Shortest closed walk that departs `node` and returns to it.
///
/// The frontier is seeded with the origin at distance 0, but the origin's
/// tentative arrival distance starts at infinity: only a walk that comes
/// back through an edge can relax it. Termination requires the extracted
/// node to be the origin AND the origin to be already visited, which
/// distinguishes the trivial zero-length self-arrival from a genuine
/// closed walk. A self-loop on the origin yields its own weight when
/// minimal.
#[tracing::instrument(skip(graph))]
pub fn shortest_return_distance(graph: &dyn GraphView, node: Node) -> Result<Distance> {
    let mut tentative: HashMap<Node, Distance> = HashMap::new();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    frontier.push(Reverse(HeapEntry { distance: 0, node }));

    while let Some(Reverse(HeapEntry {
        distance,
        node: current,
    })) = frontier.pop()
    {
        if current == node && visited.contains(&node) {
            return Ok(distance);
        }
        if visited.contains(&current) {
            continue;
        }
        relax_neighbors(graph, current, distance, &mut tentative, &mut frontier, None);
        visited.insert(current);
    }

    Err(TrunklineError::Unreachable {
        from: node,
        to: node,
    })
}

/// Shortest path from `start` to `end` with the route spelled out.
///
/// Same first-arrival search as [`shortest_distance`], additionally
/// recording the predecessor leg of every improved node so the winning
/// route can be walked back from `end`.
#[tracing::instrument(skip(graph))]
pub fn shortest_path(graph: &dyn GraphView, start: Node, end: Node) -> Result<RoutePath> {
    let mut tentative: HashMap<Node, Distance> = HashMap::new();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut predecessors: HashMap<Node, RouteLeg> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    tentative.insert(start, 0);
    frontier.push(Reverse(HeapEntry {
        distance: 0,
        node: start,
    }));

    while let Some(Reverse(HeapEntry { distance, node })) = frontier.pop() {
        if node == end && distance > 0 {
            return Ok(reconstruct_path(start, end, distance, &predecessors));
        }
        if visited.contains(&node) {
            continue;
        }
        relax_neighbors(
            graph,
            node,
            distance,
            &mut tentative,
            &mut frontier,
            Some(&mut predecessors),
        );
        visited.insert(node);
    }

    Err(TrunklineError::Unreachable {
        from: start,
        to: end,
    })
}

/// Relax every outgoing edge of `node`, reinserting improved neighbors
/// into the frontier at their new key
fn relax_neighbors(
    graph: &dyn GraphView,
    node: Node,
    distance: Distance,
    tentative: &mut HashMap<Node, Distance>,
    frontier: &mut BinaryHeap<Reverse<HeapEntry>>,
    mut predecessors: Option<&mut HashMap<Node, RouteLeg>>,
) {
    for (next, weight) in graph.outgoing(node) {
        let candidate = distance + weight;
        if improves(tentative, next, candidate) {
            tentative.insert(next, candidate);
            if let Some(predecessors) = predecessors.as_deref_mut() {
                predecessors.insert(
                    next,
                    RouteLeg {
                        from: node,
                        to: next,
                        weight,
                    },
                );
            }
            frontier.push(Reverse(HeapEntry {
                distance: candidate,
                node: next,
            }));
        }
    }
}

fn reconstruct_path(
    start: Node,
    end: Node,
    distance: Distance,
    predecessors: &HashMap<Node, RouteLeg>,
) -> RoutePath {
    let mut nodes = vec![end];
    let mut legs: Vec<RouteLeg> = Vec::new();

    let mut current = end;
    while current != start {
        let Some(&leg) = predecessors.get(&current) else {
            break;
        };
        legs.push(leg);
        current = leg.from;
        nodes.push(current);
    }

    nodes.reverse();
    legs.reverse();

    RoutePath {
        from: start,
        to: end,
        distance,
        hops: legs.len(),
        nodes,
        legs,
    }
}
