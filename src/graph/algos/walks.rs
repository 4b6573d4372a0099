//! Depth-first bounded walk counting
//!
//! Walks may revisit nodes and edges; the caller-supplied bound is what
//! guarantees termination on cyclic networks. Each policy is a pure
//! recursive function that returns its branch count, with sibling
//! contributions summed by the caller rather than pushed into shared state.

use crate::graph::traversal::GraphView;
use crate::graph::types::{Distance, Node, WalkCount};

/// Count walks from `start` that stand at `end` after between 1 and
/// `max_stops` hops inclusive.
///
/// Every arrival at `end` with a positive hop count contributes one count,
/// including mid-walk arrivals; the traversal keeps recursing from the
/// counted node until the hop budget is spent.
#[tracing::instrument(skip(graph))]
pub fn count_walks_max_stops(
    graph: &dyn GraphView,
    start: Node,
    end: Node,
    max_stops: u32,
) -> WalkCount {
    walk_max_stops(graph, start, end, max_stops, 0)
}

fn walk_max_stops(
    graph: &dyn GraphView,
    current: Node,
    end: Node,
    max_stops: u32,
    taken: u32,
) -> WalkCount {
    let mut count = WalkCount::from(taken > 0 && current == end);
    if taken == max_stops {
        return count;
    }
    for (next, _) in graph.outgoing(current) {
        count += walk_max_stops(graph, next, end, max_stops, taken + 1);
    }
    count
}

/// Count walks from `start` that stand at `end` after precisely
/// `exact_stops` hops.
///
/// Passing through `end` earlier earns no partial credit. With
/// `exact_stops == 0` the zero-hop walk counts exactly when
/// `start == end`.
#[tracing::instrument(skip(graph))]
pub fn count_walks_exact_stops(
    graph: &dyn GraphView,
    start: Node,
    end: Node,
    exact_stops: u32,
) -> WalkCount {
    walk_exact_stops(graph, start, end, exact_stops, 0)
}

fn walk_exact_stops(
    graph: &dyn GraphView,
    current: Node,
    end: Node,
    exact_stops: u32,
    taken: u32,
) -> WalkCount {
    if taken == exact_stops {
        return WalkCount::from(current == end);
    }
    graph
        .outgoing(current)
        .into_iter()
        .map(|(next, _)| walk_exact_stops(graph, next, end, exact_stops, taken + 1))
        .sum()
}

/// Count walks from `start` that stand at `end` with accumulated weight
/// strictly below `max_distance`.
///
/// Same count-on-every-visit semantics as [`count_walks_max_stops`]: each
/// arrival at `end` with positive accumulated weight counts once and the
/// traversal continues from there. Positive edge weights make accumulated
/// weight strictly increasing per hop, which bounds the recursion for any
/// finite `max_distance`.
#[tracing::instrument(skip(graph))]
pub fn count_walks_under_distance(
    graph: &dyn GraphView,
    start: Node,
    end: Node,
    max_distance: Distance,
) -> WalkCount {
    walk_under_distance(graph, start, end, max_distance, 0)
}

fn walk_under_distance(
    graph: &dyn GraphView,
    current: Node,
    end: Node,
    max_distance: Distance,
    travelled: Distance,
) -> WalkCount {
    if travelled >= max_distance {
        return 0;
    }
    let mut count = WalkCount::from(travelled > 0 && current == end);
    for (next, weight) in graph.outgoing(current) {
        count += walk_under_distance(graph, next, end, max_distance, travelled + weight);
    }
    count
}

#[cfg(test)]
mod tests;
