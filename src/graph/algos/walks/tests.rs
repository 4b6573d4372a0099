use super::*;
use crate::graph::store::Graph;

fn sample_network() -> Graph {
    let mut graph = Graph::new();
    for (from, to, weight) in [
        ('A', 'B', 5),
        ('B', 'C', 4),
        ('C', 'D', 8),
        ('D', 'C', 8),
        ('D', 'E', 6),
        ('A', 'D', 5),
        ('C', 'E', 2),
        ('E', 'B', 3),
        ('A', 'E', 7),
    ] {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

/// C-D-C and C-E-B-C are the only round trips within three stops
#[test]
fn test_max_stops_round_trips() {
    let graph = sample_network();

    assert_eq!(count_walks_max_stops(&graph, 'C', 'C', 3), 2);
}

/// Zero stops can never reach anything: a counted walk needs at least
/// one hop
#[test]
fn test_max_stops_zero_budget() {
    let graph = sample_network();

    assert_eq!(count_walks_max_stops(&graph, 'C', 'C', 0), 0);
    assert_eq!(count_walks_max_stops(&graph, 'A', 'B', 0), 0);
}

#[test]
fn test_max_stops_monotonic_in_budget() {
    let graph = sample_network();

    let mut previous = 0;
    for budget in 0..=6 {
        let count = count_walks_max_stops(&graph, 'C', 'C', budget);
        assert!(
            count >= previous,
            "budget {budget} produced {count} < {previous}"
        );
        previous = count;
    }
}

/// A walk through `end` keeps contributing: with B-C and C-B in place,
/// B..C walks within 3 stops are B-C and B-C-B-C
#[test]
fn test_max_stops_counts_every_visit() {
    let mut graph = Graph::new();
    graph.add_edge('B', 'C', 1).unwrap();
    graph.add_edge('C', 'B', 1).unwrap();

    assert_eq!(count_walks_max_stops(&graph, 'B', 'C', 3), 2);
}

/// A-B-C-D-C, A-D-C-D-C and A-D-E-B-C
#[test]
fn test_exact_stops_four_hops() {
    let graph = sample_network();

    assert_eq!(count_walks_exact_stops(&graph, 'A', 'C', 4), 3);
}

/// Exactly zero hops is the zero-length walk, which stands at `end` only
/// when the endpoints coincide
#[test]
fn test_exact_stops_zero() {
    let graph = sample_network();

    assert_eq!(count_walks_exact_stops(&graph, 'A', 'A', 0), 1);
    assert_eq!(count_walks_exact_stops(&graph, 'A', 'C', 0), 0);
}

/// Passing through `end` mid-walk earns no partial credit under the
/// exact-stops policy
#[test]
fn test_exact_stops_no_partial_credit() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B', 1).unwrap();
    graph.add_edge('B', 'A', 1).unwrap();

    // A-B (1 hop) passes through B, but only A-B-A-B has exactly 3
    assert_eq!(count_walks_exact_stops(&graph, 'A', 'B', 3), 1);
}

#[test]
fn test_exact_stops_bounded_by_max_stops() {
    let graph = sample_network();

    for stops in 0..=6 {
        let exact = count_walks_exact_stops(&graph, 'A', 'C', stops);
        let at_most = count_walks_max_stops(&graph, 'A', 'C', stops);
        assert!(
            exact <= at_most,
            "stops {stops}: exact {exact} > at-most {at_most}"
        );
    }
}

/// The seven C round trips shorter than 30: CDC, CEBC, CEBCDC, CDCEBC,
/// CDEBC, CEBCEBC and CEBCEBCEBC
#[test]
fn test_under_distance_round_trips() {
    let graph = sample_network();

    assert_eq!(count_walks_under_distance(&graph, 'C', 'C', 30), 7);
}

/// The bound is strict: a walk whose accumulated weight equals the bound
/// is not counted
#[test]
fn test_under_distance_strict_bound() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B', 5).unwrap();

    assert_eq!(count_walks_under_distance(&graph, 'A', 'B', 5), 0);
    assert_eq!(count_walks_under_distance(&graph, 'A', 'B', 6), 1);
}

/// Count-on-every-visit under a weight bound: A-B at 1 and A-B-A-B at 3
/// both land under 5, A-B-A-B-A-B reaches it
#[test]
fn test_under_distance_counts_every_visit() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B', 1).unwrap();
    graph.add_edge('B', 'A', 1).unwrap();

    assert_eq!(count_walks_under_distance(&graph, 'A', 'B', 5), 2);
}

/// Unknown start labels have no outgoing edges, so nothing is reachable
#[test]
fn test_counters_unknown_start() {
    let graph = sample_network();

    assert_eq!(count_walks_max_stops(&graph, 'X', 'C', 5), 0);
    assert_eq!(count_walks_exact_stops(&graph, 'X', 'C', 2), 0);
    assert_eq!(count_walks_under_distance(&graph, 'X', 'C', 50), 0);
}

/// A pure sink terminates every walk that reaches it
#[test]
fn test_counters_sink_end() {
    let mut graph = Graph::new();
    graph.add_edge('A', 'B', 2).unwrap();

    assert_eq!(count_walks_max_stops(&graph, 'A', 'B', 4), 1);
    assert_eq!(count_walks_exact_stops(&graph, 'A', 'B', 1), 1);
    assert_eq!(count_walks_under_distance(&graph, 'A', 'B', 10), 1);
}
