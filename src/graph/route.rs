//! Explicit-route distance evaluation

use crate::error::{Result, TrunklineError};
use crate::graph::traversal::GraphView;
use crate::graph::types::{Distance, Node};

/// Sum the edge weights along an explicit node sequence.
///
/// A single-node route has distance 0 and is never an error. The first
/// missing hop fails the whole evaluation with
/// [`TrunklineError::NoSuchRoute`] naming the missing leg; nothing after it
/// is summed. An empty route is a precondition failure.
#[tracing::instrument(skip(graph))]
pub fn route_distance(graph: &dyn GraphView, route: &[Node]) -> Result<Distance> {
    let (&first, rest) = route.split_first().ok_or(TrunklineError::EmptyRoute)?;

    let mut distance: Distance = 0;
    let mut current = first;
    for &next in rest {
        let weight = graph
            .edge_weight(current, next)
            .ok_or(TrunklineError::NoSuchRoute {
                from: current,
                to: next,
            })?;
        distance += weight;
        current = next;
    }
    Ok(distance)
}
