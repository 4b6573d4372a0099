//! Routing queries over a small weighted directed network
//!
//! Provides the building blocks for route evaluation:
//! - Adjacency store built once by the caller, immutable during queries
//! - Explicit-route distance evaluation
//! - Bounded walk counting (hop-count and total-weight bounds)
//! - Dijkstra shortest-distance queries, including return-to-origin cycles

pub mod algos;
pub mod route;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    count_walks_exact_stops, count_walks_max_stops, count_walks_under_distance, shortest_distance,
    shortest_path, shortest_return_distance,
};
pub use route::route_distance;
pub use store::Graph;
pub use traversal::GraphView;
pub use types::{Distance, Node, RouteLeg, RoutePath, WalkCount, Weight};
