//! graph-compute-core: in-memory weighted graph with classic algorithms.
//!
//! A mutable [`Graph`] over any hashable vertex type, stored either as an
//! adjacency matrix (dense) or per-vertex neighbor sets (sparse), plus:
//! - lazy breadth-/depth-first traversal
//! - single-source shortest paths (BFS, Dijkstra, Bellman-Ford)
//! - minimum spanning trees (Prim's, Kruskal's)
//! - topological sort (Kahn)
//! - a shape analyzer that picks an algorithm automatically
//!
//! Everything is synchronous and recomputed per call. Diagnostics go through
//! `tracing`; no subscriber is installed here.

mod dispatch;
mod distance;
mod edge;
mod error;
mod graph;
mod metadata;
mod queue;
mod shortest_path;
mod spanning_tree;
mod storage;
mod topological;
mod traversal;

#[cfg(test)]
mod fixtures;

pub use dispatch::{
    select_shortest_path_strategy, select_spanning_tree_strategy, shortest_path_auto,
    spanning_tree_auto,
};
pub use distance::{DistanceInfo, DistanceTable, GraphPath};
pub use edge::{UndirectedEdge, WeightedEdge};
pub use error::{GraphError, Result};
pub use graph::{
    Density, Direction, Graph, GraphConfig, Neighbors, Vertex, Vertices, Weight,
    WeightedEdgeDestination, DEFAULT_WEIGHT,
};
pub use metadata::{analyze, Metadata};
pub use shortest_path::{
    bellman_ford_distances, dijkstra_distances, find_shortest_path, unweighted_distances,
    ShortestPathStrategy,
};
pub use spanning_tree::{
    find_spanning_tree, kruskals, prims, prims_from, SpanningTree, SpanningTreeStrategy,
};
pub use topological::topological_sort;
pub use traversal::{bfs, dfs, traverse, TraversalOrder, Traverse};
