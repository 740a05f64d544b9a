//! Algorithm selection from a graph's [`Metadata`].

use crate::distance::GraphPath;
use crate::error::{GraphError, Result};
use crate::graph::{Direction, Graph, Vertex};
use crate::metadata::{analyze, Metadata};
use crate::shortest_path::{find_shortest_path, ShortestPathStrategy};
use crate::spanning_tree::{find_spanning_tree, SpanningTree, SpanningTreeStrategy};

/// Shortest-path algorithm suited to a graph of this shape.
///
/// `None` for undirected graphs with negative weights: every negative edge
/// would form a negative cycle with its mirror.
pub fn select_shortest_path_strategy(metadata: &Metadata) -> Option<ShortestPathStrategy> {
    match (
        metadata.weighted,
        metadata.has_negative_weights,
        metadata.direction,
    ) {
        (false, false, _) => Some(ShortestPathStrategy::Unweighted),
        (true, false, _) => Some(ShortestPathStrategy::Dijkstra),
        (_, true, Direction::Directed) => Some(ShortestPathStrategy::BellmanFord),
        (_, true, Direction::Undirected) => None,
    }
}

/// Spanning-tree algorithm suited to a graph of this shape. `None` for undirected graphs.
pub fn select_spanning_tree_strategy(metadata: &Metadata) -> Option<SpanningTreeStrategy> {
    match metadata.direction {
        Direction::Directed if metadata.disconnected() => Some(SpanningTreeStrategy::Kruskals),
        Direction::Directed => Some(SpanningTreeStrategy::Prims),
        Direction::Undirected => None,
    }
}

/// Analyze `graph`, pick a shortest-path algorithm and run it.
pub fn shortest_path_auto<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
) -> Result<Option<GraphPath<V>>, V> {
    let metadata = analyze(graph);
    let Some(strategy) = select_shortest_path_strategy(&metadata) else {
        tracing::debug!(%metadata, "no shortest-path strategy");
        return Err(GraphError::ShortestPathNotSupported {
            graph: graph.clone(),
            metadata,
        });
    };
    tracing::debug!(?strategy, %metadata, "selected shortest-path strategy");
    find_shortest_path(graph, source, destination, strategy)
}

/// Analyze `graph`, pick a spanning-tree algorithm and run it.
pub fn spanning_tree_auto<V: Vertex>(graph: &Graph<V>) -> Result<Option<SpanningTree<V>>, V> {
    let metadata = analyze(graph);
    let Some(strategy) = select_spanning_tree_strategy(&metadata) else {
        tracing::debug!(%metadata, "no spanning-tree strategy");
        return Err(GraphError::SpanningTreeNotSupported {
            graph: graph.clone(),
            metadata,
        });
    };
    tracing::debug!(?strategy, %metadata, "selected spanning-tree strategy");
    find_spanning_tree(graph, strategy)
}
