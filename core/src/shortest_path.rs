use std::collections::{HashSet, VecDeque};

use crate::distance::{DistanceInfo, DistanceTable, GraphPath};
use crate::edge::WeightedEdge;
use crate::error::Result;
use crate::graph::{Graph, Vertex, DEFAULT_WEIGHT};
use crate::queue::MinQueue;

/// Algorithms that build a [`DistanceTable`] from a single source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortestPathStrategy {
    /// Hop count only; edge weights are ignored.
    Unweighted,
    /// Non-negative weights. Negative edges give wrong answers, not errors.
    Dijkstra,
    /// Any weights on a directed graph; negative cycles are detected.
    BellmanFord,
}

impl ShortestPathStrategy {
    pub fn distance_table<V: Vertex>(self, graph: &Graph<V>, source: &V) -> DistanceTable<V> {
        let table = match self {
            ShortestPathStrategy::Unweighted => unweighted_distances(graph, source),
            ShortestPathStrategy::Dijkstra => dijkstra_distances(graph, source),
            ShortestPathStrategy::BellmanFord => bellman_ford_distances(graph, source),
        };
        tracing::trace!(
            strategy = ?self,
            ?source,
            vertices = table.len(),
            reached = table.reached(),
            "built distance table"
        );
        table
    }
}

/// Breadth-first distances in hops.
///
/// A newly reached vertex only joins the queue when it has outgoing edges.
pub fn unweighted_distances<V: Vertex>(graph: &Graph<V>, source: &V) -> DistanceTable<V> {
    let mut table = DistanceTable::seeded(graph, source);
    if !graph.contains(source) {
        return table;
    }

    let mut queue: VecDeque<V> = VecDeque::from([source.clone()]);
    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(&current) {
            if table.get(neighbor).is_some_and(DistanceInfo::is_reached) {
                continue;
            }
            table.relax(&current, neighbor, DEFAULT_WEIGHT);
            if graph.neighbors(neighbor).next().is_some() {
                queue.push_back(neighbor.clone());
            }
        }
    }
    table
}

/// Dijkstra's algorithm, ordering by (distance, edge count).
///
/// Improved entries are pushed again rather than decreased; stale ones are
/// skipped when popped because their vertex is already settled.
pub fn dijkstra_distances<V: Vertex>(graph: &Graph<V>, source: &V) -> DistanceTable<V> {
    let mut table = DistanceTable::seeded(graph, source);
    if !graph.contains(source) {
        return table;
    }

    let mut settled: HashSet<V> = HashSet::with_capacity(graph.len());
    let mut queue = MinQueue::with_capacity(graph.len());
    queue.push((0, 0usize), source.clone());

    while let Some(current) = queue.pop() {
        if !settled.insert(current.clone()) {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(&current) {
            if settled.contains(neighbor) || !table.relax(&current, neighbor, weight) {
                continue;
            }
            if let Some(DistanceInfo::Reached {
                distance,
                edge_count,
                ..
            }) = table.get(neighbor)
            {
                queue.push((*distance, *edge_count), neighbor.clone());
            }
        }
    }
    table
}

/// Bellman-Ford over every stored edge.
///
/// Runs at most `|V|` rounds and stops early once a round changes nothing.
/// A change in round `|V|` means a negative cycle is reachable from `source`;
/// the result is then the freshly seeded table with only `source` reached.
pub fn bellman_ford_distances<V: Vertex>(graph: &Graph<V>, source: &V) -> DistanceTable<V> {
    let mut table = DistanceTable::seeded(graph, source);
    if !graph.contains(source) {
        return table;
    }

    let edges: Vec<WeightedEdge<V>> = graph.edges().collect();
    let rounds = graph.len();
    for round in 1..=rounds {
        let mut changed = false;
        for edge in &edges {
            changed |= table.relax(&edge.source, &edge.destination, edge.weight);
        }
        if !changed {
            break;
        }
        if round == rounds {
            tracing::debug!(?source, rounds, "negative cycle reachable from source");
            return DistanceTable::seeded(graph, source);
        }
    }
    table
}

/// Shortest path from `source` to `destination` using `strategy`.
///
/// `Ok(None)` when either vertex is absent or `destination` is unreachable.
pub fn find_shortest_path<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
    strategy: ShortestPathStrategy,
) -> Result<Option<GraphPath<V>>, V> {
    strategy
        .distance_table(graph, source)
        .path(source, destination)
}
