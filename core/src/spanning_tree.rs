use std::collections::{HashMap, HashSet, VecDeque};

use crate::distance::{DistanceInfo, DistanceTable};
use crate::edge::{UndirectedEdge, WeightedEdge};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex, Weight};
use crate::queue::MinQueue;

/// Minimum spanning tree algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanningTreeStrategy {
    /// Grows one tree from the first vertex. Disconnected graphs yield the
    /// tree of the first vertex's component only.
    Prims,
    /// Merges the cheapest edges across the whole graph. Fails on
    /// disconnected graphs.
    Kruskals,
}

/// Edges accepted by a spanning tree algorithm, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<V> {
    edges: Vec<WeightedEdge<V>>,
}

impl<V> SpanningTree<V> {
    pub fn edges(&self) -> &[WeightedEdge<V>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge<V>> {
        self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Minimum spanning tree of `graph` using `strategy`. `Ok(None)` for an empty graph.
pub fn find_spanning_tree<V: Vertex>(
    graph: &Graph<V>,
    strategy: SpanningTreeStrategy,
) -> Result<Option<SpanningTree<V>>, V> {
    match strategy {
        SpanningTreeStrategy::Prims => Ok(prims(graph)),
        SpanningTreeStrategy::Kruskals => kruskals(graph),
    }
}

/// Prim's algorithm from the first enumerated vertex.
pub fn prims<V: Vertex>(graph: &Graph<V>) -> Option<SpanningTree<V>> {
    let start = graph.vertices().next()?;
    prims_from(graph, start)
}

/// Prim's algorithm from `start`. `None` when `start` is not in the graph.
///
/// Only `start`'s component is spanned; other vertices are left out.
pub fn prims_from<V: Vertex>(graph: &Graph<V>, start: &V) -> Option<SpanningTree<V>> {
    if !graph.contains(start) {
        return None;
    }

    let mut table = DistanceTable::seeded(graph, start);
    let mut settled: HashSet<V> = HashSet::with_capacity(graph.len());
    let mut queue = MinQueue::with_capacity(graph.len());
    let mut edges = Vec::with_capacity(graph.len().saturating_sub(1));
    queue.push(0, start.clone());

    while let Some(current) = queue.pop() {
        if !settled.insert(current.clone()) {
            continue;
        }
        let Some(info) = table.get(&current).cloned() else {
            continue;
        };
        if let DistanceInfo::Reached {
            distance,
            predecessor,
            ..
        } = &info
        {
            if current != *start {
                edges.push(WeightedEdge::new(predecessor.clone(), current.clone(), *distance));
            }
        }

        for (neighbor, weight) in graph.neighbors(&current) {
            if settled.contains(neighbor) {
                continue;
            }
            let Some(candidate) = info.edge_step(weight, current.clone()) else {
                continue;
            };
            let improves = table
                .get(neighbor)
                .map_or(true, |best| candidate.shorter_than(best));
            if improves {
                table.insert(neighbor.clone(), candidate);
                queue.push(weight, neighbor.clone());
            }
        }
    }

    Some(SpanningTree { edges })
}

/// Kruskal's algorithm over the unique undirected edges of `graph`.
///
/// Edges are taken cheapest first, skipping any whose endpoints are already
/// joined by accepted edges. Fails with [`GraphError::NoSpanningTree`] when
/// candidates run out before `|V| - 1` edges are accepted.
pub fn kruskals<V: Vertex>(graph: &Graph<V>) -> Result<Option<SpanningTree<V>>, V> {
    if graph.is_empty() {
        return Ok(None);
    }

    let mut unique: HashSet<UndirectedEdge<V>> = HashSet::new();
    let mut queue = MinQueue::new();
    for edge in graph.edges() {
        if unique.insert(UndirectedEdge(edge.clone())) {
            queue.push(edge.weight, edge);
        }
    }

    let required = graph.len() - 1;
    tracing::trace!(
        candidates = queue.len(),
        cheapest = ?queue.peek().map(|(weight, _)| *weight),
        required,
        "kruskal candidate edges"
    );
    let mut forest = Forest::default();
    let mut edges = Vec::with_capacity(required);

    while edges.len() < required {
        let Some(edge) = queue.pop() else {
            break;
        };
        if forest.connected(&edge.source, &edge.destination) {
            continue;
        }
        forest.join(&edge.source, &edge.destination);
        edges.push(edge);
    }

    if edges.len() < required {
        tracing::debug!(
            vertex_count = graph.len(),
            accepted = edges.len(),
            required,
            "no spanning tree: graph is disconnected"
        );
        return Err(GraphError::NoSpanningTree {
            graph: graph.clone(),
            vertex_count: graph.len(),
            accepted: edges.len(),
            required,
        });
    }
    Ok(Some(SpanningTree { edges }))
}

/// Accepted edges as an undirected adjacency list.
struct Forest<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Default for Forest<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: Vertex> Forest<V> {
    fn join(&mut self, a: &V, b: &V) {
        self.adjacency.entry(a.clone()).or_default().push(b.clone());
        self.adjacency.entry(b.clone()).or_default().push(a.clone());
    }

    /// Whether accepted edges already link `a` and `b`.
    fn connected(&self, a: &V, b: &V) -> bool {
        if a == b {
            return true;
        }
        let mut visited: HashSet<&V> = HashSet::from([a]);
        let mut queue: VecDeque<&V> = VecDeque::from([a]);
        while let Some(current) = queue.pop_front() {
            for next in self.adjacency.get(current).into_iter().flatten() {
                if next == b {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}
