use std::collections::HashSet;
use std::fmt;

use crate::edge::UndirectedEdge;
use crate::graph::{Direction, Graph, Vertex};
use crate::traversal::bfs;

/// Shape summary of a graph, used to pick an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub direction: Direction,
    pub vertex_count: usize,
    /// Directed: distinct ordered pairs. Undirected: distinct unordered pairs.
    pub edge_count: usize,
    /// Every vertex is reachable from the first enumerated one.
    pub connected: bool,
    /// Not every edge carries the same weight.
    pub weighted: bool,
    pub has_negative_weights: bool,
}

impl Metadata {
    /// Metadata of a graph with no vertices. Not considered connected.
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            vertex_count: 0,
            edge_count: 0,
            connected: false,
            weighted: false,
            has_negative_weights: false,
        }
    }

    pub fn disconnected(&self) -> bool {
        !self.connected
    }

    pub fn unweighted(&self) -> bool {
        !self.weighted
    }

    pub fn all_positive_weights(&self) -> bool {
        !self.has_negative_weights
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}, {} vertices, {} edges, {}, {}, {}",
            self.direction,
            self.vertex_count,
            self.edge_count,
            if self.connected { "connected" } else { "disconnected" },
            if self.weighted { "weighted" } else { "unweighted" },
            if self.has_negative_weights {
                "negative weights"
            } else {
                "non-negative weights"
            },
        )
    }
}

/// Inspect `graph` and summarize its shape.
pub fn analyze<V: Vertex>(graph: &Graph<V>) -> Metadata {
    let direction = graph.direction();
    let Some(first) = graph.vertices().next() else {
        return Metadata::empty(direction);
    };

    let mut first_weight = None;
    let mut weighted = false;
    let mut has_negative_weights = false;
    let mut directed_edges = 0usize;
    let mut undirected_edges = HashSet::new();

    for edge in graph.edges() {
        let reference = *first_weight.get_or_insert(edge.weight);
        weighted |= edge.weight != reference;
        has_negative_weights |= edge.weight < 0;
        match direction {
            Direction::Directed => directed_edges += 1,
            Direction::Undirected => {
                undirected_edges.insert(UndirectedEdge(edge));
            }
        }
    }

    let edge_count = match direction {
        Direction::Directed => directed_edges,
        Direction::Undirected => undirected_edges.len(),
    };

    Metadata {
        direction,
        vertex_count: graph.len(),
        edge_count,
        connected: bfs(graph, first).count() == graph.len(),
        weighted,
        has_negative_weights,
    }
}
