use thiserror::Error;

use crate::distance::DistanceTable;
use crate::graph::Graph;
use crate::metadata::Metadata;

/// Result alias used by every fallible graph operation.
pub type Result<T, V> = std::result::Result<T, GraphError<V>>;

/// Failures surfaced by graph construction and the algorithm entry points.
///
/// "Nothing found" outcomes (unreachable destination, cyclic topological
/// sort, empty graph) are not errors; they come back as `None`.
#[derive(Debug, Error)]
pub enum GraphError<V> {
    /// A construction argument that can never produce a working graph.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Auto-dispatch found no shortest-path algorithm for this graph shape.
    #[error("no shortest-path algorithm supports a graph with metadata: {metadata}")]
    ShortestPathNotSupported { graph: Graph<V>, metadata: Metadata },

    /// Auto-dispatch found no spanning-tree algorithm for this graph shape.
    #[error("no spanning-tree algorithm supports a graph with metadata: {metadata}")]
    SpanningTreeNotSupported { graph: Graph<V>, metadata: Metadata },

    /// Kruskal's ran out of candidate edges before connecting every vertex.
    #[error(
        "no minimum spanning tree: accepted {accepted} of {required} edges across {vertex_count} vertices"
    )]
    NoSpanningTree {
        graph: Graph<V>,
        vertex_count: usize,
        accepted: usize,
        required: usize,
    },

    /// A predecessor chain loops back on itself before reaching the start.
    #[error(
        "predecessor {vertex:?} closes a cycle while walking from {destination:?} back to {start:?}"
    )]
    CyclicDistanceTable {
        vertex: V,
        start: V,
        destination: V,
        table: DistanceTable<V>,
    },
}

impl<V> GraphError<V> {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
