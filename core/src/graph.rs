use std::fmt::Debug;
use std::hash::Hash;

use crate::edge::WeightedEdge;
use crate::error::{GraphError, Result};
use crate::storage::{
    AdjacencyMatrix, AdjacencySet, MatrixNeighbors, Storage, DEFAULT_MATRIX_CAPACITY,
};

/// Edge cost. Negative values are allowed; some algorithms reject them.
pub type Weight = i64;

/// Weight given to edges added without an explicit one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Anything usable as a vertex: compared and hashed by value.
///
/// For a different notion of equality (case-insensitive names, ids that
/// ignore a version field) wrap the value in a newtype whose `Eq` and `Hash`
/// implement it.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Whether edges are one-way or mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

/// Storage strategy: adjacency matrix (dense) or per-vertex neighbor sets (sparse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Density {
    Dense,
    #[default]
    Sparse,
}

/// Construction parameters for a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub direction: Direction,
    pub density: Density,
    /// Pre-allocated vertex slots. `None` uses the store's default.
    pub initial_capacity: Option<usize>,
}

impl GraphConfig {
    pub fn directed() -> Self {
        Self {
            direction: Direction::Directed,
            ..Self::default()
        }
    }

    pub fn undirected() -> Self {
        Self {
            direction: Direction::Undirected,
            ..Self::default()
        }
    }

    pub fn dense(mut self) -> Self {
        self.density = Density::Dense;
        self
    }

    pub fn sparse(mut self) -> Self {
        self.density = Density::Sparse;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }
}

/// One outgoing neighbor of a vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdgeDestination<V> {
    pub value: V,
    pub weight: Weight,
}

/// Mutable weighted graph over vertices of type `V`.
///
/// Self-referencing edges register their vertex but are never stored.
/// Undirected edges are stored in both directions with the same weight.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    direction: Direction,
    storage: Storage<V>,
}

impl<V: Vertex> Graph<V> {
    /// Empty graph with the store's default capacity.
    pub fn new(direction: Direction, density: Density) -> Self {
        Self::build(direction, density, None)
    }

    /// Empty directed sparse graph.
    pub fn directed() -> Self {
        Self::new(Direction::Directed, Density::Sparse)
    }

    /// Empty undirected sparse graph.
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected, Density::Sparse)
    }

    /// Validate `config` and build an empty graph from it.
    pub fn with_config(config: GraphConfig) -> Result<Self, V> {
        if config.initial_capacity == Some(0) {
            tracing::debug!(?config, "rejected graph config");
            return Err(GraphError::invalid_argument(
                "initial_capacity",
                "capacity must be at least 1",
            ));
        }
        Ok(Self::build(
            config.direction,
            config.density,
            config.initial_capacity,
        ))
    }

    fn build(direction: Direction, density: Density, capacity: Option<usize>) -> Self {
        let storage = match density {
            Density::Dense => Storage::Matrix(AdjacencyMatrix::with_capacity(
                capacity.unwrap_or(DEFAULT_MATRIX_CAPACITY),
            )),
            Density::Sparse => Storage::Set(AdjacencySet::with_capacity(capacity.unwrap_or(0))),
        };
        Self { direction, storage }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn density(&self) -> Density {
        match self.storage {
            Storage::Matrix(_) => Density::Dense,
            Storage::Set(_) => Density::Sparse,
        }
    }

    /// Register `vertex`. Adding an existing vertex does nothing.
    pub fn add_vertex(&mut self, vertex: V) {
        match &mut self.storage {
            Storage::Matrix(m) => {
                m.index_or_insert(vertex);
            }
            Storage::Set(s) => {
                s.add_vertex(vertex);
            }
        }
    }

    /// Add an edge with [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, source: V, destination: V) {
        self.add_weighted_edge(source, destination, DEFAULT_WEIGHT);
    }

    /// Add an edge, registering either endpoint if it is new.
    ///
    /// Re-adding an existing edge keeps the first weight on a sparse graph
    /// and replaces it on a dense one.
    pub fn add_weighted_edge(&mut self, source: V, destination: V, weight: Weight) {
        let direction = self.direction;
        match &mut self.storage {
            Storage::Matrix(m) => m.add_edge(source, destination, weight, direction),
            Storage::Set(s) => s.add_edge(source, destination, weight, direction),
        }
    }

    /// Remove `vertex` and every edge pointing at it. Returns whether it existed.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        match &mut self.storage {
            Storage::Matrix(m) => {
                if !m.contains(vertex) {
                    return false;
                }
                m.remove_vertex(vertex);
                true
            }
            Storage::Set(s) => s.remove_vertex(vertex),
        }
    }

    /// Remove the edge `source → destination` (both directions when undirected).
    pub fn remove_edge(&mut self, source: &V, destination: &V) {
        let direction = self.direction;
        match &mut self.storage {
            Storage::Matrix(m) => m.remove_edge(source, destination, direction),
            Storage::Set(s) => s.remove_edge(source, destination, direction),
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        match &self.storage {
            Storage::Matrix(m) => m.contains(vertex),
            Storage::Set(s) => s.contains(vertex),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Matrix(m) => m.len(),
            Storage::Set(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every vertex. Sparse graphs enumerate in insertion order; dense graphs
    /// in index order, which removals can permute.
    pub fn vertices(&self) -> Vertices<'_, V> {
        let inner = match &self.storage {
            Storage::Matrix(m) => VerticesInner::Matrix(m.vertices()),
            Storage::Set(s) => VerticesInner::Set(s.vertices()),
        };
        Vertices { inner }
    }

    /// Outgoing `(neighbor, weight)` pairs of `vertex`. Empty if absent.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V> {
        let inner = match &self.storage {
            Storage::Matrix(m) => NeighborsInner::Matrix(m.neighbors(vertex)),
            Storage::Set(s) => match s.neighbors(vertex) {
                Some(iter) => NeighborsInner::Set(iter),
                None => NeighborsInner::Empty,
            },
        };
        Neighbors { inner }
    }

    /// Owned form of [`Graph::neighbors`].
    pub fn adjacent_vertices(&self, vertex: &V) -> Vec<WeightedEdgeDestination<V>> {
        self.neighbors(vertex)
            .map(|(value, weight)| WeightedEdgeDestination {
                value: value.clone(),
                weight,
            })
            .collect()
    }

    /// Weight of `source → destination`, if that edge is stored.
    pub fn weight(&self, source: &V, destination: &V) -> Option<Weight> {
        match &self.storage {
            Storage::Matrix(m) => m.weight(source, destination),
            Storage::Set(s) => s.weight(source, destination),
        }
    }

    /// Every stored edge entry. Undirected edges appear once per orientation.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<V>> + '_ {
        self.vertices().flat_map(move |source| {
            self.neighbors(source)
                .map(move |(destination, weight)| WeightedEdge {
                    source: source.clone(),
                    destination: destination.clone(),
                    weight,
                })
        })
    }

    /// Bulk load from `(source, destination, weight)` tuples.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        for (source, destination, weight) in edges {
            self.add_weighted_edge(source, destination, weight);
        }
    }

    /// Bulk load from `(vertex, neighbors)` adjacency entries, weight 1 each.
    ///
    /// Vertices with no neighbors are still registered.
    pub fn load_adjacency<I, N>(&mut self, adjacency: I)
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        for (vertex, neighbors) in adjacency {
            self.add_vertex(vertex.clone());
            for neighbor in neighbors {
                self.add_edge(vertex.clone(), neighbor);
            }
        }
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}

/// Iterator returned by [`Graph::vertices`].
#[derive(Debug, Clone)]
pub struct Vertices<'g, V> {
    inner: VerticesInner<'g, V>,
}

#[derive(Debug, Clone)]
enum VerticesInner<'g, V> {
    Matrix(std::slice::Iter<'g, V>),
    Set(indexmap::map::Keys<'g, V, indexmap::IndexMap<V, Weight>>),
}

impl<'g, V> Iterator for Vertices<'g, V> {
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            VerticesInner::Matrix(iter) => iter.next(),
            VerticesInner::Set(iter) => iter.next(),
        }
    }
}

/// Iterator returned by [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'g, V> {
    inner: NeighborsInner<'g, V>,
}

#[derive(Debug, Clone)]
enum NeighborsInner<'g, V> {
    Matrix(MatrixNeighbors<'g, V>),
    Set(indexmap::map::Iter<'g, V, Weight>),
    Empty,
}

impl<'g, V> Iterator for Neighbors<'g, V> {
    type Item = (&'g V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            NeighborsInner::Matrix(iter) => iter.next(),
            NeighborsInner::Set(iter) => iter.next().map(|(v, w)| (v, *w)),
            NeighborsInner::Empty => None,
        }
    }
}
