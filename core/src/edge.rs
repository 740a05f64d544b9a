use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::graph::{Vertex, Weight};

/// A single weighted edge. Equality and hashing respect direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<V> {
    pub source: V,
    pub destination: V,
    pub weight: Weight,
}

impl<V> WeightedEdge<V> {
    pub fn new(source: V, destination: V, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl<V: Vertex> WeightedEdge<V> {
    /// Same endpoints in either order, same weight.
    pub fn same_undirected(&self, other: &Self) -> bool {
        self.weight == other.weight
            && ((self.source == other.source && self.destination == other.destination)
                || (self.source == other.destination && self.destination == other.source))
    }
}

/// Wrapper comparing edges with endpoint order ignored.
///
/// `a → b` and `b → a` with the same weight are equal and hash alike, so a
/// `HashSet<UndirectedEdge<V>>` holds each mirrored pair once.
#[derive(Debug, Clone)]
pub struct UndirectedEdge<V>(pub WeightedEdge<V>);

impl<V: Vertex> PartialEq for UndirectedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_undirected(&other.0)
    }
}

impl<V: Vertex> Eq for UndirectedEdge<V> {}

impl<V: Vertex> Hash for UndirectedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative combine so endpoint order cannot change the hash.
        let endpoints =
            endpoint_hash(&self.0.source).wrapping_add(endpoint_hash(&self.0.destination));
        state.write_u64(endpoints);
        self.0.weight.hash(state);
    }
}

fn endpoint_hash<V: Hash>(vertex: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    vertex.hash(&mut hasher);
    hasher.finish()
}

impl<V> From<WeightedEdge<V>> for UndirectedEdge<V> {
    fn from(edge: WeightedEdge<V>) -> Self {
        UndirectedEdge(edge)
    }
}
