use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex, Weight};

/// Best-known route to one vertex from a fixed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceInfo<V> {
    Unreached,
    Reached {
        distance: Weight,
        edge_count: usize,
        /// Previous vertex on the route. The source is its own predecessor.
        predecessor: V,
    },
}

impl<V> DistanceInfo<V> {
    /// Entry for the source itself.
    pub fn zero(source: V) -> Self {
        DistanceInfo::Reached {
            distance: 0,
            edge_count: 0,
            predecessor: source,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, DistanceInfo::Reached { .. })
    }

    pub fn distance(&self) -> Option<Weight> {
        match self {
            DistanceInfo::Reached { distance, .. } => Some(*distance),
            DistanceInfo::Unreached => None,
        }
    }

    pub fn edge_count(&self) -> Option<usize> {
        match self {
            DistanceInfo::Reached { edge_count, .. } => Some(*edge_count),
            DistanceInfo::Unreached => None,
        }
    }

    pub fn predecessor(&self) -> Option<&V> {
        match self {
            DistanceInfo::Reached { predecessor, .. } => Some(predecessor),
            DistanceInfo::Unreached => None,
        }
    }

    /// Route extended by one edge of `weight` ending at a neighbor, with
    /// `via` as that neighbor's predecessor. `None` when this entry is unreached.
    pub(crate) fn add_step(&self, weight: Weight, via: V) -> Option<DistanceInfo<V>> {
        let DistanceInfo::Reached {
            distance,
            edge_count,
            ..
        } = self
        else {
            return None;
        };
        Some(DistanceInfo::Reached {
            distance: distance.saturating_add(weight),
            edge_count: edge_count + 1,
            predecessor: via,
        })
    }

    /// Like [`DistanceInfo::add_step`], but the candidate distance is the edge
    /// weight alone. Used when growing a spanning tree.
    pub(crate) fn edge_step(&self, weight: Weight, via: V) -> Option<DistanceInfo<V>> {
        let edge_count = self.edge_count()?;
        Some(DistanceInfo::Reached {
            distance: weight,
            edge_count: edge_count + 1,
            predecessor: via,
        })
    }

    /// Strictly shorter than `current`, or equally short with fewer edges.
    pub(crate) fn improves_on(&self, current: &DistanceInfo<V>) -> bool {
        match (self, current) {
            (DistanceInfo::Unreached, _) => false,
            (DistanceInfo::Reached { .. }, DistanceInfo::Unreached) => true,
            (
                DistanceInfo::Reached {
                    distance,
                    edge_count,
                    ..
                },
                DistanceInfo::Reached {
                    distance: best,
                    edge_count: best_edges,
                    ..
                },
            ) => distance < best || (distance == best && edge_count < best_edges),
        }
    }

    /// Same distance and same edge count as `current`, both reached.
    pub(crate) fn ties_with(&self, current: &DistanceInfo<V>) -> bool {
        match (self, current) {
            (
                DistanceInfo::Reached {
                    distance,
                    edge_count,
                    ..
                },
                DistanceInfo::Reached {
                    distance: best,
                    edge_count: best_edges,
                    ..
                },
            ) => distance == best && edge_count == best_edges,
            _ => false,
        }
    }

    /// Strictly shorter than `current`; ties never win.
    pub(crate) fn shorter_than(&self, current: &DistanceInfo<V>) -> bool {
        match (self.distance(), current.distance()) {
            (Some(candidate), Some(best)) => candidate < best,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

/// Per-vertex [`DistanceInfo`] from a single source.
#[derive(Debug, Clone)]
pub struct DistanceTable<V> {
    entries: IndexMap<V, DistanceInfo<V>>,
}

impl<V: Vertex> PartialEq for DistanceTable<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Vertex> Eq for DistanceTable<V> {}

impl<V: Vertex> DistanceTable<V> {
    /// Every vertex of `graph` unreached, then `source` at zero if the graph has it.
    pub fn seeded(graph: &Graph<V>, source: &V) -> Self {
        let mut entries: IndexMap<V, DistanceInfo<V>> = graph
            .vertices()
            .map(|v| (v.clone(), DistanceInfo::Unreached))
            .collect();
        if let Some(entry) = entries.get_mut(source) {
            *entry = DistanceInfo::zero(source.clone());
        }
        Self { entries }
    }

    pub fn get(&self, vertex: &V) -> Option<&DistanceInfo<V>> {
        self.entries.get(vertex)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.entries.contains_key(vertex)
    }

    pub fn insert(&mut self, vertex: V, info: DistanceInfo<V>) {
        self.entries.insert(vertex, info);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &DistanceInfo<V>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of vertices with a route from the source (the source included).
    pub fn reached(&self) -> usize {
        self.entries.values().filter(|info| info.is_reached()).count()
    }

    /// Relax `source → destination`: take the extended route if it improves
    /// on the destination's current one. Returns whether the table changed.
    ///
    /// On an exact tie in distance and edge count the predecessor listed
    /// earlier in the table wins, so the result does not depend on the order
    /// edges are relaxed in.
    pub(crate) fn relax(&mut self, source: &V, destination: &V, weight: Weight) -> bool {
        let Some(candidate) = self
            .entries
            .get(source)
            .and_then(|info| info.add_step(weight, source.clone()))
        else {
            return false;
        };
        let Some(current) = self.entries.get(destination) else {
            self.entries.insert(destination.clone(), candidate);
            return true;
        };
        let better = candidate.improves_on(current)
            || (candidate.ties_with(current)
                && self.listed_before(source, current.predecessor()));
        if !better {
            return false;
        }
        if let Some(slot) = self.entries.get_mut(destination) {
            *slot = candidate;
        }
        true
    }

    /// Whether `vertex` sits before `other` in the table's order.
    fn listed_before(&self, vertex: &V, other: Option<&V>) -> bool {
        let position = self.entries.get_index_of(vertex);
        match (position, other.and_then(|o| self.entries.get_index_of(o))) {
            (Some(i), Some(j)) => i < j,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Rebuild the route from `source` to `destination` by walking predecessors.
    ///
    /// `Ok(None)` when either endpoint is missing from the table or the walk
    /// meets an unreached vertex. A walk that returns to a vertex it has
    /// already passed is an error.
    pub fn path(&self, source: &V, destination: &V) -> Result<Option<GraphPath<V>>, V> {
        if !self.contains(source) || !self.contains(destination) {
            return Ok(None);
        }
        if source == destination {
            return Ok(Some(GraphPath {
                vertices: vec![source.clone()],
                distance: 0,
            }));
        }
        let Some(distance) = self.get(destination).and_then(DistanceInfo::distance) else {
            return Ok(None);
        };

        let mut vertices = vec![destination.clone()];
        let mut seen: HashSet<&V> = HashSet::from([destination]);
        let mut current = destination;

        loop {
            let Some(predecessor) = self.get(current).and_then(DistanceInfo::predecessor) else {
                return Ok(None);
            };
            if predecessor == source {
                vertices.push(source.clone());
                break;
            }
            if !seen.insert(predecessor) {
                return Err(GraphError::CyclicDistanceTable {
                    vertex: predecessor.clone(),
                    start: source.clone(),
                    destination: destination.clone(),
                    table: self.clone(),
                });
            }
            vertices.push(predecessor.clone());
            current = predecessor;
        }

        vertices.reverse();
        Ok(Some(GraphPath { vertices, distance }))
    }
}

impl<V: Vertex> FromIterator<(V, DistanceInfo<V>)> for DistanceTable<V> {
    fn from_iter<I: IntoIterator<Item = (V, DistanceInfo<V>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A route through the graph, source first, with its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<V> {
    vertices: Vec<V>,
    distance: Weight,
}

impl<V> GraphPath<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// Number of vertices, endpoints included.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}
