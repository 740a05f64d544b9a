//! Backing stores for [`Graph`](crate::Graph).
//!
//! Two interchangeable representations:
//! - [`AdjacencyMatrix`]: dense indexed matrix, O(1) edge lookup, O(V²) memory.
//!   Re-adding an edge overwrites its weight.
//! - [`AdjacencySet`]: insertion-ordered neighbor set per vertex, O(V + E)
//!   memory. Re-adding an edge keeps the first weight.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::graph::{Direction, Vertex, Weight};

/// Initial matrix side when no capacity is configured.
pub(crate) const DEFAULT_MATRIX_CAPACITY: usize = 4;

/// Storage strategy chosen at construction time.
#[derive(Debug, Clone)]
pub(crate) enum Storage<V> {
    Matrix(AdjacencyMatrix<V>),
    Set(AdjacencySet<V>),
}

// ---------------------------------------------------------------------------
// Dense store
// ---------------------------------------------------------------------------

/// Square weight matrix indexed by dense vertex ids `0..len`.
///
/// `cells[row][col]` holds the weight of `vertices[row] → vertices[col]`.
/// Rows and columns past `len` are always empty.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyMatrix<V> {
    index_of: HashMap<V, usize>,
    vertices: Vec<V>,
    cells: Vec<Vec<Option<Weight>>>,
}

impl<V: Vertex> AdjacencyMatrix<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            index_of: HashMap::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity),
            cells: vec![vec![None; capacity]; capacity],
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.index_of.contains_key(vertex)
    }

    pub(crate) fn index(&self, vertex: &V) -> Option<usize> {
        self.index_of.get(vertex).copied()
    }

    /// Index of `vertex`, assigning the next free one (and growing) if new.
    pub(crate) fn index_or_insert(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.index_of.get(&vertex) {
            return index;
        }
        if self.vertices.len() == self.capacity() {
            self.grow();
        }
        let index = self.vertices.len();
        self.index_of.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        index
    }

    /// Double the matrix side, keeping every existing cell in place.
    fn grow(&mut self) {
        let new_capacity = (self.capacity() * 2).max(1);
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            "growing adjacency matrix"
        );
        for row in &mut self.cells {
            row.resize(new_capacity, None);
        }
        self.cells.resize_with(new_capacity, || vec![None; new_capacity]);
    }

    pub(crate) fn add_edge(
        &mut self,
        source: V,
        destination: V,
        weight: Weight,
        direction: Direction,
    ) {
        let same = source == destination;
        let from = self.index_or_insert(source);
        if same {
            return;
        }
        let to = self.index_or_insert(destination);
        self.cells[from][to] = Some(weight);
        if direction == Direction::Undirected {
            self.cells[to][from] = Some(weight);
        }
    }

    pub(crate) fn remove_edge(&mut self, source: &V, destination: &V, direction: Direction) {
        let (Some(from), Some(to)) = (self.index(source), self.index(destination)) else {
            return;
        };
        self.cells[from][to] = None;
        if direction == Direction::Undirected {
            self.cells[to][from] = None;
        }
    }

    /// Remove `vertex` and every edge touching it.
    ///
    /// The vertex holding the last index is moved into the freed slot so
    /// indices stay dense. Returns that relocated vertex and its new index,
    /// or `None` when nothing moved (absent vertex, or it was already last).
    pub(crate) fn remove_vertex(&mut self, vertex: &V) -> Option<(V, usize)> {
        let removed = self.index_of.remove(vertex)?;
        let last = self.vertices.len() - 1;

        let relocated = if removed != last {
            self.cells.swap(removed, last);
            for row in &mut self.cells {
                row.swap(removed, last);
            }
            self.vertices.swap(removed, last);
            let moved = self.vertices[removed].clone();
            self.index_of.insert(moved.clone(), removed);
            tracing::trace!(vertex = ?moved, from = last, to = removed, "relocated matrix index");
            Some((moved, removed))
        } else {
            None
        };

        // The removed vertex now sits at `last`: clear its row and column.
        for cell in &mut self.cells[last] {
            *cell = None;
        }
        for row in &mut self.cells {
            row[last] = None;
        }
        self.vertices.pop();

        relocated
    }

    pub(crate) fn weight(&self, source: &V, destination: &V) -> Option<Weight> {
        let from = self.index(source)?;
        let to = self.index(destination)?;
        self.cells[from][to]
    }

    pub(crate) fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub(crate) fn neighbors(&self, vertex: &V) -> MatrixNeighbors<'_, V> {
        let row: &[Option<Weight>] = match self.index(vertex) {
            Some(index) => &self.cells[index][..self.vertices.len()],
            None => &[],
        };
        MatrixNeighbors {
            cells: row.iter().enumerate(),
            vertices: &self.vertices,
        }
    }
}

/// Non-empty cells of one matrix row.
#[derive(Debug, Clone)]
pub(crate) struct MatrixNeighbors<'a, V> {
    cells: std::iter::Enumerate<std::slice::Iter<'a, Option<Weight>>>,
    vertices: &'a [V],
}

impl<'a, V> Iterator for MatrixNeighbors<'a, V> {
    type Item = (&'a V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let vertices = self.vertices;
        self.cells
            .find_map(|(index, cell)| cell.map(|weight| (&vertices[index], weight)))
    }
}

// ---------------------------------------------------------------------------
// Sparse store
// ---------------------------------------------------------------------------

/// Per-vertex neighbor sets keyed by destination.
///
/// Both levels preserve insertion order, so vertex and neighbor enumeration
/// is deterministic for a given sequence of mutations.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencySet<V> {
    adjacency: IndexMap<V, IndexMap<V, Weight>>,
}

impl<V: Vertex> AdjacencySet<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub(crate) fn add_vertex(&mut self, vertex: V) -> &mut IndexMap<V, Weight> {
        self.adjacency.entry(vertex).or_default()
    }

    pub(crate) fn add_edge(
        &mut self,
        source: V,
        destination: V,
        weight: Weight,
        direction: Direction,
    ) {
        if source == destination {
            self.add_vertex(source);
            return;
        }
        self.add_vertex(source.clone())
            .entry(destination.clone())
            .or_insert(weight);
        let reverse = self.add_vertex(destination);
        if direction == Direction::Undirected {
            reverse.entry(source).or_insert(weight);
        }
    }

    pub(crate) fn remove_edge(&mut self, source: &V, destination: &V, direction: Direction) {
        let Some(neighbors) = self.adjacency.get_mut(source) else {
            return;
        };
        neighbors.shift_remove(destination);
        if direction == Direction::Undirected {
            if let Some(reverse) = self.adjacency.get_mut(destination) {
                reverse.shift_remove(source);
            }
        }
    }

    pub(crate) fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(vertex);
        }
        true
    }

    pub(crate) fn weight(&self, source: &V, destination: &V) -> Option<Weight> {
        self.adjacency.get(source)?.get(destination).copied()
    }

    pub(crate) fn vertices(&self) -> indexmap::map::Keys<'_, V, IndexMap<V, Weight>> {
        self.adjacency.keys()
    }

    pub(crate) fn neighbors(&self, vertex: &V) -> Option<indexmap::map::Iter<'_, V, Weight>> {
        self.adjacency.get(vertex).map(|neighbors| neighbors.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_with(edges: &[(u32, u32, Weight)], capacity: usize) -> AdjacencyMatrix<u32> {
        let mut m = AdjacencyMatrix::with_capacity(capacity);
        for &(s, d, w) in edges {
            m.add_edge(s, d, w, Direction::Directed);
        }
        m
    }

    fn sorted_neighbors(m: &AdjacencyMatrix<u32>, v: u32) -> Vec<(u32, Weight)> {
        let mut out: Vec<(u32, Weight)> = m.neighbors(&v).map(|(n, w)| (*n, w)).collect();
        out.sort();
        out
    }

    // --- Matrix growth ---

    #[test]
    fn test_matrix_doubles_when_full() {
        let mut m = AdjacencyMatrix::with_capacity(2);
        m.add_edge(0u32, 1, 5, Direction::Directed);
        assert_eq!(m.capacity(), 2);
        m.add_vertex_for_test(2);
        assert_eq!(m.capacity(), 4);
        m.add_vertex_for_test(3);
        m.add_vertex_for_test(4);
        assert_eq!(m.capacity(), 8);
        // Growth keeps existing cells
        assert_eq!(m.weight(&0, &1), Some(5));
    }

    #[test]
    fn test_matrix_growth_from_one() {
        let mut m = AdjacencyMatrix::with_capacity(1);
        for i in 0..10u32 {
            m.add_edge(i, i + 1, i as Weight, Direction::Directed);
        }
        assert_eq!(m.len(), 11);
        assert!(m.capacity() >= 11);
        for i in 0..10u32 {
            assert_eq!(m.weight(&i, &(i + 1)), Some(i as Weight));
        }
    }

    #[test]
    fn test_matrix_overwrites_weight() {
        let m = matrix_with(&[(0, 1, 3), (0, 1, 9)], 4);
        assert_eq!(m.weight(&0, &1), Some(9));
    }

    #[test]
    fn test_matrix_self_edge_registers_vertex_only() {
        let m = matrix_with(&[(7, 7, 2)], 4);
        assert!(m.contains(&7));
        assert_eq!(m.neighbors(&7).count(), 0);
    }

    // --- Matrix removal / relocation ---

    #[test]
    fn test_matrix_remove_relocates_last_vertex() {
        // indices: 0→#0, 1→#1, 2→#2, 3→#3
        let mut m = matrix_with(&[(0, 1, 1), (1, 2, 2), (3, 0, 4), (2, 3, 3), (3, 1, 5)], 4);
        assert_eq!(m.index(&3), Some(3));

        let moved = m.remove_vertex(&1);
        assert_eq!(moved, Some((3, 1)));
        assert_eq!(m.index(&3), Some(1));
        assert_eq!(m.index(&1), None);
        assert_eq!(m.len(), 3);

        // Relocated vertex keeps its outgoing and incoming edges
        assert_eq!(sorted_neighbors(&m, 3), vec![(0, 4)]);
        assert_eq!(sorted_neighbors(&m, 2), vec![(3, 3)]);
        // Edges into the removed vertex are gone
        assert!(sorted_neighbors(&m, 0).is_empty());
    }

    #[test]
    fn test_matrix_remove_last_index_moves_nothing() {
        let mut m = matrix_with(&[(0, 1, 1), (1, 2, 2)], 4);
        assert_eq!(m.remove_vertex(&2), None);
        assert_eq!(m.len(), 2);
        assert!(sorted_neighbors(&m, 1).is_empty());
        assert_eq!(sorted_neighbors(&m, 0), vec![(1, 1)]);
    }

    #[test]
    fn test_matrix_remove_absent_is_noop() {
        let mut m = matrix_with(&[(0, 1, 1)], 4);
        assert_eq!(m.remove_vertex(&42), None);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_matrix_vacated_slot_is_clean() {
        let mut m = matrix_with(&[(0, 1, 1), (1, 0, 1)], 4);
        m.remove_vertex(&0);
        // Re-adding lands in the vacated index with no stale edges
        m.add_vertex_for_test(9);
        assert_eq!(m.index(&9), Some(1));
        assert!(sorted_neighbors(&m, 9).is_empty());
        assert!(sorted_neighbors(&m, 1).is_empty());
    }

    // --- Sparse store ---

    #[test]
    fn test_set_keeps_first_weight() {
        let mut s = AdjacencySet::with_capacity(0);
        s.add_edge(0u32, 1, 3, Direction::Directed);
        s.add_edge(0, 1, 9, Direction::Directed);
        assert_eq!(s.weight(&0, &1), Some(3));
    }

    #[test]
    fn test_set_undirected_mirror() {
        let mut s = AdjacencySet::with_capacity(0);
        s.add_edge("a", "b", 4, Direction::Undirected);
        assert_eq!(s.weight(&"a", &"b"), Some(4));
        assert_eq!(s.weight(&"b", &"a"), Some(4));
        s.remove_edge(&"b", &"a", Direction::Undirected);
        assert_eq!(s.weight(&"a", &"b"), None);
        assert_eq!(s.weight(&"b", &"a"), None);
    }

    #[test]
    fn test_set_remove_vertex_drops_incoming() {
        let mut s = AdjacencySet::with_capacity(0);
        s.add_edge(0u32, 1, 1, Direction::Directed);
        s.add_edge(2, 1, 1, Direction::Directed);
        s.add_edge(1, 2, 1, Direction::Directed);
        assert!(s.remove_vertex(&1));
        assert!(!s.contains(&1));
        assert_eq!(s.neighbors(&0).map(|n| n.count()), Some(0));
        assert_eq!(s.neighbors(&2).map(|n| n.count()), Some(0));
        assert!(!s.remove_vertex(&1));
    }

    #[test]
    fn test_set_enumerates_in_insertion_order() {
        let mut s = AdjacencySet::with_capacity(0);
        s.add_edge(5u32, 3, 1, Direction::Directed);
        s.add_edge(1, 5, 1, Direction::Directed);
        let order: Vec<u32> = s.vertices().copied().collect();
        assert_eq!(order, vec![5, 3, 1]);
    }

    impl<V: Vertex> AdjacencyMatrix<V> {
        fn add_vertex_for_test(&mut self, vertex: V) {
            self.index_or_insert(vertex);
        }
    }
}
