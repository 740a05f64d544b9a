use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::graph::{Graph, Vertex};

/// Topological order of `graph` by Kahn's algorithm.
///
/// Vertices with no incoming edges are emitted in enumeration order, then
/// each vertex as soon as its last predecessor has been emitted. Returns
/// `None` when the graph has a cycle; no partial order is produced.
pub fn topological_sort<V: Vertex>(graph: &Graph<V>) -> Option<Vec<V>> {
    let mut in_degree: IndexMap<&V, usize> = graph.vertices().map(|v| (v, 0)).collect();
    for source in graph.vertices() {
        for (destination, _) in graph.neighbors(source) {
            if let Some(degree) = in_degree.get_mut(destination) {
                *degree += 1;
            }
        }
    }

    let mut queue: VecDeque<&V> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(&v, _)| v)
        .collect();
    if queue.is_empty() && !graph.is_empty() {
        tracing::debug!(vertices = graph.len(), "no vertex without incoming edges");
        return None;
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.clone());
        for (neighbor, _) in graph.neighbors(vertex) {
            let Some(degree) = in_degree.get_mut(neighbor) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(neighbor);
            }
        }
    }

    if order.len() < graph.len() {
        tracing::debug!(
            emitted = order.len(),
            vertices = graph.len(),
            "cycle prevents a topological order"
        );
        return None;
    }
    Some(order)
}
