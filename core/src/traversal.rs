use std::collections::{HashSet, VecDeque};

use crate::graph::{Graph, Vertex};

/// Visiting order for [`traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    BreadthFirst,
    DepthFirst,
}

/// Pending vertices: FIFO for breadth-first, LIFO for depth-first.
#[derive(Debug, Clone)]
enum Frontier<V> {
    Queue(VecDeque<V>),
    Stack(Vec<V>),
}

impl<V> Frontier<V> {
    fn new(order: TraversalOrder) -> Self {
        match order {
            TraversalOrder::BreadthFirst => Frontier::Queue(VecDeque::new()),
            TraversalOrder::DepthFirst => Frontier::Stack(Vec::new()),
        }
    }

    fn push(&mut self, vertex: V) {
        match self {
            Frontier::Queue(queue) => queue.push_back(vertex),
            Frontier::Stack(stack) => stack.push(vertex),
        }
    }

    fn pop(&mut self) -> Option<V> {
        match self {
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }
}

/// Lazy traversal over every vertex reachable from a start vertex.
///
/// Each reachable vertex is yielded exactly once. The iterator borrows the
/// graph, so the graph cannot change while it is being consumed.
#[derive(Debug, Clone)]
pub struct Traverse<'g, V> {
    graph: &'g Graph<V>,
    frontier: Frontier<V>,
    visited: HashSet<V>,
}

impl<'g, V: Vertex> Iterator for Traverse<'g, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(vertex) = self.frontier.pop() {
            // A vertex can sit in the frontier more than once; only the first pop counts.
            if !self.visited.insert(vertex.clone()) {
                continue;
            }
            for (neighbor, _) in self.graph.neighbors(&vertex) {
                if !self.visited.contains(neighbor) {
                    self.frontier.push(neighbor.clone());
                }
            }
            return Some(vertex);
        }
        None
    }
}

/// Walk `graph` from `start` in the given order.
///
/// Yields nothing when `start` is not in the graph.
pub fn traverse<'g, V: Vertex>(
    graph: &'g Graph<V>,
    start: &V,
    order: TraversalOrder,
) -> Traverse<'g, V> {
    let mut frontier = Frontier::new(order);
    if graph.contains(start) {
        frontier.push(start.clone());
    }
    Traverse {
        graph,
        frontier,
        visited: HashSet::new(),
    }
}

/// Breadth-first walk from `start`.
pub fn bfs<'g, V: Vertex>(graph: &'g Graph<V>, start: &V) -> Traverse<'g, V> {
    traverse(graph, start, TraversalOrder::BreadthFirst)
}

/// Depth-first walk from `start`.
pub fn dfs<'g, V: Vertex>(graph: &'g Graph<V>, start: &V) -> Traverse<'g, V> {
    traverse(graph, start, TraversalOrder::DepthFirst)
}
