//! Shared graphs for unit tests.
//!
//! Most come from the visualgo.net data sets (CP3 figures) plus a few
//! classic adversarial inputs for Dijkstra and Bellman-Ford.

use crate::graph::{Density, Direction, Graph, Weight};

type Weighted<'a> = &'a [(u32, &'a [(u32, Weight)])];
type Unweighted<'a> = &'a [(u32, &'a [u32])];

pub(crate) fn weighted(direction: Direction, density: Density, rows: Weighted<'_>) -> Graph<u32> {
    let mut g = Graph::new(direction, density);
    for &(vertex, neighbors) in rows {
        g.add_vertex(vertex);
        for &(neighbor, weight) in neighbors {
            g.add_weighted_edge(vertex, neighbor, weight);
        }
    }
    g
}

pub(crate) fn unweighted(
    direction: Direction,
    density: Density,
    rows: Unweighted<'_>,
) -> Graph<u32> {
    let mut g = Graph::new(direction, density);
    g.load_adjacency(rows.iter().map(|&(v, ns)| (v, ns.iter().copied())));
    g
}

// --- Unweighted ---

/// CP3 4.1: two components plus an isolated vertex.
pub(crate) fn cp3_4_1(direction: Direction, density: Density) -> Graph<u32> {
    unweighted(
        direction,
        density,
        &[
            (0, &[1]),
            (1, &[0, 2, 3]),
            (2, &[1, 3]),
            (3, &[1, 2, 4]),
            (4, &[3]),
            (5, &[]),
            (6, &[7, 8]),
            (7, &[6]),
            (8, &[6]),
        ],
    )
}

/// CP3 4.3: 13-vertex grid-like graph, every edge listed in both directions.
pub(crate) fn cp3_4_3(direction: Direction, density: Density) -> Graph<u32> {
    unweighted(
        direction,
        density,
        &[
            (0, &[1, 4]),
            (1, &[0, 2, 5]),
            (2, &[1, 3, 6]),
            (3, &[2, 7]),
            (4, &[0, 8]),
            (5, &[1, 6, 10]),
            (6, &[2, 5, 11]),
            (7, &[3, 12]),
            (8, &[4, 9]),
            (9, &[8, 10]),
            (10, &[5, 9, 11]),
            (11, &[6, 10, 12]),
            (12, &[7, 11]),
        ],
    )
}

/// CP3 4.4: DAG with a detached 7 → 6 pair.
pub(crate) fn cp3_4_4_dag(density: Density) -> Graph<u32> {
    unweighted(
        Direction::Directed,
        density,
        &[
            (0, &[1, 2]),
            (1, &[2, 3]),
            (2, &[3, 5]),
            (3, &[4]),
            (7, &[6]),
        ],
    )
}

/// CP3 4.9: directed graph with the cycle 4 → 5 → 7 → 6 → 4.
pub(crate) fn cp3_4_9(density: Density) -> Graph<u32> {
    unweighted(
        Direction::Directed,
        density,
        &[
            (0, &[1]),
            (1, &[3]),
            (2, &[1]),
            (3, &[2, 4]),
            (4, &[5]),
            (5, &[7]),
            (6, &[4]),
            (7, &[6]),
        ],
    )
}

/// CP3 4.17 as an unweighted DAG.
pub(crate) fn cp3_4_17_dag(density: Density) -> Graph<u32> {
    unweighted(
        Direction::Directed,
        density,
        &[(0, &[1, 2, 3]), (1, &[3, 4]), (2, &[4]), (3, &[4])],
    )
}

/// CP3 4.18: bipartite DAG.
pub(crate) fn cp3_4_18_dag(density: Density) -> Graph<u32> {
    unweighted(
        Direction::Directed,
        density,
        &[(0, &[1, 2]), (1, &[3]), (2, &[3]), (3, &[4])],
    )
}

/// CP3 4.19: bipartite graph with the 2-cycle 1 ⇄ 2.
pub(crate) fn cp3_4_19_bipartite(density: Density) -> Graph<u32> {
    unweighted(
        Direction::Directed,
        density,
        &[(0, &[1, 4]), (1, &[2]), (2, &[1, 3]), (3, &[]), (4, &[])],
    )
}

// --- Weighted, directed ---

/// CP3 4.17 directed/weighted.
pub(crate) fn cp3_4_17(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 2), (2, 6), (3, 7)]),
            (1, &[(3, 3), (4, 6)]),
            (2, &[(4, 1)]),
            (3, &[(4, 5)]),
            (4, &[]),
        ],
    )
}

/// CP3 4.18: one negative edge, no negative cycle.
pub(crate) fn cp3_4_18_negative_weight(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 1), (2, 10)]),
            (1, &[(3, 2)]),
            (2, &[(3, -10)]),
            (3, &[(4, 3)]),
            (4, &[]),
        ],
    )
}

/// CP3 4.19: negative cycle 1 → 2 → 1 reachable from 0.
pub(crate) fn cp3_4_19_negative_cycle(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 99), (4, -99)]),
            (1, &[(2, 15)]),
            (2, &[(1, -42), (3, 10)]),
            (3, &[]),
            (4, &[]),
        ],
    )
}

/// Negative weights that break Dijkstra's settle-once rule.
pub(crate) fn dijkstras_killer(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 16), (2, 0)]),
            (1, &[(2, -32)]),
            (2, &[(3, 8), (4, 0)]),
            (3, &[(4, -16)]),
            (4, &[(5, 4), (6, 0)]),
            (5, &[(6, -8)]),
            (6, &[(7, 2), (8, 0)]),
            (7, &[(8, -4)]),
            (8, &[(9, 1), (10, 0)]),
            (9, &[(10, -2)]),
            (10, &[]),
        ],
    )
}

/// Chain whose edges are listed so Bellman-Ford needs every round.
pub(crate) fn bellman_fords_killer(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 6)]),
            (1, &[(2, 5)]),
            (2, &[(3, 4)]),
            (3, &[(4, 3)]),
            (4, &[(5, 2)]),
            (5, &[(6, 1)]),
            (6, &[]),
        ],
    )
}

pub(crate) fn ds0_bellman(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 2), (2, 1)]),
            (1, &[(3, 3), (4, -2)]),
            (2, &[(1, -5), (4, 2)]),
            (3, &[]),
            (4, &[(3, 1)]),
        ],
    )
}

/// Negative cycle 1 → 4 → 3 → 1.
pub(crate) fn ds1_bellman_cycle(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 2), (2, 3)]),
            (1, &[(4, -5)]),
            (2, &[(4, 6)]),
            (3, &[(1, 2)]),
            (4, &[(3, -4)]),
        ],
    )
}

/// 3 costs 8 both as 0 → 1 → 3 and as 0 → 2 → 4 → 3; the first has fewer edges.
pub(crate) fn ds0_dijkstra_multiple_path(density: Density) -> Graph<u32> {
    weighted(
        Direction::Directed,
        density,
        &[
            (0, &[(1, 5), (2, 1)]),
            (1, &[(3, 3), (4, 5)]),
            (2, &[(4, 3)]),
            (3, &[]),
            (4, &[(3, 4)]),
        ],
    )
}

// --- Spanning trees (listed with both directions) ---

pub(crate) fn cp3_4_10(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 4), (2, 4), (3, 6), (4, 6)]),
            (1, &[(0, 4), (2, 2)]),
            (2, &[(0, 4), (1, 2), (3, 8)]),
            (3, &[(0, 6), (2, 8), (4, 9)]),
            (4, &[(0, 6), (3, 9)]),
        ],
    )
}

pub(crate) fn cp3_4_14(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 9), (2, 75)]),
            (1, &[(0, 9), (2, 95), (3, 19), (4, 42)]),
            (2, &[(0, 75), (1, 95), (3, 51)]),
            (3, &[(1, 19), (2, 51), (4, 31)]),
            (4, &[(1, 42), (3, 31)]),
        ],
    )
}

/// Complete graph on five vertices.
pub(crate) fn k5(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 24), (2, 13), (3, 13), (4, 22)]),
            (1, &[(0, 24), (2, 22), (3, 13), (4, 13)]),
            (2, &[(0, 13), (1, 22), (3, 19), (4, 14)]),
            (3, &[(0, 13), (1, 13), (2, 19), (4, 19)]),
            (4, &[(0, 22), (1, 13), (2, 14), (3, 19)]),
        ],
    )
}

pub(crate) fn rail(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 10)]),
            (1, &[(0, 10), (2, 10), (6, 8), (7, 13)]),
            (2, &[(1, 10), (3, 10), (7, 8), (8, 13)]),
            (3, &[(2, 10), (4, 10), (8, 8)]),
            (4, &[(3, 10)]),
            (5, &[(6, 10)]),
            (6, &[(5, 10), (1, 8), (7, 10)]),
            (7, &[(6, 10), (8, 11), (1, 13), (2, 8)]),
            (8, &[(7, 10), (9, 10), (2, 13), (3, 8)]),
            (9, &[(8, 10)]),
        ],
    )
}

/// Rail with vertex 0 isolated. 0 is still the first vertex.
pub(crate) fn rail_0_disconnected(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[]),
            (1, &[(2, 10), (6, 8), (7, 13)]),
            (2, &[(1, 10), (3, 10), (7, 8), (8, 13)]),
            (3, &[(2, 10), (4, 10), (8, 8)]),
            (4, &[(3, 10)]),
            (5, &[(6, 10)]),
            (6, &[(5, 10), (1, 8), (7, 10)]),
            (7, &[(6, 10), (8, 11), (1, 13), (2, 8)]),
            (8, &[(7, 10), (9, 10), (2, 13), (3, 8)]),
            (9, &[(8, 10)]),
        ],
    )
}

/// Rail with vertex 5 isolated.
pub(crate) fn rail_5_disconnected(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 10)]),
            (1, &[(0, 10), (2, 10), (6, 8), (7, 13)]),
            (2, &[(1, 10), (3, 10), (7, 8), (8, 13)]),
            (3, &[(2, 10), (4, 10), (8, 8)]),
            (4, &[(3, 10)]),
            (5, &[]),
            (6, &[(1, 8), (7, 10)]),
            (7, &[(6, 10), (8, 11), (1, 13), (2, 8)]),
            (8, &[(7, 10), (9, 10), (2, 13), (3, 8)]),
            (9, &[(8, 10)]),
        ],
    )
}

pub(crate) fn tessellation(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 8), (2, 12)]),
            (1, &[(0, 8), (2, 13), (3, 25), (4, 9)]),
            (2, &[(0, 12), (1, 13), (3, 14), (6, 21)]),
            (3, &[(1, 25), (2, 14), (4, 20), (5, 8), (6, 12), (7, 12), (8, 16)]),
            (4, &[(1, 9), (3, 20), (5, 19)]),
            (5, &[(3, 8), (4, 19), (7, 11)]),
            (6, &[(2, 21), (3, 12), (8, 11)]),
            (7, &[(3, 12), (5, 11), (8, 9)]),
            (8, &[(3, 16), (6, 11), (7, 9)]),
        ],
    )
}

pub(crate) fn ds1_prims(direction: Direction, density: Density) -> Graph<u32> {
    weighted(
        direction,
        density,
        &[
            (0, &[(1, 3), (2, 15), (4, 5)]),
            (1, &[(0, 3), (2, 2), (4, 5), (5, 8)]),
            (2, &[(0, 15), (1, 2), (5, 9)]),
            (3, &[(4, 11), (5, 4)]),
            (4, &[(0, 5), (1, 5), (3, 11), (5, 4)]),
            (5, &[(1, 8), (2, 9), (3, 4), (4, 4)]),
        ],
    )
}
