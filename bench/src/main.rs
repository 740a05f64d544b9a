use std::collections::VecDeque;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use graph_compute_core::{
    analyze, find_shortest_path, find_spanning_tree, select_shortest_path_strategy,
    topological_sort, traverse, Density, Direction, Graph, GraphConfig, GraphError,
    ShortestPathStrategy, SpanningTreeStrategy, TraversalOrder, Weight,
};
use tracing_subscriber::EnvFilter;

/// Bellman-Ford is O(V·E); skip it above this many vertices.
const BELLMAN_FORD_LIMIT: usize = 5_000;

#[derive(Parser, Debug)]
#[command(
    name = "graph-compute-bench",
    about = "Run graph-compute-core algorithms over generated graphs"
)]
struct Cli {
    /// Graph generator to run
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target vertex count per generated graph
    #[arg(
        short,
        long,
        default_value_t = 2_000,
        value_parser = clap::value_parser!(u64).range(16..)
    )]
    nodes: u64,

    /// Storage strategy
    #[arg(long, value_enum, default_value_t = DensityArg::Sparse)]
    density: DensityArg,

    /// Edge direction
    #[arg(long, value_enum, default_value_t = DirectionArg::Directed)]
    direction: DirectionArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every generator in turn
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke)
    Scalefree,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense clusters joined by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DensityArg {
    Dense,
    Sparse,
}

impl From<DensityArg> for Density {
    fn from(arg: DensityArg) -> Self {
        match arg {
            DensityArg::Dense => Density::Dense,
            DensityArg::Sparse => Density::Sparse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Directed,
    Undirected,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Directed => Direction::Directed,
            DirectionArg::Undirected => Direction::Undirected,
        }
    }
}

type Generator = fn(u64, GraphConfig) -> Result<Graph<u64>, GraphError<u64>>;

fn main() -> Result<(), GraphError<u64>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GraphConfig {
        direction: cli.direction.into(),
        density: cli.density.into(),
        initial_capacity: Some(cli.nodes as usize),
    };

    println!("graph-compute-bench");
    println!("===================");
    println!("{:?} / {:?}, target {} vertices", config.direction, config.density, cli.nodes);
    println!();

    let generators: Vec<(&str, Generator)> = match cli.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, cli.nodes, config)?;
    }
    Ok(())
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn run_benchmark(
    name: &str,
    generator: Generator,
    node_count: u64,
    config: GraphConfig,
) -> Result<(), GraphError<u64>> {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(node_count, config)?;
    let gen_time = t.elapsed();
    let metadata = analyze(&graph);
    println!("Generated in {:.1}ms: {}", millis(gen_time), metadata);

    // Traversal reach from vertex 0
    println!();
    println!("{:>14} {:>10} {:>10}", "traversal", "reached", "time");
    println!("{:->14} {:->10} {:->10}", "", "", "");
    for (label, order) in [
        ("breadth-first", TraversalOrder::BreadthFirst),
        ("depth-first", TraversalOrder::DepthFirst),
    ] {
        let t = Instant::now();
        let reached = traverse(&graph, &0, order).count();
        println!("{:>14} {:>10} {:>8.1}ms", label, reached, millis(t.elapsed()));
    }

    // Shortest path: vertex 0 to the highest id (generators number vertices contiguously)
    let far = graph.len().saturating_sub(1) as u64;
    let preferred = select_shortest_path_strategy(&metadata);
    println!();
    println!("Shortest path 0 → {} (auto-dispatch: {:?})", far, preferred);
    println!("{:>14} {:>10} {:>10} {:>10}", "strategy", "hops", "distance", "time");
    println!("{:->14} {:->10} {:->10} {:->10}", "", "", "", "");
    for strategy in [
        ShortestPathStrategy::Unweighted,
        ShortestPathStrategy::Dijkstra,
        ShortestPathStrategy::BellmanFord,
    ] {
        if strategy == ShortestPathStrategy::BellmanFord && graph.len() > BELLMAN_FORD_LIMIT {
            println!("{:>14} (skipped above {} vertices)", "BellmanFord", BELLMAN_FORD_LIMIT);
            continue;
        }
        let t = Instant::now();
        let path = find_shortest_path(&graph, &0, &far, strategy)?;
        let elapsed = t.elapsed();
        match path {
            Some(p) => println!(
                "{:>14} {:>10} {:>10} {:>8.1}ms",
                format!("{:?}", strategy),
                p.hops(),
                p.distance(),
                millis(elapsed)
            ),
            None => println!(
                "{:>14} {:>10} {:>10} {:>8.1}ms",
                format!("{:?}", strategy),
                "-",
                "no path",
                millis(elapsed)
            ),
        }
    }

    // Spanning trees
    println!();
    println!("{:>14} {:>10} {:>10} {:>10}", "spanning", "edges", "weight", "time");
    println!("{:->14} {:->10} {:->10} {:->10}", "", "", "", "");
    for strategy in [SpanningTreeStrategy::Prims, SpanningTreeStrategy::Kruskals] {
        let t = Instant::now();
        let result = find_spanning_tree(&graph, strategy);
        let elapsed = t.elapsed();
        let label = format!("{:?}", strategy);
        match result {
            Ok(Some(tree)) => println!(
                "{:>14} {:>10} {:>10} {:>8.1}ms",
                label,
                tree.len(),
                tree.total_weight(),
                millis(elapsed)
            ),
            Ok(None) => println!("{:>14} (empty graph)", label),
            Err(e) => println!("{:>14} {} ({:.1}ms)", label, e, millis(elapsed)),
        }
    }

    // Topological sort
    println!();
    let t = Instant::now();
    let order = topological_sort(&graph);
    let elapsed = t.elapsed();
    match order {
        Some(order) => println!(
            "Topological sort: {} vertices ordered in {:.1}ms",
            order.len(),
            millis(elapsed)
        ),
        None => println!("Topological sort: cyclic ({:.1}ms)", millis(elapsed)),
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Edge weight in `1..=20`.
    fn weight(&mut self) -> Weight {
        self.next(20) as Weight + 1
    }
}

/// L-system fractal tree: each vertex spawns three children.
///
/// Deep paths with exponential width. Directed, it is the only generator
/// that always yields a DAG.
fn gen_lsystem(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(42);

    let branching = 3u64;
    graph.add_vertex(0);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_weighted_edge(parent, child, rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Scale-free via edge-list sampling.
///
/// Picking a random endpoint from the edge list attaches proportionally
/// to degree.
fn gen_scale_free(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let edges_per_node = 5u64;
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique
    let seed = 5u64;
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_weighted_edge(i, j, rng.weight());
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_vertex in seed..node_count {
        graph.add_vertex(new_vertex);
        for _ in 0..edges_per_node {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_vertex {
                graph.add_weighted_edge(new_vertex, target, rng.weight());
                endpoints.push(new_vertex);
                endpoints.push(target);
            }
        }
    }

    Ok(graph)
}

/// Small-world (Watts-Strogatz): ring lattice with random rewiring.
fn gen_small_world(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let k = 5u64; // forward neighbors on the ring
    let p = 0.05f64; // rewire probability
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let weight = rng.weight();
            let target = if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    rewired
                } else {
                    neighbor
                }
            } else {
                neighbor
            };
            graph.add_weighted_edge(i, target, weight);
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: about five uniform random edges per vertex.
fn gen_random(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let target_edges = node_count * 5;
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_weighted_edge(from, to, rng.weight());
        }
    }

    Ok(graph)
}

/// Barbell: two dense clusters joined by a chain of ten bridge vertices.
///
/// Every path between the clusters funnels through the bridge.
fn gen_barbell(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let bridge_len = 10u64;
    let cluster = (node_count.saturating_sub(bridge_len) / 2).max(2);
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(99999);

    let mut fill = |graph: &mut Graph<u64>, offset: u64| {
        for i in 0..cluster {
            graph.add_vertex(offset + i);
            for _ in 0..10u64.min(cluster - 1) {
                let target = rng.next(cluster);
                if target != i {
                    graph.add_weighted_edge(offset + i, offset + target, rng.weight());
                }
            }
        }
    };

    fill(&mut graph, 0);

    let bridge_start = cluster;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let previous = if i == 0 { cluster - 1 } else { id - 1 };
        graph.add_weighted_edge(previous, id, 1);
    }

    let b_start = bridge_start + bridge_len;
    graph.add_weighted_edge(b_start - 1, b_start, 1);
    fill(&mut graph, b_start);

    Ok(graph)
}

/// DLA (diffusion-limited aggregation): organic branching growth.
///
/// Each new vertex attaches to a recent "surface" vertex, with an occasional
/// long-range second edge.
fn gen_dla(node_count: u64, config: GraphConfig) -> Result<Graph<u64>, GraphError<u64>> {
    let mut graph = Graph::with_config(config)?;
    let mut rng = FastRng::new(77777);

    graph.add_vertex(0);

    let surface_max = 1_000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_vertex in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_weighted_edge(attach_to, new_vertex, rng.weight());

        // 10% chance of a second connection (loops and shortcuts)
        if rng.next(10) == 0 && new_vertex > 1 {
            let other = rng.next(new_vertex);
            if other != attach_to {
                graph.add_weighted_edge(new_vertex, other, rng.weight());
            }
        }

        surface.push_back(new_vertex);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    Ok(graph)
}
