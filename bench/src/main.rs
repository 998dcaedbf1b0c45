use dijkstra_core::{
    shortest_paths_with, Graph, Result, SearchObserver, Selection, VertexId, Weight,
};
use std::collections::VecDeque;
use std::time::Instant;

type Generator = fn(usize) -> Result<Graph>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: dijkstra-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Branching tree (deep paths, unique routes)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default vertex_count: 20000 (linear scan is O(V^2))");
        return;
    }

    println!("dijkstra-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("Branching tree", gen_tree as Generator),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            std::process::exit(2);
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, vertex_count) {
            eprintln!("{}: {}", name, e);
            std::process::exit(1);
        }
    }
}

/// Counts engine work for the report table.
#[derive(Default)]
struct WorkCounter {
    finalized: usize,
    relaxations: usize,
}

impl SearchObserver for WorkCounter {
    fn on_finalize(&mut self, _vertex: VertexId, _distance: Weight) {
        self.finalized += 1;
    }

    fn on_relax(&mut self, _v: VertexId, _via: VertexId, _old: Option<Weight>, _new: Weight) {
        self.relaxations += 1;
    }
}

fn run_benchmark(name: &str, generator: Generator, vertex_count: usize) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} vertex slots, {} arcs, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.capacity(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!(
        "{:>12} {:>10} {:>12} {:>10}",
        "selection", "finalized", "relaxations", "time"
    );
    println!("{:->12} {:->10} {:->12} {:->10}", "", "", "", "");

    let mut results = Vec::new();
    for (label, selection) in [
        ("linear-scan", Selection::LinearScan),
        ("binary-heap", Selection::BinaryHeap),
    ] {
        let mut counter = WorkCounter::default();
        let t = Instant::now();
        let sp = shortest_paths_with(&graph, 1, selection, &mut counter)?;
        let elapsed = t.elapsed();
        println!(
            "{:>12} {:>10} {:>12} {:>8.1}ms",
            label,
            counter.finalized,
            counter.relaxations,
            elapsed.as_secs_f64() * 1000.0
        );
        results.push(sp);
    }

    if results[0].distances() != results[1].distances() {
        println!("WARNING: selection strategies disagree on distances");
    }

    // Path from vertex 1 to the last vertex slot
    let far = graph.capacity();
    println!();
    match results[0].path_to(far) {
        Some(path) => println!(
            "Shortest path 1 → {}: weight {}, {} hops",
            far,
            results[0].distance(far).unwrap_or_default(),
            path.len() - 1
        ),
        None => println!("Shortest path 1 → {}: no path", far),
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators — deterministic, vertex ids 1..=n, weights in 1..=WEIGHT_RANGE
// ---------------------------------------------------------------------------

const WEIGHT_RANGE: u64 = 100;

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
    /// Vertex id in `1..=n`.
    fn vertex(&mut self, n: usize) -> VertexId {
        self.next(n as u64) as usize + 1
    }
    fn weight(&mut self) -> Weight {
        (self.next(WEIGHT_RANGE) + 1) as Weight
    }
}

/// Branching tree: each vertex gets 3 children, undirected.
fn gen_tree(n: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(false, n)?;
    let mut rng = FastRng::new(42);

    let branching = 3;
    let mut next_id = 2;
    let mut frontier: Vec<VertexId> = vec![1];

    while next_id <= n && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id > n {
                    break;
                }
                graph.add_edge(parent, next_id, rng.weight())?;
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Scale-free via edge-list sampling, undirected.
///
/// Preferential attachment by picking a random existing edge endpoint.
/// Vertices with more edges are more likely to be picked.
fn gen_scale_free(n: usize) -> Result<Graph> {
    let edges_per_vertex = 5;
    let mut graph = Graph::with_capacity(false, n)?;
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<VertexId> = Vec::with_capacity(n * edges_per_vertex * 2);

    // Seed: small clique
    let seed = 5.min(n);
    for i in 1..=seed {
        for j in (i + 1)..=seed {
            graph.add_edge(i, j, rng.weight())?;
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for v in (seed + 1)..=n {
        for _ in 0..edges_per_vertex.min(v - 1) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != v {
                graph.add_edge(v, target, rng.weight())?;
                endpoints.push(v);
                endpoints.push(target);
            }
        }
    }

    Ok(graph)
}

/// Small-world (Watts-Strogatz): directed ring lattice with rewiring.
fn gen_small_world(n: usize) -> Result<Graph> {
    let k = 5; // neighbors ahead on the ring
    let p = 0.05f64; // rewire probability
    let mut graph = Graph::with_capacity(true, n)?;
    let mut rng = FastRng::new(67890);

    for i in 0..n {
        for j in 1..=k {
            let neighbor = (i + j) % n + 1;
            let target = if rng.next_f64() < p {
                rng.vertex(n)
            } else {
                neighbor
            };
            graph.add_edge(i + 1, target, rng.weight())?;
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: ~5 uniform random directed edges per vertex.
fn gen_random(n: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(true, n)?;
    let mut rng = FastRng::new(54321);

    for _ in 0..n * 5 {
        let from = rng.vertex(n);
        let to = rng.vertex(n);
        if from != to {
            graph.add_edge(from, to, rng.weight())?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense undirected clusters joined by a chain of bridge vertices.
fn gen_barbell(n: usize) -> Result<Graph> {
    let bridge_len = 10.min(n);
    let cluster = (n - bridge_len) / 2;
    let mut graph = Graph::with_capacity(false, n)?;
    let mut rng = FastRng::new(99999);

    let mut dense = |graph: &mut Graph, first: VertexId| -> Result<()> {
        for i in 0..cluster {
            for _ in 0..10.min(cluster.saturating_sub(1)) {
                let j = rng.next(cluster as u64) as usize;
                if j != i {
                    graph.add_edge(first + i, first + j, rng.weight())?;
                }
            }
        }
        Ok(())
    };

    // Cluster A: 1..=cluster, bridge next, cluster B after
    dense(&mut graph, 1)?;
    let bridge_start = cluster + 1;
    for id in bridge_start..bridge_start + bridge_len {
        graph.add_edge(id - 1, id, 1)?;
    }
    let b_start = bridge_start + bridge_len;
    dense(&mut graph, b_start)?;
    graph.add_edge(b_start - 1, b_start, 1)?;

    Ok(graph)
}

/// DLA: each new vertex attaches to a recent "surface" vertex, with
/// occasional shortcuts. Undirected.
fn gen_dla(n: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(false, n)?;
    let mut rng = FastRng::new(77777);

    let surface_max = 1000usize;
    let mut surface: VecDeque<VertexId> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(1);

    for v in 2..=n {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(v, attach_to, rng.weight())?;

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && v > 2 {
            let other = rng.vertex(v - 1);
            if other != attach_to {
                graph.add_edge(v, other, rng.weight())?;
            }
        }

        surface.push_back(v);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    Ok(graph)
}
