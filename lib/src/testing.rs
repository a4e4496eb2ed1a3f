//! Shared helpers for unit tests: seeded random graphs and exhaustive oracles
use crate::graph::BipartiteGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn init_logger() {
    let _ = env_logger::try_init();
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x6b6f_6e69_67)
}

/// Returns a graph with up to `max_m` x `max_n` vertices and a random edge
/// density, occasionally repeating an edge
pub fn random_graph(rng: &mut SmallRng, max_m: usize, max_n: usize) -> BipartiteGraph {
    let m = rng.gen_range(0, max_m + 1);
    let n = rng.gen_range(0, max_n + 1);
    let density: f64 = rng.gen();
    let mut graph = BipartiteGraph::new(m, n).expect("small sizes are valid");
    for u in 1..=m {
        for v in 1..=n {
            if rng.gen_bool(density) {
                graph.add_edge(u, v).expect("in range");
                if rng.gen_bool(0.05) {
                    graph.add_edge(u, v).expect("in range");
                }
            }
        }
    }
    graph
}

/// Maximum matching size by memoized search over subsets of used right vertices
pub fn brute_force_matching_size(graph: &BipartiteGraph) -> usize {
    let n = graph.right_count();
    assert!(n <= 16);
    let mut memo = vec![vec![None; 1 << n]; graph.left_count() + 2];
    best_from(graph, 1, 0, &mut memo)
}

fn best_from(graph: &BipartiteGraph, u: usize, used: usize, memo: &mut Vec<Vec<Option<usize>>>) -> usize {
    if u > graph.left_count() {
        return 0;
    }
    if let Some(best) = memo[u][used] {
        return best;
    }
    let mut best = best_from(graph, u + 1, used, memo);
    for &v in graph.neighbors(u) {
        let bit = 1 << (v - 1);
        if used & bit == 0 {
            best = best.max(1 + best_from(graph, u + 1, used | bit, memo));
        }
    }
    memo[u][used] = Some(best);
    best
}

/// Maximum independent set size by trying every vertex subset
pub fn brute_force_independent_set_size(graph: &BipartiteGraph) -> usize {
    let (m, n) = (graph.left_count(), graph.right_count());
    assert!(m + n <= 16);
    let edges: Vec<_> = graph.edges().collect();
    let mut best = 0;
    for left in 0usize..(1 << m) {
        for right in 0usize..(1 << n) {
            let independent = edges
                .iter()
                .all(|&(u, v)| left & (1 << (u - 1)) == 0 || right & (1 << (v - 1)) == 0);
            if independent {
                best = best.max((left.count_ones() + right.count_ones()) as usize);
            }
        }
    }
    best
}
