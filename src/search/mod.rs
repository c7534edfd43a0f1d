//! Search algorithms for the graph coloring problem.

/// first-fit greedy coloring engines
pub mod first_fit;

/// randomized multi-trial greedy
pub mod trials;

#[cfg(test)]
pub(crate) mod testing {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use crate::graph::Graph;

    /// G(n,p) random graph, reproducible from its seed
    pub fn random_graph(n:usize, p:f64, seed:u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u+1)..n {
                if rng.gen_bool(p) { edges.push((u,v)); }
            }
        }
        Graph::from_edges(n, edges.len(), &edges).unwrap()
    }
}
