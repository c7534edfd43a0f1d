use crate::color::VertexId;
use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/** compact (CSR) representation of an undirected graph.
the neighbors of vertex i are neighbours[offset[i]..offset[i+1]].
Built once, then only read.
*/
#[derive(Debug, Clone)]
pub struct CompactGraph {
    /// nb vertices
    n: usize,
    /// offset[i]: start of the neighbors of i (offset[n] = 2m)
    offset: Vec<usize>,
    /// flat neighbor array
    neighbours: Vec<VertexId>,
    /// largest degree
    max_degree: usize,
}

impl CompactGraph {

    /** builds the compact representation of a graph.
    The neighbor array is sized 2m from the declared edge count. Fails with
    InconsistentGraphSize if the adjacency lists do not fill it exactly.
    */
    pub fn build(graph:&Graph) -> Result<Self> {
        let n = graph.n();
        let total_degree = graph.declared_m().checked_mul(2)
            .ok_or(ColoringError::InconsistentGraphSize {
                declared: graph.declared_m(), found: graph.nb_parsed_edges(),
            })?;
        // prefix sum over the degrees
        let mut offset = Vec::with_capacity(n+1);
        let mut accum = 0;
        let mut max_degree = 0;
        for l in graph.adj_lists() {
            offset.push(accum);
            accum += l.len();
            max_degree = max_degree.max(l.len());
        }
        offset.push(accum);
        if accum != total_degree {
            return Err(ColoringError::InconsistentGraphSize {
                declared: total_degree, found: accum,
            });
        }
        let mut neighbours = Vec::with_capacity(total_degree);
        for l in graph.adj_lists() {
            neighbours.extend_from_slice(l);
        }
        Ok(Self { n, offset, neighbours, max_degree })
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.neighbours.len() / 2 }

    /// offsets (n+1 values)
    pub fn offsets(&self) -> &[usize] { &self.offset }

    /// flat neighbor array
    pub fn neighbours(&self) -> &[VertexId] { &self.neighbours }

    /// vertices adjacent to u
    pub fn neighbors(&self, u:VertexId) -> &[VertexId] {
        &self.neighbours[self.offset[u]..self.offset[u+1]]
    }

    /// degree of u
    pub fn degree(&self, u:VertexId) -> usize { self.offset[u+1] - self.offset[u] }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize { self.max_degree }

    /// logs some statistics of the instance
    pub fn display_statistics(&self) {
        log::info!("\t{} \t vertices", self.n());
        log::info!("\t{} \t edges", self.nb_edges());
        let min_degree = (0..self.n()).map(|i| self.degree(i)).min().unwrap_or(0);
        log::info!("\t{} \t min degree", min_degree);
        log::info!("\t{} \t max degree", self.max_degree());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::edge_list::read_from_file;

    #[test]
    fn test_build_cycle() {
        let g = read_from_file("insts/cycle4.txt").unwrap();
        let cg = CompactGraph::build(&g).unwrap();
        assert_eq!(cg.n(), 4);
        assert_eq!(cg.nb_edges(), 4);
        assert_eq!(cg.offsets(), &[0,2,4,6,8]);
        assert_eq!(cg.max_degree(), 2);
        assert_eq!(cg.neighbors(0), &[1,3]);
        assert_eq!(cg.neighbors(3), &[2,0]);
    }

    #[test]
    fn test_neighbors_match_adjacency() {
        let g = Graph::from_edges(6, 5, &[(0,1), (0,2), (0,3), (4,2), (1,2)]).unwrap();
        let cg = CompactGraph::build(&g).unwrap();
        assert!(cg.offsets().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cg.offsets()[g.n()], 2 * g.declared_m());
        for i in 0..g.n() {
            let a:BTreeSet<usize> = g.adj(i).iter().copied().collect();
            let b:BTreeSet<usize> = cg.neighbors(i).iter().copied().collect();
            assert_eq!(a, b);
        }
        assert_eq!(cg.degree(5), 0);
        assert_eq!(cg.max_degree(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let cg = CompactGraph::build(&Graph::new(0, 0).unwrap()).unwrap();
        assert_eq!(cg.n(), 0);
        assert_eq!(cg.offsets(), &[0]);
        assert_eq!(cg.max_degree(), 0);
    }

    #[test]
    fn test_inconsistent_edge_count() {
        // header announces 3 edges, only 2 are given
        let g = Graph::from_edges(3, 3, &[(0,1), (1,2)]).unwrap();
        match CompactGraph::build(&g) {
            Err(ColoringError::InconsistentGraphSize { declared, found }) => {
                assert_eq!(declared, 6);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected result {:?}", other),
        }
        // more edges than announced
        let g = Graph::from_edges(3, 1, &[(0,1), (1,2)]).unwrap();
        assert!(CompactGraph::build(&g).is_err());
    }
}
