use crate::color::VertexId;
use crate::error::{ColoringError, Result};

/** undirected graph as produced by the loaders.
each edge (u,v) appears in both adj_list[u] and adj_list[v].
*/
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges announced by the input (used to size the compact representation)
    declared_m: usize,
    /// nb edges actually added
    parsed_m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
}

impl Graph {
    /** creates a graph with n isolated vertices, expecting m edges.
    Fails with MalformedInput if n adjacency lists cannot be allocated.
    */
    pub fn new(n: usize, m: usize) -> Result<Self> {
        let mut adj_list:Vec<Vec<VertexId>> = Vec::new();
        adj_list.try_reserve_exact(n)
            .map_err(|_| ColoringError::malformed(0, format!("cannot allocate {} vertices", n)))?;
        adj_list.resize_with(n, Vec::new);
        Ok(Self { n, declared_m: m, parsed_m: 0, adj_list })
    }

    /** builds a graph from an edge list. Fails if an endpoint is not in [0,n) */
    pub fn from_edges(n: usize, m: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut res = Self::new(n, m)?;
        for (u, v) in edges {
            res.add_edge(*u, *v)?;
        }
        Ok(res)
    }

    /// adds the undirected edge (u,v)
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        for w in [u, v].iter() {
            if *w >= self.n {
                return Err(ColoringError::VertexIndexOutOfRange { vertex: *w, n: self.n });
            }
        }
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.parsed_m += 1;
        Ok(())
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges announced by the input
    pub fn declared_m(&self) -> usize { self.declared_m }

    /// number of edges added so far
    pub fn nb_parsed_edges(&self) -> usize { self.parsed_m }

    /// list of vertices adjacent to vertex i
    pub fn adj(&self, i: VertexId) -> &[VertexId] { &self.adj_list[i] }

    /// all adjacency lists
    pub fn adj_lists(&self) -> &[Vec<VertexId>] { &self.adj_list }
}
