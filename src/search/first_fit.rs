use bit_set::BitSet;

use crate::color::{Coloring, VertexId};
use crate::compact_graph::CompactGraph;
use crate::config::EngineKind;

/** colors a graph by visiting its vertices in a given order. */
pub trait ColoringEngine {
    /** returns a proper coloring of inst.
    order should be a permutation of 0..n. Ids outside of [0,n) and repeated
    ids are ignored, vertices it misses are colored afterwards by increasing id.
    */
    fn color(&mut self, inst:&CompactGraph, order:&[VertexId]) -> Coloring;
}

/** visits the vertices in order, gives color 0 to isolated vertices and
asks first_free for the color of the others. Uncolored neighbors are None.
*/
fn greedy_pass<F>(inst:&CompactGraph, order:&[VertexId], mut first_free:F) -> Coloring
where F: FnMut(&CompactGraph, &[Option<usize>], VertexId) -> usize {
    let n = inst.n();
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to v
    for v in order.iter().copied().chain(0..n) {
        if v >= n || colors[v].is_some() { continue; }
        let c = if inst.degree(v) == 0 { 0 } else { first_free(inst, &colors, v) };
        colors[v] = Some(c);
    }
    colors.into_iter().flatten().collect()
}

/** first-fit greedy that collects the colors of the already colored neighbors
in a scratch buffer and scans it for the smallest missing color.
O(d²) per vertex in the worst case, but faster than a set on low degree graphs.
*/
#[derive(Debug, Default)]
pub struct ScanFirstFit {
    /// colors seen in the neighborhood of the current vertex
    neighbor_colors: Vec<usize>,
}

impl ScanFirstFit {
    /// creates the engine with a scratch buffer able to hold max_degree colors
    pub fn new(max_degree:usize) -> Self {
        Self { neighbor_colors: Vec::with_capacity(max_degree) }
    }
}

impl ColoringEngine for ScanFirstFit {
    fn color(&mut self, inst:&CompactGraph, order:&[VertexId]) -> Coloring {
        let neighbor_colors = &mut self.neighbor_colors;
        greedy_pass(inst, order, |g, colors, v| {
            neighbor_colors.clear();
            neighbor_colors.extend(g.neighbors(v).iter().filter_map(|u| colors[*u]));
            let mut c = 0;
            while neighbor_colors.contains(&c) { c += 1; }
            c
        })
    }
}

/** first-fit greedy that marks the colors of the already colored neighbors in
a bit-set of size max_degree+2 and returns the first unmarked one. O(d) per vertex.
*/
#[derive(Debug, Default)]
pub struct BitSetFirstFit {
    /// used[c]: color c appears in the neighborhood of the current vertex
    used: BitSet,
}

impl BitSetFirstFit {
    /// creates the engine for graphs of maximum degree max_degree
    pub fn new(max_degree:usize) -> Self {
        Self { used: BitSet::with_capacity(max_degree + 2) }
    }
}

impl ColoringEngine for BitSetFirstFit {
    fn color(&mut self, inst:&CompactGraph, order:&[VertexId]) -> Coloring {
        let used = &mut self.used;
        greedy_pass(inst, order, |g, colors, v| {
            for c in g.neighbors(v).iter().filter_map(|u| colors[*u]) {
                used.insert(c);
            }
            let mut c = 0;
            while used.contains(c) { c += 1; }
            // reset only what was marked
            for c_used in g.neighbors(v).iter().filter_map(|u| colors[*u]) {
                used.remove(c_used);
            }
            c
        })
    }
}

/// creates the engine selected by kind, with scratch sized for inst
pub fn create_engine(kind:EngineKind, inst:&CompactGraph) -> Box<dyn ColoringEngine> {
    match kind {
        EngineKind::Scan => Box::new(ScanFirstFit::new(inst.max_degree())),
        EngineKind::Bitset => Box::new(BitSetFirstFit::new(inst.max_degree())),
    }
}
