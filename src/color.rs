use crate::compact_graph::CompactGraph;
use crate::error::ColoringError;

/** Vertex Id */
pub type VertexId = usize;

/** Coloring of a graph: coloring[v] is the color of vertex v */
pub type Coloring = Vec<usize>;

/// number of colors used by a coloring (max color + 1, 0 for an empty graph)
pub fn nb_colors(coloring:&[usize]) -> usize {
    coloring.iter().max().map_or(0, |c| c+1)
}

/// checker result (either valid, either invalid with the first problem found)
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CheckerResult {
    /// valid coloring, number of colors used
    Ok(usize),
    /// the coloring does not have one color per vertex (expected, found)
    WrongLength(usize, usize),
    /// two adjacent vertices share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks that no two adjacent vertices share a color.
Runs in O(n+m), does not modify anything.
*/
pub fn checker(inst:&CompactGraph, coloring:&[usize]) -> CheckerResult {
    if coloring.len() != inst.n() {
        return CheckerResult::WrongLength(inst.n(), coloring.len());
    }
    for (u, cu) in coloring.iter().enumerate() {
        for v in inst.neighbors(u) {
            if coloring[*v] == *cu {
                return CheckerResult::ConflictingEdge(u, *v);
            }
        }
    }
    CheckerResult::Ok(nb_colors(coloring))
}

/// true iff the coloring is proper
pub fn is_proper(inst:&CompactGraph, coloring:&[usize]) -> bool {
    matches!(checker(inst, coloring), CheckerResult::Ok(_))
}

impl CheckerResult {
    /** converts a failed check into the corresponding error */
    pub fn into_error(self, coloring:&[usize]) -> Option<ColoringError> {
        match self {
            CheckerResult::Ok(_) => None,
            CheckerResult::WrongLength(expected, found) => Some(
                ColoringError::WrongColoringLength { expected, found }
            ),
            CheckerResult::ConflictingEdge(u, v) => Some(
                ColoringError::InvalidColoringDetected { u, v, color: coloring[u] }
            ),
        }
    }
}
