/*
Implements:
 - procedures to read CGSHOP 2022 instances and write CGSHOP 2022 solutions
 - the conversion of a CGSHOP instance (segments between points) into the
   graph of crossing segments that is colored by the search
*/
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use geo::{Coordinate, Line};
use geo::line_intersection::{line_intersection, LineIntersection};

use crate::color::VertexId;
use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/** data structure to represent a CGSHOP instance */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CGSHOPInstance {
    /// instance name
    #[serde(default)]
    id: String,
    /// number of points
    n: usize,
    /// number of edges (segments)
    m: usize,
    /// x coordinates for points
    x: Vec<f64>,
    /// y coordinates for points
    y: Vec<f64>,
    /// edge_i[i]: first endpoint of the ith edge
    edge_i: Vec<usize>,
    /// edge_j[i]: second endpoint of the ith edge
    edge_j: Vec<usize>,
}


impl CGSHOPInstance {
    /** reads a CGSHOP instance from a file. */
    pub fn from_file<P:AsRef<Path>>(filename:P) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&s)?)
    }

    /** checks that the coordinate and edge arrays agree with n and m */
    fn validate(&self) -> Result<()> {
        for len in [self.x.len(), self.y.len()].iter() {
            if *len != self.n {
                return Err(ColoringError::InconsistentGraphSize { declared: self.n, found: *len });
            }
        }
        for len in [self.edge_i.len(), self.edge_j.len()].iter() {
            if *len != self.m {
                return Err(ColoringError::InconsistentGraphSize { declared: self.m, found: *len });
            }
        }
        match self.edge_i.iter().chain(self.edge_j.iter()).find(|p| **p >= self.n) {
            Some(p) => Err(ColoringError::VertexIndexOutOfRange { vertex: *p, n: self.n }),
            None => Ok(()),
        }
    }

    /** converts to a graph coloring instance: one vertex per segment, one edge
    per pair of crossing segments. O(m²) segment tests.
    */
    pub fn to_graph(&self) -> Result<Graph> {
        self.validate()?;
        let lines = self.edge_lines();
        let mut conflicts:Vec<(VertexId,VertexId)> = Vec::new();
        for i in 0..lines.len() {
            for j in 0..i {
                if is_intersection(&lines[j], &lines[i]) {
                    conflicts.push((j, i));
                }
            }
        }
        log::info!("{} segments, {} crossings", self.m(), conflicts.len());
        Graph::from_edges(self.m(), conflicts.len(), &conflicts)
    }

    /// instance name
    pub fn id(&self) -> &str { &self.id }

    /// number of points
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// edge segments ((x1,y1) -> (x2,y2))
    pub fn edge_lines(&self) -> Vec<Line<f64>> {
        self.edge_i.iter().zip(self.edge_j.iter()).map(|(a, b)| {
            Line::new(
                Coordinate { x: self.x[*a], y: self.y[*a] },
                Coordinate { x: self.x[*b], y: self.y[*b] },
            )
        }).collect()
    }

    /** displays some statistics of the instance */
    pub fn display_statistics(&self) {
        log::info!("\t{:>25}{:>10}", "nb points:", self.n());
        log::info!("\t{:>25}{:>10}", "nb segments:", self.m());
    }
}

/** true iff both segments cross at a point interior to both of them.
Segments touching at an endpoint (shared or not) and overlapping parallel
segments do not conflict.
*/
pub fn is_intersection(l1:&Line<f64>, l2:&Line<f64>) -> bool {
    matches!(
        line_intersection(*l1, *l2),
        Some(LineIntersection::SinglePoint { is_proper: true, .. })
    )
}


/** data structure to represent a CGSHOP solution */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CGSHOPSolution {
    /// solution type (should be "Solution_CGSHOP2022")
    #[serde(rename="type")]
    sol_type: String,
    /// instance name
    instance: String,
    /// number of colors
    num_colors: usize,
    /// color list (color[e]: color of edge e)
    colors: Vec<usize>,
}

impl CGSHOPSolution {
    /// solution of the given instance from a coloring of its crossing graph
    pub fn from_coloring(instance:&str, coloring:&[usize]) -> Self {
        Self {
            sol_type: "Solution_CGSHOP2022".to_string(),
            instance: instance.to_string(),
            num_colors: crate::color::nb_colors(coloring),
            colors: coloring.to_vec(),
        }
    }

    /// reads a solution file
    pub fn from_file<P:AsRef<Path>>(filename:P) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&s)?)
    }

    /// writes the solution as JSON
    pub fn to_file<P:AsRef<Path>>(&self, filename:P) -> Result<()> {
        fs::write(filename, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// instance name
    pub fn instance(&self) -> &str { &self.instance }

    /// number of colors announced by the solution
    pub fn num_colors(&self) -> usize { self.num_colors }

    /// color of each edge
    pub fn colors(&self) -> &[usize] { &self.colors }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::compact_graph::CompactGraph;

    fn line(x1:f64, y1:f64, x2:f64, y2:f64) -> Line<f64> {
        Line::new(Coordinate { x: x1, y: y1 }, Coordinate { x: x2, y: y2 })
    }

    #[test]
    fn test_is_intersection() {
        // X shape
        assert!(is_intersection(&line(0.,0.,2.,2.), &line(0.,2.,2.,0.)));
        // shared endpoint
        assert!(!is_intersection(&line(0.,0.,2.,2.), &line(2.,2.,4.,0.)));
        // endpoint touching the interior of the other segment
        assert!(!is_intersection(&line(0.,0.,2.,0.), &line(1.,0.,0.,2.)));
        // parallel, overlapping
        assert!(!is_intersection(&line(0.,0.,2.,0.), &line(1.,0.,3.,0.)));
        // disjoint
        assert!(!is_intersection(&line(0.,0.,1.,0.), &line(0.,1.,1.,1.)));
    }

    #[test]
    fn test_read_instance() {
        let cg_inst = CGSHOPInstance::from_file("insts/tiny.instance.json").unwrap();
        assert_eq!(cg_inst.id(), "tiny");
        assert_eq!(cg_inst.n(), 6);
        assert_eq!(cg_inst.m(), 6);
        let g = cg_inst.to_graph().unwrap();
        assert_eq!(g.n(), 6);
        assert_eq!(g.nb_parsed_edges(), 2);
        assert_eq!(g.adj(0), &[1,5]);
        assert!((2..5).all(|v| g.adj(v).is_empty()));
        let inst = CompactGraph::build(&g).unwrap();
        assert_eq!(checker(&inst, &[0,1,0,0,0,1]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_inconsistent_instance() {
        let s = r#"{"id": "bad", "n": 2, "m": 1, "x": [0, 1], "y": [0], "edge_i": [0], "edge_j": [1]}"#;
        let cg_inst:CGSHOPInstance = serde_json::from_str(s).unwrap();
        assert!(matches!(
            cg_inst.to_graph(),
            Err(ColoringError::InconsistentGraphSize { declared: 2, found: 1 })
        ));
        let s = r#"{"n": 2, "m": 1, "x": [0, 1], "y": [0, 1], "edge_i": [0], "edge_j": [2]}"#;
        let cg_inst:CGSHOPInstance = serde_json::from_str(s).unwrap();
        assert!(matches!(
            cg_inst.to_graph(),
            Err(ColoringError::VertexIndexOutOfRange { vertex: 2, n: 2 })
        ));
    }

    #[test]
    fn test_write_solution() {
        let dir = tempfile::tempdir().unwrap();
        let filename = dir.path().join("tiny.solution.json");
        let sol = CGSHOPSolution::from_coloring("tiny", &[0,1,0,0,0,1]);
        sol.to_file(&filename).unwrap();
        let value:serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&filename).unwrap()
        ).unwrap();
        assert_eq!(value["type"], "Solution_CGSHOP2022");
        assert_eq!(value["instance"], "tiny");
        assert_eq!(value["num_colors"], 2);
        let read = CGSHOPSolution::from_file(&filename).unwrap();
        assert_eq!(read.colors(), &[0,1,0,0,0,1]);
        assert_eq!(read.num_colors(), 2);
    }
}
