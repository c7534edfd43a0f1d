//! Randomized multi-trial greedy coloring of undirected graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error types
pub mod error;

/// vertex/coloring types and coloring checker
pub mod color;

/// graph built by the instance readers (adjacency lists)
pub mod graph;

/// read the "n m" + edge pairs format
pub mod edge_list;

/// read DIMACS formats
pub mod dimacs;

/// read CGSHOP instances & write CGSHOP solutions
pub mod cgshop;

/// compact (CSR) graph representation used by the search
pub mod compact_graph;

/// search parameters
pub mod config;

/// read/write colorings
pub mod solution;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for the graph coloring problem
pub mod search;
