use thiserror::Error;

use crate::color::VertexId;

/// errors raised while reading, building, coloring or checking a graph
#[derive(Error, Debug)]
pub enum ColoringError {
    /// unexpected byte (or unusable token) in a numeric input stream
    #[error("malformed input at byte {offset}: {reason}")]
    MalformedInput {
        /// position of the offending byte in the input
        offset: usize,
        /// what was found there
        reason: String,
    },

    /// declared sizes do not match the parsed adjacency
    #[error("inconsistent graph size: declared {declared}, found {found}")]
    InconsistentGraphSize {
        /// size announced by the header (or required by the CSR layout)
        declared: usize,
        /// size actually read
        found: usize,
    },

    /// a vertex id outside of [0, n)
    #[error("vertex {vertex} out of range (graph has {n} vertices)")]
    VertexIndexOutOfRange {
        /// offending id
        vertex: usize,
        /// number of vertices
        n: usize,
    },

    /// the trial count was configured as zero
    #[error("no trials requested (trial count is 0)")]
    NoTrialsRequested,

    /// the retained coloring has two adjacent vertices sharing a color
    #[error("invalid coloring: vertices {u} and {v} are adjacent and share color {color}")]
    InvalidColoringDetected {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// shared color
        color: usize,
    },

    /// a coloring does not have one color per vertex
    #[error("coloring has {found} colors for {expected} vertices")]
    WrongColoringLength {
        /// number of vertices
        expected: usize,
        /// number of colors given
        found: usize,
    },

    /// unrecognized command line or configuration value
    #[error("invalid value '{value}' for {name}")]
    InvalidParameter {
        /// parameter name
        name: String,
        /// given value
        value: String,
    },

    /// file reading/writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// configuration or statistics (de)serialization
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ColoringError {
    /// creates a malformed input error
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        ColoringError::MalformedInput { offset, reason: reason.into() }
    }

    /// creates an invalid parameter error
    pub fn parameter(name: impl Into<String>, value: impl Into<String>) -> Self {
        ColoringError::InvalidParameter { name: name.into(), value: value.into() }
    }
}

/// result type used across the crate
pub type Result<T> = std::result::Result<T, ColoringError>;
