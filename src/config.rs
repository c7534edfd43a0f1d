use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::{ColoringError, Result};

/// default number of random orders tried
pub const DEFAULT_NB_TRIALS:usize = 10_000;

/// minimal free color search used by the greedy
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// linear scan over the neighbor colors (fast on low degree graphs)
    Scan,
    /// bit-set of the neighbor colors (O(d) per vertex)
    Bitset,
}

impl Default for EngineKind {
    fn default() -> Self { EngineKind::Scan }
}

impl FromStr for EngineKind {
    type Err = ColoringError;

    fn from_str(s:&str) -> Result<Self> {
        match s {
            "scan" => Ok(EngineKind::Scan),
            "bitset" => Ok(EngineKind::Bitset),
            _ => Err(ColoringError::parameter("engine", s)),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Scan => write!(f, "scan"),
            EngineKind::Bitset => write!(f, "bitset"),
        }
    }
}

/** parameters of the multi-trial greedy.
Missing fields in a configuration file take their default value.
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// number of random orders to try
    pub trials: usize,
    /// run seed (trial i uses a generator derived from (seed, i))
    pub seed: u64,
    /// stop as soon as a coloring with at most this many colors is found
    pub early_stop_at: Option<usize>,
    /// wall-clock budget in seconds
    pub time_limit: Option<f32>,
    /// minimal free color search
    pub engine: EngineKind,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_NB_TRIALS,
            seed: 0,
            early_stop_at: None,
            time_limit: None,
            engine: EngineKind::default(),
        }
    }
}

impl TrialConfig {
    /// reads a JSON configuration file
    pub fn from_file<P:AsRef<Path>>(filename:P) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&s)?)
    }
}
