use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a SAW pivot study.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SawConfig {
    /// Lattice step length
    #[serde(default = "default_step_length")]
    pub step_length: f64,
    /// Chain lengths (number of steps N) to study, reported in this order
    pub chain_lengths: Vec<usize>,
    /// Independent repetitions per chain length
    pub repetitions: usize,
    /// Pivot attempts used to equilibrate each walk
    #[serde(default = "default_warmup_pivots")]
    pub warmup_pivots: usize,
    /// Master seed; every (N, repetition) task derives its own stream from
    /// it. Drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Cap on growth restarts before a run is abandoned; unbounded when
    /// absent
    #[serde(default)]
    pub max_growth_restarts: Option<u64>,
    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output file configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Radius-of-gyration table
    #[serde(default = "default_rg_file")]
    pub rg_file: String,
    /// End-to-end distance table
    #[serde(default = "default_ree_file")]
    pub ree_file: String,
    /// Coordinates of the final equilibrated walk for 3D plotting; skipped
    /// when absent
    #[serde(default = "default_walk_file")]
    pub walk_file: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            rg_file: default_rg_file(),
            ree_file: default_ree_file(),
            walk_file: default_walk_file(),
        }
    }
}

fn default_step_length() -> f64 {
    1.0
}
fn default_warmup_pivots() -> usize {
    15000
}
fn default_rg_file() -> String {
    "rg.txt".to_string()
}
fn default_ree_file() -> String {
    "ree.txt".to_string()
}
fn default_walk_file() -> Option<String> {
    Some("walk.txt".to_string())
}

impl SawConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: SawConfig = serde_yml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration parameters before any simulation work begins
    pub fn validate(&self) -> Result<(), String> {
        if self.step_length <= 0.0 {
            return Err("Step length must be positive".to_string());
        }
        if self.chain_lengths.is_empty() {
            return Err("At least one chain length is required".to_string());
        }
        if self.chain_lengths.iter().any(|&n| n < 1) {
            return Err("Chain lengths must be at least 1".to_string());
        }
        if self.repetitions == 0 {
            return Err("Repetitions must be positive".to_string());
        }
        Ok(())
    }
}
