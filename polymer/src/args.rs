//! Command-line argument parsing for the SAW pivot study

use clap::Parser;

/// Pivot-algorithm Monte Carlo study of self-avoiding polymer chains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override the lattice step length
    #[arg(long)]
    pub step_length: Option<f64>,

    /// Override the number of repetitions per chain length
    #[arg(long)]
    pub repetitions: Option<usize>,

    /// Override the number of warm-up pivot attempts
    #[arg(long)]
    pub warmup_pivots: Option<usize>,

    /// Override the master random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the log to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
