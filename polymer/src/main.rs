//! Pivot Monte Carlo study of self-avoiding polymer chains
//!
//! Loads a YAML configuration, runs the grow → equilibrate → measure study
//! over the configured chain-length grid, and writes the R_g and R_ee tables
//! plus the final equilibrated walk for plotting.

use std::fs;
use std::fs::File;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::info;

mod args;
mod io;

use args::Args;
use saw::SawConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    io::setup_output(args.output.as_ref());

    info!("Reading configuration from: {}", args.config_file);
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;
    let mut config: SawConfig =
        serde_yml::from_str(&config_content).wrap_err("Failed to parse configuration file")?;

    // Command-line overrides take precedence over the file.
    if let Some(step) = args.step_length {
        info!("Overriding step_length with: {}", step);
        config.step_length = step;
    }
    if let Some(reps) = args.repetitions {
        info!("Overriding repetitions with: {}", reps);
        config.repetitions = reps;
    }
    if let Some(warmup) = args.warmup_pivots {
        info!("Overriding warmup_pivots with: {}", warmup);
        config.warmup_pivots = warmup;
    }
    if let Some(seed) = args.seed {
        info!("Overriding seed with: {}", seed);
        config.seed = Some(seed);
    }

    config.validate().map_err(|e| eyre!(e))?;
    info!("Configuration loaded:\n{:?}", config);

    info!(
        "Studying {} chain lengths, {} repetitions each, {} warm-up pivots per walk",
        config.chain_lengths.len(),
        config.repetitions,
        config.warmup_pivots
    );
    let summary = saw::run(&config).map_err(|e| eyre!(e))?;

    for record in &summary.stats {
        info!(
            "N = {}, Rg = {:.4} ± {:.4}, Ree = {:.4} ± {:.4}",
            record.chain_length,
            record.rg.mean,
            record.rg.std_err,
            record.ree.mean,
            record.ree.std_err
        );
    }

    io::save_observable_tables(&config.output, &summary.stats)
        .wrap_err("Failed to write observable tables")?;
    info!(
        "Wrote R_g table to {} and R_ee table to {}",
        config.output.rg_file, config.output.ree_file
    );

    if let Some(ref walk_file) = config.output.walk_file {
        let mut file = File::create(walk_file)
            .wrap_err_with(|| format!("Unable to create walk file: {}", walk_file))?;
        io::write_walk(&mut file, &summary.final_walk)?;
        info!(
            "Wrote final equilibrated walk ({} sites) to {}",
            summary.final_walk.num_sites(),
            walk_file
        );
    }

    Ok(())
}
