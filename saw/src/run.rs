use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::config::SawConfig;
use crate::observables::{end_to_end_distance, radius_of_gyration};
use crate::pivot::PivotSampler;
use crate::stats::{ChainStatistics, Statistic};
use crate::walk::Walk;

/// Outcome of a full study: one statistics record per chain length, plus the
/// final equilibrated walk for the visualization collaborator.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: Vec<ChainStatistics>,
    pub final_walk: Walk,
}

/// Per-task seed stride (the splitmix64 increment) so that task streams do
/// not overlap for consecutive task indices.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Run the full study: for each configured chain length, grow, equilibrate
/// and measure `repetitions` independent walks and reduce the samples to a
/// mean and standard error per observable.
///
/// Repetitions fan out over the rayon pool; each (N, repetition) task owns
/// an `StdRng` seeded from the master seed and its task index, so results
/// are reproducible for a fixed seed regardless of scheduling.
pub fn run(config: &SawConfig) -> Result<RunSummary, String> {
    config.validate()?;

    let master_seed = config.seed.unwrap_or_else(rand::random);
    let repetitions = config.repetitions;
    let mut stats = Vec::with_capacity(config.chain_lengths.len());
    let mut final_walk = None;

    for (length_idx, &n) in config.chain_lengths.iter().enumerate() {
        let samples: Result<Vec<(f64, f64, Option<Walk>)>, String> = (0..repetitions)
            .into_par_iter()
            .map(|rep| {
                let task = (length_idx * repetitions + rep) as u64;
                let mut rng =
                    StdRng::seed_from_u64(master_seed.wrapping_add(task.wrapping_mul(SEED_STRIDE)));

                let walk = match config.max_growth_restarts {
                    Some(cap) => Walk::grow_bounded(n, config.step_length, cap, &mut rng)?,
                    None => Walk::grow(n, config.step_length, &mut rng),
                };
                let mut sampler = PivotSampler::with_rng(rng);
                let walk = sampler.equilibrate(walk, config.warmup_pivots);

                let rg = radius_of_gyration(&walk);
                let ree = end_to_end_distance(&walk);
                // Only the last repetition hands its walk back for plotting.
                let keep = (rep + 1 == repetitions).then_some(walk);
                Ok((rg, ree, keep))
            })
            .collect();
        let samples = samples?;

        let rg_samples: Vec<f64> = samples.iter().map(|(rg, _, _)| *rg).collect();
        let ree_samples: Vec<f64> = samples.iter().map(|(_, ree, _)| *ree).collect();
        stats.push(ChainStatistics {
            chain_length: n,
            rg: Statistic::from_samples(&rg_samples),
            ree: Statistic::from_samples(&ree_samples),
        });

        if let Some(walk) = samples.into_iter().find_map(|(_, _, keep)| keep) {
            final_walk = Some(walk);
        }
    }

    let final_walk = final_walk.ok_or_else(|| "No walks were generated".to_string())?;
    Ok(RunSummary { stats, final_walk })
}
