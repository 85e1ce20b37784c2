pub mod config;
pub mod geometry;
pub mod observables;
pub mod pivot;
pub mod run;
pub mod stats;
pub mod walk;

pub use config::SawConfig;
pub use pivot::PivotSampler;
pub use run::{run, RunSummary};
pub use walk::Walk;
