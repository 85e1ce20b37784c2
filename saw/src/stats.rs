/// Sample mean and standard error of one observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistic {
    pub mean: f64,
    pub std_err: f64,
    pub count: usize,
}

impl Statistic {
    /// Mean with the standard error of the mean: sample standard deviation
    /// (ddof = 1) over sqrt(count). Fewer than two samples carry no spread
    /// information and report a zero error.
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len();
        if count == 0 {
            return Statistic {
                mean: 0.0,
                std_err: 0.0,
                count: 0,
            };
        }
        let mean = samples.iter().sum::<f64>() / count as f64;
        if count < 2 {
            return Statistic {
                mean,
                std_err: 0.0,
                count,
            };
        }
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
            / (count - 1) as f64;
        Statistic {
            mean,
            std_err: (variance / count as f64).sqrt(),
            count,
        }
    }
}

/// Aggregated observables for one chain length. Created once per N after
/// the averaging step and never mutated.
#[derive(Debug, Clone)]
pub struct ChainStatistics {
    pub chain_length: usize,
    pub rg: Statistic,
    pub ree: Statistic,
}
