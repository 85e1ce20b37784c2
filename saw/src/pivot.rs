use nalgebra::Matrix3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::random_rotation;
use crate::walk::{is_self_avoiding, Walk};

/// Attempt/acceptance bookkeeping for a pivot run.
#[derive(Debug, Clone, Default)]
pub struct PivotStatistics {
    pub attempts: u64,
    pub accepted: u64,
}

impl PivotStatistics {
    pub fn acceptance_ratio(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

/// Apply one pivot move deterministically: translate the sub-chain strictly
/// after `index` into the pivot-local frame, rotate it, translate it back,
/// and validate the full candidate sequence.
///
/// Returns the accepted candidate, or a copy of the input walk with
/// `accepted = false` when the rotation introduces a collision. The prefix
/// through the pivot site is carried over verbatim either way.
pub fn pivot_about(walk: &Walk, index: usize, rotation: &Matrix3<f64>) -> (Walk, bool) {
    let sites = walk.sites();
    let origin = sites[index];

    let mut candidate = Vec::with_capacity(sites.len());
    candidate.extend_from_slice(&sites[..=index]);
    candidate.extend(
        sites[index + 1..]
            .iter()
            .map(|p| rotation * (p - origin) + origin),
    );

    if is_self_avoiding(&candidate) {
        (Walk::from_sites(candidate, walk.step_length()), true)
    } else {
        (walk.clone(), false)
    }
}

/// Pivot-move Markov chain driver.
///
/// Owns its random source so that parallel tasks run reproducible,
/// independent streams.
#[derive(Debug)]
pub struct PivotSampler {
    rng: StdRng,
    pub stats: PivotStatistics,
}

impl PivotSampler {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        PivotSampler {
            rng,
            stats: PivotStatistics::default(),
        }
    }

    /// One Metropolis-like step under the hard self-avoidance constraint:
    /// acceptance probability 1 if the rotated chain is self-avoiding, 0
    /// otherwise. The pivot index is drawn uniformly from the interior
    /// sites; a walk with no interior site admits no pivot and comes back
    /// unchanged.
    pub fn attempt(&mut self, walk: &Walk) -> (Walk, bool) {
        self.stats.attempts += 1;
        if walk.num_sites() < 3 {
            return (walk.clone(), false);
        }
        let index = self.rng.gen_range(1..walk.num_sites() - 1);
        let rotation = random_rotation(&mut self.rng);
        let (next, accepted) = pivot_about(walk, index, &rotation);
        if accepted {
            self.stats.accepted += 1;
        }
        (next, accepted)
    }

    /// Warm-up: a fixed number of pivot attempts, no convergence diagnostic.
    pub fn equilibrate(&mut self, mut walk: Walk, attempts: usize) -> Walk {
        for _ in 0..attempts {
            let (next, _) = self.attempt(&walk);
            walk = next;
        }
        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Exact half-turn about the z axis. Built explicitly because the
    /// Rodrigues form of a half-turn carries a sin(π) rounding residue,
    /// while site identity is exact equality.
    fn half_turn_z() -> Matrix3<f64> {
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0)
    }

    fn straight_walk(n: usize) -> Walk {
        let sites = (0..=n).map(|i| Vector3::new(i as f64, 0.0, 0.0)).collect();
        Walk::from_sites(sites, 1.0)
    }

    #[test]
    fn test_half_turn_collision_is_rejected() {
        // Folding [(0,0,0),(1,0,0),(2,0,0)] at site 1 maps the end onto the
        // start, so the candidate [(0,0,0),(1,0,0),(0,0,0)] must be thrown
        // away and the input returned untouched.
        let walk = straight_walk(2);
        let (result, accepted) = pivot_about(&walk, 1, &half_turn_z());
        assert!(!accepted);
        assert_eq!(result, walk);
    }

    #[test]
    fn test_quarter_turn_kink_is_accepted() {
        // A quarter-turn about z bends the rod into an L with no collision;
        // the candidate coordinates are exact.
        let quarter_turn_z = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let walk = straight_walk(2);
        let (result, accepted) = pivot_about(&walk, 1, &quarter_turn_z);
        assert!(accepted);
        assert_eq!(
            result.sites(),
            &[
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ][..]
        );
    }

    #[test]
    fn test_accepted_pivot_preserves_prefix_and_length() {
        let mut rng = StdRng::seed_from_u64(21);
        let walk = Walk::grow(40, 1.0, &mut rng);
        let index = 13;
        let rotation = random_rotation(&mut rng);
        let (result, accepted) = pivot_about(&walk, index, &rotation);

        assert_eq!(result.num_sites(), walk.num_sites());
        if accepted {
            assert_eq!(&result.sites()[..=index], &walk.sites()[..=index]);
            assert!(result.is_self_avoiding());
        } else {
            assert_eq!(result, walk);
        }
    }

    #[test]
    fn test_sampler_keeps_walk_self_avoiding() {
        let mut rng = StdRng::seed_from_u64(33);
        let walk = Walk::grow(25, 1.0, &mut rng);
        let mut sampler = PivotSampler::new(99);
        let walk = sampler.equilibrate(walk, 200);

        assert_eq!(walk.num_sites(), 26);
        assert!(walk.is_self_avoiding());
        assert_eq!(sampler.stats.attempts, 200);
        assert!(sampler.stats.accepted <= sampler.stats.attempts);
    }

    #[test]
    fn test_two_site_walk_has_no_interior_pivot() {
        let walk = straight_walk(1);
        let mut sampler = PivotSampler::new(4);
        let (result, accepted) = sampler.attempt(&walk);
        assert!(!accepted);
        assert_eq!(result, walk);
    }
}
