use std::collections::HashSet;

use itertools::Itertools;
use nalgebra::Vector3;
use rand::seq::SliceRandom;
use rand::Rng;

/// The six axis-aligned unit moves on the simple cubic lattice.
const LATTICE_MOVES: [[i64; 3]; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// One self-avoiding chain configuration in 3D.
///
/// The first site sits at the origin and consecutive sites differ by one
/// axis-aligned step of `step_length`. Freshly grown walks live on the scaled
/// cubic lattice; accepted pivot moves rotate the tail by an arbitrary angle,
/// so sites are stored as real-valued coordinates throughout. All sites are
/// pairwise distinct under exact coordinate equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    sites: Vec<Vector3<f64>>,
    step_length: f64,
}

impl Walk {
    /// Wrap an explicit coordinate sequence. The caller is responsible for
    /// the walk invariants (non-empty, unit-step bonds, self-avoidance).
    pub fn from_sites(sites: Vec<Vector3<f64>>, step_length: f64) -> Self {
        Walk { sites, step_length }
    }

    /// Grow a self-avoiding walk of `n` steps from the origin.
    ///
    /// Each step shuffles the six lattice moves and appends the first
    /// candidate site not already occupied. A dead end (all six occupied)
    /// discards the whole attempt and regrows from the origin; the restart
    /// loop is unbounded and terminates with probability 1 on the cubic
    /// lattice, though the expected number of restarts grows with `n`.
    pub fn grow<R: Rng>(n: usize, step_length: f64, rng: &mut R) -> Walk {
        loop {
            if let Some(path) = try_grow(n, rng) {
                return Walk::from_lattice(&path, step_length);
            }
        }
    }

    /// Like [`Walk::grow`], but abandons the walk after `max_restarts`
    /// regrowths from dead ends.
    pub fn grow_bounded<R: Rng>(
        n: usize,
        step_length: f64,
        max_restarts: u64,
        rng: &mut R,
    ) -> Result<Walk, String> {
        for _ in 0..=max_restarts {
            if let Some(path) = try_grow(n, rng) {
                return Ok(Walk::from_lattice(&path, step_length));
            }
        }
        Err(format!(
            "Walk growth dead-ended {} times for chain length {}",
            max_restarts + 1,
            n
        ))
    }

    fn from_lattice(path: &[Vector3<i64>], step_length: f64) -> Walk {
        let sites = path
            .iter()
            .map(|p| p.map(|c| c as f64) * step_length)
            .collect();
        Walk { sites, step_length }
    }

    /// Number of sites (one more than the number of steps).
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn sites(&self) -> &[Vector3<f64>] {
        &self.sites
    }

    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Displacement vectors between consecutive sites.
    pub fn bonds(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.sites.iter().tuple_windows().map(|(a, b)| b - a)
    }

    pub fn is_self_avoiding(&self) -> bool {
        is_self_avoiding(&self.sites)
    }
}

/// True iff no site appears twice, i.e. the count of distinct sites equals
/// the sequence length. Identity is exact coordinate equality.
pub fn is_self_avoiding(sites: &[Vector3<f64>]) -> bool {
    let mut seen = HashSet::with_capacity(sites.len());
    sites.iter().all(|p| seen.insert(site_key(p)))
}

/// Hashable occupancy key. Adding 0.0 folds -0.0 into +0.0 so the bit
/// pattern matches value equality for every site a rotation can produce.
fn site_key(p: &Vector3<f64>) -> (u64, u64, u64) {
    (
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    )
}

/// One growth attempt on the integer lattice, where occupancy keys are
/// exact. Returns None on a dead end.
fn try_grow<R: Rng>(n: usize, rng: &mut R) -> Option<Vec<Vector3<i64>>> {
    let mut head = Vector3::new(0i64, 0, 0);
    let mut path = Vec::with_capacity(n + 1);
    path.push(head);
    let mut occupied = HashSet::with_capacity(n + 1);
    occupied.insert((head.x, head.y, head.z));

    let mut moves = LATTICE_MOVES;
    for _ in 0..n {
        moves.shuffle(rng);
        let mut placed = false;
        for step in &moves {
            let next = head + Vector3::from(*step);
            if occupied.insert((next.x, next.y, next.z)) {
                path.push(next);
                head = next;
                placed = true;
                break;
            }
        }
        if !placed {
            return None;
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn straight_line(n: usize) -> Vec<Vector3<f64>> {
        (0..=n).map(|i| Vector3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn test_grown_walk_has_n_plus_one_distinct_sites() {
        let mut rng = StdRng::seed_from_u64(42);
        for &n in &[1, 5, 20, 100] {
            let walk = Walk::grow(n, 1.0, &mut rng);
            assert_eq!(walk.num_sites(), n + 1);
            assert!(walk.is_self_avoiding());
        }
    }

    #[test]
    fn test_grown_walk_steps_are_single_axis_moves() {
        let mut rng = StdRng::seed_from_u64(9);
        let step = 0.5;
        let walk = Walk::grow(50, step, &mut rng);
        for bond in walk.bonds() {
            let nonzero: Vec<f64> = [bond.x, bond.y, bond.z]
                .into_iter()
                .filter(|c| *c != 0.0)
                .collect();
            assert_eq!(nonzero.len(), 1);
            assert_relative_eq!(nonzero[0].abs(), step, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_grow_single_step() {
        let mut rng = StdRng::seed_from_u64(1);
        let walk = Walk::grow(1, 1.0, &mut rng);
        assert_eq!(walk.num_sites(), 2);
        assert_eq!(walk.sites()[0], Vector3::zeros());
        let bond = walk.sites()[1] - walk.sites()[0];
        assert_relative_eq!(bond.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grow_starts_at_origin() {
        let mut rng = StdRng::seed_from_u64(17);
        let walk = Walk::grow(30, 2.0, &mut rng);
        assert_eq!(walk.sites()[0], Vector3::zeros());
    }

    #[test]
    fn test_grow_bounded_succeeds_for_short_chains() {
        let mut rng = StdRng::seed_from_u64(5);
        let walk = Walk::grow_bounded(10, 1.0, 1000, &mut rng).unwrap();
        assert_eq!(walk.num_sites(), 11);
        assert!(walk.is_self_avoiding());
    }

    #[test]
    fn test_self_avoidance_validator() {
        assert!(is_self_avoiding(&straight_line(5)));

        let mut revisiting = straight_line(2);
        revisiting.push(Vector3::new(1.0, 0.0, 0.0));
        assert!(!is_self_avoiding(&revisiting));
    }

    #[test]
    fn test_validator_folds_signed_zero() {
        // -0.0 and +0.0 are the same site even though their bits differ.
        let sites = vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(-0.0, 0.0, -0.0)];
        assert!(!is_self_avoiding(&sites));
    }
}
