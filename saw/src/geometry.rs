use nalgebra::{Matrix3, Vector3};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Draw a uniformly distributed unit vector by normalizing a standard-normal
/// 3-vector. A zero-norm draw has probability zero but would turn the
/// normalization into NaN, so it is redrawn.
pub fn random_unit_axis<R: Rng>(rng: &mut R) -> Vector3<f64> {
    loop {
        let axis: Vector3<f64> = Vector3::new(
            StandardNormal.sample(rng),
            StandardNormal.sample(rng),
            StandardNormal.sample(rng),
        );
        let norm = axis.norm();
        if norm > 1e-12 {
            return axis / norm;
        }
    }
}

/// Rotation by `theta` about a unit-length `axis` via Rodrigues' formula
/// R = I + sin(θ) K + (1 - cos θ) K², where K is the cross-product matrix.
pub fn rotation_about(axis: &Vector3<f64>, theta: f64) -> Matrix3<f64> {
    let k = Matrix3::new(
        0.0, -axis.z, axis.y,
        axis.z, 0.0, -axis.x,
        -axis.y, axis.x, 0.0,
    );
    Matrix3::identity() + k * theta.sin() + (k * k) * (1.0 - theta.cos())
}

/// Proper rotation (orthonormal, det = +1) with a uniformly random axis and
/// an angle uniform in [0, 2π).
pub fn random_rotation<R: Rng>(rng: &mut R) -> Matrix3<f64> {
    let axis = random_unit_axis(rng);
    let theta = rng.gen_range(0.0..std::f64::consts::TAU);
    rotation_about(&axis, theta)
}
