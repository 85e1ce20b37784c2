use nalgebra::Vector3;

use crate::walk::Walk;

/// Radius of gyration R_g: root-mean-square distance of the sites from
/// their centroid. Pure; requires a walk with at least one site.
pub fn radius_of_gyration(walk: &Walk) -> f64 {
    let sites = walk.sites();
    let centroid = sites.iter().sum::<Vector3<f64>>() / sites.len() as f64;
    let mean_sq = sites
        .iter()
        .map(|p| (p - centroid).norm_squared())
        .sum::<f64>()
        / sites.len() as f64;
    mean_sq.sqrt()
}

/// End-to-end distance R_ee: Euclidean distance between the first and last
/// site.
pub fn end_to_end_distance(walk: &Walk) -> f64 {
    let sites = walk.sites();
    (sites[sites.len() - 1] - sites[0]).norm()
}
