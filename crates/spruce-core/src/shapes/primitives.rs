//! Cone and sphere samplers shared by foliage and ornament generation.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::random::RandomSource;

/// Golden angle in radians. Stepping by it spreads any number of points
/// evenly around the axis without clustering.
pub const GOLDEN_ANGLE: f32 = 2.39996;

/// Fraction of the local cone radius ornaments sit at.
pub const ORNAMENT_SURFACE: f32 = 0.95;

/// Cone radius at height `y` above the base (0 at the tip).
pub fn cone_radius_at(y: f32, height: f32, base_radius: f32) -> f32 {
    base_radius * (1.0 - y / height)
}

/// Point at polar `(r, theta)` and base height `y`, vertically centred.
pub fn cone_point(r: f32, theta: f32, y: f32, height: f32) -> Vec3 {
    Vec3::new(r * theta.cos(), y - height / 2.0, r * theta.sin())
}

/// Foliage tree target. Radius biased toward the surface with some inner volume.
///
/// Draws: height, radial bias.
pub fn foliage_tree_point(
    index: usize,
    height: f32,
    base_radius: f32,
    rng: &mut impl RandomSource,
) -> Vec3 {
    let y = rng.next_unit() * height;
    let local = cone_radius_at(y, height, base_radius);
    let r = local * (0.4 + 0.6 * rng.next_unit().sqrt());
    let theta = index as f32 * GOLDEN_ANGLE;
    cone_point(r, theta, y, height)
}

/// Ornament tree target, near the cone surface at a random angle.
///
/// Draws: height, angle.
pub fn ornament_tree_point(height: f32, base_radius: f32, rng: &mut impl RandomSource) -> Vec3 {
    let y = rng.next_unit() * height;
    let r = cone_radius_at(y, height, base_radius) * ORNAMENT_SURFACE;
    let theta = rng.next_unit() * TAU;
    cone_point(r, theta, y, height)
}

/// Uniform-density point inside a sphere centred at the origin.
///
/// The cube root on the radius is what makes the density volumetric;
/// a linear radius would crowd points at the centre.
///
/// Draws: azimuth, polar, radius.
pub fn random_in_sphere(radius: f32, rng: &mut impl RandomSource) -> Vec3 {
    let theta = TAU * rng.next_unit();
    let phi = (2.0 * rng.next_unit() - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.next_unit().cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}
