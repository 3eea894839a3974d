//! Random direction and placement sampling.
//!
//! Rejection sampling keeps the distributions exactly uniform without
//! pulling in a distributions crate.

use glam::{Vec2, Vec3};
use rand::Rng;

/// Uniformly distributed unit vector.
///
/// Samples the unit ball and normalizes; candidates too close to the
/// origin are rejected so the normalization stays well conditioned.
pub fn unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}

/// Uniform point on a disk of the given radius, centered at the origin.
pub fn disk_point(rng: &mut impl Rng, radius: f32) -> Vec2 {
    loop {
        let p = Vec2::new(
            rng.random_range(-radius..=radius),
            rng.random_range(-radius..=radius),
        );
        if p.length_squared() <= radius * radius {
            return p;
        }
    }
}

/// Color with each channel uniform in `[lo, hi]`.
pub fn channel_color(rng: &mut impl Rng, lo: f32, hi: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let v = unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5, "length {}", v.length());
        }
    }

    #[test]
    fn disk_points_stay_inside_radius() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let p = disk_point(&mut rng, 30.0);
            assert!(p.length() <= 30.0 + 1e-4);
        }
    }

    #[test]
    fn channel_color_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let c = channel_color(&mut rng, 0.2, 1.0);
            for channel in c.to_array() {
                assert!((0.2..=1.0).contains(&channel));
            }
        }
    }
}
