//! The orbital transform model.
//!
//! Shared math for anything that moves along the surface of a sphere
//! around a fixed pivot while carrying a tangent (up) reference. The two
//! spinning lights use it directly; [`Camera`](crate::camera::Camera)
//! mirrors the same algebra with its own per-operation axis derivations.

use glam::{Mat3, Vec3};
use rand::Rng;

use crate::util::sampling;

/// An entity constrained to a sphere around a fixed pivot.
///
/// The tangent stays approximately orthogonal to the pivot direction: the
/// up/down rotations re-derive it from the orthonormalized frame on every
/// step, so numeric drift is not amplified across thousands of small
/// rotations.
///
/// If `position` coincides with `pivot` the direction is undefined and
/// every operation yields NaN. Callers keep the two apart; there is no
/// runtime guard.
#[derive(Debug, Clone)]
pub struct Orbiter {
    /// Current position on the orbit sphere.
    pub position: Vec3,
    /// Fixed center of the orbit sphere.
    pub pivot: Vec3,
    /// Up reference, kept approximately orthogonal to the pivot direction.
    pub tangent: Vec3,
    step: f32,
}

impl Orbiter {
    /// Create an orbiter with a randomly chosen tangent.
    ///
    /// The tangent is the cross product of the pivot direction with a
    /// random unit vector: orthogonal to the direction by construction,
    /// unit length only after the first rotation re-derives it.
    pub fn new(
        position: Vec3,
        pivot: Vec3,
        step: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut orbiter = Self {
            position,
            pivot,
            tangent: Vec3::ZERO,
            step,
        };
        orbiter.tangent = orbiter.direction().cross(sampling::unit_vector(rng));
        orbiter
    }

    /// Unit vector from the position toward the pivot.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.pivot - self.position).normalize()
    }

    /// Angular step in radians applied by each rotation.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Orthonormal frame at the current position: direction, right, up.
    fn frame(&self) -> (Vec3, Vec3, Vec3) {
        let d = self.direction();
        let up = self.tangent.normalize();
        let s = d.cross(up).normalize();
        let u = s.cross(d);
        (d, s, u)
    }

    /// Rigid rotation of the position about an axis through the pivot.
    fn rotate_position(&mut self, m: Mat3) {
        self.position = self.pivot + m * (self.position - self.pivot);
    }

    /// Rotate position and tangent one positive step around the right axis.
    pub fn rotate_up(&mut self) {
        let (_, s, u) = self.frame();
        let m = Mat3::from_axis_angle(s, self.step);
        self.tangent = m * u;
        self.rotate_position(m);
    }

    /// Rotate position and tangent one negative step around the right axis.
    pub fn rotate_down(&mut self) {
        let (_, s, u) = self.frame();
        let m = Mat3::from_axis_angle(s, -self.step);
        self.tangent = m * u;
        self.rotate_position(m);
    }

    /// Rotate the position one positive step around the up axis. The
    /// tangent is untouched; the up axis is its own rotation pole.
    pub fn rotate_left(&mut self) {
        let (_, _, u) = self.frame();
        let m = Mat3::from_axis_angle(u, self.step);
        self.rotate_position(m);
    }

    /// Rotate the position one negative step around the up axis.
    pub fn rotate_right(&mut self) {
        let (_, _, u) = self.frame();
        let m = Mat3::from_axis_angle(u, -self.step);
        self.rotate_position(m);
    }

    /// Spin the tangent around the pivot direction; position unchanged.
    pub fn roll(&mut self) {
        let m = Mat3::from_axis_angle(self.direction(), -self.step);
        self.tangent = m * self.tangent;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::util::angles::degrees_to_radians;

    /// Orbiter at distance 10 from the origin with a settled, orthonormal
    /// tangent (one up/down round trip re-derives it from the frame).
    fn settled_orbiter(step_degrees: f32) -> Orbiter {
        let mut rng = StdRng::seed_from_u64(7);
        let mut o = Orbiter::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            degrees_to_radians(step_degrees),
            &mut rng,
        );
        o.rotate_up();
        o.rotate_down();
        o
    }

    #[test]
    fn full_revolution_up_returns_to_start() {
        let mut o = settled_orbiter(1.0);
        let start_pos = o.position;
        let start_tan = o.tangent;
        for _ in 0..360 {
            o.rotate_up();
        }
        assert!(
            (o.position - start_pos).length() < 1e-2,
            "position drifted by {}",
            (o.position - start_pos).length()
        );
        assert!((o.tangent - start_tan).length() < 1e-2);
    }

    #[test]
    fn full_revolution_left_returns_to_start() {
        let mut o = settled_orbiter(1.0);
        let start_pos = o.position;
        for _ in 0..360 {
            o.rotate_left();
        }
        assert!((o.position - start_pos).length() < 1e-2);
    }

    #[test]
    fn up_then_down_is_identity() {
        let mut o = settled_orbiter(2.0);
        let pos = o.position;
        let tan = o.tangent;
        o.rotate_up();
        o.rotate_down();
        assert!((o.position - pos).length() < 1e-5);
        assert!((o.tangent - tan).length() < 1e-5);
    }

    #[test]
    fn left_then_right_is_identity() {
        let mut o = settled_orbiter(2.0);
        let pos = o.position;
        o.rotate_left();
        o.rotate_right();
        assert!((o.position - pos).length() < 1e-5);
    }

    #[test]
    fn rotations_preserve_distance_to_pivot() {
        let mut o = settled_orbiter(3.0);
        let radius = (o.position - o.pivot).length();
        for i in 0..37 {
            match i % 5 {
                0 => o.rotate_up(),
                1 => o.rotate_left(),
                2 => o.rotate_down(),
                3 => o.rotate_right(),
                _ => o.roll(),
            }
        }
        let after = (o.position - o.pivot).length();
        assert!((after - radius).abs() < 1e-4, "radius {radius} -> {after}");
    }

    #[test]
    fn off_origin_pivot_preserves_distance() {
        let mut rng = StdRng::seed_from_u64(11);
        let pivot = Vec3::new(3.0, -2.0, 5.0);
        let mut o = Orbiter::new(
            pivot + Vec3::new(0.0, 0.0, 10.0),
            pivot,
            degrees_to_radians(2.0),
            &mut rng,
        );
        for _ in 0..37 {
            o.rotate_up();
            o.rotate_left();
        }
        let after = (o.position - pivot).length();
        assert!((after - 10.0).abs() < 1e-4);
    }

    #[test]
    fn tangent_stays_orthogonal_to_direction() {
        let mut o = settled_orbiter(5.0);
        for _ in 0..50 {
            o.rotate_up();
            o.rotate_left();
        }
        let dot = o.tangent.normalize().dot(o.direction());
        assert!(dot.abs() < 1e-4, "tangent drifted, dot = {dot}");
    }

    #[test]
    fn roll_moves_only_the_tangent() {
        let mut o = settled_orbiter(4.0);
        let pos = o.position;
        let tan = o.tangent;
        o.roll();
        assert_eq!(o.position, pos);
        assert!((o.tangent - tan).length() > 1e-4);
        // Rolling keeps the tangent in the plane orthogonal to the
        // direction.
        assert!(o.tangent.normalize().dot(o.direction()).abs() < 1e-4);
    }

    #[test]
    fn initial_tangent_is_orthogonal() {
        let mut rng = StdRng::seed_from_u64(42);
        let o = Orbiter::new(
            Vec3::new(0.0, 50.0, 50.0),
            Vec3::ZERO,
            degrees_to_radians(1.0),
            &mut rng,
        );
        assert!(o.tangent.normalize().dot(o.direction()).abs() < 1e-5);
    }
}
