//! Orbiting point lights.

use glam::{Mat4, Vec3, Vec4};
use rand::Rng;

use crate::orbit::Orbiter;

/// A point light that spins on a sphere around a fixed center.
///
/// Toggling the light off swaps its color to black and remembers the
/// original; the light keeps orbiting while dark and re-lights with the
/// saved color.
#[derive(Debug, Clone)]
pub struct OrbitLight {
    orbit: Orbiter,
    color: Vec3,
    saved_color: Vec3,
    is_on: bool,
}

impl OrbitLight {
    /// Create a lit light at `position` orbiting `center`, with a random
    /// tangent.
    pub fn new(
        color: Vec3,
        position: Vec3,
        center: Vec3,
        step: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            orbit: Orbiter::new(position, center, step, rng),
            color,
            saved_color: color,
            is_on: true,
        }
    }

    /// Orbital state, immutable.
    #[must_use]
    pub fn orbit(&self) -> &Orbiter {
        &self.orbit
    }

    /// Orbital state, for driving rotations.
    pub fn orbit_mut(&mut self) -> &mut Orbiter {
        &mut self.orbit
    }

    /// Homogeneous world-space position.
    #[must_use]
    pub fn position(&self) -> Vec4 {
        self.orbit.position.extend(1.0)
    }

    /// Current color with alpha 1; black while toggled off.
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color.extend(1.0)
    }

    /// Whether the light is emitting.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Flip the light on or off, restoring the saved color on re-enable.
    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
        self.color = if self.is_on {
            self.saved_color
        } else {
            Vec3::ZERO
        };
    }

    /// Uniform block for the renderer, with the position transformed into
    /// eye space by `view` so the shader sees it in the same space as the
    /// geometry.
    #[must_use]
    pub fn uniform(&self, view: &Mat4) -> LightUniform {
        LightUniform {
            position: (*view * self.position()).to_array(),
            color: self.color().to_array(),
        }
    }
}

/// Eye-space light parameters laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Light position in eye space (homogeneous).
    pub position: [f32; 4],
    /// Light color, alpha 1.
    pub color: [f32; 4],
}
