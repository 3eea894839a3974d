//! Renderable teapot instances.

use glam::Vec3;

use super::material::Material;

/// One renderable teapot.
#[derive(Debug, Clone)]
pub struct Teapot {
    /// World-space position; also the reference point the culling pass
    /// classifies.
    pub position: Vec3,
    /// Uniform mesh scale.
    pub scale: f32,
    /// Phong material.
    pub material: Material,
    /// Whether the main camera's frustum contains the position.
    /// Recomputed every frame before drawing.
    pub visible: bool,
}

impl Teapot {
    /// Create a teapot. Visibility starts true and is overwritten by the
    /// first frame's culling pass.
    #[must_use]
    pub fn new(position: Vec3, scale: f32, material: Material) -> Self {
        Self {
            position,
            scale,
            material,
            visible: true,
        }
    }
}

impl Default for Teapot {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, Material::default())
    }
}
