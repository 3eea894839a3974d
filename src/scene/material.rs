//! Phong materials.

use glam::Vec4;

/// Phong illumination coefficients. Immutable once constructed; each
/// teapot owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance (alpha carried but unused by the shading
    /// model).
    pub ambient: Vec4,
    /// Diffuse reflectance.
    pub diffuse: Vec4,
    /// Specular reflectance.
    pub specular: Vec4,
    /// Shininess exponent, >= 0.
    pub shininess: f32,
}

impl Material {
    /// Assemble a material from its four coefficients.
    #[must_use]
    pub const fn new(
        ambient: Vec4,
        diffuse: Vec4,
        specular: Vec4,
        shininess: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Uniform block mirror for the renderer.
    #[must_use]
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            ambient: self.ambient.to_array(),
            diffuse: self.diffuse.to_array(),
            specular: self.specular.to_array(),
            shininess: self.shininess,
            _pad: [0.0; 3],
        }
    }
}

impl Default for Material {
    /// Mid-gray diffuse with the scene's stock ambient, specular, and
    /// shininess.
    fn default() -> Self {
        Self::new(
            Vec4::new(0.2, 0.2, 0.2, 1.0),
            Vec4::new(0.5, 0.5, 0.5, 1.0),
            Vec4::ONE,
            100.0,
        )
    }
}

/// Phong coefficients laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Ambient reflectance.
    pub ambient: [f32; 4],
    /// Diffuse reflectance.
    pub diffuse: [f32; 4],
    /// Specular reflectance.
    pub specular: [f32; 4],
    /// Shininess exponent.
    pub shininess: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_mirrors_coefficients() {
        let material = Material::new(
            Vec4::new(0.1, 0.2, 0.3, 1.0),
            Vec4::new(0.4, 0.5, 0.6, 1.0),
            Vec4::ONE,
            32.0,
        );
        let uniform = material.uniform();
        assert_eq!(uniform.ambient, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(uniform.diffuse, [0.4, 0.5, 0.6, 1.0]);
        assert_eq!(uniform.shininess, 32.0);
    }

    #[test]
    fn uniform_is_sixty_four_bytes() {
        assert_eq!(size_of::<MaterialUniform>(), 64);
    }
}
