//! The renderer seam: draw-call payloads and the trait the engine draws
//! through.
//!
//! The crate performs no rasterization. A platform renderer (OpenGL,
//! wgpu, whatever the embedder has) implements [`Renderer`];
//! [`TraceRenderer`] is the built-in headless stand-in that logs what
//! would be drawn and counts draw calls.

use glam::{Mat4, Vec3};

use crate::lighting::LightUniform;
use crate::scene::MaterialUniform;

/// A line segment in world space, handed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub start: Vec3,
    /// End point.
    pub end: Vec3,
}

/// Everything needed to draw one teapot: the uniform set a Phong shader
/// program consumes.
#[derive(Debug, Clone, Copy)]
pub struct TeapotDraw {
    /// Combined model-view transform.
    pub model_view: Mat4,
    /// Projection transform.
    pub projection: Mat4,
    /// Inverse-transpose of the model-view, for transforming normals.
    pub normal: Mat4,
    /// Uniform mesh scale applied to the unit teapot.
    pub scale: f32,
    /// Phong material uniforms.
    pub material: MaterialUniform,
    /// Both scene lights, positions already in eye space.
    pub lights: [LightUniform; 2],
}

/// Draws meshes and wireframes on behalf of the engine.
pub trait Renderer {
    /// Draw one unit teapot mesh with the given uniforms.
    fn draw_teapot(&mut self, draw: &TeapotDraw);

    /// Draw world-space line segments under the given view-projection
    /// transform.
    fn draw_wireframe(&mut self, view_proj: &Mat4, segments: &[LineSegment]);
}

/// Headless renderer that logs draw calls at trace level and keeps
/// per-frame counters. Useful for tests and for running the demo without
/// a GPU backend.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    teapots: usize,
    segments: usize,
}

impl TraceRenderer {
    /// Create a renderer with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Teapot draws since the last [`begin_frame`](Self::begin_frame).
    #[must_use]
    pub fn teapots(&self) -> usize {
        self.teapots
    }

    /// Wireframe segments since the last [`begin_frame`](Self::begin_frame).
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Reset the counters for a new frame.
    pub fn begin_frame(&mut self) {
        self.teapots = 0;
        self.segments = 0;
    }
}

impl Renderer for TraceRenderer {
    fn draw_teapot(&mut self, draw: &TeapotDraw) {
        self.teapots += 1;
        log::trace!(
            "teapot draw: scale {} shininess {}",
            draw.scale,
            draw.material.shininess
        );
    }

    fn draw_wireframe(&mut self, _view_proj: &Mat4, segments: &[LineSegment]) {
        self.segments += segments.len();
        log::trace!("wireframe draw: {} segments", segments.len());
    }
}
