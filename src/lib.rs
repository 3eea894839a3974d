//! Teapot scene viewer with view-frustum culling.
//!
//! A teaching demo: twenty teapots scattered on a disk, lit by two point
//! lights that orbit the origin, viewed from either a first-person camera
//! or a bird's-eye camera that visualizes the first camera's frustum and
//! which teapots it culls.
//!
//! # Key entry points
//!
//! - [`engine::TeaviewEngine`] - the frame-driven engine
//! - [`scene::Scene`] - teapots, lights, cameras, and the active-camera
//!   selector
//! - [`options::Options`] - runtime configuration (camera, scene,
//!   keybindings) with TOML presets
//! - [`render::Renderer`] - the seam a platform renderer implements
//!
//! # Architecture
//!
//! The crate performs no rasterization and opens no GPU device. One frame
//! is: read the held-key set, fire at most one bound command in priority
//! order, recompute the camera matrices, classify every teapot against the
//! main camera's frustum, then hand the resulting draw calls to an
//! external [`render::Renderer`]. The optional `viewer` feature adds a
//! winit window shell that drives this loop once per redraw.

/// Camera state, matrices, and frustum tests.
pub mod camera;
/// Frame-driven engine and its command vocabulary.
pub mod engine;
/// Crate-level error types.
pub mod error;
/// Held-key tracking and the ordered key-binding list.
pub mod input;
/// Orbiting point lights.
pub mod lighting;
/// Runtime configuration with TOML preset support.
pub mod options;
/// The orbital transform model shared by anything that circles a pivot.
pub mod orbit;
/// Draw-call payloads and the renderer trait.
pub mod render;
/// Scene state: teapots, materials, lights, cameras.
pub mod scene;
/// Shared math utilities.
pub mod util;
/// Standalone winit window shell.
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{Command, TeaviewEngine};
pub use error::TeaviewError;
