//! Camera system for the teapot scene.
//!
//! State and view/projection matrices, the rigid orbit/pan/dolly
//! operations, the point-in-frustum visibility test, and the frustum
//! wireframe geometry.

/// Core camera struct, matrices, and rigid motion operations.
pub mod core;
/// Point-in-frustum classification and frustum wireframe corners.
pub mod frustum;

pub use core::Camera;
pub use frustum::{point_in_frustum, FrustumWireframe};
