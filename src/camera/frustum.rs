//! Point-in-frustum classification and frustum wireframe geometry.
//!
//! Culling works directly in homogeneous clip space: a point survives iff
//! its transformed coordinates satisfy the canonical containment
//! condition. No plane extraction, no bounding volumes.

use glam::{Mat4, Vec3};

use super::core::Camera;
use crate::render::LineSegment;
use crate::util::angles::degrees_to_radians;

/// Classify a world-space point against a combined view-projection
/// transform.
///
/// The point is mapped into homogeneous clip space and tested against
/// `-w <= x <= w`, `-w <= y <= w`, `-w <= z <= w`, boundary inclusive.
/// This is an exact point test: object extent is ignored, so a large mesh
/// whose origin sits just outside the frustum is culled whole.
///
/// Total over finite inputs. Degenerate camera parameters (near >= far,
/// zero field of view) give a deterministic all-in or all-out answer,
/// never an error.
#[must_use]
pub fn point_in_frustum(view_proj: &Mat4, point: Vec3) -> bool {
    let clip = *view_proj * point.extend(1.0);
    let w = clip.w;
    (-w..=w).contains(&clip.x)
        && (-w..=w).contains(&clip.y)
        && (-w..=w).contains(&clip.z)
}

/// World-space corners of a camera's view frustum.
///
/// Corner order within each plane: (-right, -up), (+right, -up),
/// (+right, +up), (-right, +up), counter-clockwise as seen from the eye.
#[derive(Debug, Clone, Copy)]
pub struct FrustumWireframe {
    /// Near-plane rectangle corners.
    pub near: [Vec3; 4],
    /// Far-plane rectangle corners.
    pub far: [Vec3; 4],
}

impl FrustumWireframe {
    /// Compute the eight frustum corners of `camera` at the given aspect
    /// ratio.
    ///
    /// For each plane: `half_height = tan(fovy / 2) * distance` and
    /// `half_width = half_height * aspect`; corners are the plane center
    /// offset by the orthonormalized up and right vectors.
    #[must_use]
    pub fn from_camera(camera: &Camera, aspect: f32) -> Self {
        let gaze = camera.gaze();
        let right = gaze.cross(camera.up).normalize();
        let up = right.cross(gaze);
        let half_tan = (degrees_to_radians(camera.fovy) / 2.0).tan();

        let plane = |distance: f32| {
            let center = camera.eye + gaze * distance;
            let half_height = half_tan * distance;
            let half_width = half_height * aspect;
            let h = up * half_height;
            let w = right * half_width;
            [
                center - w - h,
                center + w - h,
                center + w + h,
                center - w + h,
            ]
        };

        Self {
            near: plane(camera.znear),
            far: plane(camera.zfar),
        }
    }

    /// The 12 wireframe edges: the near loop, the far loop, and the four
    /// joins between them.
    #[must_use]
    pub fn edges(&self) -> [LineSegment; 12] {
        let mut out = [LineSegment {
            start: Vec3::ZERO,
            end: Vec3::ZERO,
        }; 12];
        for i in 0..4 {
            let j = (i + 1) % 4;
            out[i] = LineSegment {
                start: self.near[i],
                end: self.near[j],
            };
            out[4 + i] = LineSegment {
                start: self.far[i],
                end: self.far[j],
            };
            out[8 + i] = LineSegment {
                start: self.near[i],
                end: self.far[i],
            };
        }
        out
    }
}
