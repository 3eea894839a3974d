//! Degree/radian conversion.
//!
//! Angles are stored in degrees where humans edit them (options files,
//! camera fields) and converted once at the point a matrix or rotation is
//! built.

use std::f32::consts::PI;

/// Convert degrees to radians.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}
