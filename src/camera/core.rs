//! Camera state and view/projection matrices.

use glam::{Mat3, Mat4, Vec3};

use crate::util::angles::degrees_to_radians;

/// Perspective camera with a look-at target and rigid motion operations.
///
/// `rotate_*` orbits the eye around the world origin, `pan_*` swings the
/// look-at target around the eye, and `forward`/`backward` dolly the eye
/// along the gaze. The rotation-axis derivations intentionally differ
/// between the up/down and left/right variants and are kept exactly as
/// the demo shipped them; see the individual methods.
///
/// A zero-length gaze (eye on top of the target) is undefined and yields
/// NaN. That is a documented limitation, not a guarded error.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Up reference vector.
    pub up: Vec3,
    /// Look-at target in world space.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near plane distance.
    pub znear: f32,
    /// Far plane distance.
    pub zfar: f32,
    step: f32,
}

impl Camera {
    /// Create a camera. `step` is the angular/translation increment in
    /// radians (and world units) applied by each motion operation.
    #[must_use]
    pub fn new(
        eye: Vec3,
        up: Vec3,
        target: Vec3,
        fovy: f32,
        znear: f32,
        zfar: f32,
        step: f32,
    ) -> Self {
        Self {
            eye,
            up,
            target,
            fovy,
            znear,
            zfar,
            step,
        }
    }

    /// Unit gaze direction from the eye toward the target.
    #[must_use]
    pub fn gaze(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Right vector: gaze crossed with up, normalized.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let r = self.gaze().cross(self.up);
        r / r.length()
    }

    /// Motion increment in radians (and world units) per operation.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// View matrix (right-handed look-at).
    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix with OpenGL [-1, 1] clip depth.
    ///
    /// The GL depth convention keeps the canonical `-w <= z <= w`
    /// containment test of
    /// [`point_in_frustum`](super::frustum::point_in_frustum) symmetric in
    /// all three axes.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            degrees_to_radians(self.fovy),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-then-projection transform.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Dolly the eye one step forward along the gaze.
    pub fn forward(&mut self) {
        self.eye += self.gaze() * self.step;
    }

    /// Dolly the eye one step backward along the gaze.
    pub fn backward(&mut self) {
        self.eye -= self.gaze() * self.step;
    }

    /// Swing the look-at target left around the eye, with the stored up
    /// vector as the rotation axis.
    pub fn pan_left(&mut self) {
        let m = Mat3::from_axis_angle(self.up, self.step);
        self.target = self.eye + m * (self.target - self.eye);
    }

    /// Swing the look-at target right around the eye.
    pub fn pan_right(&mut self) {
        let m = Mat3::from_axis_angle(self.up, -self.step);
        self.target = self.eye + m * (self.target - self.eye);
    }

    /// Orbit the eye left around the world origin. The up vector is not
    /// touched.
    pub fn rotate_left(&mut self) {
        let (_, u) = self.origin_frame();
        let m = Mat3::from_axis_angle(u, self.step);
        self.eye = m * self.eye;
    }

    /// Orbit the eye right around the world origin.
    pub fn rotate_right(&mut self) {
        let (_, u) = self.origin_frame();
        let m = Mat3::from_axis_angle(u, -self.step);
        self.eye = m * self.eye;
    }

    /// Tilt the eye and up vector around the right axis.
    ///
    /// The axis here comes from the gaze-derived [`right`](Self::right)
    /// vector, while [`rotate_down`](Self::rotate_down) re-derives its
    /// axis from the eye direction; the asymmetry is intentional.
    pub fn rotate_up(&mut self) {
        let r = self.right();
        let m = Mat3::from_axis_angle(r, -self.step);
        self.up = m * self.up;
        self.eye = m * self.eye;
    }

    /// Tilt the eye around the origin-frame side axis, re-deriving the up
    /// vector from the rotated frame.
    pub fn rotate_down(&mut self) {
        let f = (-self.eye).normalize();
        let up = self.up.normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        let m = Mat3::from_axis_angle(s, self.step);
        self.up = m * u;
        self.eye = m * self.eye;
    }

    /// Side and up axes of the frame anchored on the eye-to-origin
    /// direction.
    fn origin_frame(&self) -> (Vec3, Vec3) {
        let f = (-self.eye).normalize();
        let up = self.up.normalize();
        let s = f.cross(up).normalize();
        (s, s.cross(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::angles::degrees_to_radians;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::Y,
            Vec3::ZERO,
            90.0,
            1.0,
            100.0,
            degrees_to_radians(2.0),
        )
    }

    #[test]
    fn orbits_preserve_distance_to_origin() {
        let mut camera = test_camera();
        for i in 0..37 {
            match i % 4 {
                0 => camera.rotate_left(),
                1 => camera.rotate_up(),
                2 => camera.rotate_right(),
                _ => camera.rotate_down(),
            }
        }
        assert!(
            (camera.eye.length() - 10.0).abs() < 1e-4,
            "eye distance {}",
            camera.eye.length()
        );
    }

    #[test]
    fn forward_then_backward_restores_eye() {
        let mut camera = test_camera();
        let eye = camera.eye;
        camera.forward();
        assert!((camera.eye - eye).length() > 1e-4);
        camera.backward();
        assert!((camera.eye - eye).length() < 1e-5);
    }

    #[test]
    fn forward_moves_along_gaze() {
        let mut camera = test_camera();
        camera.forward();
        // Gaze is -Z from (0, 0, 10) toward the origin.
        let expected = Vec3::new(0.0, 0.0, 10.0 - camera.step());
        assert!((camera.eye - expected).length() < 1e-6);
    }

    #[test]
    fn pan_leaves_eye_and_target_distance_fixed() {
        let mut camera = test_camera();
        let eye = camera.eye;
        let reach = (camera.target - camera.eye).length();
        camera.pan_left();
        assert_eq!(camera.eye, eye);
        assert!(((camera.target - camera.eye).length() - reach).abs() < 1e-4);
        camera.pan_right();
        assert!((camera.target - Vec3::ZERO).length() < 1e-4);
    }

    #[test]
    fn pan_rotates_gaze_by_one_step() {
        let mut camera = test_camera();
        let before = camera.gaze();
        camera.pan_left();
        let cos = before.dot(camera.gaze()).clamp(-1.0, 1.0);
        assert!((cos.acos() - camera.step()).abs() < 1e-4);
    }

    #[test]
    fn rotate_left_keeps_up_vector() {
        let mut camera = test_camera();
        let up = camera.up;
        camera.rotate_left();
        assert_eq!(camera.up, up);
        assert!((camera.eye - Vec3::new(0.0, 0.0, 10.0)).length() > 1e-4);
    }

    #[test]
    fn rotate_up_then_down_restores_eye() {
        // The up/down axis derivations differ, but from an orthonormal
        // start the eye path is inverse.
        let mut camera = test_camera();
        let eye = camera.eye;
        camera.rotate_up();
        camera.rotate_down();
        assert!((camera.eye - eye).length() < 1e-4);
    }

    #[test]
    fn view_projection_maps_target_to_clip_interior() {
        let camera = test_camera();
        let clip = camera.view_projection(1.0) * camera.target.extend(1.0);
        assert!(clip.w > 0.0);
        assert!(clip.x.abs() <= clip.w);
        assert!(clip.y.abs() <= clip.w);
        assert!(clip.z.abs() <= clip.w);
    }
}
