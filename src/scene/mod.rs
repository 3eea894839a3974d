//! Scene state: teapots, lights, cameras, and the active-camera selector.

mod material;
mod teapot;

pub use material::{Material, MaterialUniform};
pub use teapot::Teapot;

use glam::{Vec3, Vec4};
use rand::Rng;

use crate::camera::frustum::point_in_frustum;
use crate::camera::Camera;
use crate::lighting::OrbitLight;
use crate::options::Options;
use crate::util::angles::degrees_to_radians;
use crate::util::sampling;

/// Which camera the frame loop draws through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraSelect {
    /// First-person camera; culled teapots are skipped entirely.
    #[default]
    Main,
    /// Overhead camera that shows every teapot, color-coded by whether
    /// the main camera would see it, plus the main frustum wireframe.
    BirdsEye,
}

/// Complete mutable world state for one viewing session.
///
/// The selector is an explicit enum resolved to a concrete camera at the
/// point of use, never a stored reference into a sibling field.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Renderable teapots.
    pub teapots: Vec<Teapot>,
    /// The two orbiting point lights.
    pub lights: [OrbitLight; 2],
    /// First-person camera whose frustum drives culling.
    pub main_camera: Camera,
    /// Overhead camera for visualizing the culling.
    pub birds_eye_camera: Camera,
    /// Camera the next frame draws through.
    pub active: CameraSelect,
}

impl Scene {
    /// Build the demo scene: randomized teapots on a disk in the z = 0
    /// plane, plus the stock lights and cameras.
    pub fn new(options: &Options, rng: &mut impl Rng) -> Self {
        let teapots = (0..options.scene.teapot_count)
            .map(|_| {
                let diffuse = sampling::channel_color(rng, 0.2, 1.0);
                log::debug!("teapot diffuse color {diffuse}");
                let xy = sampling::disk_point(rng, options.scene.disk_radius);
                Teapot::new(
                    Vec3::new(xy.x, xy.y, 0.0),
                    1.0,
                    Material::new(
                        Vec4::new(0.2, 0.2, 0.2, 1.0),
                        diffuse.extend(1.0),
                        Vec4::ONE,
                        100.0,
                    ),
                )
            })
            .collect();

        let (main_camera, birds_eye_camera) = Self::stock_cameras(options);
        Self {
            teapots,
            lights: Self::stock_lights(options, rng),
            main_camera,
            birds_eye_camera,
            active: CameraSelect::Main,
        }
    }

    /// Restore cameras, rotation steps, lights, and the selector to their
    /// stock state. The lights roll fresh random tangents; teapots keep
    /// their positions and materials.
    pub fn reset(&mut self, options: &Options, rng: &mut impl Rng) {
        let (main_camera, birds_eye_camera) = Self::stock_cameras(options);
        self.main_camera = main_camera;
        self.birds_eye_camera = birds_eye_camera;
        self.lights = Self::stock_lights(options, rng);
        self.active = CameraSelect::Main;
        log::info!("cameras, rotation step, and lights reset");
    }

    /// Camera currently selected for drawing.
    #[must_use]
    pub fn active_camera(&self) -> &Camera {
        match self.active {
            CameraSelect::Main => &self.main_camera,
            CameraSelect::BirdsEye => &self.birds_eye_camera,
        }
    }

    /// Re-classify every teapot against the main camera's frustum.
    ///
    /// Always the main camera, whichever camera is active: the bird's-eye
    /// view exists to show what the main camera would cull.
    pub fn update_visibility(&mut self, aspect: f32) {
        let view_proj = self.main_camera.view_projection(aspect);
        for teapot in &mut self.teapots {
            teapot.visible = point_in_frustum(&view_proj, teapot.position);
        }
    }

    fn stock_cameras(options: &Options) -> (Camera, Camera) {
        let cam = &options.camera;
        let step = degrees_to_radians(cam.step_degrees);
        let main = Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::Y,
            Vec3::ZERO,
            cam.fovy,
            cam.znear,
            cam.zfar,
            step,
        );
        let birds_eye = Camera::new(
            Vec3::new(0.0, 0.0, 40.0),
            Vec3::Y,
            Vec3::ZERO,
            cam.fovy,
            cam.znear,
            cam.zfar,
            step,
        );
        (main, birds_eye)
    }

    fn stock_lights(options: &Options, rng: &mut impl Rng) -> [OrbitLight; 2] {
        let step = degrees_to_radians(options.camera.step_degrees);
        [
            OrbitLight::new(
                Vec3::ONE,
                Vec3::new(0.0, 50.0, 50.0),
                Vec3::ZERO,
                step,
                rng,
            ),
            OrbitLight::new(
                Vec3::ONE,
                Vec3::new(0.0, 50.0, -50.0),
                Vec3::ZERO,
                step,
                rng,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn test_scene() -> Scene {
        let mut rng = StdRng::seed_from_u64(9);
        Scene::new(&Options::default(), &mut rng)
    }

    #[test]
    fn stock_scene_shape() {
        let scene = test_scene();
        assert_eq!(scene.teapots.len(), 20);
        assert_eq!(scene.active, CameraSelect::Main);
        assert_eq!(scene.main_camera.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(scene.birds_eye_camera.eye, Vec3::new(0.0, 0.0, 40.0));
        for teapot in &scene.teapots {
            assert_eq!(teapot.position.z, 0.0);
            assert!(teapot.position.length() <= 30.0 + 1e-4);
        }
    }

    #[test]
    fn visibility_uses_the_main_camera_even_in_birds_eye() {
        let mut scene = test_scene();
        scene.update_visibility(1.0);
        let from_main: Vec<bool> =
            scene.teapots.iter().map(|t| t.visible).collect();

        scene.active = CameraSelect::BirdsEye;
        scene.update_visibility(1.0);
        let from_birds_eye: Vec<bool> =
            scene.teapots.iter().map(|t| t.visible).collect();

        assert_eq!(from_main, from_birds_eye);
    }

    #[test]
    fn visibility_matches_direct_classification() {
        let mut scene = test_scene();
        scene.update_visibility(1.5);
        let view_proj = scene.main_camera.view_projection(1.5);
        for teapot in &scene.teapots {
            assert_eq!(
                teapot.visible,
                point_in_frustum(&view_proj, teapot.position)
            );
        }
    }

    #[test]
    fn reset_restores_cameras_and_selector() {
        let mut scene = test_scene();
        let mut rng = StdRng::seed_from_u64(10);
        scene.main_camera.forward();
        scene.main_camera.rotate_left();
        scene.active = CameraSelect::BirdsEye;
        let teapot_positions: Vec<Vec3> =
            scene.teapots.iter().map(|t| t.position).collect();

        scene.reset(&Options::default(), &mut rng);

        assert_eq!(scene.main_camera.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(scene.active, CameraSelect::Main);
        // Teapots survive a reset untouched.
        let after: Vec<Vec3> =
            scene.teapots.iter().map(|t| t.position).collect();
        assert_eq!(teapot_positions, after);
    }

    #[test]
    fn active_camera_follows_the_selector() {
        let mut scene = test_scene();
        assert_eq!(scene.active_camera().eye, scene.main_camera.eye);
        scene.active = CameraSelect::BirdsEye;
        assert_eq!(scene.active_camera().eye, scene.birds_eye_camera.eye);
    }
}
