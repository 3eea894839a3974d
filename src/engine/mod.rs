//! Frame-driven engine: command dispatch, visibility, and draw
//! submission.
//!
//! One call to [`TeaviewEngine::step`] is one frame of simulation: at
//! most one bound command fires for the currently held keys, then every
//! teapot is re-classified against the main camera's frustum. Drawing is
//! a separate, read-only pass through [`TeaviewEngine::render`].

/// The engine's command vocabulary.
pub mod command;

pub use command::Command;

use glam::{Mat4, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::FrustumWireframe;
use crate::input::KeySet;
use crate::options::Options;
use crate::render::{Renderer, TeapotDraw};
use crate::scene::{CameraSelect, Material, Scene};

/// Marker material for teapots the main camera sees (bird's-eye view).
const VISIBLE_MARKER: Material = Material::new(
    Vec4::new(0.2, 0.2, 0.2, 1.0),
    Vec4::new(1.0, 0.0, 0.0, 1.0),
    Vec4::ONE,
    100.0,
);

/// Marker material for teapots the main camera culls (bird's-eye view).
const CULLED_MARKER: Material = Material::new(
    Vec4::new(0.2, 0.2, 0.2, 1.0),
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::ONE,
    100.0,
);

/// The frame-driven engine owning the scene, the options, and the
/// viewport aspect ratio.
#[derive(Debug)]
pub struct TeaviewEngine {
    scene: Scene,
    options: Options,
    rng: StdRng,
    aspect: f32,
    exit: bool,
}

impl TeaviewEngine {
    /// Build the engine and its demo scene with OS entropy.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::build(options, StdRng::from_os_rng())
    }

    /// Deterministic construction for tests and reproducible runs.
    #[must_use]
    pub fn seeded(options: Options, seed: u64) -> Self {
        Self::build(options, StdRng::seed_from_u64(seed))
    }

    fn build(options: Options, mut rng: StdRng) -> Self {
        let scene = Scene::new(&options, &mut rng);
        Self {
            scene,
            options,
            rng,
            aspect: 1.0,
            exit: false,
        }
    }

    /// Read access to the scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, for embedders that drive the cameras
    /// or lights directly.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Whether a quit command has been executed.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Update the viewport aspect ratio from physical pixel dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Advance one frame: fire at most one bound command for the held
    /// keys, then re-classify visibility against the main camera.
    pub fn step(&mut self, keys: &KeySet) {
        if let Some(cmd) = self.options.keybindings.first_match(keys) {
            self.execute(cmd);
        }
        self.scene.update_visibility(self.aspect);
    }

    /// Apply one command to the scene.
    ///
    /// Camera commands always drive the main camera, even while the
    /// bird's-eye camera is active; that is what makes the overhead view
    /// useful for steering the frustum.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.exit = true,
            Command::Noop => {}
            Command::Reset => {
                self.scene.reset(&self.options, &mut self.rng);
            }

            Command::CameraLeft => self.scene.main_camera.rotate_left(),
            Command::CameraRight => self.scene.main_camera.rotate_right(),
            Command::CameraUp => self.scene.main_camera.rotate_up(),
            Command::CameraDown => self.scene.main_camera.rotate_down(),
            Command::CameraForward => self.scene.main_camera.forward(),
            Command::CameraBackward => self.scene.main_camera.backward(),
            Command::CameraPanLeft => self.scene.main_camera.pan_left(),
            Command::CameraPanRight => self.scene.main_camera.pan_right(),

            Command::Light0Up => self.scene.lights[0].orbit_mut().rotate_up(),
            Command::Light0Down => {
                self.scene.lights[0].orbit_mut().rotate_down();
            }
            Command::Light0Left => {
                self.scene.lights[0].orbit_mut().rotate_left();
            }
            Command::Light0Right => {
                self.scene.lights[0].orbit_mut().rotate_right();
            }
            Command::Light0Roll => self.scene.lights[0].orbit_mut().roll(),
            Command::Light0Toggle => self.scene.lights[0].toggle(),

            Command::Light1Up => self.scene.lights[1].orbit_mut().rotate_up(),
            Command::Light1Down => {
                self.scene.lights[1].orbit_mut().rotate_down();
            }
            Command::Light1Left => {
                self.scene.lights[1].orbit_mut().rotate_left();
            }
            Command::Light1Right => {
                self.scene.lights[1].orbit_mut().rotate_right();
            }
            Command::Light1Roll => self.scene.lights[1].orbit_mut().roll(),
            Command::Light1Toggle => self.scene.lights[1].toggle(),

            Command::SelectMainCamera => {
                self.scene.active = CameraSelect::Main;
            }
            Command::SelectBirdsEyeCamera => {
                self.scene.active = CameraSelect::BirdsEye;
            }
        }
    }

    /// Submit the frame to the renderer.
    ///
    /// Through the main camera only visible teapots are drawn, with their
    /// own materials. Through the bird's-eye camera every teapot is
    /// drawn, red when the main camera sees it and white when culled,
    /// followed by the main camera's frustum wireframe.
    pub fn render(&self, renderer: &mut impl Renderer) {
        let camera = self.scene.active_camera();
        let view = camera.view();
        let projection = camera.projection(self.aspect);
        let lights = [
            self.scene.lights[0].uniform(&view),
            self.scene.lights[1].uniform(&view),
        ];

        for teapot in &self.scene.teapots {
            let material = match self.scene.active {
                CameraSelect::Main => {
                    if !teapot.visible {
                        continue;
                    }
                    teapot.material
                }
                CameraSelect::BirdsEye => {
                    if teapot.visible {
                        VISIBLE_MARKER
                    } else {
                        CULLED_MARKER
                    }
                }
            };
            let model_view = view * Mat4::from_translation(teapot.position);
            renderer.draw_teapot(&TeapotDraw {
                model_view,
                projection,
                normal: model_view.inverse().transpose(),
                scale: teapot.scale,
                material: material.uniform(),
                lights,
            });
        }

        if self.scene.active == CameraSelect::BirdsEye {
            let wireframe = FrustumWireframe::from_camera(
                &self.scene.main_camera,
                self.aspect,
            );
            renderer.draw_wireframe(&(projection * view), &wireframe.edges());
        }
    }
}
