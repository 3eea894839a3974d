//! Standalone winit window shell driving the engine frame loop.
//!
//! Rasterization stays external: the window polls keys into a
//! [`KeySet`], steps the engine once per redraw, and forwards the frame's
//! draw calls to whatever [`Renderer`] the embedder passes in.
//!
//! ```no_run
//! # use teaview::{render::TraceRenderer, viewer::Viewer};
//! Viewer::builder()
//!     .with_title("Teapots")
//!     .build()
//!     .run(TraceRenderer::new())
//!     .unwrap();
//! ```

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::engine::TeaviewEngine;
use crate::error::TeaviewError;
use crate::input::KeySet;
use crate::options::Options;
use crate::render::Renderer;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "Teaview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the teapot scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) with a
/// renderer to enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or a quit command fires.
    pub fn run(self, renderer: impl Renderer) -> Result<(), TeaviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TeaviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let options = self.options.unwrap_or_default();
        let mut app = ViewerApp {
            window: None,
            engine: TeaviewEngine::new(options),
            renderer,
            keys: KeySet::new(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TeaviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<R: Renderer> {
    window: Option<Window>,
    engine: TeaviewEngine,
    renderer: R,
    keys: KeySet,
    title: String,
}

impl<R: Renderer> ApplicationHandler for ViewerApp<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(self.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(600.0, 600.0));
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    let size = window.inner_size();
                    self.engine.resize(size.width, size.height);
                    window.request_redraw();
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("window creation failed: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
            }

            // Held keys must not stick across a focus loss.
            WindowEvent::Focused(false) => self.keys.clear(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = format!("{code:?}");
                    match event.state {
                        ElementState::Pressed => self.keys.press(&key),
                        ElementState::Released => self.keys.release(&key),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.engine.step(&self.keys);
                self.engine.render(&mut self.renderer);
                if self.engine.should_exit() {
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
