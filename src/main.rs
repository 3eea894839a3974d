//! Demo binary: the teapot scene in a window, drawing through the
//! headless trace renderer.
//!
//! Pass a TOML preset path as the first argument to override the default
//! options. Set `RUST_LOG=teaview=trace` to watch the per-frame draw
//! calls and culling decisions.

use std::path::Path;

use teaview::options::Options;
use teaview::render::TraceRenderer;
use teaview::viewer::Viewer;
use teaview::TeaviewError;

fn main() -> Result<(), TeaviewError> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    Viewer::builder()
        .with_options(options)
        .build()
        .run(TraceRenderer::new())
}
