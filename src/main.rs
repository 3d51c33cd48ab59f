//! Composite a camera's persisted zones over its reference frame.
//!
//! Reads `<camera>.json` and `<camera>.png`/`.jpg` from a data directory,
//! renders the grid-shaded overlay and writes the result as a PNG. Handy
//! for checking a zone set without the dashboard.

use std::env;
use std::process::ExitCode;

use tzone::editor::EditorState;
use tzone::overlay::Overlay;
use tzone::raster;
use tzone::store::{DirFrameSource, JsonZoneStore};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: tzone <data-dir> <camera> <output.png>");
        return ExitCode::from(2);
    }
    let (data_dir, camera, output) = (&args[1], &args[2], &args[3]);

    let store = JsonZoneStore::new(data_dir);
    let frames = DirFrameSource::new(data_dir);

    let mut state = EditorState::new();
    state.load_camera(camera, &store, &frames);
    log::info!(
        "camera '{camera}': {} zones, frame {}",
        state.zones.len(),
        if state.background.is_some() {
            "loaded"
        } else {
            "missing"
        }
    );

    let mut overlay = Overlay::new();
    let frame = overlay.frame(&state);
    let canvas = raster::composite(&frame);
    if let Err(err) = canvas.save(output) {
        log::error!("writing {output} failed: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("overlay written to {output}");
    ExitCode::SUCCESS
}
