//! Reactor room driver
//!
//! Runs the reactor room scene headlessly against the recording backend.
//!
//! ```text
//! reactor_room [CONFIG]
//! ```
//!
//! `CONFIG` is an optional `.toml` or `.ron` file; missing keys keep their
//! defaults. Key presses listed under `[[engine.script]]` are replayed on the
//! given frames, and the run stops after `engine.max_frames` frames or on an
//! exit key.

use reactor_engine::foundation::logging;
use reactor_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ReactorConfig::load_from_file(&path)?,
        None => ReactorConfig::default(),
    };

    logging::init_with_level(&config.engine.log_level);
    log::info!("Starting {}", config.window.title);

    let mut events = ScriptedEvents::from_script(&config.engine.script)?.with_event(
        0,
        AppEvent::WindowResized {
            width: config.window.width,
            height: config.window.height,
        },
    );

    let mut engine = Engine::new(&config, RecordingRenderer::new().stats_only())?;
    let frames = engine.run(&mut events, config.engine.max_frames)?;

    let stats = engine.renderer().last_frame();
    log::info!(
        "Rendered {} frames at {:.1} fps; last frame: {} draws ({} cubes, {} spheres, {} strips, {} quads, {} KiB of strip vertices)",
        frames,
        engine.timer().average_fps(),
        stats.draw_calls(),
        stats.cubes,
        stats.spheres,
        stats.quad_strips,
        stats.quads,
        stats.vertex_bytes / 1024
    );
    log::info!(
        "Final state: t={:.2} speed={:.2} animating={} wireframe={} floor_lights={}",
        engine.clock().time(),
        engine.clock().speed(),
        engine.clock().is_animating(),
        engine.controls().wireframe,
        engine.controls().show_floor_lights
    );
    Ok(())
}
