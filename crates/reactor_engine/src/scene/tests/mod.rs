//! Full-frame traversal tests against the recording renderer

mod draw_state;

use crate::core::config::ReactorConfig;
use crate::render::{RecordingRenderer, Primitive};
use crate::scene::{FrameReport, SceneControls, SceneRenderer};

fn render_at(time: f32, controls: &SceneControls) -> (RecordingRenderer, FrameReport) {
    let mut scene = SceneRenderer::from_config(&ReactorConfig::default());
    let mut renderer = RecordingRenderer::new();
    let report = scene.render_frame(&mut renderer, time, controls).unwrap();
    (renderer, report)
}

/// Collapse consecutive draws of the same kind into `(kind, count)` runs
fn runs(renderer: &RecordingRenderer) -> Vec<(&'static str, usize)> {
    let mut runs: Vec<(&'static str, usize)> = Vec::new();
    for call in renderer.calls() {
        let kind = match call.primitive {
            Primitive::QuadStrip { .. } => "strip",
            Primitive::Quad => "quad",
            Primitive::Sphere { .. } => "sphere",
            Primitive::Cube { .. } => "cube",
        };
        match runs.last_mut() {
            Some((last, count)) if *last == kind => *count += 1,
            _ => runs.push((kind, 1)),
        }
    }
    runs
}
