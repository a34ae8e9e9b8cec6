//! Core engine implementation

use crate::{
    application::{AppEvent, EventSource},
    config::ConfigError,
    core::config::ReactorConfig,
    foundation::time::{AnimationClock, FrameTimer},
    input::{InputAction, InputManager},
    render::{RenderError, Renderer},
    scene::{FrameReport, SceneControls, SceneRenderer},
};
use thiserror::Error;

/// Main engine struct
///
/// Owns the backend, the scene and the animation clock, and runs the
/// event → render → advance loop one frame at a time.
pub struct Engine<R: Renderer> {
    /// Rendering backend
    renderer: R,

    /// Scene traversal and camera
    scene: SceneRenderer,

    /// Animation time
    clock: AnimationClock,

    /// Runtime toggles
    controls: SceneControls,

    /// Input handling system
    input: InputManager,

    /// Frame timing
    timer: FrameTimer,

    /// Log a stats line every N frames
    stats_interval: u64,

    /// Frames rendered so far
    frames_rendered: u64,

    /// Whether the engine should continue running
    running: bool,
}

impl<R: Renderer> Engine<R> {
    /// Create a new engine instance
    pub fn new(config: &ReactorConfig, mut renderer: R) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine: '{}' {}x{}",
            config.window.title,
            config.window.width,
            config.window.height
        );

        let controls = SceneControls::from_config(&config.scene);
        renderer.set_wireframe(controls.wireframe);

        let clock = AnimationClock::new()
            .with_speed(config.animation.speed)
            .starting_at(config.animation.start_time)
            .with_animating(config.animation.animating);

        Ok(Self {
            renderer,
            scene: SceneRenderer::from_config(config),
            clock,
            controls,
            input: InputManager::new(),
            timer: FrameTimer::new(),
            stats_interval: config.engine.stats_interval,
            frames_rendered: 0,
            running: true,
        })
    }

    /// Run the main loop until exit or until `max_frames` frames have rendered
    ///
    /// Returns the number of frames rendered by this call.
    pub fn run(&mut self, events: &mut dyn EventSource, max_frames: Option<u64>) -> Result<u64, EngineError> {
        log::info!("Starting main loop...");
        let start = self.frames_rendered;

        while self.running {
            if max_frames.is_some_and(|max| self.frames_rendered - start >= max) {
                break;
            }

            for event in events.poll_events(self.frames_rendered) {
                self.handle_event(event);
            }
            if !self.running {
                break;
            }

            self.frame()?;
        }

        let rendered = self.frames_rendered - start;
        log::info!("Main loop finished after {} frames (t={:.2})", rendered, self.clock.time());
        Ok(rendered)
    }

    /// Render one frame at the current time, then advance the clock
    pub fn frame(&mut self) -> Result<FrameReport, EngineError> {
        let report = self
            .scene
            .render_frame(&mut self.renderer, self.clock.time(), &self.controls)?;
        if !report.is_balanced() {
            log::warn!(
                "Frame {}: {} pushes, {} pops, {} underflows, {} leaked",
                self.frames_rendered,
                report.pushes,
                report.pops,
                report.underflows,
                report.leaked
            );
        }

        self.clock.update();
        self.timer.tick();
        self.frames_rendered += 1;

        if self.stats_interval > 0 && self.frames_rendered % self.stats_interval == 0 {
            log::info!(
                "Frame {}: t={:.2} speed={:.2} fps={:.1} pushes={}",
                self.frames_rendered,
                self.clock.time(),
                self.clock.speed(),
                self.timer.average_fps(),
                report.pushes
            );
        }
        Ok(report)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowResized { width, height } => {
                self.scene.set_viewport(width, height);
            }
            AppEvent::WindowCloseRequested => {
                self.quit();
            }
            AppEvent::KeyPressed(key) => {
                if let Some(action) = self.input.handle_key_input(key, true) {
                    self.apply_action(action);
                }
            }
            AppEvent::KeyReleased(key) => {
                self.input.handle_key_input(key, false);
            }
        }
    }

    /// Apply a control action
    pub fn apply_action(&mut self, action: InputAction) {
        match action {
            InputAction::Exit => self.quit(),
            InputAction::ToggleAnimation => {
                self.clock.toggle_animation();
            }
            InputAction::ToggleWireframe => {
                let enabled = self.controls.toggle_wireframe();
                self.renderer.set_wireframe(enabled);
            }
            InputAction::SpeedUp => {
                self.clock.speed_up();
            }
            InputAction::SpeedDown => {
                self.clock.slow_down();
            }
            InputAction::ToggleFloorLights => {
                self.controls.toggle_floor_lights();
            }
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the loop will keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered since creation
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Get the rendering backend
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get mutable access to the rendering backend
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Get the scene renderer
    pub fn scene(&self) -> &SceneRenderer {
        &self.scene
    }

    /// Get the animation clock
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Get the runtime toggles
    pub fn controls(&self) -> &SceneControls {
        &self.controls
    }

    /// Get the frame timer
    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Consume the engine, returning the backend
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend failure during a frame
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ScriptedEvents;
    use crate::input::KeyCode;
    use crate::render::RecordingRenderer;
    use approx::assert_relative_eq;

    fn engine() -> Engine<RecordingRenderer> {
        Engine::new(&ReactorConfig::default(), RecordingRenderer::new().stats_only()).unwrap()
    }

    #[test]
    fn test_runs_requested_frames() {
        let mut engine = engine();
        let frames = engine.run(&mut ScriptedEvents::new(), Some(20)).unwrap();
        assert_eq!(frames, 20);
        assert_eq!(engine.renderer().frames_presented(), 20);
        assert_relative_eq!(engine.clock().time(), 2.0, epsilon = 1e-4);
        assert!(engine.is_running());
    }

    #[test]
    fn test_escape_stops_the_loop() {
        let mut engine = engine();
        let mut events = ScriptedEvents::new().with_key_press(5, KeyCode::Escape);
        let frames = engine.run(&mut events, Some(100)).unwrap();
        assert_eq!(frames, 5);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_close_request_stops_the_loop() {
        let mut engine = engine();
        let mut events = ScriptedEvents::new().with_event(3, AppEvent::WindowCloseRequested);
        assert_eq!(engine.run(&mut events, None).unwrap(), 3);
    }

    #[test]
    fn test_space_pauses_the_clock() {
        let mut engine = engine();
        let mut events = ScriptedEvents::new().with_key_press(10, KeyCode::Space);
        engine.run(&mut events, Some(30)).unwrap();
        assert!(!engine.clock().is_animating());
        assert_relative_eq!(engine.clock().time(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_toggles_reach_renderer_and_scene() {
        let mut engine = engine();
        let mut events = ScriptedEvents::new()
            .with_key_press(0, KeyCode::V)
            .with_key_press(1, KeyCode::L);
        engine.run(&mut events, Some(3)).unwrap();

        assert!(engine.controls().wireframe);
        assert!(engine.renderer().wireframe());
        assert!(!engine.controls().show_floor_lights);
        assert_eq!(engine.renderer().last_frame().cubes, 227 - 121);
    }

    #[test]
    fn test_speed_controls_respect_floor() {
        let mut engine = engine();
        engine.apply_action(InputAction::SpeedUp);
        assert_relative_eq!(engine.clock().speed(), 0.15, epsilon = 1e-6);
        for _ in 0..10 {
            engine.apply_action(InputAction::SpeedDown);
        }
        assert_relative_eq!(engine.clock().speed(), 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_resize_reissues_projection() {
        let mut engine = engine();
        engine.frame().unwrap();
        engine.handle_event(AppEvent::WindowResized { width: 1920, height: 1080 });
        engine.frame().unwrap();
        let (_, aspect, _, _) = engine.renderer().projection().unwrap();
        assert_relative_eq!(aspect, 16.0 / 9.0, epsilon = 1e-5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ReactorConfig::default();
        config.camera.far = 0.0;
        let result = Engine::new(&config, RecordingRenderer::new());
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut engine = Engine::new(&ReactorConfig::default(), RecordingRenderer::new().failing_at_draw(0)).unwrap();
        let err = engine.run(&mut ScriptedEvents::new(), Some(5)).unwrap_err();
        assert!(matches!(err, EngineError::Render(_)));
        assert_eq!(engine.frames_rendered(), 0);
    }
}
