//! Scene Renderer - drives one frame of the scene through a backend
//!
//! Owns everything a frame needs besides the clock: the node list, the transform
//! stack, the camera and the lighting rig. Each call to
//! [`SceneRenderer::render_frame`] clears, places the camera, programs the lights,
//! traverses the graph and presents.

use crate::core::config::ReactorConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::render::{Camera, CameraOrbit, Color, LightingEnvironment, RenderResult, Renderer};
use crate::scene::{FrameContext, SceneControls, SceneError, SceneGraph, TransformStack};

/// Transform stack accounting for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Animation time the frame was composed at
    pub time: f32,
    /// Camera eye position
    pub eye: Vec3,
    /// Pushes issued during traversal
    pub pushes: u64,
    /// Pops issued during traversal
    pub pops: u64,
    /// Rejected pops
    pub underflows: u64,
    /// Saved transforms left over and discarded at frame end
    pub leaked: usize,
}

impl FrameReport {
    /// Whether every push was matched by a pop
    pub fn is_balanced(&self) -> bool {
        self.pushes == self.pops && self.leaked == 0 && self.underflows == 0
    }
}

/// Scene renderer coordinating graph traversal and camera state
#[derive(Debug)]
pub struct SceneRenderer {
    graph: SceneGraph,
    stack: TransformStack,
    lighting: LightingEnvironment,
    orbit: CameraOrbit,
    camera: Camera,
    clear_color: Color,
    projection_dirty: bool,
}

impl SceneRenderer {
    /// Create a scene renderer for `graph` viewed through `camera`
    pub fn new(graph: SceneGraph, camera: Camera) -> Self {
        Self {
            graph,
            stack: TransformStack::new(),
            lighting: LightingEnvironment::reactor_room(),
            orbit: CameraOrbit::default(),
            camera,
            clear_color: [0.05, 0.05, 0.08, 1.0],
            projection_dirty: true,
        }
    }

    /// The reactor room configured from `config`
    pub fn from_config(config: &ReactorConfig) -> Self {
        let orbit = CameraOrbit::default();
        let mut camera = Camera::perspective(
            orbit.eye(config.animation.start_time),
            config.camera.fov_degrees,
            1.0,
            config.camera.near,
            config.camera.far,
        );
        camera.set_viewport(config.window.width, config.window.height);

        Self::new(SceneGraph::reactor_room(), camera)
            .with_orbit(orbit)
            .with_clear_color(config.scene.clear_color)
    }

    /// Replace the camera path
    pub fn with_orbit(mut self, orbit: CameraOrbit) -> Self {
        self.orbit = orbit;
        self
    }

    /// Replace the frame clear colour
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Recompute the aspect ratio; the projection is reissued next frame
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.projection_dirty = true;
    }

    /// Render one frame at animation time `time`
    pub fn render_frame(
        &mut self,
        renderer: &mut dyn Renderer,
        time: f32,
        controls: &SceneControls,
    ) -> RenderResult<FrameReport> {
        self.stack.reset(Transform::identity());
        self.camera.set_position(self.orbit.eye(time));

        renderer.clear_frame(self.clear_color)?;

        if self.projection_dirty {
            let camera = &self.camera;
            renderer.set_projection(camera.fov_degrees, camera.aspect, camera.near, camera.far);
            self.projection_dirty = false;
        }
        renderer.set_view_matrix(self.camera.position, self.camera.target, self.camera.up);
        renderer.configure_lighting(&self.lighting);

        let ctx = FrameContext::new(time, controls);
        self.graph.traverse(&ctx, &mut self.stack, renderer)?;

        let mut leaked = 0;
        if !self.stack.is_balanced() {
            leaked = self.stack.depth();
            log::warn!("{}", SceneError::UnbalancedFrame { depth: leaked });
        }
        let report = FrameReport {
            time,
            eye: self.camera.position,
            pushes: self.stack.push_count(),
            pops: self.stack.pop_count(),
            underflows: self.stack.underflow_count(),
            leaked,
        };
        self.stack.reset(Transform::identity());

        renderer.present_frame()?;
        Ok(report)
    }

    /// The node list
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The camera as of the last frame
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The camera path
    pub fn orbit(&self) -> &CameraOrbit {
        &self.orbit
    }

    /// The lighting rig
    pub fn lighting(&self) -> &LightingEnvironment {
        &self.lighting
    }

    /// The transform stack, empty between frames
    pub fn stack(&self) -> &TransformStack {
        &self.stack
    }
}
