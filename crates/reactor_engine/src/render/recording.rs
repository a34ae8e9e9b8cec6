//! In-memory renderer
//!
//! [`RecordingRenderer`] implements [`Renderer`] without a device. It tracks the
//! fixed-function state the way a device would and records every draw together
//! with the state it was issued under. The headless driver uses it to run the
//! scene, and tests use it to inspect exactly what a frame submitted.

use crate::foundation::math::{Transform, Vec3};
use crate::render::backend::Renderer;
use crate::render::lighting::LightingEnvironment;
use crate::render::material::{BlendMode, Color, Emission, Material};
use crate::render::primitives::{Quad, QuadStrip};
use crate::render::{RenderError, RenderResult};

/// What kind of geometry a draw submitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Quad strip with this many vertices
    QuadStrip {
        /// Vertex count
        vertices: usize,
    },
    /// Flat quad
    Quad,
    /// Built-in sphere
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Built-in cube
    Cube {
        /// Edge length
        size: f32,
    },
}

/// One recorded draw and the state it was issued under
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Geometry kind
    pub primitive: Primitive,
    /// Cumulative model transform
    pub model: Transform,
    /// Whether lighting was enabled
    pub lighting: bool,
    /// Active blend mode
    pub blend: BlendMode,
    /// Active flat colour
    pub color: Color,
    /// Active material
    pub material: Option<Material>,
    /// Active emission, if non-black
    pub emission: Option<Emission>,
}

impl DrawCall {
    /// World-space position of the draw's local origin
    pub fn origin(&self) -> Vec3 {
        self.model.translation_part()
    }
}

/// Per-frame counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Quad strips submitted
    pub quad_strips: usize,
    /// Vertices across all quad strips
    pub strip_vertices: usize,
    /// Bytes of strip vertex data
    pub vertex_bytes: usize,
    /// Flat quads submitted
    pub quads: usize,
    /// Built-in spheres submitted
    pub spheres: usize,
    /// Built-in cubes submitted
    pub cubes: usize,
    /// Draws issued with lighting disabled
    pub unlit_draws: usize,
    /// Draws issued with a blend mode other than opaque
    pub blended_draws: usize,
}

impl FrameStats {
    /// Total draw calls
    pub fn draw_calls(&self) -> usize {
        self.quad_strips + self.quads + self.spheres + self.cubes
    }
}

/// Renderer that records instead of drawing
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
    stats: FrameStats,
    last_frame: FrameStats,
    frames_presented: u64,
    record_calls: bool,
    fail_at_draw: Option<usize>,

    lighting: bool,
    blend: BlendMode,
    color: Color,
    material: Option<Material>,
    emission: Option<Emission>,
    wireframe: bool,
    clear_color: Color,
    view: Option<(Vec3, Vec3, Vec3)>,
    projection: Option<(f32, f32, f32, f32)>,
    light_count: usize,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// Create a renderer that records every draw
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            stats: FrameStats::default(),
            last_frame: FrameStats::default(),
            frames_presented: 0,
            record_calls: true,
            fail_at_draw: None,
            lighting: true,
            blend: BlendMode::Opaque,
            color: [1.0, 1.0, 1.0, 1.0],
            material: None,
            emission: None,
            wireframe: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            view: None,
            projection: None,
            light_count: 0,
        }
    }

    /// Only keep counters, not individual draws
    pub fn stats_only(mut self) -> Self {
        self.record_calls = false;
        self
    }

    /// Make the draw with this zero-based index in a frame fail
    pub fn failing_at_draw(mut self, index: usize) -> Self {
        self.fail_at_draw = Some(index);
        self
    }

    /// Draws recorded since the last clear
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Counters for the frame in progress
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Counters for the most recently presented frame
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Number of presented frames
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Whether lighting is currently enabled
    pub fn lighting_enabled(&self) -> bool {
        self.lighting
    }

    /// Current blend mode
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    /// Whether wireframe mode is on
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Last clear colour
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Last view as `(eye, target, up)`
    pub fn view(&self) -> Option<(Vec3, Vec3, Vec3)> {
        self.view
    }

    /// Last projection as `(fov_y, aspect, near, far)`
    pub fn projection(&self) -> Option<(f32, f32, f32, f32)> {
        self.projection
    }

    /// Number of lights in the last configured environment
    pub fn light_count(&self) -> usize {
        self.light_count
    }

    fn record(&mut self, primitive: Primitive, model: &Transform) -> RenderResult<()> {
        let index = self.stats.draw_calls();
        if self.fail_at_draw == Some(index) {
            return Err(RenderError::RenderingFailed(format!("injected failure at draw {index}")));
        }

        match primitive {
            Primitive::QuadStrip { vertices } => {
                self.stats.quad_strips += 1;
                self.stats.strip_vertices += vertices;
            }
            Primitive::Quad => self.stats.quads += 1,
            Primitive::Sphere { .. } => self.stats.spheres += 1,
            Primitive::Cube { .. } => self.stats.cubes += 1,
        }
        if !self.lighting {
            self.stats.unlit_draws += 1;
        }
        if self.blend != BlendMode::Opaque {
            self.stats.blended_draws += 1;
        }

        if self.record_calls {
            self.calls.push(DrawCall {
                primitive,
                model: *model,
                lighting: self.lighting,
                blend: self.blend,
                color: self.color,
                material: self.material,
                emission: self.emission,
            });
        }
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn clear_frame(&mut self, color: Color) -> RenderResult<()> {
        self.calls.clear();
        self.stats = FrameStats::default();
        self.clear_color = color;
        Ok(())
    }

    fn set_view_matrix(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.view = Some((eye, target, up));
    }

    fn set_projection(&mut self, fov_y_degrees: f32, aspect: f32, near: f32, far: f32) {
        log::debug!("Projection: fov={fov_y_degrees} aspect={aspect:.3} near={near} far={far}");
        self.projection = Some((fov_y_degrees, aspect, near, far));
    }

    fn configure_lighting(&mut self, environment: &LightingEnvironment) {
        self.light_count = environment.lights.len();
    }

    fn set_material(&mut self, material: &Material) {
        self.material = Some(*material);
    }

    fn set_emissive(&mut self, emission: Emission) {
        self.emission = Some(emission);
    }

    fn clear_emissive(&mut self) {
        self.emission = None;
    }

    fn set_lighting(&mut self, enabled: bool) {
        self.lighting = enabled;
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_wireframe(&mut self, enabled: bool) {
        self.wireframe = enabled;
    }

    fn submit_quad_strip(&mut self, model: &Transform, strip: &QuadStrip) -> RenderResult<()> {
        self.record(Primitive::QuadStrip { vertices: strip.len() }, model)?;
        self.stats.vertex_bytes += strip.as_bytes().len();
        Ok(())
    }

    fn submit_quad(&mut self, model: &Transform, _quad: &Quad) -> RenderResult<()> {
        self.record(Primitive::Quad, model)
    }

    fn submit_solid_sphere(&mut self, model: &Transform, radius: f32, _slices: u32, _stacks: u32) -> RenderResult<()> {
        self.record(Primitive::Sphere { radius }, model)
    }

    fn submit_solid_cube(&mut self, model: &Transform, size: f32) -> RenderResult<()> {
        self.record(Primitive::Cube { size }, model)
    }

    fn present_frame(&mut self) -> RenderResult<()> {
        self.last_frame = self.stats;
        self.frames_presented += 1;
        Ok(())
    }
}
