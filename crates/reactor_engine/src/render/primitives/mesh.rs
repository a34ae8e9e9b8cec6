//! Procedural geometry
//!
//! Parametric emitters for the curved surfaces in the scene. Both generators are
//! lazy iterators over [`QuadStrip`]s in local coordinates; the renderer places
//! them with whatever cumulative transform is active when they are submitted.
//!
//! # Restartability
//! Generators are plain values holding their parameters and a cursor. Cloning one
//! before iterating, or calling the constructor again, replays the exact same
//! strips.
//!
//! # Degenerate step counts
//! Step counts are not validated. Zero steps produce an empty or collapsed mesh
//! (possibly with non-finite coordinates) rather than an error; supplying sane
//! counts is the caller's job.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::constants::{PI, TAU};

/// Position and normal of a tessellated vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in local space
    pub position: [f32; 3],

    /// Surface normal
    pub normal: [f32; 3],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Vertices interpreted pairwise as a strip of connected quadrilaterals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuadStrip {
    /// Vertices in submission order
    pub vertices: Vec<Vertex>,
}

impl QuadStrip {
    /// Create an empty strip with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Append a vertex
    pub fn push(&mut self, position: [f32; 3], normal: [f32; 3]) {
        self.vertices.push(Vertex::new(position, normal));
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the strip has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of quadrilaterals the strip describes
    pub fn quad_count(&self) -> usize {
        self.vertices.len().saturating_sub(2) / 2
    }

    /// Raw vertex bytes for a device upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// A flat four-corner panel in the local XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corners in counter-clockwise order
    pub corners: [[f32; 3]; 4],
}

impl Quad {
    /// Panel of `width` centred on X, rising `height` from the local origin
    pub fn upright(width: f32, height: f32) -> Self {
        let half = width * 0.5;
        Self {
            corners: [
                [-half, 0.0, 0.0],
                [half, 0.0, 0.0],
                [half, height, 0.0],
                [-half, height, 0.0],
            ],
        }
    }
}

/// Build a UV sphere generator
///
/// Strip `i` (for `i` in `0..=latitude_steps`) spans the latitudes
/// `π(-1/2 + (i-1)/lat)` and `π(-1/2 + i/lat)`; each strip samples
/// `longitude_steps + 1` longitudes starting one step before zero. Normals are the
/// unit radial direction.
pub fn sphere(radius: f32, latitude_steps: u32, longitude_steps: u32) -> SphereStrips {
    SphereStrips {
        radius,
        latitude_steps,
        longitude_steps,
        next: 0,
    }
}

/// Build a torus generator lying in the local XY plane around +Z
///
/// Strip `i` joins major angle `i` to `(i + 1) mod major_steps`; each strip samples
/// `minor_steps + 1` minor angles (wrapping back to the first) and emits one vertex
/// on each of the two major angles per sample.
pub fn torus(major_radius: f32, minor_radius: f32, major_steps: u32, minor_steps: u32) -> TorusStrips {
    TorusStrips {
        major_radius,
        minor_radius,
        major_steps,
        minor_steps,
        next: 0,
    }
}

/// Lazy sphere tessellation, see [`sphere`]
#[derive(Debug, Clone, PartialEq)]
pub struct SphereStrips {
    radius: f32,
    latitude_steps: u32,
    longitude_steps: u32,
    next: u32,
}

impl SphereStrips {
    fn strip(&self, i: u32) -> QuadStrip {
        let lats = self.latitude_steps as f32;
        let longs = self.longitude_steps as f32;
        let r = self.radius;

        let lat0 = PI * (-0.5 + (i as f32 - 1.0) / lats);
        let lat1 = PI * (-0.5 + i as f32 / lats);
        let (z0, zr0) = lat0.sin_cos();
        let (z1, zr1) = lat1.sin_cos();

        let mut strip = QuadStrip::with_capacity(2 * (self.longitude_steps as usize + 1));
        for j in 0..=self.longitude_steps {
            let lng = TAU * (j as f32 - 1.0) / longs;
            let (y, x) = lng.sin_cos();

            strip.push([r * x * zr0, r * y * zr0, r * z0], [x * zr0, y * zr0, z0]);
            strip.push([r * x * zr1, r * y * zr1, r * z1], [x * zr1, y * zr1, z1]);
        }
        strip
    }
}

impl Iterator for SphereStrips {
    type Item = QuadStrip;

    fn next(&mut self) -> Option<QuadStrip> {
        if self.next > self.latitude_steps {
            return None;
        }
        let strip = self.strip(self.next);
        self.next += 1;
        Some(strip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.latitude_steps + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SphereStrips {}

/// Lazy torus tessellation, see [`torus`]
#[derive(Debug, Clone, PartialEq)]
pub struct TorusStrips {
    major_radius: f32,
    minor_radius: f32,
    major_steps: u32,
    minor_steps: u32,
    next: u32,
}

impl TorusStrips {
    fn strip(&self, i: u32) -> QuadStrip {
        let ni = (i + 1) % self.major_steps;
        let major = self.major_steps as f32;
        let minor = self.minor_steps as f32;

        let mut strip = QuadStrip::with_capacity(2 * (self.minor_steps as usize + 1));
        for j in 0..=self.minor_steps {
            // A zero minor step count has no samples to wrap onto
            let jj = j.checked_rem(self.minor_steps).unwrap_or(0);
            let v = jj as f32 / minor * TAU;
            let (sv, cv) = v.sin_cos();

            for idx in [i, ni] {
                let u = idx as f32 / major * TAU;
                let (su, cu) = u.sin_cos();
                let ring = self.major_radius + self.minor_radius * cv;

                strip.push(
                    [ring * cu, ring * su, self.minor_radius * sv],
                    [cv * cu, cv * su, sv],
                );
            }
        }
        strip
    }
}

impl Iterator for TorusStrips {
    type Item = QuadStrip;

    fn next(&mut self) -> Option<QuadStrip> {
        if self.next >= self.major_steps {
            return None;
        }
        let strip = self.strip(self.next);
        self.next += 1;
        Some(strip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.major_steps.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TorusStrips {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn as_vec(a: [f32; 3]) -> Vec3 {
        Vec3::new(a[0], a[1], a[2])
    }

    #[test]
    fn test_sphere_strip_counts() {
        let strips: Vec<_> = sphere(2.0, 32, 32).collect();
        assert_eq!(strips.len(), 33);
        for strip in &strips {
            assert_eq!(strip.len(), 66);
            assert_eq!(strip.quad_count(), 32);
        }
    }

    #[test]
    fn test_sphere_normals_are_radial_unit_vectors() {
        let radius = 2.0;
        for strip in sphere(radius, 12, 16) {
            for vertex in &strip.vertices {
                let p = as_vec(vertex.position);
                let n = as_vec(vertex.normal);
                assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
                assert_relative_eq!(p.norm(), radius, epsilon = 1e-4);
                assert_relative_eq!(p / radius, n, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_sphere_is_restartable() {
        let generator = sphere(0.2, 8, 8);
        let first: Vec<_> = generator.clone().collect();
        let second: Vec<_> = generator.collect();
        assert_eq!(first, second);
        assert_eq!(first, sphere(0.2, 8, 8).collect::<Vec<_>>());
    }

    #[test]
    fn test_sphere_reaches_both_poles() {
        let strips: Vec<_> = sphere(1.0, 8, 8).collect();
        let top = strips.last().unwrap().vertices[1].position;
        assert_relative_eq!(top[2], 1.0, epsilon = 1e-5);
        let bottom = strips[1].vertices[0].position;
        assert_relative_eq!(bottom[2], -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_torus_strip_counts() {
        let generator = torus(3.5, 0.15, 64, 12);
        assert_eq!(generator.len(), 64);
        for strip in generator {
            assert_eq!(strip.len(), 26);
        }
    }

    #[test]
    fn test_torus_vertices_lie_on_tube() {
        let (major, minor) = (5.0_f32, 0.12_f32);
        for strip in torus(major, minor, 24, 8) {
            for vertex in &strip.vertices {
                let p = as_vec(vertex.position);
                let n = as_vec(vertex.normal);
                // Distance from the tube's centre circle equals the minor radius
                let ring = Vec3::new(p.x, p.y, 0.0).normalize() * major;
                assert_relative_eq!((p - ring).norm(), minor, epsilon = 1e-4);
                // Normal points from the centre circle out through the vertex
                assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
                assert_relative_eq!((p - ring) / minor, n, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_torus_closes_the_ring() {
        let strips: Vec<_> = torus(3.5, 0.15, 16, 6).collect();
        let last = strips.last().unwrap();
        let first = &strips[0];
        // The last strip's "next" column is the first strip's "current" column
        assert_relative_eq!(as_vec(last.vertices[1].position), as_vec(first.vertices[0].position), epsilon = 1e-5);
        // Each strip closes its tube: first and last minor samples coincide
        let n = first.len();
        assert_relative_eq!(as_vec(first.vertices[0].position), as_vec(first.vertices[n - 2].position), epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_steps_do_not_panic() {
        assert_eq!(torus(1.0, 0.1, 0, 12).count(), 0);
        let strips: Vec<_> = torus(1.0, 0.1, 4, 0).collect();
        assert_eq!(strips.len(), 4);
        assert_eq!(strips[0].len(), 2);
        assert_eq!(sphere(1.0, 0, 0).count(), 1);
    }

    #[test]
    fn test_strip_bytes_match_vertex_layout() {
        let strip = sphere(1.0, 4, 4).next().unwrap();
        assert_eq!(strip.as_bytes().len(), strip.len() * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_upright_quad() {
        let panel = Quad::upright(1.6, 1.2);
        assert_eq!(panel.corners[0], [-0.8, 0.0, 0.0]);
        assert_eq!(panel.corners[2], [0.8, 1.2, 0.0]);
    }
}
