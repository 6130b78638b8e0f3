//! Cylinder wall geometry for each carousel segment.
//!
//! Vertices are generated in assembly space: each segment's own rotation
//! (the sum of the allocations before it) is baked in, so the renderer only
//! applies the assembly rotation per frame.

use crate::constants::CYLINDER_RADIUS;
use crate::layout::{CarouselLayout, SegmentLayout};
use glam::{Mat3, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct SegmentMesh {
    pub index: usize,
    pub vertices: Vec<SegmentVertex>,
    /// Counter-clockwise triangles when seen from outside the cylinder.
    pub indices: Vec<u32>,
}

impl SegmentMesh {
    /// Open wall of radius 1 spanning `[start, start + rendered_extent]`.
    pub fn build(segment: &SegmentLayout, radial_segments: u32) -> Self {
        let columns = radial_segments.max(1);
        let half_h = (segment.relative_height / 2.0) as f32;
        let mut vertices = Vec::with_capacity(((columns + 1) * 2) as usize);
        // row 0 is the top edge (v = 0), row 1 the bottom edge
        for (row, y) in [half_h, -half_h].into_iter().enumerate() {
            for x in 0..=columns {
                let u = x as f32 / columns as f32;
                let phi = segment.start + u as f64 * segment.rendered_extent;
                let (sin, cos) = (phi as f32).sin_cos();
                vertices.push(SegmentVertex {
                    position: [CYLINDER_RADIUS * sin, y, CYLINDER_RADIUS * cos],
                    uv: [u, row as f32],
                });
            }
        }

        let stride = columns + 1;
        let mut indices = Vec::with_capacity((columns * 6) as usize);
        for x in 0..columns {
            let a = x;
            let b = stride + x;
            let c = stride + x + 1;
            let d = x + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }

        Self {
            index: segment.index,
            vertices,
            indices,
        }
    }

    /// Line-list indices covering every triangle edge once.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        wireframe_indices(&self.indices)
    }
}

pub fn build_carousel_meshes(layout: &CarouselLayout, radial_segments: u32) -> Vec<SegmentMesh> {
    layout
        .segments()
        .iter()
        .map(|s| SegmentMesh::build(s, radial_segments))
        .collect()
}

/// Convert a triangle list into a deduplicated line list.
pub fn wireframe_indices(triangles: &[u32]) -> Vec<u32> {
    let mut seen = std::collections::HashSet::new();
    let mut lines = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(3) {
        for (p, q) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (p.min(q), p.max(q));
            if seen.insert(key) {
                lines.extend_from_slice(&[p, q]);
            }
        }
    }
    lines
}

/// Axis-aligned box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The 12 edges of the box as line-list endpoints.
    pub fn edge_lines(&self) -> [[Vec3; 2]; 12] {
        let (lo, hi) = (self.min, self.max);
        let c = |x: bool, y: bool, z: bool| {
            Vec3::new(
                if x { hi.x } else { lo.x },
                if y { hi.y } else { lo.y },
                if z { hi.z } else { lo.z },
            )
        };
        [
            [c(false, false, false), c(true, false, false)],
            [c(true, false, false), c(true, true, false)],
            [c(true, true, false), c(false, true, false)],
            [c(false, true, false), c(false, false, false)],
            [c(false, false, true), c(true, false, true)],
            [c(true, false, true), c(true, true, true)],
            [c(true, true, true), c(false, true, true)],
            [c(false, true, true), c(false, false, true)],
            [c(false, false, false), c(false, false, true)],
            [c(true, false, false), c(true, false, true)],
            [c(true, true, false), c(true, true, true)],
            [c(false, true, false), c(false, true, true)],
        ]
    }
}

/// Box around every segment vertex after turning the assembly by `rotation`.
pub fn assembly_bounds(meshes: &[SegmentMesh], rotation: f32) -> Option<Bounds> {
    let rot = Mat3::from_rotation_y(rotation);
    Bounds::from_points(
        meshes
            .iter()
            .flat_map(|m| m.vertices.iter())
            .map(|v| rot * Vec3::from_array(v.position)),
    )
}
