//! Line geometry for the debug overlay.

use crate::constants::{
    DEBUG_ORIGIN_COLOR, DEBUG_ORIGIN_HALF_SIZE, DEBUG_OUTLINE_COLOR, DEBUG_WIREFRAME_COLOR,
};
use crate::mesh::{Bounds, SegmentMesh};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    #[inline]
    fn new(p: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: p.to_array(),
            color,
        }
    }
}

/// Wireframe of every segment in assembly space (turns with the carousel).
pub fn wireframe_lines(meshes: &[SegmentMesh]) -> Vec<LineVertex> {
    let mut out = Vec::new();
    for m in meshes {
        for pair in m.wireframe_indices().chunks_exact(2) {
            for &i in pair {
                let p = Vec3::from_array(m.vertices[i as usize].position);
                out.push(LineVertex::new(p, DEBUG_WIREFRAME_COLOR));
            }
        }
    }
    out
}

/// Bounding outline plus an origin cross, in world space (does not turn).
pub fn outline_lines(bounds: &Bounds) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(24 + 6);
    for [a, b] in bounds.edge_lines() {
        out.push(LineVertex::new(a, DEBUG_OUTLINE_COLOR));
        out.push(LineVertex::new(b, DEBUG_OUTLINE_COLOR));
    }
    let h = DEBUG_ORIGIN_HALF_SIZE;
    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        out.push(LineVertex::new(-axis * h, DEBUG_ORIGIN_COLOR));
        out.push(LineVertex::new(axis * h, DEBUG_ORIGIN_COLOR));
    }
    out
}
