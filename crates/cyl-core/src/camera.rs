//! Perspective camera and the fit that keeps the whole assembly in view.
//!
//! Platform-independent; the web frontend builds its view-projection matrix
//! from this every frame and refits it whenever the viewport changes size.

use crate::constants::{
    CAMERA_FAR_MULTIPLIER, CAMERA_FOV_DEG, CAMERA_INITIAL_Z, CAMERA_ZNEAR,
};
use crate::mesh::Bounds;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_INITIAL_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = sanitize_aspect(width as f32 / height.max(1) as f32);
    }

    /// Move the camera along +Z until `bounds` fits both horizontally and
    /// vertically, then pull the far plane out to cover the box.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, offset: f32) {
        let size = bounds.size();
        let fov = self.fovy_radians;
        let fovh = 2.0 * ((fov / 2.0).tan() * self.aspect).atan();
        let dx = size.z / 2.0 + (size.x / 2.0 / (fovh / 2.0).tan()).abs();
        let dy = size.z / 2.0 + (size.y / 2.0 / (fov / 2.0).tan()).abs();
        let mut camera_z = dx.max(dy);
        if offset != 0.0 {
            camera_z *= offset;
        }
        self.eye = Vec3::new(0.0, 0.0, camera_z);
        self.target = Vec3::ZERO;

        let min_z = bounds.min.z;
        let to_far_edge = if min_z < 0.0 {
            -min_z + camera_z
        } else {
            camera_z - min_z
        };
        self.zfar = (to_far_edge * CAMERA_FAR_MULTIPLIER).max(self.znear * 2.0);
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
