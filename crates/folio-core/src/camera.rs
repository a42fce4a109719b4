//! Travel path, camera description and ray picking.
//!
//! These types avoid platform APIs so both the web and native frontends can
//! build camera matrices and resolve pointer hits against section
//! placements.

use crate::anchor::Placement;
use crate::constants::{
    CAMERA_END_Z, CAMERA_FOVY_RADIANS, CAMERA_LOOK_AHEAD, CAMERA_START_Z, CAMERA_TRAIL,
    CAMERA_ZFAR, CAMERA_ZNEAR,
};
use crate::error::{EngineError, Result};
use glam::{Mat4, Vec3, Vec4};

/// Linear mapping between scroll progress and the travel axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPath {
    pub start_z: f32,
    pub end_z: f32,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            start_z: CAMERA_START_Z,
            end_z: CAMERA_END_Z,
        }
    }
}

impl CameraPath {
    pub fn validate(&self) -> Result<()> {
        if !(self.start_z.is_finite() && self.end_z.is_finite()) || self.start_z == self.end_z {
            return Err(EngineError::InvalidCameraPath {
                start: self.start_z,
                end: self.end_z,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn z_at(&self, progress: f32) -> f32 {
        self.start_z + (self.end_z - self.start_z) * progress
    }

    /// Inverse of [`z_at`](Self::z_at), clamped to `[0, 1]`.
    #[inline]
    pub fn progress_for_z(&self, z: f32) -> f32 {
        ((z - self.start_z) / (self.end_z - self.start_z)).clamp(0.0, 1.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
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
    /// Frame the travel position: the eye trails `camera_z` and is shifted by
    /// the hover pull, looking down -Z.
    pub fn framing(camera_z: f32, offset: Vec3, aspect: f32) -> Self {
        let eye = Vec3::new(offset.x, offset.y, camera_z + CAMERA_TRAIL + offset.z);
        Self {
            eye,
            target: Vec3::new(offset.x * 0.5, offset.y * 0.5, camera_z - CAMERA_LOOK_AHEAD),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray through pixel `(sx, sy)` of a `width` x `height`
    /// viewport. Returns `(origin, direction)`.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest placement whose pick sphere the ray hits.
pub fn pick_section<'a>(
    placements: &'a [Placement],
    ray_origin: Vec3,
    ray_dir: Vec3,
    radius: f32,
) -> Option<&'a Placement> {
    let mut best = None::<(&Placement, f32)>;
    for p in placements {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, p.position, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((p, t)),
            }
        }
    }
    best.map(|(p, _)| p)
}
