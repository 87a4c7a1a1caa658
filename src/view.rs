//! Perspective camera derived from the viewport.

use glam::{EulerRot, Mat4, Vec3};

use crate::config::FieldConfig;

/// Camera parameters. Only the aspect ratio and viewport change after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub camera_z: f32,
    /// Viewport size in CSS pixels.
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl ViewState {
    pub fn new(config: &FieldConfig, width: f64, height: f64, pixel_ratio: f64) -> Self {
        let mut view = Self {
            fov_degrees: config.fov_degrees,
            aspect: 1.0,
            near: config.near,
            far: config.far,
            camera_z: config.camera_z,
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        };
        view.set_viewport(width, height, pixel_ratio);
        view
    }

    /// Adopt a new viewport size. A zero height keeps the previous aspect.
    pub fn set_viewport(&mut self, width: f64, height: f64, pixel_ratio: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            self.pixel_ratio = pixel_ratio;
        }
        if self.height > 0.0 && self.width > 0.0 {
            self.aspect = self.width / self.height;
        }
    }

    /// Drawing buffer size in device pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            (self.fov_degrees as f32).to_radians(),
            self.aspect as f32,
            self.near as f32,
            self.far as f32,
        )
    }

    /// World to camera transform; the camera sits on the z axis looking down -z.
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.camera_z))
    }
}

/// Euler rotation of the whole field, applied in XYZ order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x as f32, self.y as f32, self.z as f32)
    }
}
