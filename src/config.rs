//! Tunables for the particle field.
//!
//! Every literal that shapes the animation lives here so the page can
//! override a few of them through `data-*` attributes on the canvas.

use crate::error::InitError;

/// Upper bound on `count`; keeps the vertex buffer size within a GL `i32`.
pub const MAX_PARTICLES: usize = 1_000_000;

/// Numeric parameters of the field, camera and animation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles. Fixed for the lifetime of the field.
    pub count: usize,
    /// Half width of the cube particles are first placed in.
    pub spread: f32,
    /// Per-axis velocity half range (`0.005 / 2`).
    pub max_speed: f32,
    pub point_size: f32,
    pub opacity: f32,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub camera_z: f32,
    /// Distance from the camera beyond which a particle wraps in depth.
    pub wrap_margin: f32,
    /// Distance a wrapped particle is moved (`200 * 0.5`).
    pub wrap_span: f32,
    /// Pointer position to target rotation factor.
    pub pointer_gain: f64,
    /// Fraction of the remaining rotation gap closed each frame.
    pub easing_gain: f64,
    /// Constant z rotation added each frame.
    pub swirl_rate: f64,
    /// Fixed seed for particle generation; `None` picks one at startup.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            spread: 50.0,
            max_speed: 0.005 * 0.5,
            point_size: 0.02,
            opacity: 0.8,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_z: 5.0,
            wrap_margin: 10.0,
            wrap_span: 200.0 * 0.5,
            pointer_gain: 0.2,
            easing_gain: 0.01,
            swirl_rate: 0.0002,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Apply string overrides as read from the canvas dataset.
    ///
    /// Recognised keys: `particleCount`, `seed`, `pointSize`, `opacity`.
    /// Unknown keys are ignored; malformed values are an error.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> Result<Self, InitError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, raw) in pairs {
            let value = raw.trim();
            match key {
                "particleCount" => self.count = parse(key, value)?,
                "seed" => self.seed = Some(parse(key, value)?),
                "pointSize" => self.point_size = parse(key, value)?,
                "opacity" => self.opacity = parse(key, value)?,
                _ => {}
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), InitError> {
        if self.count == 0 {
            return Err(InitError::InvalidConfig("particle count must be positive".into()));
        }
        if self.count > MAX_PARTICLES {
            return Err(InitError::InvalidConfig(format!(
                "particle count {} exceeds {}",
                self.count, MAX_PARTICLES
            )));
        }
        let finite = [
            self.spread,
            self.max_speed,
            self.point_size,
            self.opacity,
            self.camera_z,
            self.wrap_margin,
            self.wrap_span,
        ]
        .iter()
        .all(|v| v.is_finite())
            && [self.pointer_gain, self.easing_gain, self.swirl_rate]
                .iter()
                .all(|v| v.is_finite());
        if !finite {
            return Err(InitError::InvalidConfig("non-finite parameter".into()));
        }
        if self.spread < 0.0 || self.max_speed < 0.0 || self.point_size <= 0.0 {
            return Err(InitError::InvalidConfig(
                "spread, speed and point size must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(InitError::InvalidConfig(format!(
                "opacity {} outside [0, 1]",
                self.opacity
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(InitError::InvalidConfig(format!(
                "field of view {} outside (0, 180)",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(InitError::InvalidConfig(format!(
                "clip planes near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, InitError> {
    value
        .parse()
        .map_err(|_| InitError::InvalidConfig(format!("data-{key}: cannot parse {value:?}")))
}
