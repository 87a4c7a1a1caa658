//! The particle field animator: one owned context mutated only by the host
//! events it receives.

use glam::Mat4;
use rand::Rng;

use crate::color::Theme;
use crate::config::FieldConfig;
use crate::error::InitError;
use crate::field::ParticleField;
use crate::pointer::PointerState;
use crate::view::{Rotation, ViewState};

/// Notifications delivered by the host display environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Viewport changed, in CSS pixels.
    Resize { width: f64, height: f64, pixel_ratio: f64 },
    /// Pointer moved to client coordinates.
    PointerMove { x: f64, y: f64 },
    /// Display refresh.
    Frame,
}

/// Everything a renderer needs to draw one frame.
pub struct FrameView<'a> {
    pub positions: &'a [f32],
    /// Positions changed since the last draw and must be re-uploaded.
    pub positions_dirty: bool,
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub point_size: f32,
    pub opacity: f32,
    pub theme: Theme,
    /// Drawing buffer height in device pixels, for point size attenuation.
    pub surface_height: f32,
}

impl FrameView<'_> {
    /// The position buffer as raw bytes for upload, without copying.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions)
    }
}

/// Drawing backend the animator submits frames to.
pub trait Renderer {
    /// Resize the output surface to `width × height` device pixels.
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, frame: &FrameView<'_>);
}

#[derive(Debug, Clone)]
pub struct Animator {
    config: FieldConfig,
    field: ParticleField,
    view: ViewState,
    pointer: PointerState,
    rotation: Rotation,
    theme: Theme,
    positions_dirty: bool,
    frames: u64,
}

impl Animator {
    /// Validate `config`, set up the camera for the given viewport and
    /// scatter the particles.
    pub fn init_scene<R: Rng>(
        config: FieldConfig,
        theme: Theme,
        width: f64,
        height: f64,
        pixel_ratio: f64,
        rng: &mut R,
    ) -> Result<Self, InitError> {
        config.validate()?;
        let field = ParticleField::generate(config.count, config.spread, config.max_speed, rng);
        let view = ViewState::new(&config, width, height, pixel_ratio);
        log::info!(
            "particle field ready: {} particles, viewport {}x{} @{}x",
            field.count(),
            view.width,
            view.height,
            view.pixel_ratio
        );
        Ok(Self {
            config,
            field,
            view,
            pointer: PointerState::default(),
            rotation: Rotation::default(),
            theme,
            positions_dirty: true,
            frames: 0,
        })
    }

    /// Dispatch a host notification, driving `renderer` where the event
    /// affects output.
    pub fn handle<G: Renderer + ?Sized>(&mut self, event: HostEvent, renderer: &mut G) {
        match event {
            HostEvent::Resize { width, height, pixel_ratio } => {
                let (w, h) = self.on_resize(width, height, pixel_ratio);
                renderer.resize(w, h);
            }
            HostEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            HostEvent::Frame => {
                self.tick();
                renderer.draw(&self.frame_view());
                self.positions_dirty = false;
            }
        }
    }

    /// Recompute the aspect ratio. Returns the new surface size in device
    /// pixels for the renderer.
    pub fn on_resize(&mut self, width: f64, height: f64, pixel_ratio: f64) -> (u32, u32) {
        self.view.set_viewport(width, height, pixel_ratio);
        log::debug!("resize to {}x{} (aspect {:.3})", width, height, self.view.aspect);
        self.view.surface_size()
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.update(x, y, self.view.width, self.view.height);
    }

    /// Advance the animation by one display refresh.
    pub fn tick(&mut self) {
        let c = &self.config;
        self.field.advance(self.view.camera_z, c.wrap_margin, c.wrap_span);
        self.positions_dirty = true;

        let target_x = self.pointer.mouse_x * c.pointer_gain;
        let target_y = self.pointer.mouse_y * c.pointer_gain;
        self.rotation.y += (target_x - self.rotation.y) * c.easing_gain;
        self.rotation.x += (target_y - self.rotation.x) * c.easing_gain;

        self.rotation.z += c.swirl_rate;
        self.frames += 1;
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            positions: self.field.positions(),
            positions_dirty: self.positions_dirty,
            model: self.rotation.matrix(),
            view: self.view.view(),
            projection: self.view.projection(),
            point_size: self.config.point_size,
            opacity: self.config.opacity,
            theme: self.theme,
            surface_height: self.view.surface_size().1 as f32,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Frames ticked since startup.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
