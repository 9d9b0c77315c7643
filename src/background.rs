//! Animated particle background.
//!
//! The update logic is platform-free: the browser shell owns the frame
//! callback and event listeners and forwards into [`Background`], which
//! talks to the GPU only through the [`Surface`] trait.

use std::f64::consts::TAU;

use glam::Mat4;

use crate::clock::Clock;
use crate::config::BackgroundConfig;
use crate::field::ParticleField;
use crate::pointer::PointerOffset;
use crate::view::{ContainerSize, ViewState};

/// Matrices needed to draw one frame of the point cloud.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Rendering backend for the point cloud.
pub trait Surface {
    fn upload_points(&mut self, field: &ParticleField);
    fn set_pixel_ratio(&mut self, ratio: f64);
    /// Resize the output to `width` x `height` CSS pixels.
    fn set_size(&mut self, width: u32, height: u32);
    fn render(&mut self, frame: &Frame);
    fn release(&mut self);
}

/// Whether the frame loop should schedule another callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Euler angles (radians) applied to the whole field, X then Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    /// Angles are wrapped to one turn in f64 before narrowing, so the small
    /// parallax term survives once the spin angle has grown large.
    pub fn matrix(&self) -> Mat4 {
        let x = self.x.rem_euclid(TAU) as f32;
        let y = self.y.rem_euclid(TAU) as f32;
        Mat4::from_rotation_x(x) * Mat4::from_rotation_y(y)
    }
}

/// Spin about Y plus pointer parallax. Depends only on its inputs.
pub fn rotation_at(elapsed: f64, pointer: PointerOffset, config: &BackgroundConfig) -> Rotation {
    Rotation {
        x: pointer.y * config.parallax,
        y: elapsed * config.spin_speed + pointer.x * config.parallax,
    }
}

pub struct Background<S> {
    config: BackgroundConfig,
    field: ParticleField,
    view: ViewState,
    pointer: PointerOffset,
    clock: Clock,
    rotation: Rotation,
    surface: S,
    stopped: bool,
}

impl<S: Surface> Background<S> {
    /// Build the background inside `container`.
    ///
    /// Returns `Ok(None)` without calling `make_surface` when there is no
    /// container.
    pub fn mount<E, F>(
        container: Option<ContainerSize>,
        pixel_ratio: f64,
        now_ms: f64,
        config: BackgroundConfig,
        rng: &mut fastrand::Rng,
        make_surface: F,
    ) -> Result<Option<Self>, E>
    where
        F: FnOnce(&BackgroundConfig) -> Result<S, E>,
    {
        let Some(size) = container else {
            log::debug!("no canvas container, background disabled");
            return Ok(None);
        };

        let view = ViewState::new(&config, size);
        let field = ParticleField::generate(config.particle_count, config.extent, rng);

        let mut surface = make_surface(&config)?;
        surface.set_pixel_ratio(pixel_ratio);
        surface.set_size(size.width, size.height);
        surface.upload_points(&field);

        log::info!(
            "background mounted: {} particles, {}x{} @{pixel_ratio}x",
            field.len(),
            size.width,
            size.height
        );

        Ok(Some(Self {
            config,
            field,
            view,
            pointer: PointerOffset::default(),
            clock: Clock::start(now_ms),
            rotation: Rotation::default(),
            surface,
            stopped: false,
        }))
    }

    /// One frame: advance the rotation and draw.
    pub fn tick(&mut self, now_ms: f64) -> Flow {
        if self.stopped {
            return Flow::Stop;
        }
        let elapsed = self.clock.elapsed(now_ms);
        self.rotation = rotation_at(elapsed, self.pointer, &self.config);
        let frame = Frame {
            model: self.rotation.matrix(),
            view: self.view.view_matrix(),
            projection: self.view.projection(),
        };
        self.surface.render(&frame);
        Flow::Continue
    }

    pub fn resize(&mut self, size: ContainerSize) {
        if self.stopped {
            return;
        }
        if self.view.set_size(size) {
            self.surface.set_size(size.width, size.height);
        }
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.pointer = PointerOffset::from_client(client_x, client_y, viewport_w, viewport_h);
    }

    /// Release the surface; every later tick returns [`Flow::Stop`].
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.surface.release();
            log::info!("background stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pointer(&self) -> PointerOffset {
        self.pointer
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
