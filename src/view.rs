use glam::{Mat4, Vec3};

use crate::config::BackgroundConfig;

/// Pixel size of the element hosting the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `None` when the height is zero.
    pub fn aspect(&self) -> Option<f32> {
        (self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Perspective camera looking down -Z from a fixed depth.
#[derive(Clone, Debug)]
pub struct ViewState {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    camera_z: f32,
}

impl ViewState {
    pub fn new(config: &BackgroundConfig, size: ContainerSize) -> Self {
        let aspect = size.aspect().unwrap_or_else(|| {
            log::warn!("container has zero height, falling back to square aspect");
            1.0
        });
        Self {
            fov_y: config.fov_deg.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            camera_z: config.camera_z,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    /// Recompute the aspect from `size`. A zero-height size keeps the
    /// previous aspect and returns `false`.
    pub fn set_size(&mut self, size: ContainerSize) -> bool {
        match size.aspect() {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => {
                log::warn!("ignoring zero-height resize ({}x{})", size.width, size.height);
                false
            }
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.camera_z))
    }
}
