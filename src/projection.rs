//! Projection parameters.
//!
//! The [`Projection`] struct holds everything except the field of view, which
//! belongs to the camera zoom and is passed in when the matrix is built.

use crate::math::Mat4;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Half extent of the orthographic view volume in world units.
pub const ORTHO_EXTENT: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    mode: ProjectionMode,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
}

impl Projection {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            aspect_ratio,
            z_near: Z_NEAR,
            z_far: Z_FAR,
        }
    }

    /// Aspect ratio of a `width` x `height` viewport; a zero height counts as one.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::new(width as f32 / height.max(1) as f32)
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Builds the projection matrix. `fov_y_degrees` only affects perspective.
    ///
    /// The orthographic volume is a fixed square and ignores the aspect ratio.
    pub fn matrix(&self, fov_y_degrees: f32) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective(
                fov_y_degrees.to_radians(),
                self.aspect_ratio,
                self.z_near,
                self.z_far,
            ),
            ProjectionMode::Orthographic => Mat4::orthographic(
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                self.z_near,
                self.z_far,
            ),
        }
    }
}
