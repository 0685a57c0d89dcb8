//! Triangle rasterization.
//!
//! Triangles arrive here already clipped, divided by `w` and mapped to the
//! viewport. The rasterizer decides pixel coverage, interpolates depth and
//! varyings, runs the depth test and calls the fragment stage.

mod edgefunction;

pub use edgefunction::EdgeFunctionRasterizer;

use crate::clipper::ClipVertex;
use crate::math::Vec3;

/// A vertex in window space.
#[derive(Clone, Copy, Debug)]
pub struct ScreenVertex<V> {
    /// Pixel x, pixel y (row 0 at the top) and depth in `[0, 1]`.
    pub position: Vec3,
    /// Reciprocal of clip-space w, for perspective-correct interpolation.
    pub inv_w: f32,
    pub varying: V,
}

impl<V: Copy> ScreenVertex<V> {
    /// Perspective divide and viewport transform.
    ///
    /// The vertex must already lie inside the clip volume, so `w > 0`.
    pub fn from_clip(vertex: &ClipVertex<V>, width: u32, height: u32) -> Self {
        let p = vertex.position;
        let inv_w = 1.0 / p.w;
        let (ndc_x, ndc_y, ndc_z) = (p.x * inv_w, p.y * inv_w, p.z * inv_w);

        Self {
            position: Vec3::new(
                (ndc_x + 1.0) * 0.5 * width as f32,
                (1.0 - ndc_y) * 0.5 * height as f32,
                ndc_z * 0.5 + 0.5,
            ),
            inv_w,
            varying: vertex.varying,
        }
    }
}
