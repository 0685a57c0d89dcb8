//! Edge function-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute a bounding box around the triangle
//! 2. For each pixel centre in the box, evaluate three edge functions
//! 3. A pixel is inside if all edge functions share the sign of the area
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Normalised by the triangle area, the three values are the screen-space
//! barycentric coordinates of P.
//!
//! # Perspective-Correct Interpolation
//!
//! Screen-space barycentrics are only correct for quantities that are affine
//! in screen space (here: depth). Varyings are interpolated as
//! `Σ λᵢ·aᵢ/wᵢ / Σ λᵢ/wᵢ`, which undoes the perspective divide.
//!
//! # Winding Order
//!
//! Both windings are filled; there is no face culling.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use super::ScreenVertex;
use crate::math::Vec3;
use crate::render::framebuffer::FrameBuffer;
use crate::shader::{ShaderProgram, Varying};

#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    /// Signed area of the parallelogram spanned by (B - A) and (P - A).
    #[inline]
    fn edge_function(a: Vec3, b: Vec3, p: Vec3) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }

    /// Fills one triangle, shading each visible pixel with `program`.
    ///
    /// Returns the number of fragments written.
    pub fn fill_triangle<P: ShaderProgram>(
        &self,
        triangle: [&ScreenVertex<P::Varying>; 3],
        buffer: &mut FrameBuffer,
        program: &P,
    ) -> usize {
        let [s0, s1, s2] = triangle;
        let (v0, v1, v2) = (s0.position, s1.position, s2.position);

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return 0; // Degenerate triangle
        }
        let inv_area = 1.0 / area;

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if !inside {
                    continue;
                }

                let lambda = [w0 * inv_area, w1 * inv_area, w2 * inv_area];
                let depth = lambda[0] * v0.z + lambda[1] * v1.z + lambda[2] * v2.z;
                if !buffer.depth_test(x, y, depth) {
                    continue;
                }

                let persp = [
                    lambda[0] * s0.inv_w,
                    lambda[1] * s1.inv_w,
                    lambda[2] * s2.inv_w,
                ];
                let norm = 1.0 / (persp[0] + persp[1] + persp[2]);
                let weights = [persp[0] * norm, persp[1] * norm, persp[2] * norm];

                let varying =
                    P::Varying::weighted([&s0.varying, &s1.varying, &s2.varying], weights);
                buffer.set_pixel_with_depth(x, y, depth, program.fragment(&varying));
                written += 1;
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec4};
    use crate::mesh::Vertex;
    use crate::render::framebuffer::DEPTH_CLEAR;

    /// Writes the interpolated u coordinate into the red channel.
    struct UvProbe;

    impl ShaderProgram for UvProbe {
        type Varying = Vec2;

        fn vertex(&self, vertex: &Vertex) -> (Vec4, Vec2) {
            (Vec4::point(vertex.position), vertex.uv)
        }

        fn fragment(&self, uv: &Vec2) -> u32 {
            crate::colors::pack_color(uv.x, 0.0, 0.0, 1.0)
        }
    }

    fn sv(x: f32, y: f32, z: f32, inv_w: f32, u: f32) -> ScreenVertex<Vec2> {
        ScreenVertex {
            position: Vec3::new(x, y, z),
            inv_w,
            varying: Vec2::new(u, 0.0),
        }
    }

    fn buffers(w: u32, h: u32) -> (Vec<u32>, Vec<f32>) {
        let n = (w * h) as usize;
        (vec![0; n], vec![DEPTH_CLEAR; n])
    }

    #[test]
    fn covers_both_windings() {
        let (mut color, mut depth) = buffers(8, 8);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 8, 8);
        let a = sv(0.0, 0.0, 0.5, 1.0, 0.0);
        let b = sv(8.0, 0.0, 0.5, 1.0, 0.0);
        let c = sv(0.0, 8.0, 0.5, 1.0, 0.0);

        let ccw = EdgeFunctionRasterizer.fill_triangle([&a, &b, &c], &mut fb, &UvProbe);
        let (mut color2, mut depth2) = buffers(8, 8);
        let mut fb2 = FrameBuffer::new(&mut color2, &mut depth2, 8, 8);
        let cw = EdgeFunctionRasterizer.fill_triangle([&a, &c, &b], &mut fb2, &UvProbe);
        assert!(ccw > 0);
        assert_eq!(ccw, cw);
    }

    #[test]
    fn hidden_fragments_are_not_shaded() {
        let (mut color, mut depth) = buffers(4, 4);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        let near = [sv(0.0, 0.0, 0.2, 1.0, 1.0), sv(8.0, 0.0, 0.2, 1.0, 1.0), sv(0.0, 8.0, 0.2, 1.0, 1.0)];
        let far = [sv(0.0, 0.0, 0.8, 1.0, 0.0), sv(8.0, 0.0, 0.8, 1.0, 0.0), sv(0.0, 8.0, 0.8, 1.0, 0.0)];

        EdgeFunctionRasterizer.fill_triangle([&near[0], &near[1], &near[2]], &mut fb, &UvProbe);
        let written =
            EdgeFunctionRasterizer.fill_triangle([&far[0], &far[1], &far[2]], &mut fb, &UvProbe);
        assert_eq!(written, 0);
        assert_eq!(fb.get_pixel(0, 0), Some(0xFFFF0000));
    }

    #[test]
    fn interpolation_is_perspective_correct() {
        // Left edge at w = 1, right edge at w = 3. Screen midpoint between
        // them is closer to the near vertex in eye space, so u < 0.5 there.
        let (mut color, mut depth) = buffers(64, 2);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 64, 2);
        let a = sv(0.0, -10.0, 0.5, 1.0, 0.0);
        let b = sv(64.0, -10.0, 0.5, 1.0 / 3.0, 1.0);
        let c = sv(0.0, 20.0, 0.5, 1.0, 0.0);
        let d = sv(64.0, 20.0, 0.5, 1.0 / 3.0, 1.0);
        EdgeFunctionRasterizer.fill_triangle([&a, &b, &c], &mut fb, &UvProbe);
        EdgeFunctionRasterizer.fill_triangle([&b, &d, &c], &mut fb, &UvProbe);

        let mid = fb.get_pixel(31, 0).unwrap();
        let red = (mid >> 16) & 0xFF;
        // affine interpolation would give ~0.5; perspective-correct gives 0.25
        assert!((red as f32 / 255.0 - 0.25).abs() < 0.03, "red = {red}");
    }

    #[test]
    fn degenerate_triangle_writes_nothing() {
        let (mut color, mut depth) = buffers(4, 4);
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 4, 4);
        let a = sv(0.0, 0.0, 0.5, 1.0, 0.0);
        let b = sv(2.0, 2.0, 0.5, 1.0, 0.0);
        let c = sv(4.0, 4.0, 0.5, 1.0, 0.0);
        assert_eq!(EdgeFunctionRasterizer.fill_triangle([&a, &b, &c], &mut fb, &UvProbe), 0);
    }
}
