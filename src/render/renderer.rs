//! Owns the color and depth buffers and runs the draw pipeline.

use log::trace;

use super::framebuffer::{FrameBuffer, DEPTH_CLEAR};
use super::rasterizer::{EdgeFunctionRasterizer, ScreenVertex};
use crate::clipper::{ClipPolygon, ClipSpaceClipper, ClipVertex};
use crate::colors;
use crate::mesh::Mesh;
use crate::shader::ShaderProgram;

/// Counters for the last frame, logged at trace level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub draw_calls: usize,
    pub triangles_in: usize,
    pub triangles_rasterized: usize,
    pub fragments: usize,
}

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
    clipper: ClipSpaceClipper,
    rasterizer: EdgeFunctionRasterizer,
    stats: FrameStats,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BLACK; size],
            depth_buffer: vec![DEPTH_CLEAR; size],
            width,
            height,
            clipper: ClipSpaceClipper::new(),
            rasterizer: EdgeFunctionRasterizer::new(),
            stats: FrameStats::default(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BLACK; size];
        self.depth_buffer = vec![DEPTH_CLEAR; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clears color to `color`, depth to the far plane and resets the stats.
    pub fn clear(&mut self, color: u32) {
        if self.stats.draw_calls > 0 {
            trace!("{:?}", self.stats);
        }
        self.color_buffer.fill(color);
        self.depth_buffer.fill(DEPTH_CLEAR);
        self.stats = FrameStats::default();
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the same allocation.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }

    /// Draws a mesh with a shader program.
    ///
    /// Vertex stage, triangle assembly, clipping, perspective divide and
    /// viewport mapping, then rasterization with depth test and fragment stage.
    pub fn draw<P: ShaderProgram>(&mut self, mesh: &Mesh, program: &P) {
        let (width, height) = (self.width, self.height);

        let shaded: Vec<ClipVertex<P::Varying>> = mesh
            .vertices()
            .iter()
            .map(|vertex| {
                let (position, varying) = program.vertex(vertex);
                ClipVertex::new(position, varying)
            })
            .collect();

        let clipper = self.clipper;
        let rasterizer = self.rasterizer;
        let mut stats = self.stats;
        stats.draw_calls += 1;

        let mut fb = self.as_framebuffer();
        for [a, b, c] in mesh.triangles() {
            stats.triangles_in += 1;
            let polygon = clipper.clip_polygon(ClipPolygon::from_triangle(
                shaded[a], shaded[b], shaded[c],
            ));

            for [p0, p1, p2] in polygon.triangulate() {
                let screen = [
                    ScreenVertex::from_clip(p0, width, height),
                    ScreenVertex::from_clip(p1, width, height),
                    ScreenVertex::from_clip(p2, width, height),
                ];
                stats.triangles_rasterized += 1;
                stats.fragments += rasterizer.fill_triangle(
                    [&screen[0], &screen[1], &screen[2]],
                    &mut fb,
                    program,
                );
            }
        }
        self.stats = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Mat4, Vec3};
    use crate::mesh::shapes;
    use crate::shader::{LampShader, Transforms};

    const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    fn view_projection() -> (Mat4, Mat4) {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective(45f32.to_radians(), 1.0, 0.1, 100.0);
        (view, projection)
    }

    fn center(renderer: &Renderer) -> u32 {
        let (w, h) = (renderer.width(), renderer.height());
        renderer.color_buffer()[(h / 2 * w + w / 2) as usize]
    }

    #[test]
    fn cube_in_front_of_camera_covers_the_centre() {
        let mut renderer = Renderer::new(32, 32);
        renderer.clear(colors::BLACK);
        let (view, projection) = view_projection();
        let shader = LampShader::new(&Transforms::new(Mat4::identity(), view, projection), RED);

        renderer.draw(&shapes::cube(), &shader);
        assert_eq!(center(&renderer), 0xFFFF0000);
        assert_eq!(renderer.stats().triangles_in, 12);
    }

    #[test]
    fn nearer_object_wins_regardless_of_draw_order() {
        let mut renderer = Renderer::new(32, 32);
        renderer.clear(colors::BLACK);
        let (view, projection) = view_projection();
        let near = Transforms::new(Mat4::translation(0.0, 0.0, 1.0), view, projection);
        let far = Transforms::new(Mat4::translation(0.0, 0.0, -1.0), view, projection);

        renderer.draw(&shapes::cube(), &LampShader::new(&near, GREEN));
        renderer.draw(&shapes::cube(), &LampShader::new(&far, RED));
        assert_eq!(center(&renderer), 0xFF00FF00);
    }

    #[test]
    fn geometry_behind_the_camera_is_clipped_away() {
        let mut renderer = Renderer::new(16, 16);
        renderer.clear(colors::BLACK);
        let (view, projection) = view_projection();
        let behind = Transforms::new(Mat4::translation(0.0, 0.0, 10.0), view, projection);

        renderer.draw(&shapes::cube(), &LampShader::new(&behind, RED));
        assert_eq!(renderer.stats().fragments, 0);
        assert!(renderer.color_buffer().iter().all(|&c| c == colors::BLACK));
    }

    #[test]
    fn camera_inside_a_cube_sees_its_walls() {
        // Near-plane clipping keeps the walls around the camera drawable.
        let mut renderer = Renderer::new(16, 16);
        renderer.clear(colors::BLACK);
        let (view, projection) = view_projection();
        let around = Transforms::new(
            Mat4::translation(0.0, 0.0, 3.0) * Mat4::scaling_uniform(4.0),
            view,
            projection,
        );
        renderer.draw(&shapes::cube(), &LampShader::new(&around, RED));
        assert_eq!(center(&renderer), 0xFFFF0000);
    }

    #[test]
    fn orthographic_depth_test_still_works() {
        let mut renderer = Renderer::new(16, 16);
        renderer.clear(colors::BLACK);
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let ortho = Mat4::orthographic(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
        let near = Transforms::new(Mat4::translation(0.0, 0.0, 1.0), view, ortho);
        let far = Transforms::new(Mat4::translation(0.0, 0.0, -1.0), view, ortho);

        renderer.draw(&shapes::cube(), &LampShader::new(&near, GREEN));
        renderer.draw(&shapes::cube(), &LampShader::new(&far, RED));
        assert_eq!(center(&renderer), 0xFF00FF00);
    }

    #[test]
    fn clear_resets_depth() {
        let mut renderer = Renderer::new(8, 8);
        let (view, projection) = view_projection();
        let shader = LampShader::new(&Transforms::new(Mat4::identity(), view, projection), RED);
        renderer.draw(&shapes::cube(), &shader);
        renderer.clear(colors::BLACK);
        renderer.draw(&shapes::cube(), &shader);
        assert_eq!(center(&renderer), 0xFFFF0000);
        assert_eq!(renderer.stats().draw_calls, 1);
    }

    #[test]
    fn as_bytes_exposes_argb_words() {
        let mut renderer = Renderer::new(2, 1);
        renderer.clear(0xFF112233);
        assert_eq!(renderer.as_bytes().len(), 8);
        assert_eq!(
            u32::from_ne_bytes(renderer.as_bytes()[0..4].try_into().unwrap()),
            0xFF112233
        );
    }
}
