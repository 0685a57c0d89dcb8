//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into color and depth buffers with bounds-checked access.

/// Depth of an empty pixel: the far plane.
pub const DEPTH_CLEAR: f32 = 1.0;

/// A borrowed view into color and depth buffers.
///
/// # Depth Buffer
///
/// Stores window-space depth in `[0, 1]` (NDC z remapped), cleared to
/// [`DEPTH_CLEAR`]. A fragment passes when its depth is strictly less than
/// the stored value. NDC z is affine in screen space for both perspective and
/// orthographic projections, so it can be interpolated with plain
/// barycentrics.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// # Panics
    /// In debug builds, if buffer lengths don't match `width * height`.
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            (width * height) as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32)
            .then(|| (y as u32 * self.width + x as u32) as usize)
    }

    /// True if a fragment at `depth` would be visible at (x, y).
    ///
    /// Lets the rasterizer skip fragment shading for hidden pixels.
    #[inline]
    pub fn depth_test(&self, x: i32, y: i32, depth: f32) -> bool {
        self.index(x, y)
            .is_some_and(|idx| depth < self.depth_buffer[idx])
    }

    /// Writes color and depth if the depth test passes.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if depth < self.depth_buffer[idx] {
                self.depth_buffer[idx] = depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Writes color without touching depth.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closer_fragment_wins() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![DEPTH_CLEAR; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        fb.set_pixel_with_depth(1, 0, 0.5, 0xFF00FF00);
        fb.set_pixel_with_depth(1, 0, 0.7, 0xFFFF0000);
        assert_eq!(fb.get_pixel(1, 0), Some(0xFF00FF00));

        fb.set_pixel_with_depth(1, 0, 0.2, 0xFF0000FF);
        assert_eq!(fb.get_pixel(1, 0), Some(0xFF0000FF));
        assert_eq!(fb.get_depth(1, 0), Some(0.2));
    }

    #[test]
    fn equal_depth_fails_the_test() {
        let mut color = vec![0u32; 1];
        let mut depth = vec![0.5f32; 1];
        let fb = FrameBuffer::new(&mut color, &mut depth, 1, 1);
        assert!(!fb.depth_test(0, 0, 0.5));
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut color = vec![0u32; 1];
        let mut depth = vec![DEPTH_CLEAR; 1];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 1, 1);
        fb.set_pixel(-1, 0, 1);
        fb.set_pixel_with_depth(0, 1, 0.0, 1);
        assert_eq!(fb.get_pixel(0, 0), Some(0));
        assert!(!fb.depth_test(5, 5, 0.0));
    }
}
