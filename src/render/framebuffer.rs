//! Frame buffer abstraction for depth-tested 2D pixel access.
//!
//! The rasterizer core never owns the color buffer; it draws through this
//! borrowed view, which pairs the display's color pixels with the engine's
//! depth buffer and bounds-checks every write.

/// A view into color and depth buffers of matching dimensions.
///
/// # Depth Buffer
///
/// The depth buffer stores reciprocal camera-space depth per pixel, cleared
/// to 0.0 (infinitely far). Larger stored values are nearer the camera, so
/// the test is write-if-greater.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
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

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if `inv_depth` is greater than the stored
    /// value at that location (nearer the camera); the stored depth is
    /// updated on a successful write. Out-of-bounds coordinates are skipped,
    /// not clamped.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, inv_depth: f32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = (y as u32 * self.width + x as u32) as usize;
            if inv_depth > self.depth_buffer[idx] {
                self.depth_buffer[idx] = inv_depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Get the stored reciprocal depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.depth_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_depth_wins_farther_is_rejected() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![0.0f32; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        fb.set_pixel_with_depth(0, 0, 0.5, 0xFF0000FF);
        fb.set_pixel_with_depth(0, 0, 0.2, 0xFF00FF00);

        assert_eq!(fb.get_pixel(0, 0), Some(0xFF0000FF));
        assert_eq!(fb.get_depth(0, 0), Some(0.5));
    }

    #[test]
    fn out_of_bounds_writes_are_skipped() {
        let mut color = vec![0u32; 4];
        let mut depth = vec![0.0f32; 4];
        let mut fb = FrameBuffer::new(&mut color, &mut depth, 2, 2);

        fb.set_pixel_with_depth(-1, 0, 1.0, 0xFFFFFFFF);
        fb.set_pixel_with_depth(0, 2, 1.0, 0xFFFFFFFF);
        fb.set_pixel_with_depth(5, 5, 1.0, 0xFFFFFFFF);

        assert!(color.iter().all(|&pixel| pixel == 0));
    }
}
