//! Owner of the color and depth buffers behind the display surface.

use std::path::Path;

use super::FrameBuffer;
use crate::colors;

/// Owns the per-frame pixel storage: an ARGB8888 color buffer for the
/// display and one reciprocal-depth float per pixel.
///
/// The depth buffer always matches the color buffer's dimensions; both are
/// cleared at the start of every frame so depth testing starts from
/// "infinitely far" (0.0).
pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![0.0; size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.depth_buffer = vec![0.0; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the color buffer with a single color.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Clear the depth buffer to prepare for a new frame.
    /// Sets all depths to 0.0 (infinitely far, since we store 1/depth).
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(0.0);
    }

    /// The rendered frame as bytes (ARGB8888), ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
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

    /// Saves the current color buffer as a PNG snapshot.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let mut rgba = Vec::with_capacity(self.color_buffer.len() * 4);
        for &pixel in &self.color_buffer {
            rgba.push((pixel >> 16) as u8); // R
            rgba.push((pixel >> 8) as u8); // G
            rgba.push(pixel as u8); // B
            rgba.push((pixel >> 24) as u8); // A
        }
        image::save_buffer(
            path,
            &rgba,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }
}
