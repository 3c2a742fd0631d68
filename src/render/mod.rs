//! Rasterization internals: screen-space triangles, the frame buffer view,
//! and the scanline fill algorithm.

mod framebuffer;
mod renderer;
mod scanline;

pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;
pub use scanline::ScanlineRasterizer;

use crate::math::vec3::Vec3;

/// A triangle ready for rasterization in screen space.
///
/// Each point carries `(screen_x, screen_y, 1/depth)`: the z component is
/// the reciprocal of the camera-space depth, which interpolates linearly in
/// screen space and is what the depth buffer stores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub color: u32,
}

impl Triangle {
    pub fn new(points: [Vec3; 3], color: u32) -> Self {
        Self { points, color }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// The pipeline only depends on this seam, so the scanline fill can be
/// swapped for another strategy without touching the transform code.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer, depth-testing per pixel.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer);
}
