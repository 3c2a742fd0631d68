//! Scanline triangle rasterization with per-pixel depth testing.
//!
//! Triangles are processed one horizontal row at a time:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** the triangle at the middle vertex's row into an upper and a
//!    lower sub-triangle
//! 3. **Scan** each sub-triangle row by row, intersecting its two bounding
//!    edges, then fill the span between the intersections
//!
//! ```text
//!        v0
//!        /\
//!       /  \        upper half: edges v0->v1 and v0->v2
//!      /----\  <- v1.y
//!     v1     \      lower half: edges v1->v2 and v0->v2
//!       \     \
//!        \    /
//!         \  /
//!          \/
//!          v2
//! ```
//!
//! The reciprocal depth carried in each point's z component is interpolated
//! along both edges by the row's fractional position, then across the span
//! per pixel, and finally compared against the depth buffer before writing.
//! Edges with zero vertical extent are skipped, which avoids dividing by
//! zero and naturally handles flat-top/flat-bottom triangles (the flat half
//! contributes no rows).

use super::{FrameBuffer, Rasterizer, Triangle};
use crate::math::vec3::Vec3;

/// Scanline rasterizer using upper/lower sub-triangle decomposition.
///
/// Vertices may arrive in any order; sorting happens internally. Only pixels
/// actually covered by the triangle are visited, and every write goes
/// through the frame buffer's depth test.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by ascending Y (top to bottom in screen space).
    ///
    /// Three comparisons suffice for 3 elements. After sorting:
    /// `v0.y <= v1.y <= v2.y`.
    fn sort_vertices(v0: &mut Vec3, v1: &mut Vec3, v2: &mut Vec3) {
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    /// X position and reciprocal depth where `edge` crosses row `y`.
    ///
    /// Both are linear in the row's fractional position between the edge
    /// endpoints. The caller guarantees the edge has vertical extent.
    #[inline]
    fn edge_intersection(start: Vec3, end: Vec3, y: f32) -> (f32, f32) {
        let t = (y - start.y) / (end.y - start.y);
        let x = start.x + (end.x - start.x) * t;
        let inv_depth = start.z + (end.z - start.z) * t;
        (x, inv_depth)
    }

    /// Scans the rows from `y_top` to `y_bottom`, bounded by two edges.
    ///
    /// Each row's span is ordered left-to-right, the reciprocal depth is
    /// interpolated across it, and every covered pixel is depth-tested.
    /// Degenerate (zero-height) edges skip the whole half.
    fn scan_half(
        y_top: f32,
        y_bottom: f32,
        edge_a: (Vec3, Vec3),
        edge_b: (Vec3, Vec3),
        buffer: &mut FrameBuffer,
        color: u32,
    ) {
        if (edge_a.1.y - edge_a.0.y).abs() < f32::EPSILON
            || (edge_b.1.y - edge_b.0.y).abs() < f32::EPSILON
        {
            return;
        }

        let y_start = y_top.ceil() as i32;
        let y_end = y_bottom.floor() as i32;

        for y in y_start..=y_end {
            let (x_a, depth_a) = Self::edge_intersection(edge_a.0, edge_a.1, y as f32);
            let (x_b, depth_b) = Self::edge_intersection(edge_b.0, edge_b.1, y as f32);

            // Either edge may bound the span on the left depending on the
            // triangle's shape.
            let (x_left, depth_left, x_right, depth_right) = if x_a <= x_b {
                (x_a, depth_a, x_b, depth_b)
            } else {
                (x_b, depth_b, x_a, depth_a)
            };

            let span = x_right - x_left;
            let x_start = x_left.ceil() as i32;
            let x_end = x_right.floor() as i32;

            for x in x_start..=x_end {
                let tx = if span.abs() < f32::EPSILON {
                    0.0
                } else {
                    (x as f32 - x_left) / span
                };
                let inv_depth = depth_left + (depth_right - depth_left) * tx;
                buffer.set_pixel_with_depth(x, y, inv_depth, color);
            }
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let mut v0 = triangle.points[0];
        let mut v1 = triangle.points[1];
        let mut v2 = triangle.points[2];
        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        // Upper half down to the middle vertex's row, then the lower half.
        // The long edge v0->v2 bounds both halves. The shared middle row is
        // drawn once; the second attempt fails the depth test at equal depth.
        Self::scan_half(v0.y, v1.y, (v0, v1), (v0, v2), buffer, triangle.color);
        Self::scan_half(v1.y, v2.y, (v1, v2), (v0, v2), buffer, triangle.color);
    }
}
