//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v * Mat4`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! # Example
//! ```ignore
//! let transform = rotation * translation;  // rotation applied first
//! let result = vertex * transform;         // transform the vertex
//! ```

use std::ops::{Add, Mul, Sub};

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`, row-major, row-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix with the offset in the last row.
    pub const fn translation(v: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        ])
    }

    /// Creates the inverse translation matrix, offsetting by `-v`.
    pub const fn translation_inv(v: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-v.x, -v.y, -v.z, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis (row-vector form).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis (row-vector form).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis (row-vector form).
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composite rotation applying Z, then X, then Y to a row vector.
    pub fn rotation_zxy(rotation: Vec3) -> Self {
        Mat4::rotation_z(rotation.z) * Mat4::rotation_x(rotation.x) * Mat4::rotation_y(rotation.y)
    }

    /// Exact inverse of [`Mat4::rotation_zxy`]: negated angles composed in
    /// reverse order.
    pub fn rotation_zxy_inv(rotation: Vec3) -> Self {
        Mat4::rotation_y(-rotation.y)
            * Mat4::rotation_x(-rotation.x)
            * Mat4::rotation_z(-rotation.z)
    }

    /// Composite rotation applying X, then Y, then Z to a row vector.
    pub fn rotation_xyz(rotation: Vec3) -> Self {
        Mat4::rotation_x(rotation.x) * Mat4::rotation_y(rotation.y) * Mat4::rotation_z(rotation.z)
    }

    /// Exact inverse of [`Mat4::rotation_xyz`].
    pub fn rotation_xyz_inv(rotation: Vec3) -> Self {
        Mat4::rotation_z(-rotation.z)
            * Mat4::rotation_y(-rotation.y)
            * Mat4::rotation_x(-rotation.x)
    }

    /// Creates the perspective projection matrix.
    ///
    /// Layout (row-vector convention; only correct when vertices are
    /// multiplied as `v * M`):
    ///
    /// ```text
    /// | cot(fov/2)          0           0  0 |
    /// |          0  cot(fov/2)*aspect   0  0 |
    /// |          0          0           q  1 |
    /// |          0          0     -q*near  0 |
    /// ```
    ///
    /// with `q = far / (far - near)`. The `[2][3] = 1` entry copies the
    /// camera-space depth into the homogeneous component, which the pipeline
    /// later uses for the perspective divide and its visibility test.
    ///
    /// # Arguments
    /// * `aspect_ratio` - Width divided by height
    /// * `fov_degrees` - Vertical field of view in **degrees**
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > `z_near`)
    pub fn projection(aspect_ratio: f32, fov_degrees: f32, z_near: f32, z_far: f32) -> Self {
        let fov_cot = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
        let q = z_far / (z_far - z_near);

        let mut m = Mat4::new([[0.0; 4]; 4]);
        m.data[0][0] = fov_cot;
        m.data[1][1] = fov_cot * aspect_ratio;
        m.data[2][2] = q;
        m.data[2][3] = 1.0;
        m.data[3][2] = -q * z_near;
        m
    }

    pub fn scale(&self, scalar: f32) -> Self {
        let mut data = self.data;
        for row in data.iter_mut() {
            for value in row.iter_mut() {
                *value *= scalar;
            }
        }
        Mat4::new(data)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Mat4::new([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

impl Add<Mat4> for Mat4 {
    type Output = Mat4;

    fn add(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][col] + rhs.data[row][col];
            }
        }
        Mat4::new(result)
    }
}

impl Sub<Mat4> for Mat4 {
    type Output = Mat4;

    fn sub(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][col] - rhs.data[row][col];
            }
        }
        Mat4::new(result)
    }
}

/// Matrix multiplication, row-by-column sum of products.
///
/// With row vectors, `v * (A * B)` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }
        Mat4::new(result)
    }
}

/// Row-vector times matrix: `v * M` applies the transform.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        Vec4::new(
            self.x * m.data[0][0]
                + self.y * m.data[1][0]
                + self.z * m.data[2][0]
                + self.w * m.data[3][0],
            self.x * m.data[0][1]
                + self.y * m.data[1][1]
                + self.z * m.data[2][1]
                + self.w * m.data[3][1],
            self.x * m.data[0][2]
                + self.y * m.data[1][2]
                + self.z * m.data[2][2]
                + self.w * m.data[3][2],
            self.x * m.data[0][3]
                + self.y * m.data[1][3]
                + self.z * m.data[2][3]
                + self.w * m.data[3][3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat_relative_eq(a: Mat4, b: Mat4, epsilon: f32) {
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(a.get(row, col), b.get(row, col), epsilon = epsilon);
            }
        }
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Mat4::rotation_zxy(Vec3::new(0.3, -1.2, 0.7)) * Mat4::translation(Vec3::ONE);
        assert_mat_relative_eq(m * Mat4::identity(), m, 1e-6);
        assert_mat_relative_eq(Mat4::identity() * m, m, 1e-6);
    }

    #[test]
    fn axis_rotations_are_orthogonal() {
        for m in [
            Mat4::rotation_x(0.8),
            Mat4::rotation_y(-2.1),
            Mat4::rotation_z(1.4),
        ] {
            assert_mat_relative_eq(m * m.transpose(), Mat4::identity(), 1e-6);
        }
    }

    #[test]
    fn zxy_and_inverse_compose_to_identity() {
        let r = Vec3::new(0.4, 1.3, -0.6);
        assert_mat_relative_eq(
            Mat4::rotation_zxy(r) * Mat4::rotation_zxy_inv(r),
            Mat4::identity(),
            1e-6,
        );
    }

    #[test]
    fn translation_and_inverse_cancel() {
        let v = Vec3::new(5.0, -2.0, 13.0);
        let moved = Vec4::point(1.0, 2.0, 3.0) * Mat4::translation(v) * Mat4::translation_inv(v);
        assert_relative_eq!(moved.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(moved.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(moved.z, 3.0, epsilon = 1e-6);
        assert_relative_eq!(moved.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let point = Vec4::point(0.0, 0.0, 0.0) * t;
        assert_eq!(point.to_vec3(), Vec3::new(1.0, 2.0, 3.0));

        let direction = Vec4::new(1.0, 0.0, 0.0, 0.0) * t;
        assert_eq!(direction.to_vec3(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rotation_y_turns_forward_toward_right() {
        let v = Vec4::from(Vec3::FORWARD) * Mat4::rotation_y(FRAC_PI_2);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn projection_copies_depth_into_w() {
        let proj = Mat4::projection(800.0 / 600.0, 90.0, 0.05, 1000.0);
        let v = Vec4::point(1.0, 2.0, 10.0) * proj;
        assert_relative_eq!(v.w, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn projection_ninety_degree_fov_has_unit_focal_length() {
        let proj = Mat4::projection(1.0, 90.0, 0.05, 1000.0);
        assert_relative_eq!(proj.get(0, 0), 1.0, epsilon = 1e-6);
        assert_relative_eq!(proj.get(1, 1), 1.0, epsilon = 1e-6);
    }
}
