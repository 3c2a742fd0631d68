//! 3x3 rotation matrices for direction vectors.
//!
//! Used wherever a direction (face normal, light direction, movement axis)
//! needs rotating without translation: `v * Mat3::rotation_zxy(angles)`.

use std::ops::{Add, Mul, Sub};

use super::vec3::Vec3;

/// 3x3 matrix stored as `data[row][col]`, row-major, row-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    pub const fn new(data: [[f32; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub const fn identity() -> Self {
        Mat3::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a rotation matrix around the X axis (row-vector form).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Creates a rotation matrix around the Y axis (row-vector form).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Creates a rotation matrix around the Z axis (row-vector form).
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat3::new([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Composite rotation applying Z, then X, then Y to a row vector.
    ///
    /// This is the rotation order used for mesh orientation, camera-relative
    /// movement, and the directional light.
    pub fn rotation_zxy(rotation: Vec3) -> Self {
        Mat3::rotation_z(rotation.z) * Mat3::rotation_x(rotation.x) * Mat3::rotation_y(rotation.y)
    }

    /// Exact inverse of [`Mat3::rotation_zxy`]: negated angles composed in
    /// reverse order.
    pub fn rotation_zxy_inv(rotation: Vec3) -> Self {
        Mat3::rotation_y(-rotation.y)
            * Mat3::rotation_x(-rotation.x)
            * Mat3::rotation_z(-rotation.z)
    }

    /// Composite rotation applying X, then Y, then Z to a row vector.
    pub fn rotation_xyz(rotation: Vec3) -> Self {
        Mat3::rotation_x(rotation.x) * Mat3::rotation_y(rotation.y) * Mat3::rotation_z(rotation.z)
    }

    /// Exact inverse of [`Mat3::rotation_xyz`].
    pub fn rotation_xyz_inv(rotation: Vec3) -> Self {
        Mat3::rotation_z(-rotation.z)
            * Mat3::rotation_y(-rotation.y)
            * Mat3::rotation_x(-rotation.x)
    }

    pub fn scale(&self, scalar: f32) -> Self {
        let mut data = self.data;
        for row in data.iter_mut() {
            for value in row.iter_mut() {
                *value *= scalar;
            }
        }
        Mat3::new(data)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Mat3::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
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

impl Add<Mat3> for Mat3 {
    type Output = Mat3;

    fn add(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = self.data[row][col] + rhs.data[row][col];
            }
        }
        Mat3::new(result)
    }
}

impl Sub<Mat3> for Mat3 {
    type Output = Mat3;

    fn sub(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = self.data[row][col] - rhs.data[row][col];
            }
        }
        Mat3::new(result)
    }
}

/// Matrix multiplication, row-by-column sum of products.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col];
            }
        }
        Mat3::new(result)
    }
}

/// Row-vector times matrix: `v * M` applies the transform.
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;

    fn mul(self, m: Mat3) -> Self::Output {
        Vec3::new(
            self.x * m.data[0][0] + self.y * m.data[1][0] + self.z * m.data[2][0],
            self.x * m.data[0][1] + self.y * m.data[1][1] + self.z * m.data[2][1],
            self.x * m.data[0][2] + self.y * m.data[1][2] + self.z * m.data[2][2],
        )
    }
}
