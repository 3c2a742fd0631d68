use std::ops::{Add, Mul, Sub};

use super::vec2::Vec2;

/// 2x2 matrix stored as `data[row][col]`, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    data: [[f32; 2]; 2],
}

impl Mat2 {
    pub const fn new(data: [[f32; 2]; 2]) -> Self {
        Mat2 { data }
    }

    pub const fn identity() -> Self {
        Mat2::new([[1.0, 0.0], [0.0, 1.0]])
    }

    /// Creates a 2D rotation matrix for row-vector multiplication.
    pub fn rotation(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat2::new([[c, s], [-s, c]])
    }

    pub fn scale(&self, scalar: f32) -> Self {
        let mut data = self.data;
        for row in data.iter_mut() {
            for value in row.iter_mut() {
                *value *= scalar;
            }
        }
        Mat2::new(data)
    }

    pub fn transpose(&self) -> Self {
        Mat2::new([
            [self.data[0][0], self.data[1][0]],
            [self.data[0][1], self.data[1][1]],
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

impl Add<Mat2> for Mat2 {
    type Output = Mat2;

    fn add(self, rhs: Mat2) -> Self::Output {
        let mut result = [[0.0f32; 2]; 2];
        for row in 0..2 {
            for col in 0..2 {
                result[row][col] = self.data[row][col] + rhs.data[row][col];
            }
        }
        Mat2::new(result)
    }
}

impl Sub<Mat2> for Mat2 {
    type Output = Mat2;

    fn sub(self, rhs: Mat2) -> Self::Output {
        let mut result = [[0.0f32; 2]; 2];
        for row in 0..2 {
            for col in 0..2 {
                result[row][col] = self.data[row][col] - rhs.data[row][col];
            }
        }
        Mat2::new(result)
    }
}

/// Matrix multiplication, row-by-column sum of products.
impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        let mut result = [[0.0f32; 2]; 2];
        for row in 0..2 {
            for col in 0..2 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col];
            }
        }
        Mat2::new(result)
    }
}

/// Row-vector times matrix: `v * M` applies the transform.
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;

    fn mul(self, m: Mat2) -> Self::Output {
        Vec2::new(
            self.x * m.data[0][0] + self.y * m.data[1][0],
            self.x * m.data[0][1] + self.y * m.data[1][1],
        )
    }
}
