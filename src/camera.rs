//! Free-flying camera.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! Orientation is stored as per-axis Euler angles in the camera's
//! [`Transform`] and converted to a ZXY rotation matrix when a direction is
//! needed, so movement is always relative to where the camera looks.

use crate::math::{mat3::Mat3, vec3::Vec3};
use crate::transform::Transform;
use crate::window::InputState;

/// Camera with a transform and movement/rotation speeds.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub transform: Transform,
    /// Movement speed in units per second.
    pub move_speed: f32,
    /// Rotation speed in radians per second.
    pub rotate_speed: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            move_speed: 2.0,
            rotate_speed: 3.0,
        }
    }
}

impl Camera {
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    /// Returns the camera's forward direction in world space.
    pub fn forward(&self) -> Vec3 {
        Vec3::FORWARD * Mat3::rotation_zxy(self.transform.rotation)
    }

    /// Returns the camera's right direction in world space.
    pub fn right(&self) -> Vec3 {
        Vec3::RIGHT * Mat3::rotation_zxy(self.transform.rotation)
    }

    /// Returns the camera's up direction in world space.
    pub fn up(&self) -> Vec3 {
        Vec3::UP * Mat3::rotation_zxy(self.transform.rotation)
    }

    /// Applies one frame of held-key movement and rotation.
    ///
    /// `dt` is the elapsed frame time in seconds; all motion scales by it so
    /// camera speed is independent of frame rate.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        let move_amount = self.move_speed * dt;

        if input.forward {
            self.transform.translate(self.forward() * move_amount);
        }
        if input.back {
            self.transform.translate(self.forward() * -move_amount);
        }
        if input.right {
            self.transform.translate(self.right() * move_amount);
        }
        if input.left {
            self.transform.translate(self.right() * -move_amount);
        }
        if input.up {
            self.transform.translate(self.up() * move_amount);
        }
        if input.down {
            self.transform.translate(self.up() * -move_amount);
        }

        let turn_amount = self.rotate_speed * dt;
        if input.yaw_right {
            self.transform.rotate_y(turn_amount);
        }
        if input.yaw_left {
            self.transform.rotate_y(-turn_amount);
        }
    }
}
