//! Directional light for flat shading.

use crate::colors;
use crate::math::{mat3::Mat3, vec3::Vec3};
use crate::window::InputState;

/// A directional light described only by a per-axis rotation.
///
/// The light direction is derived from the rotation on every call rather
/// than cached, so rotating the light at runtime changes shading on the next
/// frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionalLight {
    /// Euler rotation in radians, applied in ZXY order to the forward axis.
    pub rotation: Vec3,
}

impl DirectionalLight {
    pub const fn new(rotation: Vec3) -> Self {
        Self { rotation }
    }

    /// The world-space direction the light points in, recomputed from the
    /// current rotation.
    pub fn direction(&self) -> Vec3 {
        (Vec3::FORWARD * Mat3::rotation_zxy(self.rotation)).normalize()
    }

    /// Flat-shades a world-space surface normal into a gray ARGB color.
    ///
    /// The dot product of two unit vectors lands in [-1, 1]; it is remapped
    /// to [0, 1], scaled to [0, 255], and clamped before packing.
    pub fn shade(&self, world_normal: Vec3) -> u32 {
        let alignment = world_normal.dot(self.direction());
        let intensity = (alignment * 0.5 + 0.5) * 255.0;
        colors::grayscale(intensity.clamp(0.0, 255.0) as u8)
    }

    /// Applies one frame of held-key light rotation.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if input.light_pitch_up {
            self.rotation.x -= dt;
        }
        if input.light_pitch_down {
            self.rotation.x += dt;
        }
        if input.light_yaw_right {
            self.rotation.y += dt;
        }
        if input.light_yaw_left {
            self.rotation.y -= dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn zero_rotation_points_forward() {
        let light = DirectionalLight::default();
        let dir = light.direction();
        assert_relative_eq!(dir.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn direction_tracks_rotation_changes() {
        let mut light = DirectionalLight::default();
        light.rotation.y = PI;
        let dir = light.direction();
        assert_relative_eq!(dir.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn normal_facing_along_light_is_white() {
        let light = DirectionalLight::default();
        assert_eq!(light.shade(Vec3::FORWARD), colors::grayscale(255));
    }

    #[test]
    fn normal_facing_against_light_is_black() {
        let light = DirectionalLight::default();
        assert_eq!(light.shade(Vec3::BACK), colors::grayscale(0));
    }

    #[test]
    fn perpendicular_normal_is_mid_gray() {
        let light = DirectionalLight::default();
        let color = light.shade(Vec3::UP);
        // 0.5 * 255 truncates to 127
        assert_eq!(color, colors::grayscale(127));
    }
}
