//! Transform component for scene objects.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Position plus per-axis Euler rotation (radians).
///
/// The rotation is interpreted as successive axis rotations in Z, X, Y
/// order, not as a single axis-angle. Mutating methods return `&mut Self`
/// for chaining:
///
/// ```ignore
/// transform.set_position_xyz(0.0, 0.0, 20.0).rotate_y(0.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta rotation (Euler angles in radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self
    }

    /// Rotate around the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    /// Rotate around the Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    /// Generates the object-to-world matrix: ZXY rotation, then translation.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::rotation_zxy(self.rotation) * Mat4::translation(self.position)
    }

    /// Generates the world-to-local matrix: inverse translation, then the
    /// inverse ZXY rotation. Used as the camera view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation_inv(self.position) * Mat4::rotation_zxy_inv(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    #[test]
    fn default_world_matrix_is_identity() {
        assert_eq!(Transform::default().world_matrix(), Mat4::identity());
    }

    #[test]
    fn world_matrix_rotates_before_translating() {
        // A quarter turn around Y sends FORWARD to RIGHT, then the
        // translation applies in world space.
        let t = Transform::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        );
        let v = Vec4::from(Vec3::FORWARD) * t.world_matrix();
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_undoes_world_matrix() {
        let t = Transform::new(Vec3::new(3.0, -1.0, 8.0), Vec3::new(0.2, 1.1, -0.4));
        let v = Vec4::point(1.0, 2.0, 3.0) * t.world_matrix() * t.view_matrix();
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 2.0, epsilon = 1e-4);
        assert_relative_eq!(v.z, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn fluent_api_chains() {
        let mut t = Transform::default();
        t.set_position_xyz(1.0, 2.0, 3.0).rotate_y(0.5);
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(t.rotation.y, 0.5);
    }
}
