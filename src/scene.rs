//! Scene state and the per-frame update step.
//!
//! All mutable world state lives in an explicit [`Scene`] value that the
//! caller owns and threads through [`Scene::update`] and
//! [`crate::pipeline::Engine::render_frame`]; there are no engine globals.

use crate::camera::Camera;
use crate::light::DirectionalLight;
use crate::mesh::Mesh;
use crate::window::InputState;

/// Everything the renderer draws: one camera, one directional light, and a
/// set of meshes.
#[derive(Default)]
pub struct Scene {
    pub camera: Camera,
    pub light: DirectionalLight,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new(camera: Camera, light: DirectionalLight) -> Self {
        Self {
            camera,
            light,
            meshes: Vec::new(),
        }
    }

    /// Advances the scene by one frame of input.
    ///
    /// `dt` is the elapsed frame time in seconds. Meshes are static after
    /// load; only the camera and the light respond to input.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.camera.update(input, dt);
        self.light.update(input, dt);
    }
}
