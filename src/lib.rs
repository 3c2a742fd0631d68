//! A CPU-based software-rendered 3D graphics engine.
//!
//! This crate renders scenes of triangle meshes into a 2D pixel buffer with
//! no GPU involvement: vertices are transformed through model, camera, and
//! projection space on the CPU, and visible triangles are filled by a
//! depth-buffered scanline rasterizer with flat directional-light shading.
//! SDL2 is used only for window management and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use pixel3d::prelude::*;
//!
//! let mut window = Window::new("My App", 800, 600)?;
//! let mut engine = Engine::new(800, 600);
//! let mut scene = Scene::default();
//! scene.meshes.push(Mesh::cube(Transform::default()));
//!
//! loop {
//!     engine.render_frame(&scene);
//!     window.present(engine.frame_buffer())?;
//! }
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod transform;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use light::DirectionalLight;
pub use mesh::{LoadError, Mesh};
pub use pipeline::Engine;
pub use scene::Scene;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use pixel3d::prelude::*;
/// ```
pub mod prelude {
    // Scene
    pub use crate::camera::Camera;
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::Mesh;
    pub use crate::scene::Scene;
    pub use crate::transform::Transform;

    // Engine
    pub use crate::pipeline::Engine;

    // Math
    pub use crate::math::mat2::Mat2;
    pub use crate::math::mat3::Mat3;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window & Input
    pub use crate::window::{FrameLimiter, InputState, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{FrameBuffer, Rasterizer, ScanlineRasterizer, Triangle};
}
