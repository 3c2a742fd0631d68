//! Per-frame vertex transformation and triangle submission.
//!
//! The [`Engine`] owns the pixel buffers and the projection matrix. Each
//! frame it clears both buffers, pushes every mesh vertex through the
//! object -> world -> camera -> clip transform chain, and hands each
//! admitted, flat-shaded triangle to the rasterizer. Because all triangles
//! of all meshes share one depth buffer, far objects are occluded by near
//! ones regardless of draw order.

use crate::colors;
use crate::math::{mat3::Mat3, mat4::Mat4, vec3::Vec3, vec4::Vec4};
use crate::render::{Rasterizer, Renderer, ScanlineRasterizer, Triangle};
use crate::scene::Scene;

const DEFAULT_FOV_DEGREES: f32 = 90.0;
const DEFAULT_Z_NEAR: f32 = 0.05;
const DEFAULT_Z_FAR: f32 = 1000.0;

/// Near-plane visibility test and screen mapping for one clip-space vertex.
///
/// After the transform chain, the homogeneous component holds the vertex's
/// camera-space depth. A vertex is visible only when that depth exceeds 1.0;
/// it is then perspective-divided and its x/y mapped from NDC [-1, 1] to
/// pixel coordinates (y flipped, row 0 is the top). The returned point
/// carries the camera-space depth in z.
///
/// Vertices at or behind depth 1.0 return `None` and are never divided or
/// mapped. Triangles containing such a vertex are dropped whole instead of
/// clipped; replacing this function with a real near-plane clipper is the
/// intended upgrade path.
pub fn project_to_screen(clip: Vec4, width: f32, height: f32) -> Option<Vec3> {
    if clip.w <= 1.0 {
        return None;
    }

    let ndc = clip / clip.w;
    let screen_x = (ndc.x * 0.5 + 0.5) * width;
    let screen_y = (1.0 - (ndc.y * 0.5 + 0.5)) * height;
    Some(Vec3::new(screen_x, screen_y, clip.w))
}

/// The software rendering engine: pixel buffers, projection, rasterizer.
pub struct Engine {
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    projection_matrix: Mat4,
    fov_degrees: f32,
    z_near: f32,
    z_far: f32,
}

impl Engine {
    /// Creates an engine with a 90 degree vertical FOV and a 0.05..1000
    /// depth range.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_projection(
            width,
            height,
            DEFAULT_FOV_DEGREES,
            DEFAULT_Z_NEAR,
            DEFAULT_Z_FAR,
        )
    }

    pub fn with_projection(
        width: u32,
        height: u32,
        fov_degrees: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let aspect_ratio = width as f32 / height as f32;
        Self {
            renderer: Renderer::new(width, height),
            rasterizer: ScanlineRasterizer::new(),
            projection_matrix: Mat4::projection(aspect_ratio, fov_degrees, z_near, z_far),
            fov_degrees,
            z_near,
            z_far,
        }
    }

    /// Rebuilds the buffers and the projection matrix for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.projection_matrix = Mat4::projection(
            width as f32 / height as f32,
            self.fov_degrees,
            self.z_near,
            self.z_far,
        );
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// Returns the rendered frame as bytes (ARGB8888 format).
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Saves the last rendered frame as a PNG.
    pub fn save_snapshot(&self, path: &str) -> Result<(), image::ImageError> {
        self.renderer.save_png(path)
    }

    /// Renders one frame of the scene into the internal buffers.
    pub fn render_frame(&mut self, scene: &Scene) {
        self.renderer.clear(colors::BACKGROUND);
        self.renderer.clear_depth();

        let width = self.renderer.width() as f32;
        let height = self.renderer.height() as f32;
        let view_matrix = scene.camera.transform.view_matrix();
        let projection_matrix = self.projection_matrix;
        let mut fb = self.renderer.as_framebuffer();

        for mesh in &scene.meshes {
            // Object space -> world -> camera -> clip, composed once per
            // mesh; each vertex is one row-vector multiply.
            let transform_chain = mesh.transform.world_matrix() * view_matrix * projection_matrix;

            let projected: Vec<Option<Vec3>> = mesh
                .vertices()
                .iter()
                .map(|&vertex| project_to_screen(Vec4::from(vertex) * transform_chain, width, height))
                .collect();

            let normal_rotation = Mat3::rotation_zxy(mesh.transform.rotation);

            for (face, normal) in mesh.faces().iter().zip(mesh.normals()) {
                // Whole-triangle drop: every vertex must have passed the
                // visibility test.
                let (Some(p0), Some(p1), Some(p2)) = (
                    projected[face.a as usize],
                    projected[face.b as usize],
                    projected[face.c as usize],
                ) else {
                    continue;
                };

                let world_normal = (*normal * normal_rotation).normalize();
                let color = scene.light.shade(world_normal);

                let triangle = Triangle::new(
                    [
                        Vec3::new(p0.x, p0.y, 1.0 / p0.z),
                        Vec3::new(p1.x, p1.y, 1.0 / p1.z),
                        Vec3::new(p2.x, p2.y, 1.0 / p2.z),
                    ],
                    color,
                );
                self.rasterizer.fill_triangle(&triangle, &mut fb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::light::DirectionalLight;
    use crate::mesh::{Face, Mesh};
    use crate::transform::Transform;
    use approx::assert_relative_eq;

    fn unit_triangle_at(z: f32) -> Mesh {
        Mesh::new(
            "tri",
            vec![
                Vec3::new(0.0, 0.0, z),
                Vec3::new(1.0, 0.0, z),
                Vec3::new(0.0, 1.0, z),
            ],
            vec![Face::new(0, 1, 2)],
            Transform::default(),
        )
        .unwrap()
    }

    #[test]
    fn vertex_behind_near_threshold_is_not_projected() {
        assert!(project_to_screen(Vec4::new(0.0, 0.0, 0.0, 0.5), 100.0, 100.0).is_none());
        assert!(project_to_screen(Vec4::new(0.0, 0.0, 0.0, 0.0), 100.0, 100.0).is_none());
        assert!(project_to_screen(Vec4::new(0.0, 0.0, 0.0, -2.0), 100.0, 100.0).is_none());
    }

    #[test]
    fn vertex_at_exactly_unit_depth_is_not_projected() {
        assert!(project_to_screen(Vec4::new(0.3, 0.3, 1.0, 1.0), 100.0, 100.0).is_none());
    }

    #[test]
    fn visible_vertex_maps_ndc_to_pixels_with_y_flip() {
        // NDC (0, 0) lands at the screen center; +y NDC is up, so it maps
        // to a smaller pixel row.
        let center = project_to_screen(Vec4::new(0.0, 0.0, 4.0, 4.0), 200.0, 100.0).unwrap();
        assert_relative_eq!(center.x, 100.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, 50.0, epsilon = 1e-4);
        assert_relative_eq!(center.z, 4.0, epsilon = 1e-6);

        let upper = project_to_screen(Vec4::new(0.0, 2.0, 4.0, 4.0), 200.0, 100.0).unwrap();
        assert!(upper.y < center.y);
    }

    #[test]
    fn unit_triangle_projects_to_expected_screen_coordinates() {
        // 90 degree FOV at aspect 1 gives unit focal length, so a vertex at
        // (x, y, 10) lands at NDC (x/10, y/10).
        let engine = Engine::new(100, 100);
        let mesh = unit_triangle_at(10.0);
        let chain = mesh.transform.world_matrix()
            * Camera::default().transform.view_matrix()
            * engine.projection_matrix;

        let screen: Vec<Vec3> = mesh
            .vertices()
            .iter()
            .map(|&v| project_to_screen(Vec4::from(v) * chain, 100.0, 100.0).unwrap())
            .collect();

        assert_relative_eq!(screen[0].x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(screen[0].y, 50.0, epsilon = 1e-3);
        assert_relative_eq!(screen[1].x, 55.0, epsilon = 1e-3);
        assert_relative_eq!(screen[1].y, 50.0, epsilon = 1e-3);
        assert_relative_eq!(screen[2].x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(screen[2].y, 45.0, epsilon = 1e-3);
        for vertex in &screen {
            assert_relative_eq!(vertex.z, 10.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn rendered_triangle_covers_expected_footprint() {
        let mut engine = Engine::new(100, 100);
        let mut scene = Scene::new(Camera::default(), DirectionalLight::default());
        scene.meshes.push(unit_triangle_at(10.0));
        engine.render_frame(&scene);

        // The triangle's normal faces +Z, straight along the default light
        // direction, so the fill is full white.
        let fb = engine.renderer.as_framebuffer();
        assert_eq!(fb.get_pixel(51, 48), Some(colors::grayscale(255)));
        assert_eq!(fb.get_pixel(50, 49), Some(colors::grayscale(255)));

        // Outside the triangle footprint nothing is drawn.
        assert_eq!(fb.get_pixel(49, 48), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(60, 50), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(51, 52), Some(colors::BACKGROUND));
    }

    #[test]
    fn triangle_with_near_vertex_is_dropped_whole() {
        let mut engine = Engine::new(64, 64);
        let mut scene = Scene::new(Camera::default(), DirectionalLight::default());
        scene.meshes.push(
            Mesh::new(
                "near",
                vec![
                    Vec3::new(0.0, 0.0, 0.5), // camera depth below threshold
                    Vec3::new(1.0, 0.0, 10.0),
                    Vec3::new(0.0, 1.0, 10.0),
                ],
                vec![Face::new(0, 1, 2)],
                Transform::default(),
            )
            .unwrap(),
        );
        engine.render_frame(&scene);

        let fb = engine.renderer.as_framebuffer();
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(fb.get_pixel(x, y), Some(colors::BACKGROUND));
            }
        }
    }

    #[test]
    fn occlusion_is_independent_of_mesh_order() {
        // Two single-triangle meshes covering the same screen area at
        // different depths; the near one must win whichever is listed first.
        let near = unit_triangle_at(5.0);
        let far = unit_triangle_at(10.0);
        let near2 = unit_triangle_at(5.0);
        let far2 = unit_triangle_at(10.0);

        let mut colors_seen = Vec::new();
        for meshes in [vec![near, far], vec![far2, near2]] {
            let mut engine = Engine::new(100, 100);
            let mut scene = Scene::new(Camera::default(), DirectionalLight::default());
            scene.meshes = meshes;
            engine.render_frame(&scene);
            let fb = engine.renderer.as_framebuffer();
            // (51, 48) is inside the far triangle's footprint and inside
            // the larger near triangle's footprint.
            colors_seen.push((fb.get_pixel(51, 48), fb.get_depth(51, 48)));
        }

        assert_eq!(colors_seen[0], colors_seen[1]);
        assert_eq!(colors_seen[0].1, Some(1.0 / 5.0));
    }
}
