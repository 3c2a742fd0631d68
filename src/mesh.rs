//! Triangle mesh data and OBJ ingestion.
//!
//! A [`Mesh`] owns its object-space vertices, triangle index triples, one
//! face normal per triangle, and a [`Transform`]. Normals are computed once
//! at construction; meshes are treated as static after load, so they are
//! never recomputed.

use std::fmt;
use std::path::Path;

use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// A triangle as three zero-based indices into the mesh vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

pub const CUBE_NUM_VERTICES: usize = 8;
pub const CUBE_NUM_FACES: usize = 12;

pub const CUBE_VERTICES: [Vec3; CUBE_NUM_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

pub const CUBE_FACES: [Face; CUBE_NUM_FACES] = [
    // Front face
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // Right face
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // Back face
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // Left face
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // Top face
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // Bottom face
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];

/// Errors produced while loading a mesh from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ parser rejected the file.
    Obj(tobj::LoadError),
    /// A face referenced a vertex index outside the vertex list.
    InvalidIndex { index: u32, vertex_count: usize },
    /// The file contained no triangles.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(err) => write!(f, "failed to parse OBJ file: {err}"),
            LoadError::InvalidIndex {
                index,
                vertex_count,
            } => write!(
                f,
                "face references vertex {index} but the mesh has only {vertex_count} vertices"
            ),
            LoadError::Empty => write!(f, "mesh contains no triangles"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(err: tobj::LoadError) -> Self {
        LoadError::Obj(err)
    }
}

/// A triangle mesh with per-face normals and a world transform.
///
/// Invariant, enforced at construction: every face index is in range, and
/// `normals` has exactly one entry per face, in face order. The transform
/// pipeline relies on this and performs no bounds checking of its own.
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    normals: Vec<Vec3>,
    pub transform: Transform,
}

impl Mesh {
    /// Builds a mesh from raw vertex and face data, computing face normals.
    ///
    /// Returns [`LoadError::InvalidIndex`] if any face references a missing
    /// vertex, so invalid index data never reaches the render pipeline.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
        transform: Transform,
    ) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for face in &faces {
            for index in [face.a, face.b, face.c] {
                if index as usize >= vertex_count {
                    return Err(LoadError::InvalidIndex {
                        index,
                        vertex_count,
                    });
                }
            }
        }

        let normals = compute_face_normals(&vertices, &faces);
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            normals,
            transform,
        })
    }

    /// The built-in unit cube, centered on the origin.
    pub fn cube(transform: Transform) -> Self {
        // Cube data is statically valid, so the index check cannot fail.
        match Self::new("cube", CUBE_VERTICES.to_vec(), CUBE_FACES.to_vec(), transform) {
            Ok(mesh) => mesh,
            Err(_) => unreachable!("built-in cube data is valid"),
        }
    }

    /// Loads a mesh from an OBJ file, merging all objects in the file.
    ///
    /// Faces are triangulated by the parser; materials are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P, transform: Transform) -> Result<Self, LoadError> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mesh".to_string());

        let (models, _materials) = tobj::load_obj(
            path.as_ref(),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in &models {
            let base = vertices.len() as u32;
            for position in model.mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(position[0], position[1], position[2]));
            }
            for triangle in model.mesh.indices.chunks_exact(3) {
                faces.push(Face::new(
                    base + triangle[0],
                    base + triangle[1],
                    base + triangle[2],
                ));
            }
        }

        if faces.is_empty() {
            return Err(LoadError::Empty);
        }

        Self::new(name, vertices, faces, transform)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Object-space unit normals, one per face, in face order.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }
}

/// One outward unit normal per face: `normalize(cross(v1 - v0, v2 - v0))`.
fn compute_face_normals(vertices: &[Vec3], faces: &[Face]) -> Vec<Vec3> {
    faces
        .iter()
        .map(|face| {
            let v0 = vertices[face.a as usize];
            let v1 = vertices[face.b as usize];
            let v2 = vertices[face.c as usize];
            (v1 - v0).cross(v2 - v0).normalize()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_triangle_normal_points_along_z() {
        let mesh = Mesh::new(
            "tri",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Face::new(0, 1, 2)],
            Transform::default(),
        )
        .unwrap();

        let normal = mesh.normals()[0];
        assert_relative_eq!(normal.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(normal.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(normal.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn one_normal_per_face_in_face_order() {
        let mesh = Mesh::cube(Transform::default());
        assert_eq!(mesh.normals().len(), mesh.faces().len());
    }

    #[test]
    fn cube_normals_point_outward() {
        let mesh = Mesh::cube(Transform::default());
        // Each face normal should point away from the cube center, i.e.
        // along the direction from the origin to the face centroid.
        for (face, normal) in mesh.faces().iter().zip(mesh.normals()) {
            let centroid = (mesh.vertices()[face.a as usize]
                + mesh.vertices()[face.b as usize]
                + mesh.vertices()[face.c as usize])
                / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let result = Mesh::new(
            "bad",
            vec![Vec3::ZERO, Vec3::ONE],
            vec![Face::new(0, 1, 2)],
            Transform::default(),
        );
        assert!(matches!(
            result,
            Err(LoadError::InvalidIndex {
                index: 2,
                vertex_count: 2
            })
        ));
    }
}
