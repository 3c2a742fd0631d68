//! Linear algebra for the rendering pipeline.
//!
//! # Convention
//!
//! This library uses **row vectors** with **row-major** matrices:
//! - `v * M` applies the transform to the vector
//! - `v * M1 * M2` applies M1 first, then M2
//! - Translation lives in the **last row** of a `Mat4`
//!
//! The whole pipeline depends on this ordering; the projection matrix layout
//! in [`mat4::Mat4::projection`] is only correct when paired with it.

pub mod mat2;
pub mod mat3;
pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
