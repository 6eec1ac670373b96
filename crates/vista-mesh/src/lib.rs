//! CPU-side mesh data and procedural builders for scene geometry.

pub mod mesh;
pub mod plane;

pub use mesh::{MeshData, MeshVertex};
pub use plane::build_plane;
