//! Indexed triangle mesh stored on the CPU until the renderer uploads it.

use glam::{Quat, Vec3};

/// A single mesh vertex: position, normal and texture coordinates.
///
/// Plain-old-data with a fixed 32-byte layout so renderers can upload it as is.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinates in `[0, 1]`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 32]);

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Indexed triangle list. Triangles wind counter-clockwise when seen from the
/// side their normals point to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds of all vertex positions, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position();
        Some(self.vertices.iter().skip(1).fold((first, first), |(min, max), v| {
            let p = v.position();
            (min.min(p), max.max(p))
        }))
    }

    /// Translate every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (v.position() + offset).to_array();
        }
    }

    /// Move the mesh so the centre of its bounding box sits at the origin.
    pub fn center(&mut self) {
        if let Some((min, max)) = self.bounds() {
            self.translate(-(min + max) * 0.5);
        }
    }

    /// Rotate positions and normals by `angle` radians about the X axis.
    pub fn rotate_x(&mut self, angle: f32) {
        self.rotate(Quat::from_rotation_x(angle));
    }

    pub fn rotate(&mut self, rotation: Quat) {
        for v in &mut self.vertices {
            v.position = (rotation * v.position()).to_array();
            v.normal = (rotation * v.normal()).normalize_or_zero().to_array();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn triangle() -> MeshData {
        MeshData::new(
            vec![
                MeshVertex::new(Vec3::new(1.0, 1.0, 0.0), Vec3::Z, [0.0, 0.0]),
                MeshVertex::new(Vec3::new(3.0, 1.0, 0.0), Vec3::Z, [1.0, 0.0]),
                MeshVertex::new(Vec3::new(1.0, 5.0, 0.0), Vec3::Z, [0.0, 1.0]),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert!(MeshData::default().bounds().is_none());
    }

    #[test]
    fn test_bounds_cover_all_vertices() {
        let (min, max) = triangle().bounds().unwrap();
        assert_eq!(min, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(max, Vec3::new(3.0, 5.0, 0.0));
    }

    #[test]
    fn test_center_moves_bounds_to_origin() {
        let mut mesh = triangle();
        mesh.center();
        let (min, max) = mesh.bounds().unwrap();
        assert!(((min + max) * 0.5).length() < 1e-6);
        assert!((max - min - Vec3::new(2.0, 4.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotate_x_turns_normals() {
        let mut mesh = triangle();
        mesh.rotate_x(-FRAC_PI_2);
        for v in &mesh.vertices {
            assert!((v.normal() - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_counts() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
