//! Flat rectangular plane builder.

use glam::Vec3;

use crate::mesh::{MeshData, MeshVertex};

/// Build a `width × height` plane in the XY plane facing +Z, centred on the
/// origin and subdivided into a grid of segments.
///
/// Segment counts of zero are treated as one. Rows are emitted top to bottom
/// (+Y to −Y) with UV `v = 1` on the top row.
pub fn build_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let grid_x = width_segments.max(1);
    let grid_y = height_segments.max(1);
    let row = grid_x + 1;

    let segment_w = width / grid_x as f32;
    let segment_h = height / grid_y as f32;
    let half_w = width * 0.5;
    let half_h = height * 0.5;

    let mut vertices = Vec::with_capacity((row * (grid_y + 1)) as usize);
    for iy in 0..=grid_y {
        let y = iy as f32 * segment_h - half_h;
        for ix in 0..=grid_x {
            let x = ix as f32 * segment_w - half_w;
            vertices.push(MeshVertex::new(
                Vec3::new(x, -y, 0.0),
                Vec3::Z,
                [ix as f32 / grid_x as f32, 1.0 - iy as f32 / grid_y as f32],
            ));
        }
    }

    let mut indices = Vec::with_capacity((grid_x * grid_y * 6) as usize);
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData::new(vertices, indices)
}
