//! Projected-size helpers shared by tier selection.

use glam::Vec3;
use vista_render::{Camera, Projection};
use vista_scene::Model;

/// Width in world units of the perspective frustum slice at depth `distance`.
///
/// Returns `None` for non-perspective cameras.
pub fn visible_width_at_distance(camera: &Camera, distance: f32) -> Option<f32> {
    match camera.projection {
        Projection::Perspective {
            fov_y,
            aspect_ratio,
        } => Some(aspect_ratio * 2.0 * (fov_y * 0.5).tan() * distance),
        Projection::Orthographic { .. } => None,
    }
}

/// [`visible_width_at_distance`] at the camera's distance to `point`.
pub fn visible_width_at(camera: &Camera, point: Vec3) -> Option<f32> {
    visible_width_at_distance(camera, camera.position.distance(point))
}

/// Conservative world-space size of `model` under a possibly non-uniform,
/// possibly mirrored `scale`. Uses the largest axis magnitude.
pub fn model_extent(model: &Model, scale: Vec3) -> f32 {
    model.max_size * scale.abs().max_element()
}
