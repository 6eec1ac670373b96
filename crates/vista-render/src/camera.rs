//! Viewing cameras as seen by LOD selection: a position and a projection.

use glam::Vec3;

/// A viewing camera in world space.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Projection parameters.
    pub projection: Projection,
}

/// Projection type for the camera.
#[derive(Debug, Clone)]
pub enum Projection {
    /// Perspective projection for 3D scenes.
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f32,
        /// Width / height.
        aspect_ratio: f32,
    },
    /// Orthographic projection for map and 2D views.
    Orthographic {
        /// Half-width of the view volume in world units.
        half_width: f32,
        /// Half-height of the view volume in world units.
        half_height: f32,
    },
}

impl Camera {
    /// Perspective camera at `position` with a field of view given in degrees.
    pub fn perspective_degrees(position: Vec3, fov_degrees: f32, aspect_ratio: f32) -> Self {
        Self {
            position,
            projection: Projection::Perspective {
                fov_y: fov_degrees.to_radians(),
                aspect_ratio,
            },
        }
    }

    /// Orthographic camera at `position`.
    pub fn orthographic(position: Vec3, half_width: f32, half_height: f32) -> Self {
        Self {
            position,
            projection: Projection::Orthographic {
                half_width,
                half_height,
            },
        }
    }

    /// Whether projected size shrinks with distance for this camera.
    pub fn is_perspective(&self) -> bool {
        matches!(self.projection, Projection::Perspective { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_degrees_converts_to_radians() {
        let camera = Camera::perspective_degrees(Vec3::ZERO, 60.0, 1.5);
        match camera.projection {
            Projection::Perspective {
                fov_y,
                aspect_ratio,
            } => {
                assert!((fov_y - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
                assert_eq!(aspect_ratio, 1.5);
            }
            Projection::Orthographic { .. } => panic!("expected perspective projection"),
        }
        assert!(camera.is_perspective());
    }

    #[test]
    fn test_orthographic_is_not_perspective() {
        let camera = Camera::orthographic(Vec3::new(0.0, 100.0, 0.0), 50.0, 25.0);
        assert!(!camera.is_perspective());
        assert_eq!(camera.position.y, 100.0);
        assert!(matches!(
            camera.projection,
            Projection::Orthographic { half_width, half_height }
                if half_width == 50.0 && half_height == 25.0
        ));
    }
}
