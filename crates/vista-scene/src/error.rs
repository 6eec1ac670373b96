//! Scene construction error types.

use vista_materials::MaterialError;

/// Errors that can occur while building scene models.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The material builder could not produce a material for a part.
    #[error("failed to build material: {0}")]
    Material(#[from] MaterialError),
}
