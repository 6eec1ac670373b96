//! Core material types: [`PaletteCategory`], [`MaterialRequest`] and [`MaterialId`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// PaletteCategory
// ---------------------------------------------------------------------------

/// Palette slot a surface takes its colour from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteCategory {
    /// Untextured ground.
    TerrainDefault,
    /// Sky dome / sky plane.
    Sky,
    /// Water surfaces.
    Water,
    /// Anything without a dedicated slot.
    Default,
}

// ---------------------------------------------------------------------------
// MaterialRequest
// ---------------------------------------------------------------------------

/// Everything a material builder needs to produce a surface material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRequest {
    /// Palette slot to colour the surface from.
    pub category: PaletteCategory,
    /// Whether the surface writes to the depth buffer.
    pub depth_write: bool,
    /// Lit (`true`) or flat unlit (`false`) shading.
    pub shaded: bool,
}

impl MaterialRequest {
    /// Opaque, depth-writing, lit material for `category`.
    pub fn new(category: PaletteCategory) -> Self {
        Self {
            category,
            depth_write: true,
            shaded: true,
        }
    }

    pub fn with_depth_write(mut self, depth_write: bool) -> Self {
        self.depth_write = depth_write;
        self
    }

    pub fn with_shading(mut self, shaded: bool) -> Self {
        self.shaded = shaded;
        self
    }
}

// ---------------------------------------------------------------------------
// MaterialId
// ---------------------------------------------------------------------------

/// Handle to a material owned by a [`MaterialBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

// ---------------------------------------------------------------------------
// MaterialError
// ---------------------------------------------------------------------------

/// Errors returned by material builders.
#[derive(Debug, Error)]
pub enum MaterialError {
    /// Every [`MaterialId`] value is already in use.
    #[error("material library is full ({0} materials)")]
    LibraryFull(usize),
}

// ---------------------------------------------------------------------------
// MaterialBuilder
// ---------------------------------------------------------------------------

/// Produces renderable materials for scene builders.
///
/// Implemented by the renderer's material manager; [`crate::MaterialLibrary`]
/// is the in-process implementation.
pub trait MaterialBuilder {
    /// Build (or reuse) a material satisfying `request`.
    fn build(&mut self, request: MaterialRequest) -> Result<MaterialId, MaterialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_are_opaque_and_lit() {
        let req = MaterialRequest::new(PaletteCategory::Water);
        assert!(req.depth_write);
        assert!(req.shaded);
    }

    #[test]
    fn test_request_builders_override_flags() {
        let req = MaterialRequest::new(PaletteCategory::Sky)
            .with_depth_write(false)
            .with_shading(false);
        assert_eq!(req.category, PaletteCategory::Sky);
        assert!(!req.depth_write);
        assert!(!req.shaded);
    }

    #[test]
    fn test_request_parses_from_ron() {
        let req: MaterialRequest =
            ron::from_str("(category: TerrainDefault, depth_write: false, shaded: false)").unwrap();
        assert_eq!(
            req,
            MaterialRequest::new(PaletteCategory::TerrainDefault)
                .with_depth_write(false)
                .with_shading(false)
        );
    }
}
