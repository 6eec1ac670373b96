//! Multi-tier model descriptors.
//!
//! A [`Model`] is built once and then shared read-only (behind an `Arc`) by
//! every LOD selector that draws it. Tier 0 is the most detailed.

use std::sync::Arc;

use glam::Vec3;
use vista_materials::MaterialId;
use vista_mesh::MeshData;

use crate::palette::PaletteTime;

/// Hook the render pipeline runs on a part right before drawing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderHook {
    /// Refresh the per-frame shader uniforms (palette colours, time, fog).
    UpdateUniforms,
}

/// A renderable unit: a mesh, its material, and an optional palette-time tag.
#[derive(Clone, Debug)]
pub struct DrawablePart {
    /// Debug name.
    pub name: String,
    /// Geometry, shared with any other part drawing the same mesh.
    pub mesh: Arc<MeshData>,
    /// Material assigned by the material builder.
    pub material: MaterialId,
    /// Only draw while the palette is at this time. `None` draws always.
    pub palette_time: Option<PaletteTime>,
    /// Hook to run before each draw.
    pub before_render: Option<RenderHook>,
}

impl DrawablePart {
    pub fn new(name: impl Into<String>, mesh: Arc<MeshData>, material: MaterialId) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            palette_time: None,
            before_render: None,
        }
    }

    /// Restrict the part to a single palette time.
    pub fn with_palette_time(mut self, time: PaletteTime) -> Self {
        self.palette_time = Some(time);
        self
    }

    pub fn with_before_render(mut self, hook: RenderHook) -> Self {
        self.before_render = Some(hook);
        self
    }
}

/// One level of detail: flat (billboard-style) parts and volumetric parts.
#[derive(Clone, Debug, Default)]
pub struct LodTier {
    pub flats: Vec<Arc<DrawablePart>>,
    pub volumes: Vec<Arc<DrawablePart>>,
}

impl LodTier {
    pub fn new(flats: Vec<Arc<DrawablePart>>, volumes: Vec<Arc<DrawablePart>>) -> Self {
        Self { flats, volumes }
    }

    /// Whether the tier has nothing to draw in either category.
    pub fn is_empty(&self) -> bool {
        self.flats.is_empty() && self.volumes.is_empty()
    }
}

/// Immutable multi-resolution model.
#[derive(Clone, Debug)]
pub struct Model {
    /// Tiers ordered from most detailed (index 0) to coarsest.
    pub lod: Vec<LodTier>,
    /// Conservative world-space size used for projected-size tests. Not a
    /// tight bounding radius.
    pub max_size: f32,
    /// Local-space pivot.
    pub center: Vec3,
}

impl Model {
    pub fn new(lod: Vec<LodTier>, max_size: f32, center: Vec3) -> Self {
        debug_assert!(max_size >= 0.0, "max_size must be non-negative");
        Self {
            lod,
            max_size,
            center,
        }
    }

    /// Number of LOD tiers.
    pub fn tier_count(&self) -> usize {
        self.lod.len()
    }

    /// Tier at `index`, or `None` past the coarsest tier.
    pub fn tier(&self, index: usize) -> Option<&LodTier> {
        self.lod.get(index)
    }
}
