//! Ground and sky background planes.
//!
//! Each background is a single-tier [`Model`] holding one flat plane part,
//! large enough that its edges never come into view.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use vista_materials::{MaterialBuilder, MaterialRequest, PaletteCategory};
use vista_mesh::build_plane;

use crate::error::SceneError;
use crate::model::{DrawablePart, LodTier, Model, RenderHook};

/// Edge length of the ground plane in world units.
pub const GROUND_SIZE: f32 = 1_000_000.0;
/// Edge length of the sky plane in world units.
pub const SKY_SIZE: f32 = 100_000.0;

/// Which background plane to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundKind {
    /// Horizontal plane facing up.
    Ground,
    /// Horizontal plane facing down.
    Sky,
}

impl BackgroundKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ground => "GROUND",
            Self::Sky => "SKY",
        }
    }

    fn category(self) -> PaletteCategory {
        match self {
            Self::Ground => PaletteCategory::TerrainDefault,
            Self::Sky => PaletteCategory::Sky,
        }
    }

    /// Rotation about X that lays the +Z-facing plane flat.
    fn tilt(self) -> f32 {
        match self {
            Self::Ground => -FRAC_PI_2,
            Self::Sky => FRAC_PI_2,
        }
    }
}

/// Plane edge lengths per background kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundSizes {
    pub ground: f32,
    pub sky: f32,
}

impl Default for BackgroundSizes {
    fn default() -> Self {
        Self {
            ground: GROUND_SIZE,
            sky: SKY_SIZE,
        }
    }
}

impl BackgroundSizes {
    pub fn size_of(&self, kind: BackgroundKind) -> f32 {
        match kind {
            BackgroundKind::Ground => self.ground,
            BackgroundKind::Sky => self.sky,
        }
    }
}

/// Build the background model for `kind`.
///
/// The plane is unlit and does not write depth. Its part carries
/// [`RenderHook::UpdateUniforms`] and no palette-time tag. Geometry cannot
/// fail; errors come only from `materials`.
pub fn build_background_model(
    kind: BackgroundKind,
    sizes: &BackgroundSizes,
    materials: &mut impl MaterialBuilder,
) -> Result<Model, SceneError> {
    let size = sizes.size_of(kind);

    let mut mesh = build_plane(size, size, 1, 1);
    mesh.center();
    mesh.rotate_x(kind.tilt());

    let material = materials.build(
        MaterialRequest::new(kind.category())
            .with_depth_write(false)
            .with_shading(false),
    )?;

    let part = DrawablePart::new(kind.as_str(), Arc::new(mesh), material)
        .with_before_render(RenderHook::UpdateUniforms);

    log::debug!("Built {} background plane ({size} units)", kind.as_str());

    Ok(Model::new(
        vec![LodTier::new(vec![Arc::new(part)], Vec::new())],
        size,
        Vec3::ZERO,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_materials::{MaterialError, MaterialId, MaterialLibrary};

    fn build(kind: BackgroundKind) -> (Model, MaterialLibrary) {
        let mut lib = MaterialLibrary::new();
        let model = build_background_model(kind, &BackgroundSizes::default(), &mut lib).unwrap();
        (model, lib)
    }

    #[test]
    fn test_background_has_single_tier_with_one_flat() {
        for kind in [BackgroundKind::Ground, BackgroundKind::Sky] {
            let (model, _) = build(kind);
            assert_eq!(model.tier_count(), 1);
            assert_eq!(model.lod[0].flats.len(), 1);
            assert!(model.lod[0].volumes.is_empty());
            assert_eq!(model.center, Vec3::ZERO);
        }
    }

    #[test]
    fn test_max_size_matches_configured_plane() {
        assert_eq!(build(BackgroundKind::Ground).0.max_size, GROUND_SIZE);
        assert_eq!(build(BackgroundKind::Sky).0.max_size, SKY_SIZE);

        let sizes = BackgroundSizes {
            ground: 500.0,
            sky: 50.0,
        };
        let mut lib = MaterialLibrary::new();
        let sky = build_background_model(BackgroundKind::Sky, &sizes, &mut lib).unwrap();
        assert_eq!(sky.max_size, 50.0);
    }

    #[test]
    fn test_ground_faces_up_and_sky_faces_down() {
        let (ground, _) = build(BackgroundKind::Ground);
        let (sky, _) = build(BackgroundKind::Sky);
        for v in &ground.lod[0].flats[0].mesh.vertices {
            assert!((v.normal() - Vec3::Y).length() < 1e-5);
        }
        for v in &sky.lod[0].flats[0].mesh.vertices {
            assert!((v.normal() + Vec3::Y).length() < 1e-5);
        }
    }

    #[test]
    fn test_plane_is_flat_and_centered() {
        let (ground, _) = build(BackgroundKind::Ground);
        let (min, max) = ground.lod[0].flats[0].mesh.bounds().unwrap();
        assert!(min.y.abs() < 1.0 && max.y.abs() < 1.0);
        assert!((max.x - GROUND_SIZE / 2.0).abs() < 1.0);
        assert!((min.z + GROUND_SIZE / 2.0).abs() < 1.0);
    }

    #[test]
    fn test_material_request_is_unlit_without_depth_write() {
        let (ground, lib) = build(BackgroundKind::Ground);
        let req = lib.get(ground.lod[0].flats[0].material).unwrap();
        assert_eq!(req.category, PaletteCategory::TerrainDefault);
        assert!(!req.depth_write);
        assert!(!req.shaded);

        let (sky, lib) = build(BackgroundKind::Sky);
        let req = lib.get(sky.lod[0].flats[0].material).unwrap();
        assert_eq!(req.category, PaletteCategory::Sky);
    }

    #[test]
    fn test_part_is_named_and_hooked() {
        let (sky, _) = build(BackgroundKind::Sky);
        let part = &sky.lod[0].flats[0];
        assert_eq!(part.name, "SKY");
        assert_eq!(part.before_render, Some(RenderHook::UpdateUniforms));
        assert!(part.palette_time.is_none());
    }

    struct FailingBuilder;

    impl MaterialBuilder for FailingBuilder {
        fn build(&mut self, _request: MaterialRequest) -> Result<MaterialId, MaterialError> {
            Err(MaterialError::LibraryFull(0))
        }
    }

    #[test]
    fn test_material_failure_is_propagated() {
        let result = build_background_model(
            BackgroundKind::Ground,
            &BackgroundSizes::default(),
            &mut FailingBuilder,
        );
        assert!(matches!(result, Err(SceneError::Material(_))));
    }
}
