//! Screen-size-based LOD selection and render-list composition.
//!
//! A model's tier is picked from how much of the visible frustum width the
//! model covers: every halving of that fraction moves one tier coarser, and
//! the selector's bias delays (positive) or hastens (negative) the switch.

use std::sync::Arc;

use vista_render::{Camera, DrawCommand, InstanceTransform, RenderList, RenderTargets};
use vista_scene::{DrawablePart, Model, PaletteClock, PaletteTime};

use crate::projection::{model_extent, visible_width_at};

/// Bias applied by [`LodSelector::with_default_bias`].
pub const DEFAULT_LOD_BIAS: i32 = 3;

/// Tier index for a model covering `relative_size` of the visible width.
///
/// Sizes of 1 or more (and NaN) select tier 0. A size of exactly 0 selects
/// `usize::MAX`, which is past the end of every model.
pub fn lod_level_for_relative_size(relative_size: f32, bias: i32) -> usize {
    if relative_size >= 1.0 || relative_size.is_nan() {
        return 0;
    }
    if relative_size <= 0.0 {
        return usize::MAX;
    }
    let steps = (-relative_size.log2()).floor() as i64;
    (steps - i64::from(bias)).max(0) as usize
}

/// What [`LodSelector::add_to_render_list`] did for one instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composition {
    /// The selected tier does not exist; nothing was appended.
    Culled { tier: usize },
    /// The tier exists. Each category holds the number of parts appended, or
    /// `None` when no command was appended for it.
    Placed {
        tier: usize,
        flats: Option<usize>,
        volumes: Option<usize>,
    },
}

impl Composition {
    /// Selected tier index.
    pub fn tier(&self) -> usize {
        match *self {
            Self::Culled { tier } | Self::Placed { tier, .. } => tier,
        }
    }

    pub fn is_culled(&self) -> bool {
        matches!(self, Self::Culled { .. })
    }
}

/// Draws instances of one shared model at the tier their on-screen size calls for.
#[derive(Clone, Debug)]
pub struct LodSelector {
    model: Arc<Model>,
    bias: i32,
}

impl LodSelector {
    /// Create a selector for `model` with a fixed `bias`.
    pub fn new(model: Arc<Model>, bias: i32) -> Self {
        Self { model, bias }
    }

    /// Create a selector using [`DEFAULT_LOD_BIAS`].
    pub fn with_default_bias(model: Arc<Model>) -> Self {
        Self::new(model, DEFAULT_LOD_BIAS)
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn bias(&self) -> i32 {
        self.bias
    }

    /// Tier index for an instance placed at `transform`, seen from `camera`.
    ///
    /// Non-perspective cameras always get tier 0, as do instances so close to
    /// the camera that the visible width collapses to zero.
    pub fn lod_level(&self, transform: &InstanceTransform, camera: &Camera) -> usize {
        let Some(width) = visible_width_at(camera, transform.translation) else {
            return 0;
        };
        if !width.is_finite() || width <= f32::EPSILON {
            return 0;
        }
        let relative_size = model_extent(&self.model, transform.scale) / width;
        lod_level_for_relative_size(relative_size, self.bias)
    }

    /// Append this instance's parts for the current frame to the flats and
    /// volumes lists.
    ///
    /// Each category is handled on its own: if `targets` has no list under its
    /// id, or the selected tier has no parts in it, the category is skipped.
    /// Otherwise one [`DrawCommand`] holding the parts that match the palette
    /// time is appended. Lists are never cleared here.
    pub fn add_to_render_list(
        &self,
        transform: InstanceTransform,
        camera: &Camera,
        palette: &impl PaletteClock,
        flats_id: &str,
        volumes_id: &str,
        targets: &mut RenderTargets,
    ) -> Composition {
        let tier_index = self.lod_level(&transform, camera);
        let Some(tier) = self.model.tier(tier_index) else {
            log::trace!(
                "LOD tier {tier_index} out of range ({} tiers), culling instance at {}",
                self.model.tier_count(),
                transform.translation
            );
            return Composition::Culled { tier: tier_index };
        };

        let time = palette.time();
        let flats = compose(
            tier_index,
            &tier.flats,
            targets.get_mut(flats_id),
            transform,
            palette,
            time,
        );
        let volumes = compose(
            tier_index,
            &tier.volumes,
            targets.get_mut(volumes_id),
            transform,
            palette,
            time,
        );

        Composition::Placed {
            tier: tier_index,
            flats,
            volumes,
        }
    }
}

/// Append one category's filtered parts to `list`, returning the part count.
fn compose(
    tier: usize,
    parts: &[Arc<DrawablePart>],
    list: Option<&mut RenderList>,
    transform: InstanceTransform,
    palette: &impl PaletteClock,
    time: PaletteTime,
) -> Option<usize> {
    if parts.is_empty() {
        return None;
    }
    let list = list?;

    let visible: Vec<Arc<DrawablePart>> = parts
        .iter()
        .filter(|part| palette.matches(part, time))
        .cloned()
        .collect();
    let count = visible.len();

    list.push(DrawCommand {
        tier,
        transform,
        parts: visible,
    });
    Some(count)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
