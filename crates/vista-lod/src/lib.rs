//! Level-of-detail management: screen-size-based tier selection and
//! composition of the selected tier into per-purpose render lists.

mod projection;
mod selector;

pub use projection::{model_extent, visible_width_at, visible_width_at_distance};
pub use selector::{Composition, DEFAULT_LOD_BIAS, LodSelector, lod_level_for_relative_size};
