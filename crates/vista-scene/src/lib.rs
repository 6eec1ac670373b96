//! Scene models: multi-tier LOD model descriptors, palette-time filtering, and
//! procedural background geometry.

mod background;
mod error;
mod model;
mod palette;

pub use background::{
    BackgroundKind, BackgroundSizes, GROUND_SIZE, SKY_SIZE, build_background_model,
};
pub use error::SceneError;
pub use model::{DrawablePart, LodTier, Model, RenderHook};
pub use palette::{Palette, PaletteClock, PaletteTime, matches_palette_time};
