//! Palette time and the part filtering predicate.

use serde::{Deserialize, Serialize};

use crate::model::DrawablePart;

/// Time of day a palette represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteTime {
    Day,
    Night,
}

/// A part matches when it is untagged or tagged with exactly `time`.
pub fn matches_palette_time(part: &DrawablePart, time: PaletteTime) -> bool {
    part.palette_time.is_none_or(|t| t == time)
}

/// Source of the current palette time and of the part filter.
pub trait PaletteClock {
    /// Current palette time.
    fn time(&self) -> PaletteTime;

    /// Whether `part` should be drawn at `time`.
    fn matches(&self, part: &DrawablePart, time: PaletteTime) -> bool {
        matches_palette_time(part, time)
    }
}

/// A named colour palette at a fixed time of day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub time: PaletteTime,
}

impl Palette {
    pub fn new(name: impl Into<String>, time: PaletteTime) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }
}

impl PaletteClock for Palette {
    fn time(&self) -> PaletteTime {
        self.time
    }
}
