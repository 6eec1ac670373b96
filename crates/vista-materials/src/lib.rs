//! Material requests and the material-build collaborator used by scene builders.

mod library;
mod material;

pub use library::MaterialLibrary;
pub use material::{MaterialBuilder, MaterialError, MaterialId, MaterialRequest, PaletteCategory};
