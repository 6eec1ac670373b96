//! Render-side collaborators of the LOD compositor: cameras, instance
//! transforms, and the string-keyed registry of per-purpose draw lists.

pub mod camera;
pub mod render_list;

pub use camera::{Camera, Projection};
pub use render_list::{DrawCommand, InstanceTransform, RenderList, RenderTargets};
