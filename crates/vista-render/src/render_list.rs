//! Per-purpose draw lists and the registry that names them.
//!
//! Every frame the renderer clears its lists, LOD selectors append one
//! [`DrawCommand`] per visible instance and category, and the pipeline walks
//! the lists with [`RenderList::draws`]. Commands own nothing but `Arc`
//! handles to model parts, so a list never outlives the frame's intent.

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashMap;
use vista_scene::DrawablePart;

/// World placement of a model instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for InstanceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl InstanceTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Local-to-world matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// One instance's contribution to a list: the parts of a single LOD tier that
/// passed the palette filter, placed with the instance transform.
#[derive(Clone, Debug)]
pub struct DrawCommand {
    /// LOD tier the parts were taken from.
    pub tier: usize,
    pub transform: InstanceTransform,
    pub parts: Vec<Arc<DrawablePart>>,
}

/// An ordered list of draw commands for one render purpose.
#[derive(Debug, Default)]
pub struct RenderList {
    commands: Vec<DrawCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Remove all commands, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Total number of parts across all commands.
    pub fn part_count(&self) -> usize {
        self.commands.iter().map(|c| c.parts.len()).sum()
    }

    /// Every part in submission order with its world matrix.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawablePart, Mat4)> + '_ {
        self.commands.iter().flat_map(|command| {
            let world = command.transform.matrix();
            command.parts.iter().map(move |part| (part.as_ref(), world))
        })
    }
}

/// String-keyed registry of live render lists.
///
/// Ids are chosen by the renderer. Consumers only look lists up; a missing id
/// means "this frame has no such output".
#[derive(Debug, Default)]
pub struct RenderTargets {
    lists: FxHashMap<String, RenderList>,
}

impl RenderTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty list under `id`, replacing any existing one.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.lists.insert(id.into(), RenderList::new());
    }

    /// Unregister `id`, returning its list.
    pub fn remove(&mut self, id: &str) -> Option<RenderList> {
        self.lists.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lists.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&RenderList> {
        self.lists.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut RenderList> {
        self.lists.get_mut(id)
    }

    /// Clear every registered list. Call once at the start of each frame.
    pub fn clear_lists(&mut self) {
        for list in self.lists.values_mut() {
            list.clear();
        }
    }

    /// Number of registered lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_materials::MaterialId;
    use vista_mesh::MeshData;

    fn part(name: &str) -> Arc<DrawablePart> {
        Arc::new(DrawablePart::new(
            name,
            Arc::new(MeshData::default()),
            MaterialId(0),
        ))
    }

    fn command(names: &[&str], translation: Vec3) -> DrawCommand {
        DrawCommand {
            tier: 0,
            transform: InstanceTransform::from_translation(translation),
            parts: names.iter().map(|n| part(n)).collect(),
        }
    }

    #[test]
    fn test_empty_list() {
        let list = RenderList::new();
        assert!(list.is_empty());
        assert_eq!(list.part_count(), 0);
        assert_eq!(list.draws().count(), 0);
    }

    #[test]
    fn test_draws_flatten_commands_in_order() {
        let mut list = RenderList::new();
        list.push(command(&["a", "b"], Vec3::X));
        list.push(command(&["c"], Vec3::Y));

        let draws: Vec<_> = list.draws().map(|(p, m)| (p.name.clone(), m)).collect();
        assert_eq!(draws.len(), 3);
        assert_eq!(draws[0].0, "a");
        assert_eq!(draws[2].0, "c");
        assert_eq!(draws[1].1.col(3).truncate(), Vec3::X);
        assert_eq!(draws[2].1.col(3).truncate(), Vec3::Y);
        assert_eq!(list.part_count(), 3);
    }

    #[test]
    fn test_clear_keeps_registration() {
        let mut targets = RenderTargets::new();
        targets.insert("flats");
        targets
            .get_mut("flats")
            .unwrap()
            .push(command(&["a"], Vec3::ZERO));
        targets.clear_lists();
        assert!(targets.contains("flats"));
        assert!(targets.get("flats").unwrap().is_empty());
    }

    #[test]
    fn test_missing_id_is_none() {
        let mut targets = RenderTargets::new();
        targets.insert("volumes");
        assert!(targets.get("flats").is_none());
        assert!(targets.get_mut("flats").is_none());
        assert!(targets.remove("volumes").is_some());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_transform_matrix_applies_scale_rotation_translation() {
        let t = InstanceTransform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            Vec3::splat(2.0),
        );
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(10.0, 2.0, 0.0)).length() < 1e-5);
    }
}
