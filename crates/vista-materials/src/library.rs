//! In-process material library: deduplicates requests and hands out stable ids.

use rustc_hash::FxHashMap;

use crate::material::{MaterialBuilder, MaterialError, MaterialId, MaterialRequest};

/// Material store keyed by request. Identical requests share one [`MaterialId`].
#[derive(Debug)]
pub struct MaterialLibrary {
    materials: Vec<MaterialRequest>,
    by_request: FxHashMap<MaterialRequest, MaterialId>,
    limit: usize,
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialLibrary {
    /// Create an empty library that can address the full `u16` id range.
    pub fn new() -> Self {
        Self::with_limit(u16::MAX as usize + 1)
    }

    /// Create an empty library holding at most `limit` distinct materials
    /// (capped to the `u16` id range).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            materials: Vec::new(),
            by_request: FxHashMap::default(),
            limit: limit.min(u16::MAX as usize + 1),
        }
    }

    /// Number of distinct materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Request that produced `id`, if `id` belongs to this library.
    pub fn get(&self, id: MaterialId) -> Option<&MaterialRequest> {
        self.materials.get(id.0 as usize)
    }

    /// Id previously assigned to `request`.
    pub fn id_of(&self, request: &MaterialRequest) -> Option<MaterialId> {
        self.by_request.get(request).copied()
    }
}

impl MaterialBuilder for MaterialLibrary {
    fn build(&mut self, request: MaterialRequest) -> Result<MaterialId, MaterialError> {
        if let Some(id) = self.id_of(&request) {
            return Ok(id);
        }
        if self.materials.len() >= self.limit {
            return Err(MaterialError::LibraryFull(self.materials.len()));
        }

        let id = MaterialId(self.materials.len() as u16);
        self.materials.push(request);
        self.by_request.insert(request, id);
        log::debug!("Registered material {id:?} for {request:?}");
        Ok(id)
    }
}
