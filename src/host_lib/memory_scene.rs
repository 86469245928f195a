// src/host_lib/memory_scene.rs

use std::collections::HashMap;
use glam::{DMat4, DVec3};
use crate::host_lib::host_types::{BodyId, HostError, PatternHost};

#[derive(Clone, Debug)]
pub struct SceneBody {
    pub id: BodyId,
    pub name: String,
    pub copied_from: Option<BodyId>,
    pub transform: DMat4,
}

impl SceneBody {
    pub fn position(&self) -> DVec3 {
        self.transform.w_axis.truncate()
    }
}

/// In-memory stand-in for a CAD document: bodies keyed by id, each with its
/// world transform.
#[derive(Debug, Default)]
pub struct MemoryScene {
    bodies: HashMap<BodyId, SceneBody>,
    next_id: BodyId,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, name: &str, transform: DMat4) -> BodyId {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.insert(
            id,
            SceneBody { id, name: name.to_string(), copied_from: None, transform },
        );
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&SceneBody> {
        self.bodies.get(&id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Copies of `source`, oldest first.
    pub fn copies_of(&self, source: BodyId) -> Vec<&SceneBody> {
        let mut copies: Vec<&SceneBody> = self
            .bodies
            .values()
            .filter(|body| body.copied_from == Some(source))
            .collect();
        copies.sort_by_key(|body| body.id);
        copies
    }

    fn body_mut(&mut self, id: BodyId) -> Result<&mut SceneBody, HostError> {
        self.bodies
            .get_mut(&id)
            .ok_or_else(|| HostError::UnknownBody(id.to_string()))
    }
}

impl PatternHost for MemoryScene {
    type Body = BodyId;

    fn copy_to_scene(&mut self, source: &BodyId) -> Result<BodyId, HostError> {
        let original = self
            .bodies
            .get(source)
            .ok_or_else(|| HostError::UnknownBody(source.to_string()))?;
        let name = format!("{} ({})", original.name, self.next_id);
        let transform = original.transform;

        let id = self.add_body(&name, transform);
        if let Some(copy) = self.bodies.get_mut(&id) {
            copy.copied_from = Some(*source);
        }
        Ok(id)
    }

    fn apply_transform(&mut self, body: &BodyId, transform: &DMat4) -> Result<(), HostError> {
        let target = self.body_mut(*body)?;
        target.transform = *transform * target.transform;
        Ok(())
    }

    fn remove(&mut self, body: &BodyId) -> Result<(), HostError> {
        self.bodies
            .remove(body)
            .map(|_| ())
            .ok_or_else(|| HostError::UnknownBody(body.to_string()))
    }
}
