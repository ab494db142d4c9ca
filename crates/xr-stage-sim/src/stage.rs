// stage.rs
//
// Simulated scene graph: a flat list of nodes plus a scale tween per node.
// Tweens are last-write-wins: a new request replaces the running one and
// starts from the node's live scale.
//
// Usage:
//   let mut stage = Stage::new(16);
//   let id = stage.spawn(&template, transform, "drone.glb0")?;
//   stage.animate_scale(id, Vec3::splat(0.5), 0.3, Easing::SineOut);
//   stage.tick(dt);

use std::collections::HashMap;
use glam::Vec3;
use xr_stage::{
    AssetTemplate, Easing, InstanceId, InstantiationError, ScaleAnimator, ScaleTween, TemplateId,
    Transform,
};

/// A node registered in the simulated scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct StageNode {
    pub id: InstanceId,
    pub name: String,
    pub template: TemplateId,
    pub position: Vec3,
    /// Live local scale, updated by tweens.
    pub scale: Vec3,
}

pub struct Stage {
    nodes: Vec<StageNode>,
    tweens: HashMap<InstanceId, ScaleTween>,
    capacity: usize,
    next_id: u32,
}

impl Stage {
    /// Stage accepting at most `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity.min(256)),
            tweens: HashMap::new(),
            capacity,
            next_id: 1,
        }
    }

    /// Register a node. Fails when full or when `name` is already taken.
    pub fn spawn(
        &mut self,
        template: &AssetTemplate,
        transform: Transform,
        name: &str,
    ) -> Result<InstanceId, InstantiationError> {
        if self.nodes.len() >= self.capacity {
            return Err(InstantiationError::CapacityExceeded {
                name: name.to_string(),
                limit: self.capacity,
            });
        }
        if self.find_by_name(name).is_some() {
            return Err(InstantiationError::Rejected {
                name: name.to_string(),
                reason: "name already in use".into(),
            });
        }

        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.nodes.push(StageNode {
            id,
            name: name.to_string(),
            template: template.id,
            position: transform.position,
            scale: transform.scale,
        });
        Ok(id)
    }

    pub fn get(&self, id: InstanceId) -> Option<&StageNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&StageNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &StageNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Running tween on `id`, if any.
    pub fn tween(&self, id: InstanceId) -> Option<&ScaleTween> {
        self.tweens.get(&id)
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Advance all tweens and write the sampled scales to their nodes.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut completed = Vec::new();

        for (id, tween) in self.tweens.iter_mut() {
            let done = tween.advance(dt);
            if let Some(node) = self.nodes.iter_mut().find(|n| n.id == *id) {
                node.scale = tween.sample();
            }
            if done {
                completed.push(*id);
            }
        }

        for id in &completed {
            self.tweens.remove(id);
        }
        completed.len()
    }
}

impl ScaleAnimator for Stage {
    fn local_scale(&self, instance: InstanceId) -> Option<Vec3> {
        self.get(instance).map(|n| n.scale)
    }

    fn animate_scale(&mut self, instance: InstanceId, target: Vec3, duration: f32, easing: Easing) {
        let Some(from) = self.local_scale(instance) else {
            log::warn!("animate_scale on unknown instance {:?}", instance);
            return;
        };
        self.tweens.insert(instance, ScaleTween::new(from, target, duration, easing));
    }
}
