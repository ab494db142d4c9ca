use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Declarative definition of one entity to provision.
/// Immutable once the store is built; maps to exactly one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Asset identifier handed to the host loader (e.g. "drone.glb").
    pub asset_id: String,
    /// Initial local position.
    #[serde(default)]
    pub position: Vec3,
    /// Initial local scale.
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl EntityDescriptor {
    /// Descriptor at the origin with unit scale.
    pub fn new(asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Deterministic instance name for this descriptor at `ordinal`.
    pub fn instance_name(&self, ordinal: usize) -> String {
        format!("{}{}", self.asset_id, ordinal)
    }
}
