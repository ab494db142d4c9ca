use serde::{Deserialize, Serialize};
use crate::api::types::ColliderHint;
use crate::components::descriptor::EntityDescriptor;
use crate::core::store::EntityDescriptorStore;
use crate::systems::interaction::HoverConfig;

/// Everything a session provisions, loaded from JSON at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageManifest {
    /// Entities in declaration order.
    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
    /// Hover feedback applied to every entity.
    #[serde(default)]
    pub hover: HoverConfig,
    /// Collider hint forwarded with each asset load.
    #[serde(default)]
    pub collider_hint: ColliderHint,
}

impl StageManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for StageManifest {
    /// The two-drone stage.
    fn default() -> Self {
        Self {
            entities: EntityDescriptorStore::drone_pair().iter().cloned().collect(),
            hover: HoverConfig::default(),
            collider_hint: ColliderHint::Box,
        }
    }
}
