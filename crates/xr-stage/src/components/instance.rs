use glam::Vec3;
use crate::api::types::InstanceId;
use crate::assets::resolver::AssetTemplate;

/// Local transform handed to the host at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A live entity created by the host from a template and a descriptor.
/// The host owns the underlying node; this is the core's record of it.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityInstance {
    /// Host-issued identifier.
    pub id: InstanceId,
    /// Deterministic name, `{asset_id}{ordinal}`.
    pub name: String,
    /// Position of the originating descriptor in the store.
    pub ordinal: usize,
    /// Template the instance was created from.
    pub template: AssetTemplate,
    /// Transform applied at creation.
    pub initial: Transform,
}
