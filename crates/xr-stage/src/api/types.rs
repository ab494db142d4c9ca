use serde::{Deserialize, Serialize};

/// Host-issued identifier of a live entity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

/// Host-issued identifier of a hover behavior attached to an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub u32);

/// Host-issued identifier of a loaded asset template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub u32);

/// Edge of a hover interaction reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverEdge {
    /// Pointer or gaze moved onto the surface.
    Enter,
    /// Pointer or gaze left the surface.
    Exit,
}

/// Collider shape hint forwarded to the host with every asset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderHint {
    #[default]
    Box,
    Sphere,
    Mesh,
    None,
}

impl ColliderHint {
    pub fn as_str(self) -> &'static str {
        match self {
            ColliderHint::Box => "box",
            ColliderHint::Sphere => "sphere",
            ColliderHint::Mesh => "mesh",
            ColliderHint::None => "none",
        }
    }
}
