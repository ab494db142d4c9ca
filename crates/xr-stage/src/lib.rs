pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod assets;
pub mod extensions;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types at crate root for convenience
pub use api::app::StageApp;
pub use api::host::{AssetSource, Host, HoverCallback, HoverSurface, ScaleAnimator, SceneGraph};
pub use api::types::{BehaviorId, ColliderHint, HoverEdge, InstanceId, TemplateId};
pub use assets::manifest::StageManifest;
pub use assets::resolver::{AssetContainer, AssetTemplate};
pub use components::descriptor::EntityDescriptor;
pub use components::instance::{EntityInstance, Transform};
pub use core::error::{AssetLoadError, InstantiationError, ProvisionError};
pub use core::pipeline::{ProvisionFailure, ProvisionReport, Provisioner};
pub use core::store::EntityDescriptorStore;
pub use systems::animation::{AnimationDriver, AnimationState, AnimationTransition};
pub use systems::instantiate::instantiate;
pub use systems::interaction::{HoverBinding, HoverConfig, InteractionBinder};

pub use extensions::{Easing, ease_vec3, lerp_vec3, ScaleTween};
