//! Collaborator contracts a hosting runtime must fulfill.
//!
//! The core never renders, parses assets or talks to a remote viewer. It
//! drives a host through these traits, one per concern, so tests can fake
//! any of them independently.
//!
//! Everything the provisioning pipeline calls takes `&self`: a pending load
//! must not lock the host away from its hover dispatch.

use glam::Vec3;
use crate::api::types::{BehaviorId, ColliderHint, HoverEdge, InstanceId};
use crate::assets::resolver::AssetTemplate;
use crate::components::instance::Transform;
use crate::core::error::{AssetLoadError, InstantiationError};
use crate::extensions::easing::Easing;

/// Callback run by the host when a hover edge fires.
/// Receives the host's animator so it can issue a transition.
pub type HoverCallback = Box<dyn FnMut(&mut dyn ScaleAnimator)>;

/// Asynchronous asset loading.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    /// Fetch and parse `asset_id`, suspending the caller until done.
    async fn load_asset(
        &self,
        asset_id: &str,
        hint: ColliderHint,
    ) -> Result<AssetTemplate, AssetLoadError>;
}

/// Scene-graph node allocation.
pub trait SceneGraph {
    /// Create and register a node from `template`. Synchronous.
    fn create_instance(
        &self,
        template: &AssetTemplate,
        transform: Transform,
        name: &str,
    ) -> Result<InstanceId, InstantiationError>;
}

/// Hover-capable interaction surfaces.
pub trait HoverSurface {
    /// Attach a hover surface to `instance`.
    fn attach_hover_behavior(&self, instance: InstanceId) -> BehaviorId;

    /// Register `callback` for `edge` on a previously attached behavior.
    fn on_hover(&self, behavior: BehaviorId, edge: HoverEdge, callback: HoverCallback);
}

/// Fire-and-forget scale animation, advanced by the host's update loop.
pub trait ScaleAnimator {
    /// Live local scale of `instance`, if the host knows it.
    fn local_scale(&self, instance: InstanceId) -> Option<Vec3>;

    /// Start animating toward `target`, replacing any running scale animation.
    fn animate_scale(&mut self, instance: InstanceId, target: Vec3, duration: f32, easing: Easing);
}

/// A full session host.
pub trait Host: AssetSource + SceneGraph + HoverSurface + ScaleAnimator {
    /// Whether the session is still running. Checked after every suspension.
    fn is_active(&self) -> bool {
        true
    }
}
