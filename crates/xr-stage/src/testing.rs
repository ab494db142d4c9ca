//! Recording host double shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use glam::Vec3;
use crate::api::host::{AssetSource, HoverCallback, HoverSurface, Host, ScaleAnimator, SceneGraph};
use crate::api::types::{BehaviorId, ColliderHint, HoverEdge, InstanceId, TemplateId};
use crate::assets::resolver::AssetTemplate;
use crate::components::instance::Transform;
use crate::core::error::{AssetLoadError, InstantiationError};
use crate::extensions::easing::Easing;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Load(String),
    Create(String),
    Attach(InstanceId),
    Animate(InstanceId, Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IssuedAnimation {
    pub instance: InstanceId,
    pub target: Vec3,
    pub duration: f32,
    pub easing: Easing,
}

#[derive(Default)]
pub(crate) struct RecordingHost {
    pub calls: RefCell<Vec<Call>>,
    /// Asset ids whose load fails.
    pub missing: HashSet<String>,
    /// Instance names the scene graph refuses.
    pub rejected: HashSet<String>,
    /// Asset id whose load ends the session before returning.
    pub end_session_on: Option<String>,
    /// `local_scale` always answers `None`.
    pub hide_scales: bool,
    ended: Cell<bool>,
    next_template: Cell<u32>,
    pub nodes: RefCell<Vec<(InstanceId, String, Transform)>>,
    scales: RefCell<HashMap<InstanceId, Vec3>>,
    pub animations: Vec<IssuedAnimation>,
    behaviors: RefCell<HashMap<BehaviorId, InstanceId>>,
    callbacks: RefCell<HashMap<(BehaviorId, HoverEdge), Vec<HoverCallback>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing(mut self, asset_id: &str) -> Self {
        self.missing.insert(asset_id.to_string());
        self
    }

    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    pub fn ending_on(mut self, asset_id: &str) -> Self {
        self.end_session_on = Some(asset_id.to_string());
        self
    }

    pub fn without_scale_readback(mut self) -> Self {
        self.hide_scales = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn set_scale(&mut self, instance: InstanceId, scale: Vec3) {
        self.scales.get_mut().insert(instance, scale);
    }

    /// Run every callback registered for `edge` on the behavior attached to `instance`.
    pub fn fire(&mut self, instance: InstanceId, edge: HoverEdge) {
        let behaviors: Vec<BehaviorId> = self
            .behaviors
            .get_mut()
            .iter()
            .filter(|(_, i)| **i == instance)
            .map(|(b, _)| *b)
            .collect();
        for behavior in behaviors {
            let mut callbacks = self.callbacks.get_mut().remove(&(behavior, edge)).unwrap_or_default();
            for cb in callbacks.iter_mut() {
                let animator: &mut dyn ScaleAnimator = &mut *self;
                cb(animator);
            }
            self.callbacks.get_mut().insert((behavior, edge), callbacks);
        }
    }

    pub fn callback_count(&self, edge: HoverEdge) -> usize {
        self.callbacks
            .borrow()
            .iter()
            .filter(|((_, e), _)| *e == edge)
            .map(|(_, cbs)| cbs.len())
            .sum()
    }
}

impl AssetSource for RecordingHost {
    async fn load_asset(&self, asset_id: &str, _hint: ColliderHint) -> Result<AssetTemplate, AssetLoadError> {
        self.calls.borrow_mut().push(Call::Load(asset_id.to_string()));
        futures_lite::future::yield_now().await;
        if self.end_session_on.as_deref() == Some(asset_id) {
            self.ended.set(true);
        }
        if self.missing.contains(asset_id) {
            return Err(AssetLoadError::NotFound { asset_id: asset_id.to_string() });
        }
        let id = self.next_template.get();
        self.next_template.set(id + 1);
        Ok(AssetTemplate::new(TemplateId(id), asset_id))
    }
}

impl SceneGraph for RecordingHost {
    fn create_instance(
        &self,
        _template: &AssetTemplate,
        transform: Transform,
        name: &str,
    ) -> Result<InstanceId, InstantiationError> {
        self.calls.borrow_mut().push(Call::Create(name.to_string()));
        if self.rejected.contains(name) {
            return Err(InstantiationError::Rejected {
                name: name.to_string(),
                reason: "test rejection".into(),
            });
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = InstanceId(nodes.len() as u32 + 1);
        nodes.push((id, name.to_string(), transform));
        self.scales.borrow_mut().insert(id, transform.scale);
        Ok(id)
    }
}

impl HoverSurface for RecordingHost {
    fn attach_hover_behavior(&self, instance: InstanceId) -> BehaviorId {
        self.calls.borrow_mut().push(Call::Attach(instance));
        let mut behaviors = self.behaviors.borrow_mut();
        let id = BehaviorId(behaviors.len() as u32 + 1);
        behaviors.insert(id, instance);
        id
    }

    fn on_hover(&self, behavior: BehaviorId, edge: HoverEdge, callback: HoverCallback) {
        self.callbacks.borrow_mut().entry((behavior, edge)).or_default().push(callback);
    }
}

impl ScaleAnimator for RecordingHost {
    fn local_scale(&self, instance: InstanceId) -> Option<Vec3> {
        if self.hide_scales {
            return None;
        }
        self.scales.borrow().get(&instance).copied()
    }

    fn animate_scale(&mut self, instance: InstanceId, target: Vec3, duration: f32, easing: Easing) {
        self.calls.borrow_mut().push(Call::Animate(instance, target));
        self.animations.push(IssuedAnimation { instance, target, duration, easing });
    }
}

impl Host for RecordingHost {
    fn is_active(&self) -> bool {
        !self.ended.get()
    }
}
