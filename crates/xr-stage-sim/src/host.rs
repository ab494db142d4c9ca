use std::cell::{Cell, Ref, RefCell};
use std::collections::HashMap;
use glam::Vec3;
use xr_stage::{
    AssetLoadError, AssetSource, AssetTemplate, BehaviorId, ColliderHint, Easing, Host,
    HoverCallback, HoverEdge, HoverSurface, InstanceId, InstantiationError, ScaleAnimator,
    SceneGraph, TemplateId, Transform,
};
use crate::input::HoverEvent;
use crate::library::AssetLibrary;
use crate::stage::Stage;

/// Default node capacity of a simulated session.
pub const DEFAULT_CAPACITY: usize = 64;

struct SimBehavior {
    instance: InstanceId,
    on_enter: Vec<HoverCallback>,
    on_exit: Vec<HoverCallback>,
}

/// In-process host: loads from an [`AssetLibrary`], places nodes on a
/// [`Stage`] and dispatches hover edges to registered callbacks.
///
/// All state sits behind cells so a runner can dispatch hover input and
/// advance tweens while a provisioning future still borrows the host.
pub struct SimHost {
    library: AssetLibrary,
    stage: RefCell<Stage>,
    behaviors: RefCell<HashMap<BehaviorId, SimBehavior>>,
    next_behavior: Cell<u32>,
    next_template: Cell<u32>,
    /// Asset ids in the order the host was asked to load them.
    load_log: RefCell<Vec<String>>,
    active: Cell<bool>,
    /// Asset id whose load outlives the session.
    end_during: Option<String>,
}

impl SimHost {
    pub fn new(library: AssetLibrary) -> Self {
        Self::with_capacity(library, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(library: AssetLibrary, capacity: usize) -> Self {
        Self {
            library,
            stage: RefCell::new(Stage::new(capacity)),
            behaviors: RefCell::new(HashMap::new()),
            next_behavior: Cell::new(1),
            next_template: Cell::new(1),
            load_log: RefCell::new(Vec::new()),
            active: Cell::new(true),
            end_during: None,
        }
    }

    /// End the session while `asset_id` is loading.
    pub fn ending_during(mut self, asset_id: impl Into<String>) -> Self {
        self.end_during = Some(asset_id.into());
        self
    }

    pub fn end_session(&self) {
        self.active.set(false);
    }

    pub fn stage(&self) -> Ref<'_, Stage> {
        self.stage.borrow()
    }

    /// Advance stage tweens by `dt`. Returns how many completed.
    pub fn advance(&self, dt: f32) -> usize {
        self.stage.borrow_mut().tick(dt)
    }

    pub fn library(&self) -> &AssetLibrary {
        &self.library
    }

    pub fn load_log(&self) -> Vec<String> {
        self.load_log.borrow().clone()
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.borrow().len()
    }

    /// Run the callbacks registered for `event`. Returns how many ran.
    pub fn dispatch(&self, event: HoverEvent) -> usize {
        let mut behaviors = self.behaviors.borrow_mut();
        let mut stage = self.stage.borrow_mut();
        let mut ran = 0;
        for behavior in behaviors.values_mut().filter(|b| b.instance == event.instance) {
            let callbacks = match event.edge {
                HoverEdge::Enter => &mut behavior.on_enter,
                HoverEdge::Exit => &mut behavior.on_exit,
            };
            for callback in callbacks.iter_mut() {
                let animator: &mut dyn ScaleAnimator = &mut *stage;
                callback(animator);
                ran += 1;
            }
        }
        if ran == 0 {
            log::debug!("hover {:?} on {:?} has no listeners", event.edge, event.instance);
        }
        ran
    }
}

impl AssetSource for SimHost {
    async fn load_asset(&self, asset_id: &str, hint: ColliderHint) -> Result<AssetTemplate, AssetLoadError> {
        log::debug!("host: loading {} (collider {})", asset_id, hint.as_str());
        self.load_log.borrow_mut().push(asset_id.to_string());

        let entry = self.library.get(asset_id).cloned();
        let latency = entry.as_ref().map_or(0, |e| e.latency);
        for _ in 0..latency {
            futures_lite::future::yield_now().await;
        }
        if self.end_during.as_deref() == Some(asset_id) {
            self.active.set(false);
        }

        let entry = entry.ok_or_else(|| AssetLoadError::NotFound {
            asset_id: asset_id.to_string(),
        })?;
        if let Some(reason) = entry.corrupt {
            return Err(AssetLoadError::Parse {
                asset_id: asset_id.to_string(),
                reason,
            });
        }

        let id = self.next_template.get();
        self.next_template.set(id + 1);
        Ok(AssetTemplate::new(TemplateId(id), asset_id))
    }
}

impl SceneGraph for SimHost {
    fn create_instance(
        &self,
        template: &AssetTemplate,
        transform: Transform,
        name: &str,
    ) -> Result<InstanceId, InstantiationError> {
        self.stage.borrow_mut().spawn(template, transform, name)
    }
}

impl HoverSurface for SimHost {
    fn attach_hover_behavior(&self, instance: InstanceId) -> BehaviorId {
        let id = BehaviorId(self.next_behavior.get());
        self.next_behavior.set(id.0 + 1);
        self.behaviors.borrow_mut().insert(
            id,
            SimBehavior {
                instance,
                on_enter: Vec::new(),
                on_exit: Vec::new(),
            },
        );
        id
    }

    fn on_hover(&self, behavior: BehaviorId, edge: HoverEdge, callback: HoverCallback) {
        let mut behaviors = self.behaviors.borrow_mut();
        let Some(entry) = behaviors.get_mut(&behavior) else {
            log::warn!("on_hover for unknown behavior {:?}", behavior);
            return;
        };
        match edge {
            HoverEdge::Enter => entry.on_enter.push(callback),
            HoverEdge::Exit => entry.on_exit.push(callback),
        }
    }
}

impl ScaleAnimator for SimHost {
    fn local_scale(&self, instance: InstanceId) -> Option<Vec3> {
        self.stage.borrow().local_scale(instance)
    }

    fn animate_scale(&mut self, instance: InstanceId, target: Vec3, duration: f32, easing: Easing) {
        self.stage.get_mut().animate_scale(instance, target, duration, easing);
    }
}

impl Host for SimHost {
    fn is_active(&self) -> bool {
        self.active.get()
    }
}
