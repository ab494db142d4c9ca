//! Interaction binder: attaches hover surfaces and wires their edges to the
//! animation driver.

use std::cell::RefCell;
use std::rc::Rc;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::api::host::{HoverSurface, ScaleAnimator};
use crate::api::types::{BehaviorId, HoverEdge, InstanceId};
use crate::components::instance::EntityInstance;
use crate::extensions::easing::Easing;
use crate::systems::animation::{AnimationDriver, AnimationTransition};

/// Hover feedback shared by every bound instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Scale while hovered.
    pub enter_scale: Vec3,
    /// Scale after the hover ends.
    pub exit_scale: Vec3,
    /// Transition duration in seconds, both directions.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            enter_scale: Vec3::splat(0.5),
            exit_scale: Vec3::splat(0.4),
            duration: 0.3,
            easing: Easing::SineOut,
        }
    }
}

impl HoverConfig {
    /// The transition issued on `edge`.
    pub fn transition(&self, edge: HoverEdge) -> AnimationTransition {
        let target = match edge {
            HoverEdge::Enter => self.enter_scale,
            HoverEdge::Exit => self.exit_scale,
        };
        AnimationTransition::new(target, self.duration, self.easing)
    }
}

/// Record of one attached hover behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverBinding {
    pub instance: InstanceId,
    pub behavior: BehaviorId,
}

/// Attaches hover behaviors and registers enter/exit callbacks.
///
/// Callbacks are unconditional: every edge issues a fresh transition, and
/// the driver's last-write-wins rule settles rapid oscillation.
pub struct InteractionBinder {
    config: HoverConfig,
    driver: Rc<RefCell<AnimationDriver>>,
    bindings: Vec<HoverBinding>,
}

impl InteractionBinder {
    pub fn new(config: HoverConfig, driver: Rc<RefCell<AnimationDriver>>) -> Self {
        Self {
            config,
            driver,
            bindings: Vec::new(),
        }
    }

    /// Attach a hover surface to `instance` and wire both edges.
    pub fn bind<S>(&mut self, surface: &S, instance: &EntityInstance) -> BehaviorId
    where
        S: HoverSurface + ?Sized,
    {
        let behavior = surface.attach_hover_behavior(instance.id);
        self.driver.borrow_mut().track(instance.id, instance.initial.scale);

        for edge in [HoverEdge::Enter, HoverEdge::Exit] {
            let transition = self.config.transition(edge);
            let driver = Rc::clone(&self.driver);
            let id = instance.id;
            surface.on_hover(
                behavior,
                edge,
                Box::new(move |animator: &mut dyn ScaleAnimator| {
                    driver.borrow_mut().animate_to(animator, id, &transition);
                }),
            );
        }

        self.bindings.push(HoverBinding {
            instance: instance.id,
            behavior,
        });
        log::debug!("{}: hover behavior {:?} attached", instance.name, behavior);
        behavior
    }

    pub fn bindings(&self) -> &[HoverBinding] {
        &self.bindings
    }
}
