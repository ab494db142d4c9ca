//! Animation driver: issues scale transitions and tracks each instance's
//! explicit `Idle` / `Animating` state.
//!
//! The host owns the visual interpolation; the driver mirrors it so the
//! last-write-wins rule can be checked without a host animation engine.

use std::collections::HashMap;
use glam::Vec3;
use crate::api::host::ScaleAnimator;
use crate::api::types::InstanceId;
use crate::extensions::easing::Easing;
use crate::extensions::tween::ScaleTween;

/// A timed scale transition request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTransition {
    pub target_scale: Vec3,
    pub duration_seconds: f32,
    pub easing: Easing,
}

impl AnimationTransition {
    pub fn new(target_scale: Vec3, duration_seconds: f32, easing: Easing) -> Self {
        Self {
            target_scale,
            duration_seconds,
            easing,
        }
    }

    /// Transition to an isotropic scale.
    pub fn uniform(scale: f32, duration_seconds: f32, easing: Easing) -> Self {
        Self::new(Vec3::splat(scale), duration_seconds, easing)
    }
}

/// Per-instance animation state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    /// One in-flight transition; a new request replaces it.
    Animating(ScaleTween),
}

impl AnimationState {
    pub fn is_animating(&self) -> bool {
        matches!(self, AnimationState::Animating(_))
    }
}

/// Issues transitions to the host and tracks per-instance state.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    states: HashMap<InstanceId, AnimationState>,
    /// Last settled scale per instance: the initial scale until a
    /// transition completes, then that transition's target.
    resting: HashMap<InstanceId, Vec3>,
    issued: usize,
    superseded: usize,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the settled scale of a newly bound instance.
    pub fn track(&mut self, instance: InstanceId, scale: Vec3) {
        self.resting.insert(instance, scale);
    }

    /// Start `transition` on `instance`, abandoning any in-flight one.
    ///
    /// The new transition starts from the live scale: the host's value if it
    /// reports one, otherwise the driver's own sample of the abandoned
    /// transition, otherwise the last settled scale. An instance the driver
    /// has never seen starts at the target.
    pub fn animate_to<A>(&mut self, animator: &mut A, instance: InstanceId, transition: &AnimationTransition)
    where
        A: ScaleAnimator + ?Sized,
    {
        let from = animator
            .local_scale(instance)
            .or_else(|| self.sample(instance))
            .or_else(|| self.resting.get(&instance).copied())
            .unwrap_or(transition.target_scale);

        let tween = ScaleTween::new(
            from,
            transition.target_scale,
            transition.duration_seconds,
            transition.easing,
        );
        let previous = self.states.insert(instance, AnimationState::Animating(tween));
        if matches!(previous, Some(AnimationState::Animating(_))) {
            self.superseded += 1;
            log::debug!("{:?}: superseding in-flight transition", instance);
        }
        self.issued += 1;

        log::debug!(
            "{:?}: scale {:?} -> {:?} over {}s ({:?})",
            instance, from, transition.target_scale, transition.duration_seconds, transition.easing
        );
        animator.animate_scale(
            instance,
            transition.target_scale,
            transition.duration_seconds,
            transition.easing,
        );
    }

    /// Advance every in-flight transition; finished ones return to `Idle`.
    /// Returns how many finished this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut finished = 0;
        for (id, state) in self.states.iter_mut() {
            if let AnimationState::Animating(tween) = state {
                if tween.advance(dt) {
                    self.resting.insert(*id, tween.to);
                    *state = AnimationState::Idle;
                    finished += 1;
                }
            }
        }
        finished
    }

    /// Current state of `instance` (`Idle` if never animated).
    pub fn state(&self, instance: InstanceId) -> AnimationState {
        self.states.get(&instance).copied().unwrap_or_default()
    }

    /// The driver's view of the in-flight scale, if animating.
    pub fn sample(&self, instance: InstanceId) -> Option<Vec3> {
        match self.states.get(&instance) {
            Some(AnimationState::Animating(tween)) => Some(tween.sample()),
            _ => None,
        }
    }

    /// Number of instances currently animating.
    pub fn active_count(&self) -> usize {
        self.states.values().filter(|s| s.is_animating()).count()
    }

    /// Total transitions issued.
    pub fn issued(&self) -> usize {
        self.issued
    }

    /// Transitions that replaced an in-flight one.
    pub fn superseded(&self) -> usize {
        self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    fn grow() -> AnimationTransition {
        AnimationTransition::uniform(0.5, 0.3, Easing::SineOut)
    }

    fn shrink() -> AnimationTransition {
        AnimationTransition::uniform(0.4, 0.3, Easing::SineOut)
    }

    #[test]
    fn idle_until_animated() {
        let driver = AnimationDriver::new();
        assert_eq!(driver.state(InstanceId(1)), AnimationState::Idle);
        assert_eq!(driver.active_count(), 0);
    }

    #[test]
    fn animating_returns_to_idle_on_completion() {
        let mut host = RecordingHost::new();
        let id = InstanceId(1);
        host.set_scale(id, Vec3::ONE);
        let mut driver = AnimationDriver::new();

        driver.animate_to(&mut host, id, &grow());
        assert!(driver.state(id).is_animating());

        assert_eq!(driver.tick(0.1), 0);
        assert!(driver.state(id).is_animating());
        assert_eq!(driver.tick(0.25), 1);
        assert_eq!(driver.state(id), AnimationState::Idle);
        assert_eq!(host.animations.len(), 1);
    }

    #[test]
    fn superseding_restarts_from_live_scale() {
        let mut host = RecordingHost::new();
        let id = InstanceId(1);
        host.set_scale(id, Vec3::ONE);
        let mut driver = AnimationDriver::new();

        driver.animate_to(&mut host, id, &grow());
        // Host interpolated part of the way before the exit edge arrived.
        host.set_scale(id, Vec3::splat(0.8));
        driver.animate_to(&mut host, id, &shrink());

        assert_eq!(driver.active_count(), 1);
        assert_eq!(driver.superseded(), 1);
        match driver.state(id) {
            AnimationState::Animating(tween) => {
                assert_eq!(tween.from, Vec3::splat(0.8));
                assert_eq!(tween.to, Vec3::splat(0.4));
                assert_eq!(tween.elapsed, 0.0);
            }
            AnimationState::Idle => panic!("expected an in-flight transition"),
        }
        let last = host.animations.last().unwrap();
        assert_eq!(last.target, Vec3::splat(0.4));
    }

    fn from_scale(driver: &AnimationDriver, id: InstanceId) -> Vec3 {
        match driver.state(id) {
            AnimationState::Animating(tween) => tween.from,
            AnimationState::Idle => panic!("expected an in-flight transition"),
        }
    }

    #[test]
    fn without_host_scale_starts_from_tracked_scale() {
        let mut host = RecordingHost::new().without_scale_readback();
        let id = InstanceId(9);
        let mut driver = AnimationDriver::new();
        driver.track(id, Vec3::ONE);

        driver.animate_to(&mut host, id, &grow());
        assert_eq!(from_scale(&driver, id), Vec3::ONE);

        // Superseding mid-flight continues from the driver's own sample.
        driver.tick(0.15);
        let sampled = driver.sample(id).unwrap();
        assert!(sampled.x < 1.0 && sampled.x > 0.5);
        driver.animate_to(&mut host, id, &shrink());
        assert_eq!(from_scale(&driver, id), sampled);
    }

    #[test]
    fn completed_transition_becomes_resting_scale() {
        let mut host = RecordingHost::new().without_scale_readback();
        let id = InstanceId(9);
        let mut driver = AnimationDriver::new();
        driver.track(id, Vec3::ONE);

        driver.animate_to(&mut host, id, &grow());
        driver.tick(0.3);
        driver.animate_to(&mut host, id, &shrink());
        assert_eq!(from_scale(&driver, id), Vec3::splat(0.5));
    }

    #[test]
    fn untracked_instance_without_host_scale_starts_at_target() {
        let mut host = RecordingHost::new().without_scale_readback();
        let mut driver = AnimationDriver::new();
        driver.animate_to(&mut host, InstanceId(3), &grow());
        assert_eq!(from_scale(&driver, InstanceId(3)), Vec3::splat(0.5));
    }

    #[test]
    fn instances_are_independent() {
        let mut host = RecordingHost::new();
        let mut driver = AnimationDriver::new();

        driver.animate_to(&mut host, InstanceId(1), &grow());
        driver.animate_to(&mut host, InstanceId(2), &grow());

        assert_eq!(driver.active_count(), 2);
        assert_eq!(driver.superseded(), 0);
        assert_eq!(driver.issued(), 2);
    }
}
