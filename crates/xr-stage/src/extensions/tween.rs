// extensions/tween.rs
//
// Scale tween: a timed interpolation from a start scale to a target.
// Shared by the animation driver's state machine and by hosts that
// advance scale animations in their own update loop.
//
// Usage:
//   let mut tween = ScaleTween::new(current, target, 0.3, Easing::SineOut);
//   tween.advance(dt);
//   node.scale = tween.sample();

use glam::Vec3;
use super::easing::{ease_vec3, Easing};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTween {
    /// Scale at the moment the tween started.
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time in seconds.
    pub elapsed: f32,
    pub easing: Easing,
}

impl ScaleTween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Normalized progress [0, 1]. Zero-length tweens are immediately done.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance time. Returns true once the tween has reached its target.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.is_complete()
    }

    /// Current interpolated scale.
    pub fn sample(&self) -> Vec3 {
        if self.is_complete() {
            return self.to;
        }
        ease_vec3(self.from, self.to, self.progress(), self.easing)
    }
}
