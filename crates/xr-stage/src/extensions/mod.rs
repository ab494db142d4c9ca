// extensions/mod.rs
//
// Interpolation helpers shared by the core and by host implementations.
// Decoupled from instances and hosts.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp_vec3, ease_vec3};
pub use tween::ScaleTween;
