pub mod animation;
pub mod instantiate;
pub mod interaction;
