//! Effects module: confetti bursts and footstep dust.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::EffectsPlugin;
