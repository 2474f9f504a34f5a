//! Audio module: fire-and-forget sound cues with a fallback resolver.
pub mod events;
pub mod plugin;
pub mod resolver;
pub mod systems;

pub use plugin::AudioPlugin;
