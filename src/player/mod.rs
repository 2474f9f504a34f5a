//! Player module: Ralph's movement, trick state machine, and pose blending.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
