//! NPC module: the street roster, approval state, mood decay, and call-seek.
pub mod components;
pub mod plugin;
pub mod roster;
pub mod systems;

pub use plugin::NpcPlugin;
