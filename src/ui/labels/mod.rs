// src/ui/labels/mod.rs
//
// Proximity labels above each street animal: name, favorite-trick hint, and
// a mood bar. Labels appear only while Ralph is nearby.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::NpcLabelPlugin;
