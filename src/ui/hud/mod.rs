// src/ui/hud/mod.rs
//
// Fixed HUD: challenge pill with countdown and streak, floating praise
// toasts, the minimap, the help overlay, and the settings hotkeys.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::HudPlugin;
