//! Interaction module: the trick/approval resolver and the success streak.
pub mod config;
pub mod events;
pub mod plugin;
pub mod streak;
pub mod systems;

pub use config::GameplayConfig;
pub use plugin::InteractionPlugin;
