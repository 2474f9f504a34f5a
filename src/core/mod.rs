//! Core module housing simulation timing and persisted player settings.
pub mod plugin;
pub mod settings;

pub use plugin::CorePlugin;
