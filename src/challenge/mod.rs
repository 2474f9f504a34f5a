//! Challenge module: the time-boxed "do this trick near that animal" loop.
pub mod plugin;
pub mod state;
pub mod systems;

pub use plugin::ChallengePlugin;
