//! Events broadcast by the approval resolver toward the presentation layer.
use bevy::prelude::{Message, Vec3};

/// Request for a confetti burst of `count` particles.
#[derive(Message, Debug, Clone, Copy)]
pub struct BurstEvent {
    pub position: Vec3,
    pub count: u32,
}

/// Transient praise popup near Ralph.
#[derive(Message, Debug, Clone)]
pub struct ToastEvent {
    pub position: Vec3,
    pub text: String,
}

/// Asks the camera for the quick in-and-out cinematic dolly.
#[derive(Message, Debug, Clone, Copy)]
pub struct DollyEvent;
