//! Components and resources used by the world module.
use bevy::prelude::*;

/// Orbit camera circling a fixed look target, storing its spherical state.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub look_sensitivity: f32,
}

impl OrbitCamera {
    pub fn new(yaw: f32, pitch: f32, distance: f32, target: Vec3) -> Self {
        Self {
            yaw,
            pitch,
            distance,
            target,
            look_sensitivity: 0.2,
        }
    }
}

/// In-flight cinematic dolly, tweening the orbit distance in and back out.
#[derive(Resource, Debug, Default)]
pub struct CameraDolly {
    pub tween: Option<DollyTween>,
}

#[derive(Debug, Clone, Copy)]
pub struct DollyTween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
    /// The quick push-in is followed by a slower pull-out.
    pub then_out: bool,
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_its_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=10 {
            let value = ease_in_out(i as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }
}
