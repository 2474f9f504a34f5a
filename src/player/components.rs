//! Components and resources for the player character.
use bevy::prelude::*;

/// A trick Ralph performs on command. NPCs each desire one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trick {
    Sit,
    Lie,
    Roll,
}

impl Trick {
    pub const ALL: [Trick; 3] = [Trick::Sit, Trick::Lie, Trick::Roll];

    /// The fixed cycle an NPC's desired trick advances through on success.
    pub fn cycle(self) -> Self {
        match self {
            Self::Sit => Self::Lie,
            Self::Lie => Self::Roll,
            Self::Roll => Self::Sit,
        }
    }

    /// How long the pose is held before Ralph returns to neutral.
    pub fn duration_secs(self) -> f32 {
        match self {
            Self::Sit => 1.2,
            Self::Lie => 1.5,
            Self::Roll => 1.6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sit => "Sit",
            Self::Lie => "Lie",
            Self::Roll => "Roll",
        }
    }

    pub fn key_hint(self) -> char {
        match self {
            Self::Sit => 'S',
            Self::Lie => 'L',
            Self::Roll => 'R',
        }
    }
}

/// Root component for the player character. The entity's `Transform` owns the
/// world position; `yaw` is the smoothed heading applied to it each frame.
#[derive(Component, Debug, Default)]
pub struct Ralph {
    pub yaw: f32,
    pub moving: bool,
}

/// Child group carrying the dog's visible body. Pose blending rotates and
/// lowers this group without disturbing the root transform the resolver reads.
#[derive(Component, Debug, Default)]
pub struct RalphBody {
    pub pitch: f32,
    pub roll: f32,
    pub height: f32,
}

/// The currently held trick, if any. Exactly one trick is active at a time; a
/// new trick replaces an in-progress one immediately.
#[derive(Component, Debug, Default)]
pub struct TrickState {
    active: Option<ActiveTrick>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTrick {
    trick: Trick,
    remaining: f32,
}

impl TrickState {
    /// Enters `trick`, replacing any active one. No queueing.
    pub fn begin(&mut self, trick: Trick) {
        self.active = Some(ActiveTrick {
            trick,
            remaining: trick.duration_secs(),
        });
    }

    /// Counts down the active trick, reverting to neutral once its duration
    /// has fully elapsed. Returns true on the frame the trick ends.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.remaining -= delta_secs;
        if active.remaining <= 0.0 {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<Trick> {
        self.active.map(|a| a.trick)
    }
}

/// Single-direction input combined additively with the keyboard each frame.
///
/// Nothing in this crate writes it; it is the injection point for a platform
/// touch layer (on-screen buttons) to steer Ralph without synthesizing key
/// events. It stays `Stop` on desktop.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MobileDirection {
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl MobileDirection {
    pub fn vector(self) -> Vec2 {
        match self {
            Self::Stop => Vec2::ZERO,
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Tracks the ~3 Hz footstep-dust cadence while Ralph moves.
#[derive(Resource, Debug, Default)]
pub struct FootstepCadence {
    pub last_bucket: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trick_cycle_is_closed() {
        assert_eq!(Trick::Sit.cycle(), Trick::Lie);
        assert_eq!(Trick::Lie.cycle(), Trick::Roll);
        assert_eq!(Trick::Roll.cycle(), Trick::Sit);
    }

    #[test]
    fn trick_ends_after_its_duration() {
        let mut state = TrickState::default();
        state.begin(Trick::Sit);
        assert_eq!(state.current(), Some(Trick::Sit));
        assert!(!state.tick(1.0));
        assert!(state.tick(0.3));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn new_trick_replaces_active_one_immediately() {
        let mut state = TrickState::default();
        state.begin(Trick::Lie);
        state.tick(1.4);
        state.begin(Trick::Roll);
        assert_eq!(state.current(), Some(Trick::Roll));
        // The replacement restarts the clock at the new trick's duration.
        assert!(!state.tick(1.5));
        assert!(state.tick(0.2));
    }

    #[test]
    fn mobile_directions_mirror_the_arrow_keys() {
        assert_eq!(MobileDirection::Stop.vector(), Vec2::ZERO);
        assert_eq!(MobileDirection::Up.vector(), Vec2::new(0.0, -1.0));
        assert_eq!(MobileDirection::Down.vector(), Vec2::new(0.0, 1.0));
        assert_eq!(MobileDirection::Left.vector(), Vec2::new(-1.0, 0.0));
        assert_eq!(MobileDirection::Right.vector(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn tick_without_active_trick_is_a_no_op() {
        let mut state = TrickState::default();
        assert!(!state.tick(5.0));
        assert_eq!(state.current(), None);
    }
}
