//! NPC components and shared roster state.
use std::fmt;

use bevy::prelude::*;

use crate::{core::plugin::IntervalTicker, player::components::Trick};

pub const MOOD_MAX: u8 = 100;

/// Stable string identifier for an NPC (`a1`..`a6` on the street roster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NpcId(pub &'static str);

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cow,
    Manatee,
    Pig,
    Unicorn,
    Zebra,
    Donkey,
}

impl Species {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cow => "cow",
            Self::Manatee => "manatee",
            Self::Pig => "pig",
            Self::Unicorn => "unicorn",
            Self::Zebra => "zebra",
            Self::Donkey => "donkey",
        }
    }
}

/// Identity data for one street animal.
#[derive(Component, Debug, Clone)]
pub struct Identity {
    pub id: NpcId,
    pub display_name: &'static str,
    pub species: Species,
    /// Position in the original roster; breaks nearest-neighbor ties.
    pub roster_index: usize,
}

/// Mutable approval state. Written only by the resolver and the decay loop.
#[derive(Component, Debug, Clone)]
pub struct Approval {
    desired: Trick,
    happy: bool,
    mood: u8,
}

impl Approval {
    pub fn new(desired: Trick) -> Self {
        Self {
            desired,
            happy: false,
            mood: 0,
        }
    }

    pub fn desired(&self) -> Trick {
        self.desired
    }

    /// `happy` is sticky: set on the first success and never cleared, even as
    /// `desired` keeps cycling past it.
    pub fn happy(&self) -> bool {
        self.happy
    }

    pub fn mood(&self) -> u8 {
        self.mood
    }

    /// Applies one successful trick: marks happy, bumps mood (capped), and
    /// advances the desired trick one step in the cycle.
    pub fn register_success(&mut self, gain: u8) {
        self.happy = true;
        self.mood = self.mood.saturating_add(gain).min(MOOD_MAX);
        self.desired = self.desired.cycle();
    }

    /// Passive decay; touches mood only.
    pub fn decay(&mut self, amount: u8) {
        self.mood = self.mood.saturating_sub(amount);
    }
}

/// The "come here" order, if any. Set while the call key is held (retargeted
/// continuously to the nearest animal) and cleared on release; the called NPC
/// simply stops wherever it is when the order vanishes.
#[derive(Resource, Debug, Default)]
pub struct ActiveCall {
    pub order: Option<CallOrder>,
}

#[derive(Debug, Clone, Copy)]
pub struct CallOrder {
    pub npc: NpcId,
    pub target: Vec3,
}

/// Drives the fixed-rate mood decay loop.
#[derive(Resource, Debug)]
pub struct MoodDecayTicker(pub IntervalTicker);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_bumps_mood_and_cycles_desired() {
        let mut approval = Approval::new(Trick::Sit);
        approval.register_success(25);
        assert!(approval.happy());
        assert_eq!(approval.mood(), 25);
        assert_eq!(approval.desired(), Trick::Lie);
    }

    #[test]
    fn mood_caps_at_one_hundred() {
        let mut approval = Approval::new(Trick::Roll);
        for _ in 0..10 {
            approval.register_success(25);
        }
        assert_eq!(approval.mood(), MOOD_MAX);
    }

    #[test]
    fn decay_floors_at_zero_and_keeps_happy() {
        let mut approval = Approval::new(Trick::Sit);
        approval.register_success(25);
        for _ in 0..20 {
            approval.decay(2);
        }
        assert_eq!(approval.mood(), 0);
        assert!(approval.happy());
        // Desired is untouched by decay.
        assert_eq!(approval.desired(), Trick::Lie);
    }

    #[test]
    fn mood_stays_in_bounds_under_mixed_sequences() {
        let mut approval = Approval::new(Trick::Lie);
        for step in 0..100 {
            if step % 3 == 0 {
                approval.register_success(25);
            } else {
                approval.decay(2);
            }
            assert!(approval.mood() <= MOOD_MAX);
        }
    }
}
