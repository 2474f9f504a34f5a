//! The fixed street roster: six animals in a row, facing the player.
use bevy::prelude::*;

use crate::{npc::components::Species, player::components::Trick};

pub struct RosterEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub species: Species,
    pub position: Vec3,
    pub desired: Trick,
    pub color: Color,
}

pub fn street_roster() -> [RosterEntry; 6] {
    [
        RosterEntry {
            id: "a1",
            name: "Cowie",
            species: Species::Cow,
            position: Vec3::new(-15.0, 0.0, -6.0),
            desired: Trick::Sit,
            color: Color::srgb_u8(235, 235, 230),
        },
        RosterEntry {
            id: "a2",
            name: "Manny",
            species: Species::Manatee,
            position: Vec3::new(-9.0, 0.0, -6.0),
            desired: Trick::Lie,
            color: Color::srgb_u8(130, 140, 150),
        },
        RosterEntry {
            id: "a3",
            name: "Barnabus",
            species: Species::Pig,
            position: Vec3::new(-3.0, 0.0, -6.0),
            desired: Trick::Roll,
            color: Color::srgb_u8(240, 170, 170),
        },
        RosterEntry {
            id: "a4",
            name: "Hope",
            species: Species::Unicorn,
            position: Vec3::new(3.0, 0.0, -6.0),
            desired: Trick::Sit,
            color: Color::srgb_u8(245, 240, 250),
        },
        RosterEntry {
            id: "a5",
            name: "Zibbie",
            species: Species::Zebra,
            position: Vec3::new(9.0, 0.0, -6.0),
            desired: Trick::Lie,
            color: Color::srgb_u8(210, 210, 210),
        },
        RosterEntry {
            id: "a6",
            name: "Eeyore",
            species: Species::Donkey,
            position: Vec3::new(15.0, 0.0, -6.0),
            desired: Trick::Roll,
            color: Color::srgb_u8(150, 140, 160),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_are_unique() {
        let roster = street_roster();
        for (i, a) in roster.iter().enumerate() {
            for b in roster.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn roster_alternates_desired_tricks() {
        let roster = street_roster();
        assert_eq!(roster[0].desired, Trick::Sit);
        assert_eq!(roster[1].desired, Trick::Lie);
        assert_eq!(roster[2].desired, Trick::Roll);
        assert_eq!(roster[3].desired, Trick::Sit);
    }
}
