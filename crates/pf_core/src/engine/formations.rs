//! Formation presets
//!
//! Starting layouts the visualization client offers. Home lines up in its
//! own half facing +x; Away is the exact mirror facing -x.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::engine::agent::{Agent, Squads};

/// Preset formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
}

/// (x, y) slots for Home, goalkeeper first
const SLOTS_442: [(f64, f64); 11] = [
    (-48.0, 0.0),
    (-35.0, -25.0),
    (-35.0, -10.0),
    (-35.0, 10.0),
    (-35.0, 25.0),
    (-20.0, -20.0),
    (-20.0, -5.0),
    (-20.0, 5.0),
    (-20.0, 20.0),
    (-5.0, -10.0),
    (-5.0, 10.0),
];

const SLOTS_433: [(f64, f64); 11] = [
    (-48.0, 0.0),
    (-35.0, -25.0),
    (-35.0, -10.0),
    (-35.0, 10.0),
    (-35.0, 25.0),
    (-20.0, -15.0),
    (-20.0, 0.0),
    (-20.0, 15.0),
    (-5.0, -20.0),
    (-5.0, 0.0),
    (-5.0, 20.0),
];

const SLOTS_352: [(f64, f64); 11] = [
    (-48.0, 0.0),
    (-35.0, -15.0),
    (-35.0, 0.0),
    (-35.0, 15.0),
    (-20.0, -25.0),
    (-20.0, -10.0),
    (-20.0, 0.0),
    (-20.0, 10.0),
    (-20.0, 25.0),
    (-5.0, -10.0),
    (-5.0, 10.0),
];

const SLOTS_4231: [(f64, f64); 11] = [
    (-48.0, 0.0),
    (-35.0, -25.0),
    (-35.0, -10.0),
    (-35.0, 10.0),
    (-35.0, 25.0),
    (-20.0, -5.0),
    (-20.0, 5.0),
    (-5.0, -20.0),
    (-5.0, 0.0),
    (-5.0, 20.0),
    (5.0, 0.0),
];

impl Formation {
    pub const ALL: [Formation; 4] =
        [Formation::F442, Formation::F433, Formation::F352, Formation::F4231];

    pub fn name(self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name.trim())
    }

    fn slots(self) -> &'static [(f64, f64); 11] {
        match self {
            Formation::F442 => &SLOTS_442,
            Formation::F433 => &SLOTS_433,
            Formation::F352 => &SLOTS_352,
            Formation::F4231 => &SLOTS_4231,
        }
    }

    /// Home line-up: goalkeeper at index 0, everyone facing +x
    pub fn home_agents(self) -> Vec<Agent> {
        self.slots()
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Agent { is_goalkeeper: i == 0, ..Agent::new(x, y) }.with_facing(0.0))
            .collect()
    }

    /// Away line-up: Home mirrored across x = 0, everyone facing -x
    pub fn away_agents(self) -> Vec<Agent> {
        self.slots()
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Agent { is_goalkeeper: i == 0, ..Agent::new(-x, y) }.with_facing(PI))
            .collect()
    }

    pub fn squads(self) -> Squads {
        Squads::new(self.home_agents(), self.away_agents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pitch::PitchGeometry;

    #[test]
    fn test_every_preset_has_eleven_and_one_keeper() {
        for formation in Formation::ALL {
            let squads = formation.squads();
            assert_eq!(squads.home.len(), 11, "{}", formation.name());
            assert_eq!(squads.away.len(), 11, "{}", formation.name());
            assert_eq!(squads.home.iter().filter(|a| a.is_goalkeeper).count(), 1);
            assert_eq!(squads.away.iter().filter(|a| a.is_goalkeeper).count(), 1);
        }
    }

    #[test]
    fn test_presets_are_on_pitch_and_keepers_in_own_box() {
        let pitch = PitchGeometry::standard();
        for formation in Formation::ALL {
            let squads = formation.squads();
            for agent in squads.home.iter().chain(squads.away.iter()) {
                assert!(pitch.contains(agent.x, agent.y));
            }
            assert!(pitch.in_penalty_box(crate::engine::agent::Team::Home, squads.home[0].x, squads.home[0].y));
            assert!(pitch.in_penalty_box(crate::engine::agent::Team::Away, squads.away[0].x, squads.away[0].y));
        }
    }

    #[test]
    fn test_away_mirrors_home() {
        let squads = Formation::F4231.squads();
        for (home, away) in squads.home.iter().zip(squads.away.iter()) {
            assert_eq!(away.x, -home.x);
            assert_eq!(away.y, home.y);
            assert_eq!(home.facing, Some(0.0));
            assert_eq!(away.facing, Some(PI));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Formation::from_name("4-4-2"), Some(Formation::F442));
        assert_eq!(Formation::from_name(" 3-5-2 "), Some(Formation::F352));
        assert_eq!(Formation::from_name("5-4-1"), None);
        let parsed: Formation = serde_json::from_str(r#""4-2-3-1""#).unwrap();
        assert_eq!(parsed, Formation::F4231);
    }
}
