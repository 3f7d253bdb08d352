//! Agents, teams and the ball
//!
//! Agents are supplied fresh by the caller for every computation and are
//! never mutated by the engine.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Team label.
///
/// Home ("Team A") defends the goal at negative x and attacks +x.
/// Away ("Team B") defends the goal at positive x and attacks -x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    #[serde(alias = "A", alias = "a")]
    Home,
    #[serde(alias = "B", alias = "b")]
    Away,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }

    /// Facing used for agents without an explicit one: toward the attacked goal.
    pub fn fallback_facing(self) -> f64 {
        match self {
            Team::Home => 0.0,
            Team::Away => PI,
        }
    }

    /// +1.0 when attacking +x, -1.0 when attacking -x
    pub fn attack_sign(self) -> f64 {
        match self {
            Team::Home => 1.0,
            Team::Away => -1.0,
        }
    }
}

/// One player on the pitch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Agent {
    pub x: f64,
    pub y: f64,
    /// Facing in radians; `None` falls back to the team's attacking direction
    #[serde(default)]
    pub facing: Option<f64>,
    #[serde(default, alias = "isGK")]
    pub is_goalkeeper: bool,
    #[serde(default)]
    pub number: Option<u8>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Agent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }

    pub fn goalkeeper(x: f64, y: f64) -> Self {
        Self { x, y, is_goalkeeper: true, ..Self::default() }
    }

    pub fn with_facing(mut self, facing: f64) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn with_number(mut self, number: u8) -> Self {
        self.number = Some(number);
        self
    }

    /// Explicit facing, or the given fallback
    #[inline]
    pub fn facing_or(&self, fallback: f64) -> f64 {
        self.facing.unwrap_or(fallback)
    }

    /// Reflect across x = 0. Facing θ becomes π - θ.
    pub fn mirrored(&self) -> Self {
        Self { x: -self.x, facing: self.facing.map(|f| PI - f), ..self.clone() }
    }
}

/// Ball position in pitch meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn center() -> Self {
        Self::default()
    }
}

/// Both teams' agent lists. Membership is implied by the list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Squads {
    #[serde(default)]
    pub home: Vec<Agent>,
    #[serde(default)]
    pub away: Vec<Agent>,
}

impl Squads {
    pub fn new(home: Vec<Agent>, away: Vec<Agent>) -> Self {
        Self { home, away }
    }

    pub fn team(&self, team: Team) -> &[Agent] {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }

    /// Mirror every agent across x = 0 and swap the team labels.
    pub fn mirrored(&self) -> Self {
        Self {
            home: self.away.iter().map(Agent::mirrored).collect(),
            away: self.home.iter().map(Agent::mirrored).collect(),
        }
    }
}
