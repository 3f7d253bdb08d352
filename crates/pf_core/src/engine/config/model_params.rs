use serde::{Deserialize, Serialize};

use crate::engine::model_constants::params;
use crate::error::{require_non_negative, require_positive, Result};

/// Per-call model parameters.
///
/// All values are validated before a computation starts; a bad value
/// would otherwise surface as NaN or a division by zero in every cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Nominal agent speed V (m/s)
    pub player_speed: f64,
    /// Reaction delay T_REACT (s)
    pub reaction_time: f64,
    /// Logistic blend sharpness tau (s)
    pub tau: f64,
    /// Straight-line pass speed (m/s), pass-success only
    pub pass_speed: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            player_speed: params::PLAYER_SPEED,
            reaction_time: params::REACTION_TIME,
            tau: params::TAU,
            pass_speed: params::PASS_SPEED,
        }
    }
}

impl ModelParams {
    /// Names accepted by [`ModelParams::preset`]
    pub const PRESET_NAMES: [&'static str; 3] = ["realistic", "quick_reactions", "slow_pitch"];

    /// Named preset, `None` for an unknown name
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim() {
            "realistic" => Some(Self::realistic()),
            "quick_reactions" => Some(Self::quick_reactions()),
            "slow_pitch" => Some(Self::slow_pitch()),
            _ => None,
        }
    }

    /// Default tuning used by the visualization client
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Sharper players: shorter reaction, crisper control boundary
    pub fn quick_reactions() -> Self {
        Self { reaction_time: 0.4, tau: 0.35, ..Self::default() }
    }

    /// Heavy pitch: slower players and passes, softer boundary
    pub fn slow_pitch() -> Self {
        Self { player_speed: 4.0, pass_speed: 14.0, tau: 0.7, ..Self::default() }
    }

    pub fn with_player_speed(mut self, v: f64) -> Self {
        self.player_speed = v;
        self
    }

    pub fn with_reaction_time(mut self, t: f64) -> Self {
        self.reaction_time = t;
        self
    }

    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    pub fn with_pass_speed(mut self, v: f64) -> Self {
        self.pass_speed = v;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("player_speed", self.player_speed)?;
        require_non_negative("reaction_time", self.reaction_time)?;
        require_positive("tau", self.tau)?;
        require_positive("pass_speed", self.pass_speed)?;
        Ok(())
    }
}
