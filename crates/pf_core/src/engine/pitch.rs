//! Pitch geometry
//!
//! Pitch-centered meters: x ∈ [-L/2, L/2] along the touchline,
//! y ∈ [-W/2, W/2] along the goal line. Home defends the goal at x = -L/2,
//! Away defends the goal at x = +L/2.

use serde::{Deserialize, Serialize};

use crate::engine::agent::Team;
use crate::engine::model_constants::field;
use crate::error::{require_positive, FieldError, Result};

/// Immutable pitch description passed into every field computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub penalty_area_depth_m: f64,
    pub penalty_area_width_m: f64,
    pub goal_width_m: f64,
}

impl Default for PitchGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

impl PitchGeometry {
    /// Standard 105m x 68m pitch
    pub fn standard() -> Self {
        Self {
            length_m: field::LENGTH_M,
            width_m: field::WIDTH_M,
            penalty_area_depth_m: field::PENALTY_AREA_DEPTH_M,
            penalty_area_width_m: field::PENALTY_AREA_WIDTH_M,
            goal_width_m: field::GOAL_WIDTH_M,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("pitch.length_m", self.length_m)?;
        require_positive("pitch.width_m", self.width_m)?;
        require_positive("pitch.penalty_area_depth_m", self.penalty_area_depth_m)?;
        require_positive("pitch.penalty_area_width_m", self.penalty_area_width_m)?;
        require_positive("pitch.goal_width_m", self.goal_width_m)?;
        if self.penalty_area_depth_m * 2.0 > self.length_m {
            return Err(FieldError::InvalidConfig(format!(
                "penalty areas ({:.2}m deep) overlap on a {:.2}m pitch",
                self.penalty_area_depth_m, self.length_m
            )));
        }
        if self.penalty_area_width_m > self.width_m {
            return Err(FieldError::InvalidConfig(format!(
                "penalty area width {:.2}m exceeds pitch width {:.2}m",
                self.penalty_area_width_m, self.width_m
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        -self.length_m / 2.0
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.length_m / 2.0
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        -self.width_m / 2.0
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.width_m / 2.0
    }

    #[inline]
    pub fn penalty_half_width(&self) -> f64 {
        self.penalty_area_width_m / 2.0
    }

    #[inline]
    pub fn half_goal_width(&self) -> f64 {
        self.goal_width_m / 2.0
    }

    /// Goal line x of the goal `team` defends
    pub fn own_goal_x(&self, team: Team) -> f64 {
        match team {
            Team::Home => self.x_min(),
            Team::Away => self.x_max(),
        }
    }

    /// Goal line x of the goal `team` attacks
    pub fn attacked_goal_x(&self, team: Team) -> f64 {
        self.own_goal_x(team.opponent())
    }

    /// Is (x, y) inside the penalty box `team` defends?
    ///
    /// Box: from the own goal line up to `penalty_area_depth_m` in front of
    /// it (both edges inclusive), and |y| ≤ half the penalty area width.
    pub fn in_penalty_box(&self, team: Team, x: f64, y: f64) -> bool {
        if y.abs() > self.penalty_half_width() {
            return false;
        }
        match team {
            Team::Home => x >= self.x_min() && x <= self.x_min() + self.penalty_area_depth_m,
            Team::Away => x <= self.x_max() && x >= self.x_max() - self.penalty_area_depth_m,
        }
    }

    /// Is (x, y) on the pitch (boundary inclusive)?
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min() && x <= self.x_max() && y >= self.y_min() && y <= self.y_max()
    }
}
