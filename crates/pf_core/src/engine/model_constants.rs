//! Model constants for the field computations
//!
//! Closed-form heuristic constants. Pitch dimensions here are only the
//! defaults for [`PitchGeometry`](crate::engine::pitch::PitchGeometry);
//! the computations always read geometry from the struct passed in.

/// Default pitch dimensions (meters)
pub mod field {
    /// Touchline length (x extent)
    pub const LENGTH_M: f64 = 105.0;
    /// Goal line length (y extent)
    pub const WIDTH_M: f64 = 68.0;
    /// Penalty area depth measured from the goal line
    pub const PENALTY_AREA_DEPTH_M: f64 = 16.5;
    /// Penalty area width, centered on y = 0
    pub const PENALTY_AREA_WIDTH_M: f64 = 40.3;
    /// Distance between the posts
    pub const GOAL_WIDTH_M: f64 = 7.32;
    /// Grid step used by the visualization client
    pub const DEFAULT_RESOLUTION_M: f64 = 1.0;
    /// Upper bound on samples per grid axis
    pub const MAX_AXIS_SAMPLES: usize = 1_000_000;
}

/// Arrival-time estimator
pub mod arrival {
    /// Speed factor when moving exactly along facing is BASE + SWING = 1.0
    pub const SPEED_FACTOR_BASE: f64 = 0.7;
    pub const SPEED_FACTOR_SWING: f64 = 0.3;
    /// Effective speed never drops below this share of nominal speed
    pub const MIN_SPEED_RATIO: f64 = 0.4;
    /// Goalkeeper arrival-time multiplier inside own penalty box
    pub const GOALKEEPER_BOX_FACTOR: f64 = 0.55;
}

/// Default model parameters
pub mod params {
    /// Nominal agent speed (m/s)
    pub const PLAYER_SPEED: f64 = 5.0;
    /// Reaction delay before moving (s)
    pub const REACTION_TIME: f64 = 0.7;
    /// Logistic blend sharpness (s)
    pub const TAU: f64 = 0.5;
    /// Straight-line pass speed, ~65 km/h (m/s)
    pub const PASS_SPEED: f64 = 18.0;
}

/// Expected-goals field
pub mod xg {
    /// Cells below this attacking control are not attackable
    pub const MIN_CONTROL: f64 = 0.5;
    /// exp(-distance_to_goal / DIST_DECAY_M)
    pub const DIST_DECAY_M: f64 = 15.0;
    /// exp(-pass_distance / PASS_DECAY_M)
    pub const PASS_DECAY_M: f64 = 30.0;
    /// Goal-mouth angle that maps to an angle factor of 1.0 (rad)
    pub const MAX_GOAL_ANGLE_RAD: f64 = 0.35;
    /// Linear scaling applied before the ceiling
    pub const SCALE: f64 = 1.2;
    /// Hard ceiling
    pub const MAX_XG: f64 = 0.75;
}

/// Pass-success field
pub mod pass {
    /// Destinations at or below this control are not worth a pass
    pub const MIN_CONTROL: f64 = 0.3;
    /// Passes shorter than this (m) are degenerate
    pub const DEGENERATE_LENGTH_M: f64 = 1e-3;
    /// Defenders slower than SLOW_DEFENDER_RATIO x ball time are ignored
    pub const SLOW_DEFENDER_RATIO: f64 = 1.5;
    /// Logistic scale for the ball/defender time margin (s)
    pub const TIME_MARGIN_SCALE_S: f64 = 0.25;
    /// Gaussian corridor half-width around the pass line (m)
    pub const CORRIDOR_HALF_WIDTH_M: f64 = 6.0;
}
