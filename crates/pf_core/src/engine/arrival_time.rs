//! Arrival-time estimation
//!
//! Time for one agent to reach a target cell: a reaction delay, then
//! straight-line travel at a speed that depends on how far the travel
//! bearing turns away from the agent's facing.

use std::f64::consts::{PI, TAU};

use crate::engine::agent::{Agent, Team};
use crate::engine::model_constants::arrival;
use crate::engine::pitch::PitchGeometry;

/// Shortest angular distance between two bearings, in [0, π].
#[inline]
pub fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// Travel-speed multiplier for a turn of `angle_diff` away from facing:
/// 1.0 straight ahead, 0.4 straight back.
#[inline]
pub fn speed_factor(angle_diff: f64) -> f64 {
    arrival::SPEED_FACTOR_BASE + arrival::SPEED_FACTOR_SWING * angle_diff.cos()
}

/// Estimated arrival time of `agent` at (gx, gy).
///
/// `fallback_facing` is used only when the agent carries no facing.
/// A target on top of the agent costs exactly the reaction time.
pub fn arrival_time(
    agent: &Agent,
    gx: f64,
    gy: f64,
    speed: f64,
    reaction: f64,
    fallback_facing: f64,
) -> f64 {
    let dx = gx - agent.x;
    let dy = gy - agent.y;
    let d = dx.hypot(dy);
    if d == 0.0 {
        return reaction;
    }

    let bearing = dy.atan2(dx);
    let angle_diff = angle_between(bearing, agent.facing_or(fallback_facing));
    let effective_speed = (arrival::MIN_SPEED_RATIO * speed).max(speed * speed_factor(angle_diff));

    reaction + d / effective_speed
}

/// Arrival time with the goalkeeper rule applied for `team`.
///
/// A goalkeeper reaching a cell inside its own penalty box gets
/// [`arrival::GOALKEEPER_BOX_FACTOR`] of the plain estimate.
pub fn team_arrival_time(
    team: Team,
    agent: &Agent,
    gx: f64,
    gy: f64,
    speed: f64,
    reaction: f64,
    pitch: &PitchGeometry,
) -> f64 {
    let t = arrival_time(agent, gx, gy, speed, reaction, team.fallback_facing());
    if agent.is_goalkeeper && pitch.in_penalty_box(team, gx, gy) {
        t * arrival::GOALKEEPER_BOX_FACTOR
    } else {
        t
    }
}

/// Fastest arrival across a team; +∞ for an empty team.
pub fn min_arrival_time(
    team: Team,
    agents: &[Agent],
    gx: f64,
    gy: f64,
    speed: f64,
    reaction: f64,
    pitch: &PitchGeometry,
) -> f64 {
    agents
        .iter()
        .map(|agent| team_arrival_time(team, agent, gx, gy, speed, reaction, pitch))
        .fold(f64::INFINITY, f64::min)
}
