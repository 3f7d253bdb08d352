//! Expected-goals field
//!
//! Shot value if the ball is passed to each cell, for one attacking team.
//!
//! Factors:
//! - control of the attacking team at the cell (cells it does not win score 0)
//! - distance to goal (exponential decay)
//! - goal-mouth angle subtended by the posts
//! - pass quality (exponential decay with pass distance)
//!
//! The result is scaled and capped at a realistic xG ceiling.

use tracing::debug;

use crate::engine::agent::{Ball, Team};
use crate::engine::field::{Field, FieldKind};
use crate::engine::fields::{par_map_cells, FieldInputs};
use crate::engine::model_constants::xg;
use crate::engine::pitch::PitchGeometry;
use crate::engine::pitch_control::team_control_at;
use crate::error::Result;

/// Goal being attacked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotTarget {
    /// Goal line x
    pub goal_x: f64,
    /// Goal center y
    pub goal_y: f64,
    /// +1.0 when attacking toward +x, -1.0 toward -x
    pub attack_sign: f64,
    /// Half the distance between the posts
    pub half_goal_width: f64,
}

impl ShotTarget {
    /// The goal `team` attacks on `pitch`.
    pub fn for_team(pitch: &PitchGeometry, team: Team) -> Self {
        Self {
            goal_x: pitch.attacked_goal_x(team),
            goal_y: 0.0,
            attack_sign: team.attack_sign(),
            half_goal_width: pitch.half_goal_width(),
        }
    }

    /// Distance from (gx, gy) to the goal line, positive in front of it
    #[inline]
    pub fn depth(&self, gx: f64) -> f64 {
        self.attack_sign * (self.goal_x - gx)
    }

    /// Angle subtended by the two posts at (gx, gy), in radians.
    ///
    /// Measured in the attacking frame so bearings to both posts stay on
    /// the same side of the ±π cut for either direction.
    pub fn goal_mouth_angle(&self, gx: f64, gy: f64) -> f64 {
        let depth = self.depth(gx);
        let upper = (self.goal_y + self.half_goal_width - gy).atan2(depth);
        let lower = (self.goal_y - self.half_goal_width - gy).atan2(depth);
        (upper - lower).abs()
    }

    #[inline]
    pub fn distance(&self, gx: f64, gy: f64) -> f64 {
        (self.goal_x - gx).hypot(self.goal_y - gy)
    }
}

/// xG of a pass from `ball` to (gx, gy) given the attacking team's control there.
pub fn cell_xg(target: &ShotTarget, ball: Ball, control: f64, gx: f64, gy: f64) -> f64 {
    if control < xg::MIN_CONTROL || target.depth(gx) <= 0.0 {
        return 0.0;
    }

    let dist_factor = (-target.distance(gx, gy) / xg::DIST_DECAY_M).exp();
    let angle_factor = (target.goal_mouth_angle(gx, gy) / xg::MAX_GOAL_ANGLE_RAD).min(1.0);
    let pass_dist = (gx - ball.x).hypot(gy - ball.y);
    let pass_quality = (-pass_dist / xg::PASS_DECAY_M).exp();

    let raw = control * angle_factor * dist_factor * pass_quality;
    (raw * xg::SCALE).min(xg::MAX_XG)
}

/// Expected-goals field for `team` attacking its opponent's goal.
///
/// Returns `Ok(None)` without a ball: the field is undefined.
pub fn compute_expected_goals(inputs: &FieldInputs<'_>, team: Team) -> Result<Option<Field>> {
    inputs.validate()?;
    let Some(ball) = inputs.ball else {
        debug!("[XG] no ball, field undefined");
        return Ok(None);
    };

    let target = ShotTarget::for_team(&inputs.pitch, team);
    compute_expected_goals_for(inputs, team, ball, &target).map(Some)
}

/// Expected-goals field against an explicit target.
pub fn compute_expected_goals_for(
    inputs: &FieldInputs<'_>,
    team: Team,
    ball: Ball,
    target: &ShotTarget,
) -> Result<Field> {
    inputs.validate()?;

    let values = par_map_cells(inputs.grid, |gx, gy| {
        let control = team_control_at(inputs, team, gx, gy);
        cell_xg(target, ball, control, gx, gy)
    });
    let field = Field::from_values(FieldKind::ExpectedGoals, inputs.grid, values);

    if let Some((min, max)) = field.min_max() {
        debug!("[XG] team={:?} goal_x={:.1} min={:.4} max={:.4}", team, target.goal_x, min, max);
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::agent::{Agent, Squads};
    use crate::engine::formations::Formation;
    use crate::engine::grid::GridAxes;
    use crate::engine::pitch_control::compute_pitch_control;

    fn full_grid() -> GridAxes {
        GridAxes::for_pitch(&PitchGeometry::standard(), 1.0).unwrap()
    }

    #[test]
    fn test_no_ball_is_undefined() {
        let squads = Formation::F442.squads();
        let grid = full_grid();
        let result = compute_expected_goals(&FieldInputs::new(&squads, &grid), Team::Home).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_goal_line_and_behind_are_zero() {
        let squads = Formation::F442.squads();
        let grid = full_grid();
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::center());
        let field = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();

        let ix = grid.nx() - 1;
        assert_eq!(grid.x[ix], 52.5);
        for iy in 0..grid.ny() {
            assert_eq!(field.get(ix, iy), Some(0.0));
        }
    }

    #[test]
    fn test_values_in_range_and_zero_where_not_controlled() {
        let squads = Formation::F4231.squads();
        let grid = full_grid();
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::new(-10.0, 5.0));
        let xg_field = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();
        let control = compute_pitch_control(&inputs).unwrap();

        for (i, &v) in xg_field.values.iter().enumerate() {
            assert!((0.0..=0.75).contains(&v), "xG out of range: {v}");
            if control.values[i] < 0.5 {
                assert_eq!(v, 0.0);
            }
        }
        let (_, max) = xg_field.min_max().unwrap();
        assert!(max > 0.0, "some cell should carry xG");
    }

    #[test]
    fn test_idempotent() {
        let squads = Formation::F433.squads();
        let grid = full_grid();
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::new(18.0, -6.0));
        let a = compute_expected_goals(&inputs, Team::Home).unwrap();
        let b = compute_expected_goals(&inputs, Team::Home).unwrap();
        assert_eq!(a, b);
        let a = compute_expected_goals(&inputs, Team::Away).unwrap();
        let b = compute_expected_goals(&inputs, Team::Away).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ceiling_and_geometry() {
        // Home alone: control is exactly 1 everywhere
        let squads = Squads::new(vec![Agent::new(0.0, 0.0)], vec![]);
        let grid = GridAxes::from_axes(vec![20.0, 45.0, 50.0], vec![0.0]);

        // Ball on the cell right in front of goal => capped
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::new(50.0, 0.0));
        let field = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();
        assert_eq!(field.values[2], 0.75);

        // Ball at (45, 0): dist 7.5, full angle, no pass decay
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::new(45.0, 0.0));
        let field = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();
        let expected = (-7.5f64 / 15.0).exp() * 1.2;
        assert!((field.values[1] - expected).abs() < 1e-12);
        assert!(field.values[0] < field.values[1], "farther from goal should score less");
    }

    #[test]
    fn test_goal_mouth_angle() {
        let target = ShotTarget::for_team(&PitchGeometry::standard(), Team::Home);
        let angle = target.goal_mouth_angle(52.5 - 11.0, 0.0);
        let expected = 2.0 * (3.66f64 / 11.0).atan();
        assert!((angle - expected).abs() < 1e-12);
        // Wide positions see a narrower mouth
        assert!(target.goal_mouth_angle(52.5 - 11.0, 25.0) < angle);
    }

    #[test]
    fn test_away_attacks_negative_goal() {
        let target = ShotTarget::for_team(&PitchGeometry::standard(), Team::Away);
        assert_eq!(target.goal_x, -52.5);
        assert_eq!(target.depth(-40.0), 12.5);
        assert!(target.depth(-52.5) <= 0.0);
        // Same angle as Home's at the mirrored spot
        let home = ShotTarget::for_team(&PitchGeometry::standard(), Team::Home);
        assert!((target.goal_mouth_angle(-40.0, 7.0) - home.goal_mouth_angle(40.0, 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_away_field_mirrors_home_field() {
        let squads = Squads::new(
            vec![Agent::goalkeeper(-49.0, 1.0), Agent::new(30.0, 4.0), Agent::new(38.0, -9.0).with_facing(0.3)],
            vec![Agent::goalkeeper(48.0, 0.0), Agent::new(25.0, 12.0), Agent::new(41.0, -2.0)],
        );
        let ball = Ball::new(22.0, -3.0);
        let grid = full_grid();

        let inputs = FieldInputs::new(&squads, &grid).with_ball(ball);
        let home = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();
        let control = compute_pitch_control(&inputs).unwrap();

        let mirrored = squads.mirrored();
        let mirrored_inputs = FieldInputs::new(&mirrored, &grid).with_ball(Ball::new(-ball.x, ball.y));
        let away = compute_expected_goals(&mirrored_inputs, Team::Away).unwrap().unwrap();

        let nx = grid.nx();
        for iy in 0..grid.ny() {
            for ix in 0..nx {
                if (control.get(ix, iy).unwrap() - 0.5).abs() < 1e-9 {
                    continue; // gate tie, either side of 0.5 is rounding
                }
                let a = home.get(ix, iy).unwrap();
                let b = away.get(nx - 1 - ix, iy).unwrap();
                assert!((a - b).abs() < 1e-9, "mismatch at ({}, {}): {a} vs {b}", grid.x[ix], grid.y[iy]);
            }
        }
    }

    #[test]
    fn test_away_without_control_scores_nothing() {
        let squads = Squads::new(vec![Agent::new(0.0, 0.0)], vec![]);
        let grid = GridAxes::for_pitch(&PitchGeometry::standard(), 5.0).unwrap();
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::center());
        let field = compute_expected_goals(&inputs, Team::Away).unwrap().unwrap();
        assert!(field.values.iter().all(|&v| v == 0.0));
    }
}
