//! Pass-success field
//!
//! For each destination g:
//!   P_pass(g) = P_control(g) * (1 - P_intercept(g))
//!
//! P_intercept combines every opponent that can reach the straight-line
//! pass corridor before the ball passes their closest point.

use tracing::debug;

use crate::engine::agent::{Agent, Ball, Team};
use crate::engine::config::ModelParams;
use crate::engine::field::{Field, FieldKind};
use crate::engine::fields::{par_map_cells, FieldInputs};
use crate::engine::model_constants::pass;
use crate::engine::pitch_control::team_control_at;
use crate::error::Result;

/// Straight-line pass from the ball to a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassLine {
    pub origin: Ball,
    /// Unit direction
    pub ux: f64,
    pub uy: f64,
    pub length: f64,
}

impl PassLine {
    /// `None` when the destination is within the degenerate pass length.
    pub fn new(origin: Ball, gx: f64, gy: f64) -> Option<Self> {
        let vx = gx - origin.x;
        let vy = gy - origin.y;
        let length = vx.hypot(vy);
        if length < pass::DEGENERATE_LENGTH_M {
            return None;
        }
        Some(Self { origin, ux: vx / length, uy: vy / length, length })
    }

    /// (projection along the pass, perpendicular distance) of a point
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let wx = x - self.origin.x;
        let wy = y - self.origin.y;
        let proj = wx * self.ux + wy * self.uy;
        let perp = (wx * self.uy - wy * self.ux).abs();
        (proj, perp)
    }
}

/// Interception probability of one defender, or `None` when the defender
/// does not qualify (closest approach outside the pass, or clearly too slow).
pub fn interception_probability(line: &PassLine, defender: &Agent, params: &ModelParams) -> Option<f64> {
    let (proj, perp) = line.project(defender.x, defender.y);
    if proj <= 0.0 || proj >= line.length {
        return None;
    }

    let t_ball = proj / params.pass_speed;
    let t_def = params.reaction_time + perp / params.player_speed;
    if t_def > t_ball * pass::SLOW_DEFENDER_RATIO {
        return None;
    }

    // Positive margin: defender is there before the ball
    let margin = t_ball - t_def;
    let time_factor = 1.0 / (1.0 + (-margin / pass::TIME_MARGIN_SCALE_S).exp());
    let lateral_factor = (-(perp / pass::CORRIDOR_HALF_WIDTH_M).powi(2)).exp();

    Some(time_factor * lateral_factor)
}

/// Union of independent interception chances: `1 - Π(1 - p_i)`, folded
/// from 0. Order of the inputs does not matter.
pub fn combine_interceptions<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities.into_iter().fold(0.0, |acc, p| 1.0 - (1.0 - acc) * (1.0 - p))
}

/// Pass success from `ball` to (gx, gy) given the passing team's control there.
pub fn cell_pass_success(
    ball: Ball,
    control: f64,
    defenders: &[Agent],
    params: &ModelParams,
    gx: f64,
    gy: f64,
) -> f64 {
    if control <= pass::MIN_CONTROL {
        return 0.0;
    }
    let Some(line) = PassLine::new(ball, gx, gy) else {
        return control;
    };

    let combined = combine_interceptions(
        defenders.iter().filter_map(|d| interception_probability(&line, d, params)),
    );
    control * (1.0 - combined)
}

/// Pass-success field for passes by `team` from the ball.
///
/// Returns `Ok(None)` without a ball: the field is undefined.
pub fn compute_pass_success(inputs: &FieldInputs<'_>, team: Team) -> Result<Option<Field>> {
    inputs.validate()?;
    let Some(ball) = inputs.ball else {
        debug!("[PassSuccess] no ball, field undefined");
        return Ok(None);
    };

    let defenders = inputs.squads.team(team.opponent());
    let values = par_map_cells(inputs.grid, |gx, gy| {
        let control = team_control_at(inputs, team, gx, gy);
        cell_pass_success(ball, control, defenders, &inputs.params, gx, gy)
    });
    let field = Field::from_values(FieldKind::PassSuccess, inputs.grid, values);

    debug!(
        "[PassSuccess] team={:?} ball=({:.1}, {:.1}) defenders={} range={:?}",
        team,
        ball.x,
        ball.y,
        defenders.len(),
        field.min_max()
    );
    Ok(Some(field))
}
