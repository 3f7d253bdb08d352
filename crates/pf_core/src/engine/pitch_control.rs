//! Pitch control
//!
//! For each cell: the fastest Home arrival tA and the fastest Away arrival
//! tB, blended as `1 / (1 + e^(-(tB - tA) / tau))`. Values near 1 mean Home
//! gets there first, near 0 Away, 0.5 on an exact tie.

use tracing::debug;

use crate::engine::agent::Team;
use crate::engine::arrival_time::min_arrival_time;
use crate::engine::field::{Field, FieldKind};
use crate::engine::fields::{par_map_cells, FieldInputs};
use crate::error::Result;

/// Logistic blend of the two teams' fastest arrival times.
///
/// An empty team arrives at +∞, which collapses control onto the other
/// team. Two empty teams are an exact tie.
#[inline]
pub fn control_probability(t_home: f64, t_away: f64, tau: f64) -> f64 {
    if t_home.is_infinite() && t_away.is_infinite() {
        return 0.5;
    }
    let z = (t_away - t_home) / tau;
    1.0 / (1.0 + (-z).exp())
}

/// Home control probability at a single point. Parameters must already
/// be validated.
pub(crate) fn control_at(inputs: &FieldInputs<'_>, gx: f64, gy: f64) -> f64 {
    let p = &inputs.params;
    let t_home = min_arrival_time(
        Team::Home,
        &inputs.squads.home,
        gx,
        gy,
        p.player_speed,
        p.reaction_time,
        &inputs.pitch,
    );
    let t_away = min_arrival_time(
        Team::Away,
        &inputs.squads.away,
        gx,
        gy,
        p.player_speed,
        p.reaction_time,
        &inputs.pitch,
    );
    control_probability(t_home, t_away, p.tau)
}

/// Control probability for `team` at a point: Home's value, or its complement.
pub(crate) fn team_control_at(inputs: &FieldInputs<'_>, team: Team, gx: f64, gy: f64) -> f64 {
    let home = control_at(inputs, gx, gy);
    match team {
        Team::Home => home,
        Team::Away => 1.0 - home,
    }
}

/// Pitch-control field (Home perspective) over the whole grid.
pub fn compute_pitch_control(inputs: &FieldInputs<'_>) -> Result<Field> {
    inputs.validate()?;
    if inputs.squads.is_empty() {
        debug!("[PitchControl] no agents, every cell is a tie");
    }

    let values = par_map_cells(inputs.grid, |gx, gy| control_at(inputs, gx, gy));
    let field = Field::from_values(FieldKind::PitchControl, inputs.grid, values);

    debug!(
        "[PitchControl] {}x{} cells, home={} away={}, range={:?}",
        field.nx,
        field.ny,
        inputs.squads.home.len(),
        inputs.squads.away.len(),
        field.min_max()
    );
    Ok(field)
}
