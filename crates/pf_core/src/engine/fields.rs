//! Field computation entry points
//!
//! [`FieldInputs`] bundles everything one recomputation needs. Each call is
//! a pure function of its inputs; the returned [`Field`] fully supersedes
//! any earlier result.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::agent::{Ball, Squads, Team};
use crate::engine::config::ModelParams;
use crate::engine::field::Field;
use crate::engine::grid::GridAxes;
use crate::engine::pass_success::compute_pass_success;
use crate::engine::pitch::PitchGeometry;
use crate::engine::pitch_control::compute_pitch_control;
use crate::engine::xg_field::compute_expected_goals;
use crate::error::Result;

/// Inputs for one field computation.
#[derive(Debug, Clone, Copy)]
pub struct FieldInputs<'a> {
    pub squads: &'a Squads,
    pub grid: &'a GridAxes,
    pub ball: Option<Ball>,
    pub pitch: PitchGeometry,
    pub params: ModelParams,
}

impl<'a> FieldInputs<'a> {
    /// Standard pitch, default parameters, no ball.
    pub fn new(squads: &'a Squads, grid: &'a GridAxes) -> Self {
        Self {
            squads,
            grid,
            ball: None,
            pitch: PitchGeometry::standard(),
            params: ModelParams::default(),
        }
    }

    pub fn with_ball(mut self, ball: Ball) -> Self {
        self.ball = Some(ball);
        self
    }

    pub fn with_optional_ball(mut self, ball: Option<Ball>) -> Self {
        self.ball = ball;
        self
    }

    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_pitch(mut self, pitch: PitchGeometry) -> Self {
        self.pitch = pitch;
        self
    }

    /// Check parameters and pitch geometry before any cell is computed.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        self.pitch.validate()
    }
}

/// Model selector used by the JSON API and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    #[serde(alias = "pitch_control")]
    Control,
    #[serde(alias = "expected_goals")]
    Xg,
    #[serde(alias = "pass_success")]
    Pass,
}

impl ModelKind {
    /// Whether the model needs a ball position to be defined
    pub fn requires_ball(self) -> bool {
        !matches!(self, ModelKind::Control)
    }
}

/// Compute the field for `kind`, modeled for `team` where that matters.
///
/// `Ok(None)` means the field is undefined for these inputs (derived
/// fields without a ball), not that it is zero everywhere.
pub fn compute_field(kind: ModelKind, inputs: &FieldInputs<'_>, team: Team) -> Result<Option<Field>> {
    inputs.validate()?;
    if kind.requires_ball() && inputs.ball.is_none() {
        debug!("[Fields] {:?} needs a ball, field undefined", kind);
        return Ok(None);
    }
    match kind {
        ModelKind::Control => compute_pitch_control(inputs).map(Some),
        ModelKind::Xg => compute_expected_goals(inputs, team),
        ModelKind::Pass => compute_pass_success(inputs, team),
    }
}

/// Evaluate `f(gx, gy)` for every cell in row-major order.
///
/// Cells are independent, so the map runs data-parallel; `collect` on an
/// indexed parallel iterator keeps the index order.
pub(crate) fn par_map_cells<F>(grid: &GridAxes, f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    if grid.is_empty() {
        return Vec::new();
    }
    (0..grid.cell_count())
        .into_par_iter()
        .map(|idx| {
            let (gx, gy) = grid.coords(idx);
            f(gx, gy)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::formations::Formation;

    #[test]
    fn test_par_map_cells_row_major() {
        let grid = GridAxes::from_axes(vec![0.0, 1.0, 2.0], vec![10.0, 20.0]);
        let values = par_map_cells(&grid, |x, y| x + y);
        assert_eq!(values, vec![10.0, 11.0, 12.0, 20.0, 21.0, 22.0]);
    }

    #[test]
    fn test_par_map_cells_empty_grid() {
        let grid = GridAxes::from_axes(vec![1.0, 2.0], vec![]);
        assert!(par_map_cells(&grid, |x, _| x).is_empty());
    }

    #[test]
    fn test_compute_field_dispatch() {
        let squads = Formation::F442.squads();
        let grid = GridAxes::for_pitch(&PitchGeometry::standard(), 5.0).unwrap();
        let inputs = FieldInputs::new(&squads, &grid);

        let control = compute_field(ModelKind::Control, &inputs, Team::Home).unwrap();
        assert!(control.is_some());

        // No ball: derived fields are undefined
        assert!(compute_field(ModelKind::Xg, &inputs, Team::Home).unwrap().is_none());
        assert!(compute_field(ModelKind::Pass, &inputs, Team::Home).unwrap().is_none());

        let with_ball = inputs.with_ball(Ball::center());
        let xg = compute_field(ModelKind::Xg, &with_ball, Team::Home).unwrap().unwrap();
        let pass = compute_field(ModelKind::Pass, &with_ball, Team::Home).unwrap().unwrap();
        assert_eq!(xg.len(), grid.cell_count());
        assert_eq!(pass.len(), grid.cell_count());
    }

    #[test]
    fn test_invalid_pitch_rejected_by_every_model() {
        let squads = Formation::F442.squads();
        let grid = GridAxes::for_pitch(&PitchGeometry::standard(), 5.0).unwrap();
        let mut pitch = PitchGeometry::standard();
        pitch.length_m = -105.0;
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::center()).with_pitch(pitch);

        assert!(inputs.validate().is_err());
        for kind in [ModelKind::Control, ModelKind::Xg, ModelKind::Pass] {
            let err = compute_field(kind, &inputs, Team::Home).unwrap_err();
            assert_eq!(err.code(), "E_PARAM", "{kind:?}");
        }
        assert!(compute_pitch_control(&inputs).is_err());
        assert!(compute_expected_goals(&inputs, Team::Away).is_err());
        assert!(compute_pass_success(&inputs, Team::Away).is_err());

        // Rejected even when the field would be undefined
        let no_ball = inputs.with_optional_ball(None);
        assert!(compute_field(ModelKind::Xg, &no_ball, Team::Home).is_err());

        let mut pitch = PitchGeometry::standard();
        pitch.goal_width_m = 0.0;
        let inputs = FieldInputs::new(&squads, &grid).with_pitch(pitch);
        assert!(compute_field(ModelKind::Control, &inputs, Team::Home).is_err());
    }

    #[test]
    fn test_model_kind_json_names() {
        let kind: ModelKind = serde_json::from_str(r#""xg""#).unwrap();
        assert_eq!(kind, ModelKind::Xg);
        let kind: ModelKind = serde_json::from_str(r#""pass_success""#).unwrap();
        assert_eq!(kind, ModelKind::Pass);
        assert!(!ModelKind::Control.requires_ball());
        assert!(ModelKind::Xg.requires_ball());
    }
}
