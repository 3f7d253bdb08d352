//! Dense scalar fields over the grid
//!
//! Stored row-major, y outer and x inner: `index = iy * nx + ix`.
//! The rendering client maps indices to screen cells with exactly this
//! order, so it must never change.

use serde::{Deserialize, Serialize};

use crate::engine::grid::GridAxes;

/// Which model produced a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Home control probability, (0, 1); 1 = Home reaches first
    PitchControl,
    /// Shot value if passed to the cell, [0, 0.75]
    ExpectedGoals,
    /// Probability a pass from the ball completes, [0, 1]
    PassSuccess,
}

impl FieldKind {
    /// Inclusive numeric range every value of this kind lies in
    pub fn value_range(self) -> (f64, f64) {
        match self {
            FieldKind::PitchControl => (0.0, 1.0),
            FieldKind::ExpectedGoals => (0.0, crate::engine::model_constants::xg::MAX_XG),
            FieldKind::PassSuccess => (0.0, 1.0),
        }
    }
}

/// A computed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub kind: FieldKind,
    pub nx: usize,
    pub ny: usize,
    pub values: Vec<f64>, // len = nx*ny
}

impl Field {
    pub(crate) fn from_values(kind: FieldKind, grid: &GridAxes, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), grid.cell_count());
        Self { kind, nx: grid.nx(), ny: grid.ny(), values }
    }

    #[inline]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx + ix
    }

    /// Value at (ix, iy); `None` outside the grid
    #[inline]
    pub fn get(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.nx || iy >= self.ny {
            return None;
        }
        self.values.get(self.index(ix, iy)).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (min, max) over all cells; `None` for an empty field
    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        Some(
            self.values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}
