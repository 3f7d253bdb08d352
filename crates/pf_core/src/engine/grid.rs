//! Grid sampler
//!
//! Two ordered coordinate axes spanning the pitch. Cells are addressed
//! row-major, y outer and x inner: `index = iy * nx + ix`.

use serde::{Deserialize, Serialize};

use crate::engine::model_constants::field;
use crate::engine::pitch::PitchGeometry;
use crate::error::{require_positive, FieldError, Result};

/// Sampled x and y axes.
///
/// Depends only on bounds and resolution, so it can be cached across
/// calls that change agents or the ball.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridAxes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl GridAxes {
    /// Sample both axes from min to max inclusive.
    ///
    /// Rejects a resolution that would exceed
    /// [`field::MAX_AXIS_SAMPLES`] on either axis or that is too small to
    /// advance past a sample in f64.
    pub fn sample(x_min: f64, x_max: f64, y_min: f64, y_max: f64, resolution: f64) -> Result<Self> {
        require_positive("resolution", resolution)?;
        Ok(Self { x: sample_axis(x_min, x_max, resolution)?, y: sample_axis(y_min, y_max, resolution)? })
    }

    /// Axes covering the whole pitch.
    pub fn for_pitch(pitch: &PitchGeometry, resolution: f64) -> Result<Self> {
        Self::sample(pitch.x_min(), pitch.x_max(), pitch.y_min(), pitch.y_max(), resolution)
    }

    /// Caller-supplied axes, used as-is. Empty axes yield empty fields.
    pub fn from_axes(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nx() * self.ny()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Row-major index of (ix, iy)
    #[inline]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx() + ix
    }

    /// Coordinates of the cell at a row-major index
    #[inline]
    pub fn coords(&self, idx: usize) -> (f64, f64) {
        let nx = self.nx();
        (self.x[idx % nx], self.y[idx / nx])
    }

    /// Axis indices of the sample nearest to (x, y), if the grid is non-empty
    pub fn nearest(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        Some((nearest_index(&self.x, x)?, nearest_index(&self.y, y)?))
    }
}

/// Step from `min` by repeated addition while the value stays ≤ `max`.
///
/// Accumulates rather than computing `min + i * step`, so the last sample
/// carries the same floating-point drift the client's axes have.
fn sample_axis(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    let span = max - min;
    if span >= 0.0 && span / step >= field::MAX_AXIS_SAMPLES as f64 {
        return Err(FieldError::InvalidParameter {
            name: "resolution",
            value: step,
            reason: "too many samples per axis",
        });
    }

    let mut axis = Vec::new();
    let mut v = min;
    while v <= max {
        axis.push(v);
        let next = v + step;
        if next <= v {
            return Err(FieldError::InvalidParameter {
                name: "resolution",
                value: step,
                reason: "below floating-point precision at the axis bounds",
            });
        }
        v = next;
    }
    Ok(axis)
}

fn nearest_index(axis: &[f64], v: f64) -> Option<usize> {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - v).abs().total_cmp(&(*b - v).abs()))
        .map(|(i, _)| i)
}
