use ndarray::{Array2, ArrayView1, ArrayView2, s};

use crate::error::{LorenzError, Result};

/// Integrated path through (x, y, z) state space, one row per sample.
///
/// Produced trajectories always hold at least one point, the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Array2<f64>,
}

impl Trajectory {
    pub(crate) fn from_array(points: Array2<f64>) -> Self {
        debug_assert_eq!(points.ncols(), 3);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    pub fn point(&self, i: usize) -> Option<[f64; 3]> {
        (i < self.len()).then(|| {
            let row = self.points.row(i);
            [row[0], row[1], row[2]]
        })
    }

    pub fn first(&self) -> Option<[f64; 3]> {
        self.point(0)
    }

    pub fn last(&self) -> Option<[f64; 3]> {
        self.len().checked_sub(1).and_then(|i| self.point(i))
    }

    pub fn points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.points.rows().into_iter().map(|r| [r[0], r[1], r[2]])
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.points.column(0)
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.points.column(1)
    }

    pub fn z(&self) -> ArrayView1<'_, f64> {
        self.points.column(2)
    }

    /// First `k` points, clamped to the trajectory length.
    pub fn prefix(&self, k: usize) -> ArrayView2<'_, f64> {
        self.points.slice(s![..k.min(self.len()), ..])
    }

    /// Growing prefixes of length 1, 1 + stride, 1 + 2 * stride, ... below `len`.
    ///
    /// This is the frame sampling an animated viewer plays back.
    pub fn frames(&self, stride: usize) -> Result<impl Iterator<Item = ArrayView2<'_, f64>> + '_> {
        if stride == 0 {
            return Err(LorenzError::invalid("frame stride must be at least 1"));
        }

        Ok((1..self.len()).step_by(stride).map(|k| self.prefix(k)))
    }

    pub fn frame_count(&self, stride: usize) -> Result<usize> {
        Ok(self.frames(stride)?.count())
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|v| v.is_finite())
    }

    /// Index of the first point with a NaN or infinite coordinate.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .rows()
            .into_iter()
            .position(|r| r.iter().any(|v| !v.is_finite()))
    }

    pub fn as_array(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.points
    }
}
