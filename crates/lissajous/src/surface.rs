//! Potential energy sampled over a square grid.
//!
//! The grid spans `[-(a + margin), a + margin]` on both axes, where `a` is the
//! larger amplitude, so the whole trajectory sits inside the surface with some
//! room around it.

use alloc::vec::Vec;

use crate::geometry::Point;
use crate::math::floor;
use crate::system::Lissajous;

/// Default grid spacing.
pub const SURFACE_STEP: f64 = 0.1;

/// Default margin added around the larger amplitude.
pub const SURFACE_MARGIN: f64 = 0.5;

/// Most samples taken along each axis. Wider squares get a coarser grid.
pub const MAX_SURFACE_SIZE: usize = 401;

/// `U(x, y) = Ux(x) + Uy(y)` on a regular square grid.
///
/// Values are stored row-major with rows ordered by increasing `y`.
///
/// # Example
///
/// ```rust
/// use lissajous::{Lissajous, PotentialSurface};
///
/// let surface = PotentialSurface::sample(&Lissajous::default(), 0.5);
/// assert_eq!(surface.size(), 7); // -1.5, -1.0, ..., 1.5
/// assert_eq!(surface.value_at(3, 3), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialSurface {
    start: f64,
    step: f64,
    size: usize,
    values: Vec<f64>,
}

impl PotentialSurface {
    /// Samples `system` with spacing `step` and the default margin.
    pub fn sample(system: &Lissajous, step: f64) -> Self {
        Self::sample_with_margin(system, step, SURFACE_MARGIN)
    }

    /// Samples `system` with spacing `step` over
    /// `[-(a + margin), a + margin]²`, both ends included.
    ///
    /// When that would take more than [`MAX_SURFACE_SIZE`] samples per axis
    /// the spacing is widened so that exactly [`MAX_SURFACE_SIZE`] are taken;
    /// [`PotentialSurface::step`] reports the spacing actually used.
    ///
    /// A non-positive or non-finite `step`, or a square too large to
    /// represent, yields an empty surface.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sample_with_margin(system: &Lissajous, step: f64, margin: f64) -> Self {
        let half = system.max_amplitude() + margin.max(0.0);
        let span = 2.0 * half;
        if !step.is_finite() || step <= 0.0 || !span.is_finite() {
            return Self {
                start: 0.0,
                step: 0.0,
                size: 0,
                values: Vec::new(),
            };
        }

        // Absorb rounding so that e.g. 3.0 / 0.1 still lands on 30 intervals.
        let requested = span / step + 1e-9;
        let max_intervals = MAX_SURFACE_SIZE - 1;
        let (intervals, step) = if requested < MAX_SURFACE_SIZE as f64 {
            (floor(requested) as usize, step)
        } else {
            (max_intervals, span / max_intervals as f64)
        };
        let size = intervals + 1;
        let start = -half;

        let mut values = Vec::with_capacity(size * size);
        for row in 0..size {
            let y = start + row as f64 * step;
            for col in 0..size {
                let x = start + col as f64 * step;
                values.push(system.potential_at(Point::new(x, y)));
            }
        }

        Self {
            start,
            step,
            size,
            values,
        }
    }

    /// Number of samples along each axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when nothing was sampled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid spacing.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// World coordinate of grid index `i` (same on both axes).
    #[inline]
    pub fn coordinate(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Half-width of the sampled square.
    #[inline]
    pub fn half_extent(&self) -> f64 {
        -self.start
    }

    /// Potential at grid cell `(col, row)`.
    pub fn value_at(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.size || row >= self.size {
            return None;
        }
        self.values.get(row * self.size + col).copied()
    }

    /// Rows of samples ordered by increasing `y`.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.size.max(1))
    }

    /// Smallest sampled value.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest sampled value.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}
