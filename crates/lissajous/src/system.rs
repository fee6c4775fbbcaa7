//! Two perpendicular oscillators acting on one point mass.
//!
//! [`Lissajous`] bundles the parameters that a front-end collects (two
//! [`Oscillator`]s and a mass) and answers every question about the motion
//! through pure methods. Nothing is cached: [`Lissajous::frame`] can be called
//! for any instant in any order.
//!
//! # Example
//!
//! ```rust
//! use lissajous::{Lissajous, Oscillator, phase_from_sixths};
//!
//! let system = Lissajous::new(
//!     Oscillator::new(1.0, 1.0, 0.0),
//!     Oscillator::new(1.0, 1.0, phase_from_sixths(3.0)),
//!     1.0,
//! );
//!
//! // Equal frequencies with a quarter-period offset trace a circle.
//! let frame = system.frame(0.0);
//! assert!((frame.position.y - 1.0).abs() < 1e-12);
//! assert!((frame.total_energy() - 1.0).abs() < 1e-12);
//! ```

use alloc::vec::Vec;

use crate::geometry::{Point, Vector};
use crate::kinematics::{
    CurvatureRadius, curvature, displacement, kinetic_energy, osc_acceleration_magnitude,
    osc_speed, potential_energy,
};
use crate::math::ceil;

/// Most points [`Lissajous::trajectory`] returns.
pub const MAX_TRAJECTORY_SAMPLES: usize = 1_000_000;

/// One harmonic oscillation along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Maximum displacement, never negative.
    pub amplitude: f64,
    /// Angular frequency in rad/s, never negative.
    pub angular_frequency: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}

impl Oscillator {
    /// Creates an oscillator, clamping negative (or NaN) amplitude and
    /// frequency to zero.
    pub fn new(amplitude: f64, angular_frequency: f64, phase: f64) -> Self {
        Self {
            amplitude: amplitude.max(0.0),
            angular_frequency: angular_frequency.max(0.0),
            phase,
        }
    }

    /// Displacement at `time`.
    #[inline]
    pub fn displacement(&self, time: f64) -> f64 {
        displacement(self.amplitude, self.angular_frequency, time, self.phase)
    }

    /// Velocity at `time`.
    #[inline]
    pub fn velocity(&self, time: f64) -> f64 {
        osc_speed(time, self.angular_frequency, self.amplitude, self.phase)
    }

    /// Acceleration at `time`.
    #[inline]
    pub fn acceleration(&self, time: f64) -> f64 {
        osc_acceleration_magnitude(time, self.angular_frequency, self.amplitude, self.phase)
    }

    /// Potential energy of `mass` displaced by `x` along this axis.
    #[inline]
    pub fn potential_energy(&self, mass: f64, x: f64) -> f64 {
        potential_energy(mass, self.angular_frequency, x)
    }

    /// Period `2π/ω`, or `None` for a frozen oscillator.
    pub fn period(&self) -> Option<f64> {
        if self.angular_frequency > 0.0 {
            Some(core::f64::consts::TAU / self.angular_frequency)
        } else {
            None
        }
    }
}

/// Complete parameter set of the two-axis motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    /// Horizontal oscillation.
    pub x: Oscillator,
    /// Vertical oscillation.
    pub y: Oscillator,
    /// Mass of the moving point.
    pub mass: f64,
}

impl Default for Lissajous {
    fn default() -> Self {
        Self::new(Oscillator::default(), Oscillator::default(), 1.0)
    }
}

impl Lissajous {
    /// Creates a system from its two oscillators and the point mass.
    pub const fn new(x: Oscillator, y: Oscillator, mass: f64) -> Self {
        Self { x, y, mass }
    }

    /// Position at `time`.
    #[inline]
    pub fn position(&self, time: f64) -> Point {
        Point::new(self.x.displacement(time), self.y.displacement(time))
    }

    /// Velocity at `time`.
    #[inline]
    pub fn velocity(&self, time: f64) -> Vector {
        Vector::new(self.x.velocity(time), self.y.velocity(time))
    }

    /// Acceleration at `time`.
    #[inline]
    pub fn acceleration(&self, time: f64) -> Vector {
        Vector::new(self.x.acceleration(time), self.y.acceleration(time))
    }

    /// Potential energy at an arbitrary point of the plane.
    #[inline]
    pub fn potential_at(&self, p: Point) -> f64 {
        self.x.potential_energy(self.mass, p.x) + self.y.potential_energy(self.mass, p.y)
    }

    /// Larger of the two amplitudes.
    #[inline]
    pub fn max_amplitude(&self) -> f64 {
        self.x.amplitude.max(self.y.amplitude)
    }

    /// Every derived quantity at `time`.
    pub fn frame(&self, time: f64) -> Frame {
        let position = self.position(time);
        let velocity = self.velocity(time);
        let acceleration = self.acceleration(time);

        Frame {
            time,
            position,
            velocity,
            acceleration,
            kinetic_energy: kinetic_energy(self.mass, velocity.magnitude()),
            potential_energy: self.potential_at(position),
            curvature: curvature(velocity.x, velocity.y, acceleration.x, acceleration.y),
        }
    }

    /// Samples the trajectory at `0, step, 2·step, …` strictly below
    /// `duration`.
    ///
    /// Spans that would need more than [`MAX_TRAJECTORY_SAMPLES`] points are
    /// sampled with the wider step `duration / MAX_TRAJECTORY_SAMPLES`
    /// instead, so the whole span is still covered.
    ///
    /// Returns an empty curve when `step` or `duration` is not a positive,
    /// finite number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn trajectory(&self, duration: f64, step: f64) -> Vec<Point> {
        if !step.is_finite() || !duration.is_finite() || step <= 0.0 || duration <= 0.0 {
            return Vec::new();
        }

        let requested = duration / step;
        let (samples, step) = if requested <= MAX_TRAJECTORY_SAMPLES as f64 {
            (ceil(requested) as usize, step)
        } else {
            (
                MAX_TRAJECTORY_SAMPLES,
                duration / MAX_TRAJECTORY_SAMPLES as f64,
            )
        };
        (0..samples)
            .map(|i| self.position(i as f64 * step))
            .collect()
    }
}

/// Snapshot of the motion at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Sample instant.
    pub time: f64,
    /// Position `(x, y)`.
    pub position: Point,
    /// Velocity `(vx, vy)`.
    pub velocity: Vector,
    /// Acceleration `(ax, ay)`.
    pub acceleration: Vector,
    /// `m |v|² / 2`.
    pub kinetic_energy: f64,
    /// Sum of both axis potentials.
    pub potential_energy: f64,
    /// Radius of curvature of the trajectory.
    pub curvature: CurvatureRadius,
}

impl Frame {
    /// Number of scalars in [`Frame::table_row`].
    pub const COLUMNS: usize = 7;

    /// Length of the velocity vector.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Length of the acceleration vector.
    #[inline]
    pub fn acceleration_magnitude(&self) -> f64 {
        self.acceleration.magnitude()
    }

    /// Kinetic plus potential energy.
    #[inline]
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }

    /// `x, y, |v|, |a|, Ek, Ep, r` in display order; an infinite curvature
    /// radius is reported as `f64::INFINITY`.
    pub fn table_row(&self) -> [f64; Self::COLUMNS] {
        [
            self.position.x,
            self.position.y,
            self.speed(),
            self.acceleration_magnitude(),
            self.kinetic_energy,
            self.potential_energy,
            self.curvature.to_f64(),
        ]
    }
}
