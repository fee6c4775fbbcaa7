//! Closed-form kinematics of a single undamped harmonic oscillator.
//!
//! Every function here is the analytic solution of `x'' + ω²x = 0`, so no
//! integration step or hidden state is involved: the same inputs always give
//! the same output.
//!
//! The displacement convention is
//!
//! ```text
//! x(t)  =  A sin(ωt + φ)
//! x'(t) =  Aω cos(ωt + φ)
//! x''(t) = -Aω² sin(ωt + φ)
//! ```
//!
//! The phase `φ` is always an explicit argument, so displacement, velocity and
//! acceleration sampled at the same instant describe the same state.

use core::fmt;

use crate::geometry::Vector;
use crate::math::{abs, cos, sin, sqrt};

/// Returns a time delta for a given number of frames per second.
///
/// # Example
///
/// ```rust
/// use lissajous::fps;
///
/// assert!((fps(50) - 0.02).abs() < 1e-12);
/// ```
#[inline]
pub fn fps(n: u32) -> f64 {
    1.0 / f64::from(n)
}

/// Converts a phase given in multiples of π/6 to radians.
///
/// The interactive front-end takes the phase difference in sixths of π, so
/// `3` means a quarter period (π/2).
///
/// ```rust
/// use lissajous::phase_from_sixths;
///
/// let phi = phase_from_sixths(3.0);
/// assert!((phi - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
pub fn phase_from_sixths(sixths: f64) -> f64 {
    core::f64::consts::FRAC_PI_6 * sixths
}

/// Kinetic energy `m v² / 2`.
///
/// ```rust
/// use lissajous::kinetic_energy;
///
/// assert_eq!(kinetic_energy(2.0, 3.0), 9.0);
/// ```
#[inline]
pub fn kinetic_energy(mass: f64, speed: f64) -> f64 {
    mass * speed * speed / 2.0
}

/// Harmonic potential energy `m (ω x)² / 2`.
///
/// The spring constant is folded into the angular frequency (`k = m ω²`).
#[inline]
pub fn potential_energy(mass: f64, angular_frequency: f64, displacement: f64) -> f64 {
    let wx = angular_frequency * displacement;
    mass * wx * wx / 2.0
}

/// Displacement `A sin(ωt + φ)`.
///
/// ```rust
/// use lissajous::displacement;
///
/// let x = displacement(2.0, core::f64::consts::PI, 0.5, 0.0);
/// assert!((x - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn displacement(amplitude: f64, angular_frequency: f64, time: f64, phase: f64) -> f64 {
    amplitude * sin(angular_frequency * time + phase)
}

/// Velocity `Aω cos(ωt + φ)`, the time derivative of [`displacement`].
///
/// The result is signed; it is the velocity component along the axis.
#[inline]
pub fn osc_speed(time: f64, angular_frequency: f64, amplitude: f64, phase: f64) -> f64 {
    amplitude * angular_frequency * cos(angular_frequency * time + phase)
}

/// Acceleration `-Aω² sin(ωt + φ)`, the second time derivative of
/// [`displacement`].
///
/// Despite the name the result is signed, matching [`osc_speed`].
#[inline]
pub fn osc_acceleration_magnitude(
    time: f64,
    angular_frequency: f64,
    amplitude: f64,
    phase: f64,
) -> f64 {
    -amplitude * angular_frequency * angular_frequency * sin(angular_frequency * time + phase)
}

/// Radius of curvature of a planar trajectory at one instant.
///
/// A trajectory that is momentarily straight (or not moving at all) has no
/// finite osculating circle; that case is the [`CurvatureRadius::Infinite`]
/// variant rather than a division by zero. Check for it before using the
/// value numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurvatureRadius {
    /// The computed radius.
    ///
    /// Non-negative, but the value saturates to `f64::INFINITY` when the true
    /// radius exceeds `f64::MAX` and to `0.0` when it is below the smallest
    /// subnormal. Both are limits of the float range, not straight motion.
    Finite(f64),
    /// `vx*ay - vy*ax` was exactly zero.
    Infinite,
}

impl CurvatureRadius {
    /// Returns the radius, or `None` for the infinite case.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(r) => Some(r),
            Self::Infinite => None,
        }
    }

    /// Returns `true` when the trajectory is locally straight.
    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the radius as a float, mapping the sentinel to `f64::INFINITY`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.finite().unwrap_or(f64::INFINITY)
    }
}

impl fmt::Display for CurvatureRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(r) => fmt::Display::fmt(r, f),
            Self::Infinite => f.pad("inf"),
        }
    }
}

/// Radius of curvature `(vx² + vy²)^1.5 / |vx ay - vy ax|`.
///
/// Returns [`CurvatureRadius::Infinite`] exactly when the cross product
/// `vx*ay - vy*ax` is zero. A non-zero cross product always gives
/// [`CurvatureRadius::Finite`], even when the radius overflows to infinity or
/// underflows to zero in `f64`.
///
/// ```rust
/// use lissajous::{curvature, CurvatureRadius};
///
/// // Uniform circular motion of radius 2 at unit angular frequency.
/// assert_eq!(curvature(0.0, 2.0, -2.0, 0.0), CurvatureRadius::Finite(2.0));
///
/// // Straight-line motion.
/// assert_eq!(curvature(1.0, 1.0, 2.0, 2.0), CurvatureRadius::Infinite);
/// ```
pub fn curvature(vx: f64, vy: f64, ax: f64, ay: f64) -> CurvatureRadius {
    let velocity = Vector::new(vx, vy);
    let cross = velocity.cross(Vector::new(ax, ay));
    if cross == 0.0 {
        return CurvatureRadius::Infinite;
    }

    let speed_sq = velocity.magnitude_squared();
    CurvatureRadius::Finite(speed_sq * sqrt(speed_sq) / abs(cross))
}
