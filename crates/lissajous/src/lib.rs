#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

//! # Lissajous
//!
//! Closed-form kinematics of a point mass driven by two perpendicular,
//! undamped harmonic oscillations.
//!
//! The crate provides:
//! - **Formulas**: displacement, velocity, acceleration, energies and the
//!   radius of curvature, each a pure function of its arguments
//! - **[`Lissajous`]**: the two-axis parameter set with a `frame(t)` query
//!   returning every derived quantity at once
//! - **[`PotentialSurface`]**: the potential sampled over a square grid
//!
//! ## Example
//!
//! ```rust
//! use lissajous::{Lissajous, Oscillator, fps, phase_from_sixths};
//!
//! let system = Lissajous::new(
//!     Oscillator::new(1.0, 1.0, 0.0),
//!     Oscillator::new(1.0, 2.0, phase_from_sixths(3.0)),
//!     1.0,
//! );
//!
//! // Drive it from an animation loop at 50 FPS.
//! let dt = fps(50);
//! for tick in 0..100 {
//!     let frame = system.frame(f64::from(tick) * dt);
//!     let [x, y, speed, accel, ek, ep, r] = frame.table_row();
//!     assert!(x.abs() <= 1.0 && y.abs() <= 1.0);
//!     assert!(speed >= 0.0 && accel >= 0.0 && ek >= 0.0 && ep >= 0.0);
//!     assert!(r > 0.0);
//! }
//! ```
//!
//! ## Conventions
//!
//! - Displacement is `A sin(ωt + φ)`; the phase is explicit on every call.
//! - The spring constant is folded into the angular frequency (`k = m ω²`).
//! - A locally straight trajectory has an infinite radius of curvature,
//!   reported as [`CurvatureRadius::Infinite`].

extern crate alloc;

mod geometry;
mod kinematics;
mod math;
mod surface;
mod system;

pub use geometry::{Bounds, Point, Vector};
pub use kinematics::{
    CurvatureRadius, curvature, displacement, fps, kinetic_energy, osc_acceleration_magnitude,
    osc_speed, phase_from_sixths, potential_energy,
};
pub use surface::{MAX_SURFACE_SIZE, PotentialSurface, SURFACE_MARGIN, SURFACE_STEP};
pub use system::{Frame, Lissajous, MAX_TRAJECTORY_SAMPLES, Oscillator};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::geometry::{Bounds, Point, Vector};
    pub use crate::kinematics::{CurvatureRadius, fps, phase_from_sixths};
    pub use crate::surface::PotentialSurface;
    pub use crate::system::{Frame, Lissajous, Oscillator};
}
