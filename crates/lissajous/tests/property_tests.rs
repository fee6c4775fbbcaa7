#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::float_cmp)]

use lissajous::{
    CurvatureRadius, Lissajous, Oscillator, curvature, displacement, kinetic_energy,
    osc_acceleration_magnitude, osc_speed, potential_energy,
};
use proptest::prelude::*;

// =============================================================================
// Energy formulas
// =============================================================================

proptest! {
    #[test]
    fn kinetic_energy_matches_formula(
        mass in 0.0f64..1e3,
        speed in -1e3f64..1e3,
    ) {
        prop_assert_eq!(kinetic_energy(mass, speed), mass * speed * speed / 2.0);
    }

    #[test]
    fn kinetic_energy_non_decreasing_in_speed(
        mass in 0.0f64..1e3,
        a in -1e3f64..1e3,
        b in -1e3f64..1e3,
    ) {
        let (slow, fast) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        prop_assert!(
            kinetic_energy(mass, slow) <= kinetic_energy(mass, fast),
            "Ek({}) > Ek({}) for m={}",
            slow, fast, mass
        );
    }

    #[test]
    fn potential_energy_is_even(
        mass in 0.0f64..1e3,
        omega in -1e2f64..1e2,
        x in -1e3f64..1e3,
    ) {
        prop_assert_eq!(
            potential_energy(mass, omega, x),
            potential_energy(mass, omega, -x)
        );
    }
}

// =============================================================================
// Derivative consistency
// =============================================================================

proptest! {
    #[test]
    fn displacement_starts_at_zero(
        amplitude in -1e3f64..1e3,
        omega in -1e3f64..1e3,
    ) {
        prop_assert_eq!(displacement(amplitude, omega, 0.0, 0.0), 0.0);
    }

    #[test]
    fn speed_is_first_derivative(
        amplitude in 0.0f64..5.0,
        omega in 0.0f64..5.0,
        phase in -3.2f64..3.2,
    ) {
        let h = 1e-4;
        for i in 0..200 {
            let t = f64::from(i) * 0.1;
            let numeric = (displacement(amplitude, omega, t + h, phase)
                - displacement(amplitude, omega, t - h, phase))
                / (2.0 * h);
            let analytic = osc_speed(t, omega, amplitude, phase);
            prop_assert!(
                (numeric - analytic).abs() < 1e-3,
                "t={}: numeric={} analytic={}",
                t, numeric, analytic
            );
        }
    }

    #[test]
    fn acceleration_is_second_derivative(
        amplitude in 0.0f64..5.0,
        omega in 0.0f64..5.0,
        phase in -3.2f64..3.2,
    ) {
        let h = 1e-3;
        for i in 0..200 {
            let t = f64::from(i) * 0.1;
            let numeric = (displacement(amplitude, omega, t + h, phase)
                - 2.0 * displacement(amplitude, omega, t, phase)
                + displacement(amplitude, omega, t - h, phase))
                / (h * h);
            let analytic = osc_acceleration_magnitude(t, omega, amplitude, phase);
            prop_assert!(
                (numeric - analytic).abs() < 1e-3,
                "t={}: numeric={} analytic={}",
                t, numeric, analytic
            );
        }
    }

    #[test]
    fn acceleration_is_derivative_of_speed(
        amplitude in 0.0f64..5.0,
        omega in 0.0f64..5.0,
        phase in -3.2f64..3.2,
        t in 0.0f64..50.0,
    ) {
        let h = 1e-4;
        let numeric = (osc_speed(t + h, omega, amplitude, phase)
            - osc_speed(t - h, omega, amplitude, phase))
            / (2.0 * h);
        let analytic = osc_acceleration_magnitude(t, omega, amplitude, phase);
        prop_assert!((numeric - analytic).abs() < 1e-3);
    }
}

// =============================================================================
// Curvature
// =============================================================================

proptest! {
    #[test]
    fn curvature_sentinel_iff_zero_cross_product(
        vx in -100.0f64..100.0,
        vy in -100.0f64..100.0,
        ax in -100.0f64..100.0,
        ay in -100.0f64..100.0,
    ) {
        let cross = vx * ay - vy * ax;
        match curvature(vx, vy, ax, ay) {
            CurvatureRadius::Infinite => prop_assert_eq!(cross, 0.0),
            CurvatureRadius::Finite(r) => {
                prop_assert!(cross != 0.0);
                prop_assert!(r.is_finite() && r > 0.0, "r = {}", r);
            }
        }
    }

    #[test]
    fn parallel_motion_has_no_curvature(
        vx in -100.0f64..100.0,
        vy in -100.0f64..100.0,
    ) {
        // Acceleration along the velocity: a = 2v
        prop_assert_eq!(
            curvature(vx, vy, 2.0 * vx, 2.0 * vy),
            CurvatureRadius::Infinite
        );
    }
}

// =============================================================================
// Two-axis system
// =============================================================================

fn system_strategy() -> impl Strategy<Value = Lissajous> {
    (
        0.0f64..5.0,
        0.0f64..5.0,
        -3.2f64..3.2,
        0.0f64..5.0,
        0.0f64..5.0,
        -3.2f64..3.2,
        0.1f64..10.0,
    )
        .prop_map(|(ax, wx, px, ay, wy, py, mass)| {
            Lissajous::new(
                Oscillator::new(ax, wx, px),
                Oscillator::new(ay, wy, py),
                mass,
            )
        })
}

proptest! {
    #[test]
    fn total_energy_is_conserved(
        system in system_strategy(),
        t in 0.0f64..100.0,
    ) {
        let initial = system.frame(0.0).total_energy();
        let later = system.frame(t).total_energy();
        let scale = initial.abs().max(1.0);
        prop_assert!(
            (initial - later).abs() < 1e-9 * scale,
            "E(0)={} E({})={}",
            initial, t, later
        );
    }

    #[test]
    fn frame_uses_one_phase_convention(
        system in system_strategy(),
        t in 0.0f64..100.0,
    ) {
        let frame = system.frame(t);
        let (x, y) = (system.x, system.y);

        prop_assert_eq!(frame.position.x, displacement(x.amplitude, x.angular_frequency, t, x.phase));
        prop_assert_eq!(frame.position.y, displacement(y.amplitude, y.angular_frequency, t, y.phase));
        prop_assert_eq!(frame.velocity.x, osc_speed(t, x.angular_frequency, x.amplitude, x.phase));
        prop_assert_eq!(frame.velocity.y, osc_speed(t, y.angular_frequency, y.amplitude, y.phase));
        prop_assert_eq!(
            frame.acceleration.y,
            osc_acceleration_magnitude(t, y.angular_frequency, y.amplitude, y.phase)
        );
        prop_assert_eq!(
            frame.curvature,
            curvature(frame.velocity.x, frame.velocity.y, frame.acceleration.x, frame.acceleration.y)
        );
    }

    #[test]
    fn frame_is_independent_of_call_order(
        system in system_strategy(),
        t1 in 0.0f64..100.0,
        t2 in 0.0f64..100.0,
    ) {
        let first = system.frame(t1);
        let _ = system.frame(t2);
        prop_assert_eq!(first, system.frame(t1));
    }

    #[test]
    fn trajectory_stays_within_amplitudes(
        system in system_strategy(),
    ) {
        for p in system.trajectory(20.0, 0.05) {
            prop_assert!(p.x.abs() <= system.x.amplitude + 1e-12);
            prop_assert!(p.y.abs() <= system.y.amplitude + 1e-12);
        }
    }
}
