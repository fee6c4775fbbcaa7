//! Live table of the quantities at the current animation instant.

use lissajous::Frame;

/// Row labels, in [`Frame::table_row`] order.
pub const LABELS: [&str; Frame::COLUMNS] = [
    "x [m]",
    "y [m]",
    "|v| [m/s]",
    "|a| [m/s²]",
    "Ek [J]",
    "Ep [J]",
    "r [m]",
];

const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 10;
const PRECISION: usize = 4;

/// Renders `frame` as labelled lines, preceded by the sample time.
///
/// The radius of curvature prints as `inf` when the trajectory is locally
/// straight.
pub fn render(frame: &Frame) -> Vec<String> {
    let row = frame.table_row();
    let mut lines = Vec::with_capacity(Frame::COLUMNS + 1);
    lines.push(format!(
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$.2}",
        "t [s]", frame.time
    ));

    for (i, (label, value)) in LABELS.iter().zip(row).enumerate() {
        let cell = if i == Frame::COLUMNS - 1 {
            format!("{:>VALUE_WIDTH$.PRECISION$}", frame.curvature)
        } else {
            format!("{value:>VALUE_WIDTH$.PRECISION$}")
        };
        lines.push(format!("{label:<LABEL_WIDTH$}{cell}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use lissajous::{Lissajous, Oscillator};

    #[test]
    fn seven_quantities_plus_time() {
        let frame = Lissajous::default().frame(0.0);
        let lines = render(&frame);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("t [s]"));
        for (line, label) in lines[1..].iter().zip(LABELS) {
            assert!(line.starts_with(label), "{line:?} vs {label:?}");
        }
    }

    #[test]
    fn unit_oscillator_values() {
        // Both axes in phase: x = y = 0, v = (1, 1)
        let frame = Lissajous::default().frame(0.0);
        let lines = render(&frame);
        assert!(lines[1].ends_with("0.0000"));
        assert!(lines[3].ends_with("1.4142"));
        assert!(lines[5].ends_with("1.0000"));
    }

    #[test]
    fn straight_motion_prints_inf() {
        let frame = Lissajous::default().frame(0.25);
        let lines = render(&frame);
        assert!(lines[7].ends_with("inf"), "{:?}", lines[7]);
    }

    #[test]
    fn curved_motion_prints_number() {
        let system = Lissajous::new(
            Oscillator::new(1.0, 1.0, 0.0),
            Oscillator::new(1.0, 1.0, std::f64::consts::FRAC_PI_2),
            1.0,
        );
        let lines = render(&system.frame(0.0));
        assert!(lines[7].ends_with("1.0000"), "{:?}", lines[7]);
    }
}
