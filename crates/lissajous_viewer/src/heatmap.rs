//! Shaded rendering of the potential surface.
//!
//! The terminal cannot show a 3-D surface, so the potential is drawn from
//! above as a character heatmap: blank at the minimum, densest glyph at the
//! maximum.

use lissajous::PotentialSurface;

/// Glyphs from lowest to highest potential.
pub const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Renders `surface` into at most `cols × rows` cells.
///
/// The grid is square in world units and terminal cells are about twice as
/// tall as wide, so two columns are used per row to keep the aspect. Rows are
/// emitted top (largest `y`) first.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render(surface: &PotentialSurface, cols: usize, rows: usize) -> Vec<String> {
    let side = rows.min(cols / 2);
    if surface.is_empty() || side == 0 {
        return Vec::new();
    }

    let (Some(min), Some(max)) = (surface.min(), surface.max()) else {
        return Vec::new();
    };
    let span = max - min;
    let last = surface.size() - 1;
    let levels = RAMP.len() - 1;

    let sample = |i: usize, count: usize| -> usize {
        if count <= 1 {
            return last / 2;
        }
        ((i as f64 / (count - 1) as f64) * last as f64).round() as usize
    };

    (0..side)
        .map(|r| {
            let grid_row = last - sample(r, side);
            (0..side * 2)
                .map(|c| {
                    let grid_col = sample(c, side * 2);
                    let value = surface.value_at(grid_col, grid_row).unwrap_or(min);
                    let level = if span > 0.0 {
                        (((value - min) / span) * levels as f64).round() as usize
                    } else {
                        0
                    };
                    RAMP[level.min(levels)]
                })
                .collect()
        })
        .collect()
}
