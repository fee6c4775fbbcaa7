//! Braille plotting surface.
//!
//! Each terminal cell holds a 2×4 grid of braille dots, which gives a
//! resolution high enough to draw smooth Lissajous curves in a terminal.
//! World coordinates are mapped through a [`Bounds`] viewport with `y`
//! pointing up.

use lissajous::{Bounds, Point};

const BRAILLE_BASE: u32 = 0x2800;
const DOTS_X: usize = 2;
const DOTS_Y: usize = 4;

// Braille dot positions:
// 0 3
// 1 4
// 2 5
// 6 7
const DOT_BITS: [[u8; DOTS_X]; DOTS_Y] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// A fixed-size braille canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    bounds: Bounds,
    cells: Vec<u8>,
    markers: Vec<Option<char>>,
}

impl Canvas {
    /// Creates a blank canvas of `cols × rows` cells showing `bounds`.
    pub fn new(cols: usize, rows: usize, bounds: Bounds) -> Self {
        Self {
            cols,
            rows,
            bounds,
            cells: vec![0; cols * rows],
            markers: vec![None; cols * rows],
        }
    }

    /// Width/height ratio of the dot grid, for [`Bounds::equalized`].
    ///
    /// Braille dots are roughly square, so this is also the ratio of the
    /// visible drawing area.
    #[allow(clippy::cast_precision_loss)]
    pub fn dot_aspect(cols: usize, rows: usize) -> f64 {
        if rows == 0 {
            return 1.0;
        }
        (cols * DOTS_X) as f64 / (rows * DOTS_Y) as f64
    }

    fn dots_wide(&self) -> usize {
        self.cols * DOTS_X
    }

    fn dots_high(&self) -> usize {
        self.rows * DOTS_Y
    }

    /// Maps a world point to dot coordinates, `None` when outside.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn to_dot(&self, p: Point) -> Option<(usize, usize)> {
        if self.cols == 0 || self.rows == 0 || !self.bounds.contains(p) {
            return None;
        }
        let width = self.bounds.width();
        let height = self.bounds.height();
        let fx = if width > 0.0 {
            (p.x - self.bounds.min_x) / width
        } else {
            0.5
        };
        let fy = if height > 0.0 {
            (self.bounds.max_y - p.y) / height
        } else {
            0.5
        };

        let dx = (fx * (self.dots_wide() - 1) as f64).round() as usize;
        let dy = (fy * (self.dots_high() - 1) as f64).round() as usize;
        Some((dx.min(self.dots_wide() - 1), dy.min(self.dots_high() - 1)))
    }

    fn set_dot(&mut self, dx: usize, dy: usize) {
        let idx = (dy / DOTS_Y) * self.cols + dx / DOTS_X;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell |= DOT_BITS[dy % DOTS_Y][dx % DOTS_X];
        }
    }

    /// Sets the dot under `p`.
    pub fn plot(&mut self, p: Point) {
        if let Some((dx, dy)) = self.to_dot(p) {
            self.set_dot(dx, dy);
        }
    }

    /// Draws a polyline, joining consecutive samples so that sparse sampling
    /// still renders as a connected curve.
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn plot_curve<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        let mut prev: Option<(usize, usize)> = None;
        for p in points {
            let Some(dot) = self.to_dot(p) else {
                prev = None;
                continue;
            };

            match prev {
                Some((px, py)) => {
                    let (x0, y0) = (px as isize, py as isize);
                    let (x1, y1) = (dot.0 as isize, dot.1 as isize);
                    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
                    for s in 1..=steps {
                        let x = x0 + (x1 - x0) * s / steps;
                        let y = y0 + (y1 - y0) * s / steps;
                        self.set_dot(x as usize, y as usize);
                    }
                }
                None => self.set_dot(dot.0, dot.1),
            }
            prev = Some(dot);
        }
    }

    /// Replaces the cell under `p` with `marker`.
    pub fn mark(&mut self, p: Point, marker: char) {
        if let Some((dx, dy)) = self.to_dot(p) {
            let idx = (dy / DOTS_Y) * self.cols + dx / DOTS_X;
            if let Some(slot) = self.markers.get_mut(idx) {
                *slot = Some(marker);
            }
        }
    }

    /// Renders one string per cell row.
    pub fn render(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let idx = row * self.cols + col;
                        if let Some(marker) = self.markers[idx] {
                            return marker;
                        }
                        match self.cells[idx] {
                            0 => ' ',
                            bits => char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' '),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
