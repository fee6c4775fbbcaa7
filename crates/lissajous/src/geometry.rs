//! Planar points, vectors and extents.
//!
//! # Example
//!
//! ```rust
//! use lissajous::{Bounds, Point, Vector};
//!
//! let v = Vector::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let bounds = Bounds::of([Point::new(-1.0, 0.0), Point::new(2.0, 3.0)]).unwrap();
//! assert_eq!(bounds.width(), 3.0);
//! ```

use crate::math::sqrt;

/// A point in the oscillation plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A planar vector (velocity, acceleration, offset).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        sqrt(self.magnitude_squared())
    }

    /// Returns the z component of the 3D cross product `self × other`.
    #[inline]
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

/// Axis-aligned extents of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x.
    pub min_x: f64,
    /// Largest x.
    pub max_x: f64,
    /// Smallest y.
    pub min_y: f64,
    /// Largest y.
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from explicit extents.
    #[inline]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Square bounds `[-half, half]²` centred on the origin.
    #[inline]
    pub const fn symmetric(half: f64) -> Self {
        Self::new(-half, half, -half, half)
    }

    /// Smallest bounds containing every point, or `None` for an empty input.
    ///
    /// Non-finite coordinates are skipped.
    pub fn of<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(None, |acc: Option<Self>, p| {
                Some(match acc {
                    None => Self::new(p.x, p.x, p.y, p.y),
                    Some(b) => Self::new(
                        b.min_x.min(p.x),
                        b.max_x.max(p.x),
                        b.min_y.min(p.y),
                        b.max_y.max(p.y),
                    ),
                })
            })
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Centre of the box.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows every side by `margin`.
    pub fn padded(&self, margin: f64) -> Self {
        Self::new(
            self.min_x - margin,
            self.max_x + margin,
            self.min_y - margin,
            self.max_y + margin,
        )
    }

    /// Widens the shorter axis so both axes share one scale and the box keeps
    /// its centre. `aspect` is the width/height ratio of the drawing surface.
    ///
    /// Degenerate (zero-size) boxes are first grown to a unit extent so a
    /// point or a line still gets a usable viewport.
    pub fn equalized(&self, aspect: f64) -> Self {
        let center = self.center();
        let mut width = self.width();
        let mut height = self.height();
        if width <= 0.0 && height <= 0.0 {
            width = 1.0;
            height = 1.0;
        }

        let aspect = if aspect > 0.0 { aspect } else { 1.0 };
        if width < height * aspect {
            width = height * aspect;
        } else {
            height = width / aspect;
        }

        Self::new(
            center.x - width / 2.0,
            center.x + width / 2.0,
            center.y - height / 2.0,
            center.y + height / 2.0,
        )
    }

    /// Returns `true` when `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
