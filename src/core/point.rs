//! 2D point type used for all map coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A point (or vector) in map pixel coordinates.
///
/// Coordinates are `f64` throughout; map pixels are not required to be
/// integral. Equality is exact component-wise comparison, which the
/// transformer relies on for its correspondence-point fast path.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate (column direction, in map pixels).
    pub x: f64,
    /// Y coordinate (row direction, in map pixels).
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    #[inline]
    pub fn midpoint(&self, other: Point2D) -> Point2D {
        Point2D::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Rotate this point around the origin by `angle` radians (CCW).
    #[inline]
    pub fn rotate(&self, angle: f64) -> Point2D {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Point2D::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Cross product (z-component of the 3D cross product).
    #[inline]
    pub fn cross(&self, other: Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: Point2D) -> Point2D {
        Point2D::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: Point2D) -> Point2D {
        Point2D::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Point2D::new(self.x / scalar, self.y / scalar)
    }
}

impl From<[f64; 2]> for Point2D {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Point2D::new(xy[0], xy[1])
    }
}
