//! Plane geometry in canvas pixel space.
//!
//! The editor has no camera: canvas pixels are the only coordinate system, and
//! real-world lengths come from multiplying by the session's metres-per-pixel.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Vector from `origin` to this point.
    #[must_use]
    pub fn minus(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

/// Sum of segment lengths along `points`. Zero for fewer than two points.
#[must_use]
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Axis-aligned rectangle in pixel space with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelRect {
    /// Rectangle spanned by two opposite corners, in any drag direction.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x: a.x.min(b.x), y: a.y.min(b.y), w: (b.x - a.x).abs(), h: (b.y - a.y).abs() }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether both sides are strictly longer than `min_px`.
    #[must_use]
    pub fn exceeds(&self, min_px: f64) -> bool {
        self.w > min_px && self.h > min_px
    }

    /// Real-world size at `meters_per_pixel`.
    #[must_use]
    pub fn to_real(&self, meters_per_pixel: f64) -> RealRect {
        RealRect { width_m: self.w * meters_per_pixel, height_m: self.h * meters_per_pixel }
    }
}

/// Real-world size of a drawn rectangle, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealRect {
    pub width_m: f64,
    pub height_m: f64,
}

impl RealRect {
    #[must_use]
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }
}
