// File: crates/paper-core/src/geometry.rs
// Summary: Millimetre-space rectangles and points (y axis pointing up).

use crate::types::EPS_MM;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMm {
    pub x: f64,
    pub y: f64,
}

impl PointMm {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

/// Axis-aligned rectangle in millimetres. `bottom < top`, since y grows upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectMm {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl RectMm {
    pub const fn from_lbrt(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self { left, bottom, right, top }
    }
    pub fn from_lbwh(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self { left, bottom, right: left + width, top: bottom + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.top - self.bottom }

    /// Inclusive containment.
    pub fn contains(&self, p: PointMm) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &RectMm) -> Self {
        Self::from_lbrt(
            self.left.min(other.left),
            self.bottom.min(other.bottom),
            self.right.max(other.right),
            self.top.max(other.top),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.bottom.is_finite() && self.right.is_finite() && self.top.is_finite()
    }

    /// Shrink every side by `d` mm.
    pub fn inset(&self, d: f64) -> Self {
        Self::from_lbrt(self.left + d, self.bottom + d, self.right - d, self.top - d)
    }
}

/// Equality within [`EPS_MM`].
#[inline]
pub fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS_MM
}
