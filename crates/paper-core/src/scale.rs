// File: crates/paper-core/src/scale.rs
// Summary: Logical (user unit) <-> millimetre transforms anchored at the axis crossing.

use crate::geometry::PointMm;

/// Logical coordinate in user units.
pub type Logical = f64;

/// One-dimensional affine map: `mm = origin_mm + value * mm_per_unit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// Position of logical 0, mm.
    pub origin_mm: f64,
    /// Physical length of one logical unit, mm.
    pub mm_per_unit: f64,
}

impl AxisScale {
    /// Scale where one graduation (`graduation_mm`) displays as `scale_factor` units.
    pub fn new(origin_mm: f64, graduation_mm: f64, scale_factor: f64) -> Self {
        Self { origin_mm, mm_per_unit: graduation_mm / scale_factor }
    }
    #[inline]
    pub fn to_mm(&self, v: Logical) -> f64 {
        self.origin_mm + v * self.mm_per_unit
    }
    #[inline]
    pub fn from_mm(&self, mm: f64) -> Logical {
        (mm - self.origin_mm) / self.mm_per_unit
    }
}

/// Pair of axis scales for the plane.
///
/// `x.origin_mm` is where the vertical axis stands, `y.origin_mm` the height of the
/// horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneScale {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl PlaneScale {
    #[inline]
    pub fn to_mm(&self, x: Logical, y: Logical) -> PointMm {
        PointMm::new(self.x.to_mm(x), self.y.to_mm(y))
    }
    #[inline]
    pub fn from_mm(&self, p: PointMm) -> (Logical, Logical) {
        (self.x.from_mm(p.x), self.y.from_mm(p.y))
    }
}
