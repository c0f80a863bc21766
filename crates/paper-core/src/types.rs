// File: crates/paper-core/src/types.rs
// Summary: Shared types and constants (physical units, resolution defaults, tolerances).

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Typographic points per inch; stroke widths and font sizes are in points.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default export resolution (print quality).
pub const DEFAULT_DPI: f32 = 600.0;
/// Largest raster side we agree to allocate, in pixels.
pub const MAX_RASTER_SIDE: u32 = 32_768;

/// Positional tolerance for "lands exactly on" comparisons, in mm.
pub const EPS_MM: f64 = 1e-6;

/// A physical length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Millimetres(f64),
    Centimetres(f64),
}

impl Length {
    pub const fn mm(v: f64) -> Self { Self::Millimetres(v) }
    pub const fn cm(v: f64) -> Self { Self::Centimetres(v) }

    /// Raw value converted to millimetres (no rounding).
    pub fn to_mm(self) -> f64 {
        match self {
            Self::Millimetres(v) => v,
            Self::Centimetres(v) => v * 10.0,
        }
    }

    /// Millimetres rounded to the nearest whole millimetre, ties to even.
    pub fn to_whole_mm(self) -> f64 {
        self.to_mm().round_ties_even()
    }
}

/// Label displacement from its anchor point, in mm (x right, y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub dx_mm: f64,
    pub dy_mm: f64,
}

impl Offset {
    pub const fn new(dx_mm: f64, dy_mm: f64) -> Self { Self { dx_mm, dy_mm } }
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// Pixels per millimetre at `dpi`.
#[inline]
pub fn px_per_mm(dpi: f32) -> f64 { dpi as f64 / MM_PER_INCH }

/// Pixels per typographic point at `dpi`.
#[inline]
pub fn px_per_pt(dpi: f32) -> f32 { dpi / POINTS_PER_INCH }
