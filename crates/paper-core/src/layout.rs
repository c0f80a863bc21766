// File: crates/paper-core/src/layout.rs
// Summary: Physical layout; converts requested sheet size + margin into the canvas and usable rectangle.

use crate::axis::{AxisKind, AxisPlacement};
use crate::error::ConfigError;
use crate::geometry::RectMm;
use crate::types::Length;

/// Total physical size of the sheet, margins included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Canvas plus the usable rectangle inside its margin.
///
/// Coordinates are millimetres from the canvas bottom-left corner, y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    canvas: Canvas,
    usable: RectMm,
    margin_mm: f64,
}

impl Layout {
    /// Build a layout for a `width` × `height` grid surrounded by `margin_mm` on every side.
    ///
    /// Sizes are rounded to whole millimetres. Width and height must be positive,
    /// the margin non-negative.
    pub fn new(width: Length, height: Length, margin_mm: f64) -> Result<Self, ConfigError> {
        let width_mm = positive("width", width.to_whole_mm())?;
        let height_mm = positive("height", height.to_whole_mm())?;
        if !margin_mm.is_finite() || margin_mm < 0.0 {
            return Err(ConfigError::InvalidDimension {
                what: "margin",
                value: margin_mm,
                expected: "a finite, non-negative number of millimetres",
            });
        }

        let canvas = Canvas {
            width_mm: width_mm + 2.0 * margin_mm,
            height_mm: height_mm + 2.0 * margin_mm,
        };
        let usable = RectMm::from_lbwh(margin_mm, margin_mm, width_mm, height_mm);
        tracing::debug!(
            canvas_w = canvas.width_mm,
            canvas_h = canvas.height_mm,
            margin_mm,
            "layout computed"
        );
        Ok(Self { canvas, usable, margin_mm })
    }

    pub fn canvas(&self) -> Canvas { self.canvas }
    pub fn usable(&self) -> RectMm { self.usable }
    pub fn margin_mm(&self) -> f64 { self.margin_mm }

    /// Crossing position of the `kind` axis along the perpendicular dimension.
    ///
    /// The horizontal axis crosses at a height, the vertical one at a horizontal offset.
    /// Offsets are measured from the usable rectangle's near edge; the centre is the
    /// floored half span, so odd spans land on a whole millimetre.
    pub fn crossing(&self, kind: AxisKind, placement: AxisPlacement) -> Result<f64, ConfigError> {
        let (near, span) = match kind {
            AxisKind::Horizontal => (self.usable.bottom, self.usable.height()),
            AxisKind::Vertical => (self.usable.left, self.usable.width()),
        };
        match placement {
            AxisPlacement::Center => Ok(near + (span / 2.0).floor()),
            AxisPlacement::Offset(len) => {
                let off = len.to_mm();
                if !off.is_finite() {
                    return Err(ConfigError::InvalidDimension {
                        what: "axis position",
                        value: off,
                        expected: "finite",
                    });
                }
                Ok(near + off)
            }
        }
    }
}

fn positive(what: &'static str, v: f64) -> Result<f64, ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::InvalidDimension { what, value: v, expected: "a positive length of at least 1 mm" })
    }
}
