// File: crates/paper-core/src/overlay.rs
// Summary: Labelled point markers and sampled function curves placed in logical coordinates.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use skia_safe as skia;

use crate::error::{BoxError, ConfigError, Error};
use crate::geometry::{PointMm, RectMm};
use crate::grid::linspace;
use crate::scale::PlaneScale;
use crate::types::Offset;

/// Default number of samples per function curve.
pub const DEFAULT_SAMPLES: usize = 500;
/// Inset applied to the usable rectangle when looking for a visible label anchor, mm.
const LABEL_INSET_MM: f64 = 0.5;

/// A named marker at a logical position.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMark {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub label_offset: Offset,
}

impl PointMark {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self { name: name.into(), x, y, label_offset: Offset::new(2.0, 2.0) }
    }
    pub fn with_label_offset(mut self, dx_mm: f64, dy_mm: f64) -> Self {
        self.label_offset = Offset::new(dx_mm, dy_mm);
        self
    }
}

/// Pure mapping from real to real. Called once per sample, in increasing x order.
pub type CurveFn = dyn Fn(f64) -> Result<f64, BoxError> + Send + Sync;

/// A named, coloured function drawn as a sampled polyline.
#[derive(Clone)]
pub struct FunctionCurve {
    pub name: String,
    func: Arc<CurveFn>,
    pub color: skia::Color,
    pub label_offset: Offset,
}

impl FunctionCurve {
    /// Curve for an infallible function. Non-finite outputs leave gaps.
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::fallible(name, move |x| Ok(f(x)))
    }

    /// Curve for a function that may fail; any failure aborts the render.
    pub fn fallible<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> Result<f64, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(f),
            color: skia::Color::BLACK,
            label_offset: Offset::ZERO,
        }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_label_offset(mut self, dx_mm: f64, dy_mm: f64) -> Self {
        self.label_offset = Offset::new(dx_mm, dy_mm);
        self
    }

    pub fn eval(&self, x: f64) -> Result<f64, BoxError> {
        (self.func)(x)
    }

    /// Evaluate over `samples` evenly spaced x values covering `usable`, mapped to mm.
    pub fn sample(&self, scale: &PlaneScale, usable: RectMm, samples: usize) -> Result<SampledCurve, Error> {
        let x0 = scale.x.from_mm(usable.left);
        let x1 = scale.x.from_mm(usable.right);
        let points = linspace(x0, x1, samples)
            .into_iter()
            .map(|x| {
                let y = self.eval(x).map_err(|source| Error::Evaluation { name: self.name.clone(), x, source })?;
                Ok(scale.to_mm(x, y))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(SampledCurve { name: self.name.clone(), color: self.color, label_offset: self.label_offset, points })
    }
}

impl fmt::Debug for FunctionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCurve")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("label_offset", &self.label_offset)
            .finish_non_exhaustive()
    }
}

/// Where a curve's name goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPlacement {
    /// At the middle sample.
    Middle,
    /// At the last sample comfortably inside the usable rectangle.
    #[default]
    RightmostVisible,
}

impl FromStr for LabelPlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "middle" => Ok(Self::Middle),
            "rightmost" | "rightmost-visible" => Ok(Self::RightmostVisible),
            _ => Err(ConfigError::UnknownOption {
                option: "label placement",
                value: s.to_string(),
                expected: "middle, rightmost",
            }),
        }
    }
}

/// A curve evaluated into millimetre positions. Non-finite samples mark gaps.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    pub name: String,
    pub color: skia::Color,
    pub label_offset: Offset,
    pub points: Vec<PointMm>,
}

impl SampledCurve {
    /// Continuous runs of finite samples.
    pub fn segments(&self) -> impl Iterator<Item = &[PointMm]> + '_ {
        self.points.split(|p| !p.is_finite()).filter(|run| !run.is_empty())
    }

    /// Sample the label is attached to, before applying the label offset.
    pub fn label_sample(&self, placement: LabelPlacement, usable: RectMm) -> Option<PointMm> {
        let idx = match placement {
            LabelPlacement::Middle => self.points.len() / 2,
            LabelPlacement::RightmostVisible => {
                let inner = usable.inset(LABEL_INSET_MM);
                self.points
                    .iter()
                    .rposition(|p| p.is_finite() && inner.contains(*p))
                    .unwrap_or(self.points.len().checked_sub(1)?)
            }
        };
        self.points.get(idx).copied().filter(PointMm::is_finite)
    }

    /// Label position with the curve's offset applied.
    pub fn label_anchor(&self, placement: LabelPlacement, usable: RectMm) -> Option<PointMm> {
        self.label_sample(placement, usable)
            .map(|p| PointMm::new(p.x + self.label_offset.dx_mm, p.y + self.label_offset.dy_mm))
    }
}
