// File: crates/paper-core/src/axis.rs
// Summary: Axis model (placement, arrows, labels) and tick enumeration with edge exclusion.

use std::fmt;
use std::sync::Arc;

use crate::format::{DecimalFormat, TickFormat};
use crate::geometry::near;
use crate::types::Length;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// The x axis; crosses at a height.
    Horizontal,
    /// The y axis; crosses at a horizontal offset.
    Vertical,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "x",
            Self::Vertical => "y",
        })
    }
}

/// Where an axis line crosses the perpendicular dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AxisPlacement {
    /// Middle of the usable rectangle (floored to a whole mm).
    #[default]
    Center,
    /// Distance from the usable rectangle's bottom (x axis) or left (y axis) edge.
    Offset(Length),
}

/// What a tick label shows for multiple `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickValue {
    /// `n × scale`.
    #[default]
    Multiple,
    /// Physical distance in cm times the scale: `(n × graduation / 10) × scale`.
    Centimetres,
}

impl TickValue {
    pub fn value(self, n: i64, graduation_mm: f64, scale: f64) -> f64 {
        match self {
            Self::Multiple => n as f64 * scale,
            Self::Centimetres => (n as f64 * graduation_mm / 10.0) * scale,
        }
    }
}

/// Arrow extents beyond the usable rectangle, mm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Past the far edge (arrowhead side).
    pub overshoot_mm: f64,
    /// Before the near edge (tail side).
    pub tail_inset_mm: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self { overshoot_mm: 1.4, tail_inset_mm: 0.8 }
    }
}

/// Per-axis settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Name drawn past the arrowhead; empty hides it.
    pub label: String,
    /// Multiplier applied to displayed tick values. Must be > 0.
    pub scale: f64,
    pub position: AxisPlacement,
}

impl AxisSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), scale: 1.0, position: AxisPlacement::Center }
    }
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
    pub fn at(mut self, position: Length) -> Self {
        self.position = AxisPlacement::Offset(position);
        self
    }
}

/// Both axes plus the settings they share.
#[derive(Clone)]
pub struct AxesSpec {
    pub x: AxisSpec,
    pub y: AxisSpec,
    /// Physical distance between ticks, mm.
    pub graduation_mm: f64,
    pub arrow: ArrowStyle,
    pub tick_values: TickValue,
    pub format: Arc<dyn TickFormat>,
    /// Draw a "0" under the crossing point when the x axis did not label it already.
    pub origin_label: bool,
}

impl Default for AxesSpec {
    fn default() -> Self {
        Self {
            x: AxisSpec::new("x"),
            y: AxisSpec::new("y"),
            graduation_mm: 10.0,
            arrow: ArrowStyle::default(),
            tick_values: TickValue::Multiple,
            format: Arc::new(DecimalFormat::POINT),
            origin_label: true,
        }
    }
}

impl fmt::Debug for AxesSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxesSpec")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("graduation_mm", &self.graduation_mm)
            .field("arrow", &self.arrow)
            .field("tick_values", &self.tick_values)
            .field("origin_label", &self.origin_label)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Integer multiple of the graduation spacing, 0 at the crossing.
    pub multiple: i64,
    /// Absolute position along the axis, mm.
    pub pos_mm: f64,
    /// Displayed value before formatting.
    pub value: f64,
    pub label: String,
}

/// Resolved geometry of one visible axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub kind: AxisKind,
    /// Perpendicular offset of the axis line, mm.
    pub crossing_mm: f64,
    /// Arrow tail, along the axis, mm.
    pub tail_mm: f64,
    /// Arrow tip, along the axis, mm.
    pub tip_mm: f64,
    pub ticks: Vec<Tick>,
    pub label: String,
}

impl AxisLayout {
    /// Whether the tick at multiple 0 survived enumeration.
    pub fn has_zero_tick(&self) -> bool {
        self.ticks.iter().any(|t| t.multiple == 0)
    }
}

/// Multiples `n` whose position `origin + n*g` lies in `[near, far - g]`, minus edge ticks.
///
/// A tick on `near` is dropped unless it is the origin; a tick on `far` is always dropped.
pub fn tick_multiples(near_mm: f64, far_mm: f64, origin_mm: f64, graduation_mm: f64) -> Vec<(i64, f64)> {
    let n_min = ((near_mm - origin_mm) / graduation_mm).ceil() as i64;
    let n_max = ((far_mm - origin_mm - graduation_mm) / graduation_mm).floor() as i64;
    (n_min..=n_max)
        .map(|n| (n, origin_mm + n as f64 * graduation_mm))
        .filter(|&(n, pos)| !(near(pos, near_mm) && n != 0) && !near(pos, far_mm))
        .collect()
}
