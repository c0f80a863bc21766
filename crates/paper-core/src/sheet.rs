// File: crates/paper-core/src/sheet.rs
// Summary: Sheet configuration (validated once), derived geometry, and the render entry points.

use std::path::Path;

use skia_safe as skia;

use crate::axis::{tick_multiples, AxesSpec, AxisKind, AxisLayout, Tick};
use crate::error::{ConfigError, Error, Result};
use crate::export::Raster;
use crate::geometry::PointMm;
use crate::grid::{grid_lines, step_mm, GridLine};
use crate::layout::Layout;
use crate::overlay::{FunctionCurve, LabelPlacement, PointMark, SampledCurve, DEFAULT_SAMPLES};
use crate::render;
use crate::scale::{AxisScale, PlaneScale};
use crate::text::TextShaper;
use crate::theme::Palette;
use crate::types::{px_per_mm, Length, DEFAULT_DPI, MAX_RASTER_SIDE};

/// Distance between the crossing point and the origin "0" label, mm.
pub(crate) const LABEL_GAP_MM: f64 = 3.0;

/// Raster settings; everything that does not change the geometry.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub dpi: f32,
    pub palette: Palette,
    /// Skip all text (tick values, names). Useful for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI, palette: Palette::default(), draw_labels: true }
    }
}

/// Everything a sheet can be asked to show. Turn it into a [`Sheet`] with [`SheetSpec::build`].
#[derive(Clone, Debug)]
pub struct SheetSpec {
    /// Usable grid width (default 20 cm).
    pub width: Length,
    /// Usable grid height (default 20 cm).
    pub height: Length,
    /// Blank border on every side, mm (default 10).
    pub margin_mm: f64,
    /// Grid lines per 10 mm (default 10, i.e. millimetre paper). `<= 0` draws centimetres only.
    pub subdivisions: i32,
    /// Arrowed axes; `None` gives plain grid paper.
    pub axes: Option<AxesSpec>,
    pub points: Vec<PointMark>,
    pub curves: Vec<FunctionCurve>,
    pub label_placement: LabelPlacement,
    /// Samples per function curve (default 500).
    pub samples: usize,
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            width: Length::cm(20.0),
            height: Length::cm(20.0),
            margin_mm: 10.0,
            subdivisions: 10,
            axes: None,
            points: Vec::new(),
            curves: Vec::new(),
            label_placement: LabelPlacement::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl SheetSpec {
    /// Plain grid paper of the given size.
    pub fn grid(width: Length, height: Length, margin_mm: f64) -> Self {
        Self { width, height, margin_mm, ..Self::default() }
    }

    pub fn with_axes(mut self, axes: AxesSpec) -> Self {
        self.axes = Some(axes);
        self
    }

    pub fn point(mut self, p: PointMark) -> Self {
        self.points.push(p);
        self
    }

    pub fn curve(mut self, c: FunctionCurve) -> Self {
        self.curves.push(c);
        self
    }

    /// Validate and resolve positions.
    pub fn build(self) -> Result<Sheet, ConfigError> {
        let layout = Layout::new(self.width, self.height, self.margin_mm)?;
        let span_mm = layout.usable().width().max(layout.usable().height());
        check_density("grid line", step_mm(self.subdivisions), span_mm)?;

        let axes = match self.axes {
            Some(spec) => {
                for (kind, scale) in [(AxisKind::Horizontal, spec.x.scale), (AxisKind::Vertical, spec.y.scale)] {
                    if !scale.is_finite() || scale <= 0.0 {
                        return Err(ConfigError::InvalidScale { axis: kind, value: scale });
                    }
                }
                if !spec.graduation_mm.is_finite() || spec.graduation_mm <= 0.0 {
                    return Err(ConfigError::InvalidGraduation { value: spec.graduation_mm });
                }
                check_density("tick", spec.graduation_mm, span_mm)?;
                let x_axis_at = layout.crossing(AxisKind::Horizontal, spec.x.position)?;
                let y_axis_at = layout.crossing(AxisKind::Vertical, spec.y.position)?;
                Some(ResolvedAxes { spec, x_axis_at, y_axis_at })
            }
            None if !self.points.is_empty() || !self.curves.is_empty() => {
                return Err(ConfigError::OverlayWithoutAxes);
            }
            None => None,
        };

        if !self.curves.is_empty() && self.samples < 2 {
            return Err(ConfigError::InvalidSampleCount { value: self.samples });
        }

        Ok(Sheet {
            layout,
            subdivisions: self.subdivisions,
            axes,
            points: self.points,
            curves: self.curves,
            label_placement: self.label_placement,
            samples: self.samples,
        })
    }
}

/// Refuse spacings that would enumerate more lines per side than a raster could show.
fn check_density(what: &'static str, spacing_mm: f64, span_mm: f64) -> Result<(), ConfigError> {
    let count = span_mm / spacing_mm;
    if count > MAX_RASTER_SIDE as f64 {
        return Err(ConfigError::TooDense { what, spacing_mm, span_mm, count, limit: MAX_RASTER_SIDE });
    }
    Ok(())
}

#[derive(Clone, Debug)]
struct ResolvedAxes {
    spec: AxesSpec,
    /// Height of the horizontal axis, mm.
    x_axis_at: f64,
    /// Horizontal offset of the vertical axis, mm.
    y_axis_at: f64,
}

/// A validated, immutable sheet.
#[derive(Clone, Debug)]
pub struct Sheet {
    layout: Layout,
    subdivisions: i32,
    axes: Option<ResolvedAxes>,
    points: Vec<PointMark>,
    curves: Vec<FunctionCurve>,
    label_placement: LabelPlacement,
    samples: usize,
}

impl Sheet {
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn points(&self) -> &[PointMark] { &self.points }
    pub fn label_placement(&self) -> LabelPlacement { self.label_placement }

    /// Vertical grid lines, positioned along x.
    pub fn vertical_lines(&self) -> Vec<GridLine> {
        let r = self.layout.usable();
        grid_lines(r.left, r.right, self.subdivisions)
    }

    /// Horizontal grid lines, positioned along y.
    pub fn horizontal_lines(&self) -> Vec<GridLine> {
        let r = self.layout.usable();
        grid_lines(r.bottom, r.top, self.subdivisions)
    }

    /// Grid lines crossed when walking along the `kind` axis direction:
    /// vertical lines for `Horizontal`, horizontal lines for `Vertical`.
    pub fn grid_lines(&self, kind: AxisKind) -> Vec<GridLine> {
        match kind {
            AxisKind::Horizontal => self.vertical_lines(),
            AxisKind::Vertical => self.horizontal_lines(),
        }
    }

    /// Ticks of the `kind` axis; empty when the sheet has no axes or that axis is hidden.
    pub fn ticks(&self, kind: AxisKind) -> Vec<Tick> {
        self.axis(kind).map(|a| a.ticks).unwrap_or_default()
    }

    /// Logical <-> mm mapping, when the sheet has axes.
    pub fn plane_scale(&self) -> Option<PlaneScale> {
        self.axes.as_ref().map(|a| PlaneScale {
            x: AxisScale::new(a.y_axis_at, a.spec.graduation_mm, a.spec.x.scale),
            y: AxisScale::new(a.x_axis_at, a.spec.graduation_mm, a.spec.y.scale),
        })
    }

    /// Geometry of the `kind` axis, or `None` when it has no axes or its crossing
    /// falls outside the usable rectangle.
    pub fn axis(&self, kind: AxisKind) -> Option<AxisLayout> {
        let a = self.axes.as_ref()?;
        let r = self.layout.usable();
        let g = a.spec.graduation_mm;
        // (crossing, perpendicular span, along-axis span, tick origin, axis spec)
        let (crossing, span, (near, far), origin, axis) = match kind {
            AxisKind::Horizontal => (a.x_axis_at, (r.bottom, r.top), (r.left, r.right), a.y_axis_at, &a.spec.x),
            AxisKind::Vertical => (a.y_axis_at, (r.left, r.right), (r.bottom, r.top), a.x_axis_at, &a.spec.y),
        };
        if crossing < span.0 || crossing > span.1 {
            tracing::debug!(%kind, crossing, "axis outside usable rectangle, skipped");
            return None;
        }

        let ticks: Vec<Tick> = tick_multiples(near, far, origin, g)
            .into_iter()
            .map(|(n, pos_mm)| {
                let value = a.spec.tick_values.value(n, g, axis.scale);
                Tick { multiple: n, pos_mm, value, label: a.spec.format.format(value) }
            })
            .collect();
        tracing::debug!(%kind, ticks = ticks.len(), "axis laid out");

        Some(AxisLayout {
            kind,
            crossing_mm: crossing,
            tail_mm: near - a.spec.arrow.tail_inset_mm,
            tip_mm: far + a.spec.arrow.overshoot_mm,
            ticks,
            label: axis.label.clone(),
        })
    }

    /// Anchor (centre-top) of the origin "0" label, unless disabled or already
    /// emitted as the x axis's zero tick.
    pub fn origin_label(&self) -> Option<PointMm> {
        let a = self.axes.as_ref()?;
        if !a.spec.origin_label {
            return None;
        }
        if self.axis(AxisKind::Horizontal).is_some_and(|ax| ax.has_zero_tick()) {
            return None;
        }
        Some(PointMm::new(a.y_axis_at, a.x_axis_at - LABEL_GAP_MM))
    }

    /// Evaluate every function curve. Fails on the first function error.
    pub fn sample_curves(&self) -> Result<Vec<SampledCurve>> {
        let Some(scale) = self.plane_scale() else {
            return Ok(Vec::new());
        };
        let usable = self.layout.usable();
        self.curves.iter().map(|c| c.sample(&scale, usable, self.samples)).collect()
    }

    /// Rasterise the whole canvas (untrimmed) into an RGBA buffer.
    pub fn rasterize(&self, opts: &RenderOptions) -> Result<Raster> {
        if !opts.dpi.is_finite() || opts.dpi <= 0.0 {
            return Err(ConfigError::InvalidResolution { value: opts.dpi }.into());
        }
        // evaluate before allocating anything so a failing function leaves no trace
        let curves = self.sample_curves()?;

        let ppm = px_per_mm(opts.dpi);
        let canvas = self.layout.canvas();
        let text = TextShaper::new();
        let labels = render::labels(self, &curves, opts.palette.ink);
        let extent = render::extent(self, &labels, &text, opts);
        let w = (extent.width() * ppm).ceil();
        let h = (extent.height() * ppm).ceil();
        if !(w <= MAX_RASTER_SIDE as f64 && h <= MAX_RASTER_SIDE as f64) {
            return Err(ConfigError::CanvasTooLarge {
                width: w.min(u32::MAX as f64) as u32,
                height: h.min(u32::MAX as f64) as u32,
                limit: MAX_RASTER_SIDE,
            }
            .into());
        }
        tracing::debug!(width = w, height = h, "surface sized to content");

        // pixel position of the canvas's top-left corner
        let origin = (-extent.left * ppm, (extent.top - canvas.height_mm) * ppm);
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or(Error::Surface("failed to create raster surface"))?;
        let painter = render::Painter::new(surface.canvas(), &text, opts, ppm, canvas.height_mm, origin);
        painter.clear();
        render::draw_sheet(&painter, self, &curves, &labels);

        Raster::from_surface(&mut surface, ppm, origin, canvas.height_mm)
    }

    /// Render, trim to content and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.rasterize(opts)?.trimmed().encode(opts.palette.paper, image::ImageFormat::Png, "PNG buffer")
    }

    /// Render, trim to content and write `path`; the format follows the extension.
    /// Existing files are replaced.
    pub fn render_to_file(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        // reject the extension before doing any drawing work
        let format = image::ImageFormat::from_path(path)
            .map_err(|_| ConfigError::UnsupportedFormat { path: path.to_path_buf() })?;
        let raster = self.rasterize(opts)?.trimmed();
        raster.save(opts.palette.paper, format, path)?;
        tracing::info!(path = %path.display(), width = raster.width(), height = raster.height(), dpi = opts.dpi, "sheet written");
        Ok(())
    }
}
