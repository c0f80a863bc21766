// File: crates/paper-core/src/render.rs
// Summary: Skia drawing of a sheet: grid tiers, arrowed axes with ticks, point markers and clipped curves.

use skia_safe as skia;

use crate::axis::{AxisKind, AxisLayout};
use crate::geometry::{PointMm, RectMm};
use crate::grid::GridLine;
use crate::overlay::SampledCurve;
use crate::sheet::{RenderOptions, Sheet, LABEL_GAP_MM};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Stroke;
use crate::types::{px_per_mm, px_per_pt, MM_PER_INCH, POINTS_PER_INCH};

/// Minimum transparent border around the canvas, mm. Covers arrowheads and tick ends;
/// labels grow the surface further as needed.
pub(crate) const BLEED_MM: f64 = 15.0;
/// Room kept around each measured label box for glyph overhang, mm.
const LABEL_PAD_MM: f64 = 1.0;

// Sizes in points.
const AXIS_STROKE_PT: f32 = 1.2;
const TICK_STROKE_PT: f32 = 1.0;
const CURVE_STROKE_PT: f32 = 1.0;
const ARROW_HEAD_LEN_PT: f32 = 4.0;
const ARROW_HEAD_HALF_WIDTH_PT: f32 = 2.0;
const MARKER_SIZE_PT: f32 = 6.0;
const MARKER_STROKE_PT: f32 = 1.2;
const TICK_FONT_PT: f32 = 7.0;
const POINT_FONT_PT: f32 = 8.0;
const AXIS_NAME_FONT_PT: f32 = 9.0;
const CURVE_FONT_PT: f32 = 10.0;

const MM_PER_PT: f64 = MM_PER_INCH / POINTS_PER_INCH as f64;

// Distances in mm.
const TICK_HALF_LEN_MM: f64 = 2.0;
const AXIS_NAME_GAP_MM: f64 = 2.0;

/// Maps the sheet's y-up millimetre frame onto a y-down pixel canvas.
pub(crate) struct Painter<'a> {
    canvas: &'a skia::Canvas,
    text: &'a TextShaper,
    opts: &'a RenderOptions,
    px_per_mm: f64,
    px_per_pt: f32,
    canvas_height_mm: f64,
    origin_px: (f64, f64),
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        canvas: &'a skia::Canvas,
        text: &'a TextShaper,
        opts: &'a RenderOptions,
        px_per_mm: f64,
        canvas_height_mm: f64,
        origin_px: (f64, f64),
    ) -> Self {
        Self { canvas, text, opts, px_per_mm, px_per_pt: px_per_pt(opts.dpi), canvas_height_mm, origin_px }
    }

    pub(crate) fn clear(&self) {
        self.canvas.clear(skia::Color::TRANSPARENT);
    }

    fn px(&self, p: PointMm) -> skia::Point {
        skia::Point::new(
            (self.origin_px.0 + p.x * self.px_per_mm) as f32,
            (self.origin_px.1 + (self.canvas_height_mm - p.y) * self.px_per_mm) as f32,
        )
    }

    fn rect_px(&self, r: RectMm) -> skia::Rect {
        let tl = self.px(PointMm::new(r.left, r.top));
        let br = self.px(PointMm::new(r.right, r.bottom));
        skia::Rect::from_ltrb(tl.x, tl.y, br.x, br.y)
    }

    fn stroke_paint(&self, color: skia::Color, width_pt: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width_pt * self.px_per_pt);
        paint.set_stroke_cap(skia::paint::Cap::Square);
        paint
    }

    fn line(&self, a: PointMm, b: PointMm, paint: &skia::Paint) {
        self.canvas.draw_line(self.px(a), self.px(b), paint);
    }

    fn label(&self, text: &str, at: PointMm, size_pt: f32, color: skia::Color, align: (HAlign, VAlign)) {
        if !self.opts.draw_labels {
            return;
        }
        let p = self.px(at);
        self.text.draw_anchored(self.canvas, text, (p.x, p.y), size_pt * self.px_per_pt, color, align);
    }
}

/// A piece of text anchored in sheet coordinates.
pub(crate) struct Label {
    text: String,
    at: PointMm,
    size_pt: f32,
    color: skia::Color,
    align: (HAlign, VAlign),
}

/// Every label the sheet shows: tick values, axis names, the origin, point and curve names.
pub(crate) fn labels(sheet: &Sheet, curves: &[SampledCurve], ink: skia::Color) -> Vec<Label> {
    let mut out = Vec::new();
    let mut push = |text: &str, at: PointMm, size_pt: f32, color: skia::Color, align: (HAlign, VAlign)| {
        if !text.is_empty() && at.is_finite() {
            out.push(Label { text: text.to_string(), at, size_pt, color, align });
        }
    };

    for kind in [AxisKind::Horizontal, AxisKind::Vertical] {
        let Some(axis) = sheet.axis(kind) else { continue };
        let (tick_align, name_align) = match kind {
            AxisKind::Horizontal => ((HAlign::Center, VAlign::Top), (HAlign::Left, VAlign::Center)),
            AxisKind::Vertical => ((HAlign::Right, VAlign::Center), (HAlign::Center, VAlign::Bottom)),
        };
        for tick in &axis.ticks {
            push(&tick.label, along_axis(&axis, tick.pos_mm, -LABEL_GAP_MM), TICK_FONT_PT, ink, tick_align);
        }
        push(&axis.label, along_axis(&axis, axis.tip_mm + AXIS_NAME_GAP_MM, 0.0), AXIS_NAME_FONT_PT, ink, name_align);
    }
    if let Some(at) = sheet.origin_label() {
        push("0", at, TICK_FONT_PT, ink, (HAlign::Center, VAlign::Top));
    }
    if let Some(scale) = sheet.plane_scale() {
        for pt in sheet.points() {
            let at = scale.to_mm(pt.x, pt.y);
            let at = PointMm::new(at.x + pt.label_offset.dx_mm, at.y + pt.label_offset.dy_mm);
            push(&pt.name, at, POINT_FONT_PT, ink, (HAlign::Left, VAlign::Bottom));
        }
    }
    let usable = sheet.layout().usable();
    for curve in curves {
        if let Some(at) = curve.label_anchor(sheet.label_placement(), usable) {
            push(&curve.name, at, CURVE_FONT_PT, curve.color, (HAlign::Left, VAlign::Center));
        }
    }
    out
}

/// Millimetre box the surface has to cover: the canvas plus [`BLEED_MM`], grown to hold
/// every point marker and, when labels are drawn, every measured label box.
pub(crate) fn extent(sheet: &Sheet, labels: &[Label], text: &TextShaper, opts: &RenderOptions) -> RectMm {
    let canvas = sheet.layout().canvas();
    let mut r = RectMm::from_lbrt(-BLEED_MM, -BLEED_MM, canvas.width_mm + BLEED_MM, canvas.height_mm + BLEED_MM);

    if let Some(scale) = sheet.plane_scale() {
        let half = MARKER_SIZE_PT as f64 * 0.5 * MM_PER_PT + LABEL_PAD_MM;
        for pt in sheet.points() {
            let at = scale.to_mm(pt.x, pt.y);
            let marker = RectMm::from_lbrt(at.x - half, at.y - half, at.x + half, at.y + half);
            if marker.is_finite() {
                r = r.union(&marker);
            }
        }
    }

    if opts.draw_labels {
        let ppm = px_per_mm(opts.dpi);
        let ppt = px_per_pt(opts.dpi);
        for label in labels {
            let (w_px, h_px) = text.measure(&label.text, label.size_pt * ppt);
            let (w, h) = (w_px as f64 / ppm, h_px as f64 / ppm);
            let left = match label.align.0 {
                HAlign::Left => label.at.x,
                HAlign::Center => label.at.x - w * 0.5,
                HAlign::Right => label.at.x - w,
            };
            // y up: the box's top edge
            let top = match label.align.1 {
                VAlign::Top => label.at.y,
                VAlign::Center => label.at.y + h * 0.5,
                VAlign::Bottom => label.at.y + h,
            };
            let b = RectMm::from_lbrt(left, top - h, left + w, top).inset(-LABEL_PAD_MM);
            if b.is_finite() {
                r = r.union(&b);
            }
        }
    }
    r
}

/// Grid, then axes, then overlays; text goes on top of everything.
pub(crate) fn draw_sheet(p: &Painter<'_>, sheet: &Sheet, curves: &[SampledCurve], labels: &[Label]) {
    draw_grid(p, sheet);
    for kind in [AxisKind::Horizontal, AxisKind::Vertical] {
        if let Some(axis) = sheet.axis(kind) {
            draw_axis(p, &axis);
        }
    }
    draw_points(p, sheet);
    draw_curves(p, sheet, curves);
    for l in labels {
        p.label(&l.text, l.at, l.size_pt, l.color, l.align);
    }
}

/// Along-axis position plus perpendicular offset, as a sheet point.
fn along_axis(axis: &AxisLayout, along: f64, across: f64) -> PointMm {
    match axis.kind {
        AxisKind::Horizontal => PointMm::new(along, axis.crossing_mm + across),
        AxisKind::Vertical => PointMm::new(axis.crossing_mm + across, along),
    }
}

fn draw_grid(p: &Painter<'_>, sheet: &Sheet) {
    let r = sheet.layout().usable();
    let palette = &p.opts.palette;

    // verticals
    draw_lines(p, &sheet.vertical_lines(), |x| (PointMm::new(x, r.bottom), PointMm::new(x, r.top)));
    // horizontals
    draw_lines(p, &sheet.horizontal_lines(), |y| (PointMm::new(r.left, y), PointMm::new(r.right, y)));

    if let Some(Stroke { color, width_pt }) = palette.frame {
        let paint = p.stroke_paint(color, width_pt);
        p.canvas.draw_rect(p.rect_px(r), &paint);
    }
}

fn draw_lines(p: &Painter<'_>, lines: &[GridLine], ends: impl Fn(f64) -> (PointMm, PointMm)) {
    for line in lines {
        let Stroke { color, width_pt } = p.opts.palette.stroke(line.tier);
        let paint = p.stroke_paint(color, width_pt);
        let (a, b) = ends(line.pos_mm);
        p.line(a, b, &paint);
    }
}

fn draw_axis(p: &Painter<'_>, axis: &AxisLayout) {
    let ink = p.opts.palette.ink;
    draw_arrow(p, along_axis(axis, axis.tail_mm, 0.0), along_axis(axis, axis.tip_mm, 0.0), ink);

    let tick_paint = p.stroke_paint(ink, TICK_STROKE_PT);
    for tick in &axis.ticks {
        p.line(along_axis(axis, tick.pos_mm, -TICK_HALF_LEN_MM), along_axis(axis, tick.pos_mm, TICK_HALF_LEN_MM), &tick_paint);
    }
}

/// Shaft from `tail` to `tip` with an open two-stroke head.
fn draw_arrow(p: &Painter<'_>, tail: PointMm, tip: PointMm, color: skia::Color) {
    let paint = {
        let mut paint = p.stroke_paint(color, AXIS_STROKE_PT);
        paint.set_stroke_cap(skia::paint::Cap::Butt);
        paint.set_stroke_join(skia::paint::Join::Miter);
        paint
    };
    let t = p.px(tail);
    let h = p.px(tip);
    p.canvas.draw_line(t, h, &paint);

    let (dx, dy) = (h.x - t.x, h.y - t.y);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let back = ARROW_HEAD_LEN_PT * p.px_per_pt;
    let half = ARROW_HEAD_HALF_WIDTH_PT * p.px_per_pt;
    let base = (h.x - ux * back, h.y - uy * back);

    let mut path = skia::PathBuilder::new();
    path.move_to((base.0 - uy * half, base.1 + ux * half));
    path.line_to(h);
    path.line_to((base.0 + uy * half, base.1 - ux * half));
    p.canvas.draw_path(&path.detach(), &paint);
}

fn draw_points(p: &Painter<'_>, sheet: &Sheet) {
    let Some(scale) = sheet.plane_scale() else { return };
    let ink = p.opts.palette.ink;
    let mut paint = p.stroke_paint(ink, MARKER_STROKE_PT);
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    let half = MARKER_SIZE_PT * 0.5 * p.px_per_pt;

    for pt in sheet.points() {
        let at = scale.to_mm(pt.x, pt.y);
        if !at.is_finite() {
            continue;
        }
        let c = p.px(at);
        p.canvas.draw_line((c.x - half, c.y - half), (c.x + half, c.y + half), &paint);
        p.canvas.draw_line((c.x - half, c.y + half), (c.x + half, c.y - half), &paint);
    }
}

fn draw_curves(p: &Painter<'_>, sheet: &Sheet, curves: &[SampledCurve]) {
    let usable = sheet.layout().usable();
    for curve in curves {
        let mut paint = p.stroke_paint(curve.color, CURVE_STROKE_PT);
        paint.set_stroke_join(skia::paint::Join::Round);

        let mut path = skia::PathBuilder::new();
        for run in curve.segments() {
            path.move_to(p.px(run[0]));
            for &pt in &run[1..] {
                path.line_to(p.px(pt));
            }
        }

        p.canvas.save();
        p.canvas.clip_rect(p.rect_px(usable), skia::ClipOp::Intersect, true);
        p.canvas.draw_path(&path.detach(), &paint);
        p.canvas.restore();
    }
}
