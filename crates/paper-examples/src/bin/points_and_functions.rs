// File: crates/paper-examples/src/bin/points_and_functions.rs
// Summary: Axes with a doubled y scale, decimal-comma ticks, two points and two coloured functions.

use std::sync::Arc;

use anyhow::{Context, Result};
use paper_core::theme::named_color;
use paper_core::{AxesSpec, AxisSpec, DecimalFormat, FunctionCurve, Length, PointMark, RenderOptions, SheetSpec};

fn main() -> Result<()> {
    paper_examples::init_logging();

    let axes = AxesSpec {
        x: AxisSpec::new("x").at(Length::cm(6.0)),
        y: AxisSpec::new("y").with_scale(2.0).at(Length::cm(5.0)),
        format: Arc::new(DecimalFormat::COMMA),
        ..AxesSpec::default()
    };
    let f = FunctionCurve::new("f", |x| 0.5 * x * x - 2.0)
        .with_color(named_color("red").context("unknown colour: red")?)
        .with_label_offset(2.0, -2.0);
    let g = FunctionCurve::new("g", |x| -x + 3.0)
        .with_color(named_color("blue").context("unknown colour: blue")?)
        .with_label_offset(-4.0, 6.0);

    let sheet = SheetSpec::default()
        .with_axes(axes)
        .point(PointMark::new("A", 6.0, 5.0))
        .point(PointMark::new("B", 3.0, 2.5).with_label_offset(2.0, -6.0))
        .curve(f)
        .curve(g)
        .build()?;
    paper_examples::write(&sheet, &RenderOptions::default(), "points_and_functions.png")
}
