// File: crates/paper-examples/src/bin/points_grid.rs
// Summary: Millimetre grid with axes and three labelled points.

use anyhow::Result;
use paper_core::{AxesSpec, AxisSpec, Length, PointMark, RenderOptions, SheetSpec};

fn main() -> Result<()> {
    paper_examples::init_logging();

    let axes = AxesSpec {
        x: AxisSpec::new("x").at(Length::cm(6.0)),
        y: AxisSpec::new("y").at(Length::cm(5.0)),
        ..AxesSpec::default()
    };
    let sheet = SheetSpec::default()
        .with_axes(axes)
        .point(PointMark::new("A", 2.0, 3.0))
        .point(PointMark::new("B", -1.0, 4.0))
        .point(PointMark::new("C", 7.0, -2.0))
        .build()?;
    paper_examples::write(&sheet, &RenderOptions::default(), "points_grid.png")
}
