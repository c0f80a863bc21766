// File: crates/paper-examples/src/bin/axes_paper.rs
// Summary: 2 mm paper with off-centre axes whose ticks read in centimetres (y scaled by 10).

use std::sync::Arc;

use anyhow::Result;
use paper_core::{AxesSpec, AxisSpec, DecimalFormat, Length, RenderOptions, SheetSpec, TickValue};

fn main() -> Result<()> {
    paper_examples::init_logging();

    let axes = AxesSpec {
        x: AxisSpec::new("x").at(Length::mm(50.0)),
        y: AxisSpec::new("y").with_scale(10.0).at(Length::mm(30.0)),
        graduation_mm: 10.0,
        tick_values: TickValue::Centimetres,
        format: Arc::new(DecimalFormat::TWO_PLACES),
        ..AxesSpec::default()
    };
    let sheet = SheetSpec { subdivisions: 5, ..SheetSpec::grid(Length::cm(20.0), Length::cm(20.0), 10.0) }
        .with_axes(axes)
        .build()?;
    paper_examples::write(&sheet, &RenderOptions::default(), "axes_paper.png")
}
