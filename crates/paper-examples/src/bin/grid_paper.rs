// File: crates/paper-examples/src/bin/grid_paper.rs
// Summary: 20 x 20 cm grey millimetre grid with centimetre and half-centimetre emphasis.

use anyhow::Result;
use paper_core::{Length, RenderOptions, SheetSpec};

fn main() -> Result<()> {
    paper_examples::init_logging();

    let sheet = SheetSpec { subdivisions: 10, ..SheetSpec::grid(Length::cm(20.0), Length::cm(20.0), 1.0) }.build()?;
    paper_examples::write(&sheet, &RenderOptions::default(), "grid_paper.png")
}
