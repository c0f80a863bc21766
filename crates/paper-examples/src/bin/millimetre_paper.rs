// File: crates/paper-examples/src/bin/millimetre_paper.rs
// Summary: 10 x 10 cm of black millimetre paper, framed, ready to print.

use anyhow::Result;
use paper_core::{Length, Palette, RenderOptions, SheetSpec};

fn main() -> Result<()> {
    paper_examples::init_logging();

    let sheet = SheetSpec::grid(Length::cm(10.0), Length::cm(10.0), 1.0).build()?;
    let opts = RenderOptions { palette: Palette::monochrome(), ..RenderOptions::default() };
    paper_examples::write(&sheet, &opts, "millimetre_paper.png")
}
