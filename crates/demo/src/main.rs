// File: crates/demo/src/main.rs
// Summary: Demo loads named points from a CSV and plots them on a 20 x 20 cm sheet with centred axes.
//
// Usage: paper-demo <points.csv> [output] [palette]
// CSV headers: name,x,y[,offset_x_mm,offset_y_mm]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use paper_core::theme;
use paper_core::{AxesSpec, AxisSpec, PointMark, RenderOptions, SheetSpec};

/// Graduations available on each side of a centred axis on a 20 cm sheet.
const HALF_SPAN_TICKS: f64 = 9.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().context("usage: paper-demo <points.csv> [output] [palette]")?);
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| out_name(&input));
    let palette_name = args.next().unwrap_or_else(|| "graphite".to_string());

    let points = load_points_csv(&input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    if points.is_empty() {
        anyhow::bail!("no points loaded from {}; check the name,x,y headers", input.display());
    }
    tracing::debug!(count = points.len(), "points loaded");

    let scale_x = nice_scale(points.iter().map(|p| p.x));
    let scale_y = nice_scale(points.iter().map(|p| p.y));
    tracing::debug!(scale_x, scale_y, "axis scales chosen");

    let axes = AxesSpec {
        x: AxisSpec::new("x").with_scale(scale_x),
        y: AxisSpec::new("y").with_scale(scale_y),
        ..AxesSpec::default()
    };
    let sheet = SheetSpec { points, ..SheetSpec::default() }.with_axes(axes).build()?;

    let palette = theme::find(&palette_name);
    if !palette.name.eq_ignore_ascii_case(&palette_name) {
        tracing::warn!(requested = %palette_name, using = palette.name, "unknown palette");
    }
    let opts = RenderOptions { palette, ..RenderOptions::default() };

    sheet.render_to_file(&opts, &output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Produce output file name like target/out/points_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("sheet");
    PathBuf::from("target/out").join(format!("points_{stem}.png"))
}

/// Smallest 1, 2 or 5 times a power of ten such that every value fits within the
/// graduations on either side of the origin.
fn nice_scale(values: impl Iterator<Item = f64>) -> f64 {
    let reach = values.filter(|v| v.is_finite()).fold(0.0_f64, |m, v| m.max(v.abs()));
    if reach == 0.0 {
        return 1.0;
    }
    let raw = reach / HALF_SPAN_TICKS;
    let mut decade = 10f64.powf(raw.log10().floor());
    loop {
        for m in [1.0, 2.0, 5.0] {
            if m * decade >= raw {
                return m * decade;
            }
        }
        decade *= 10.0;
    }
}

/// Load `name,x,y[,offset_x_mm,offset_y_mm]` rows. Rows with unparsable numbers are skipped.
fn load_points_csv(path: &Path) -> Result<Vec<PointMark>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_name), Some(i_x), Some(i_y)) = (idx("name"), idx("x"), idx("y")) else {
        anyhow::bail!("missing one of the name, x, y columns (found {headers:?})");
    };
    let (i_dx, i_dy) = (idx("offset_x_mm"), idx("offset_y_mm"));

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty()).map(str::parse::<f64>);
        let (Some(Ok(x)), Some(Ok(y))) = (num(Some(i_x)), num(Some(i_y))) else {
            tracing::warn!(row = line + 2, "skipping row without numeric x/y");
            continue;
        };
        let mut p = PointMark::new(rec.get(i_name).unwrap_or_default(), x, y);
        if let (Some(Ok(dx)), Some(Ok(dy))) = (num(i_dx), num(i_dy)) {
            p = p.with_label_offset(dx, dy);
        }
        out.push(p);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::nice_scale;

    #[test]
    fn nice_scale_steps() {
        assert_eq!(nice_scale([3.0, -7.0].into_iter()), 1.0);
        assert_eq!(nice_scale([9.0].into_iter()), 1.0);
        assert_eq!(nice_scale([12.0].into_iter()), 2.0);
        assert_eq!(nice_scale([-40.0].into_iter()), 5.0);
        assert!((nice_scale([0.5].into_iter()) - 0.1).abs() < 1e-12);
        assert_eq!(nice_scale(std::iter::empty()), 1.0);
    }
}
