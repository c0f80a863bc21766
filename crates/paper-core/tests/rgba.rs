// File: crates/paper-core/tests/rgba.rs
// Purpose: Pixel-level checks on the raster: curve clipping, trimming and sheet-to-pixel mapping.

use paper_core::geometry::PointMm;
use paper_core::text::TextShaper;
use paper_core::{AxesSpec, AxisSpec, FunctionCurve, Length, PointMark, Raster, RenderOptions, SheetSpec};
use skia_safe::Color;

fn opts() -> RenderOptions {
    RenderOptions { dpi: 100.0, draw_labels: false, ..RenderOptions::default() }
}

fn is_red(px: [u8; 4]) -> bool {
    px[3] > 0 && px[0] > 150 && px[1] < 100 && px[2] < 100
}

fn px(raster: &Raster, x: u32, y: u32) -> [u8; 4] {
    raster.pixel(x, y).expect("pixel in range")
}

/// The outermost row and column on every side are fully transparent.
fn border_is_clear(raster: &Raster) -> bool {
    let (w, h) = (raster.width(), raster.height());
    (0..w).all(|x| px(raster, x, 0)[3] == 0 && px(raster, x, h - 1)[3] == 0)
        && (0..h).all(|y| px(raster, 0, y)[3] == 0 && px(raster, w - 1, y)[3] == 0)
}

#[test]
fn curves_are_clipped_to_the_usable_rectangle() {
    let sheet = SheetSpec::default()
        .with_axes(AxesSpec::default())
        .curve(FunctionCurve::new("f", |x| x * x).with_color(Color::RED))
        .build()
        .unwrap();
    let raster = sheet.rasterize(&opts()).expect("rasterize");

    // y = x^2 shoots well past the top edge; nothing red may appear above it
    let (_, top_px) = raster.to_px(PointMm::new(0.0, 211.0));
    let above = (0..top_px.floor() as u32)
        .flat_map(|y| (0..raster.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| is_red(px(&raster, x, y)))
        .count();
    assert_eq!(above, 0, "curve leaked past the top of the grid");

    // but the visible part is drawn: the vertex sits on the crossing
    let (vx, vy) = raster.to_px(PointMm::new(110.0, 110.0));
    let (vx, vy) = (vx as u32, vy as u32);
    let red_near_vertex = (vy - 3..=vy + 3).any(|y| (vx - 3..=vx + 3).any(|x| is_red(px(&raster, x, y))));
    assert!(red_near_vertex);
}

#[test]
fn trimming_drops_margin_and_bleed() {
    let sheet = SheetSpec::default().build().unwrap();
    let raster = sheet.rasterize(&opts()).unwrap();
    let trimmed = raster.trimmed();

    let grid_px = 200.0 * raster.px_per_mm();
    assert!(raster.width() as f64 > grid_px + 20.0 * raster.px_per_mm());
    assert!((trimmed.width() as f64 - grid_px).abs() <= 4.0, "width {} vs {grid_px}", trimmed.width());
    assert!((trimmed.height() as f64 - grid_px).abs() <= 4.0, "height {} vs {grid_px}", trimmed.height());

    // first column and row hold the left and top centimetre lines
    assert!((0..trimmed.height()).any(|y| px(&trimmed, 0, y)[3] > 0));
    assert!((0..trimmed.width()).any(|x| px(&trimmed, x, 0)[3] > 0));
}

#[test]
fn trimmed_raster_keeps_sheet_coordinates() {
    let sheet = SheetSpec::default().with_axes(AxesSpec::default()).build().unwrap();
    let raster = sheet.rasterize(&opts()).unwrap().trimmed();
    let (cx, cy) = raster.to_px(PointMm::new(110.0, 110.0));
    let (cx, cy) = (cx as u32, cy as u32);
    let inked = (cy - 1..=cy + 1).any(|y| (cx - 1..=cx + 1).any(|x| {
        let p = px(&raster, x, y);
        p[3] > 200 && p[0] < 60
    }));
    assert!(inked, "axis crossing should be black at its sheet position");
}

#[test]
fn png_bytes_have_png_magic() {
    let sheet = SheetSpec::grid(Length::cm(3.0), Length::cm(2.0), 1.0).build().unwrap();
    let bytes = sheet.render_to_png_bytes(&opts()).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71, 13, 10, 26, 10]));

    let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
    // composited over white: cells are paper, lines are not
    let (w, h) = img.dimensions();
    assert!(w > 100 && h > 60);
    assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
    assert!(img.pixels().any(|p| p.0 != [255, 255, 255]));
    assert!(img.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]), "graphite grid is grey only");
}

#[test]
fn curves_stay_inside_on_every_side() {
    let red = |name: &str, f: fn(f64) -> f64| FunctionCurve::new(name, f).with_color(Color::RED);
    let sheet = SheetSpec::default()
        .with_axes(AxesSpec::default())
        // leaves through the bottom
        .curve(red("down", |x| -x * x))
        // ends on the left and right edges
        .curve(red("flat", |x| 0.5 * x))
        // steep lines through the top-right and bottom-left corners
        .curve(red("ne", |x| 5.0 * (x - 10.0) + 10.0))
        .curve(red("sw", |x| 5.0 * (x + 10.0) - 10.0))
        .build()
        .unwrap();
    let raster = sheet.rasterize(&opts()).unwrap();

    let (left, top) = raster.to_px(PointMm::new(10.0, 210.0));
    let (right, bottom) = raster.to_px(PointMm::new(210.0, 10.0));
    let mut inside = 0usize;
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            if !is_red(px(&raster, x, y)) {
                continue;
            }
            let (fx, fy) = (x as f64, y as f64);
            // pixel [x, x+1) x [y, y+1) entirely past an edge
            let outside = fx + 1.0 <= left || fx >= right || fy + 1.0 <= top || fy >= bottom;
            assert!(!outside, "curve pixel at ({x}, {y}) outside [{left}, {right}] x [{top}, {bottom}]");
            inside += 1;
        }
    }
    assert!(inside > 0, "curves should be visible inside the grid");
}

#[test]
fn long_axis_name_is_not_cut_off() {
    let name = "distance parcourue (m)";
    let axes = AxesSpec { x: AxisSpec::new(name), ..AxesSpec::default() };
    let sheet = SheetSpec::grid(Length::cm(10.0), Length::cm(10.0), 0.0).with_axes(axes).build().unwrap();
    let opts = RenderOptions { dpi: 100.0, ..RenderOptions::default() };
    let raster = sheet.rasterize(&opts).unwrap();

    assert!(border_is_clear(&raster), "drawn content touches the raster edge");

    // name starts 2 mm past the arrow tip (100 + 1.4 mm) and must fit entirely
    let (name_w, _) = TextShaper::new().measure(name, 9.0 * opts.dpi / 72.0);
    let (name_left, _) = raster.to_px(PointMm::new(103.4, 0.0));
    assert!(raster.width() as f64 >= name_left + name_w as f64);
}

#[test]
fn far_away_point_is_kept_whole() {
    let sheet = SheetSpec::grid(Length::cm(10.0), Length::cm(10.0), 0.0)
        .with_axes(AxesSpec::default())
        .point(PointMark::new("P", 20.0, 0.0))
        .build()
        .unwrap();
    let opts = RenderOptions { dpi: 100.0, ..RenderOptions::default() };
    let raster = sheet.rasterize(&opts).unwrap();
    assert!(border_is_clear(&raster));

    // x = 20 sits 200 mm right of the crossing at 50 mm, well past the 15 mm border
    let (cx, cy) = raster.to_px(PointMm::new(250.0, 50.0));
    assert!(cx < raster.width() as f64);
    let (cx, cy) = (cx as u32, cy as u32);
    let marked = (cy - 1..=cy + 1).any(|y| (cx - 1..=cx + 1).any(|x| px(&raster, x, y)[3] > 0));
    assert!(marked, "marker should be drawn");
}

#[test]
fn pixel_outside_is_none() {
    let sheet = SheetSpec::grid(Length::cm(2.0), Length::cm(2.0), 1.0).build().unwrap();
    let raster = sheet.rasterize(&opts()).unwrap();
    assert!(raster.pixel(raster.width() - 1, raster.height() - 1).is_some());
    assert!(raster.pixel(raster.width(), 0).is_none());
    assert!(raster.pixel(0, raster.height()).is_none());
}
