// File: crates/paper-core/tests/overlay.rs
// Purpose: Logical-to-sheet mapping, curve sampling with gaps, failing functions and label anchors.

use paper_core::geometry::PointMm;
use paper_core::{
    AxesSpec, AxisSpec, ConfigError, Error, FunctionCurve, LabelPlacement, Length, PointMark, RenderOptions,
    SheetSpec,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn axes_sheet() -> SheetSpec {
    SheetSpec::default().with_axes(AxesSpec::default())
}

#[test]
fn point_maps_through_the_crossing() {
    let sheet = axes_sheet().point(PointMark::new("A", 2.0, 3.0)).build().unwrap();
    let scale = sheet.plane_scale().expect("axes present");
    let a = &sheet.points()[0];
    let at = scale.to_mm(a.x, a.y);
    assert!(close(at.x, 130.0) && close(at.y, 140.0), "{at:?}");

    let (x, y) = scale.from_mm(at);
    assert!(close(x, 2.0) && close(y, 3.0));
}

#[test]
fn scale_factor_shrinks_physical_units() {
    let axes = AxesSpec {
        x: AxisSpec::new("x").at(Length::cm(6.0)),
        y: AxisSpec::new("y").with_scale(2.0).at(Length::cm(5.0)),
        ..AxesSpec::default()
    };
    let sheet = SheetSpec::default().with_axes(axes).build().unwrap();
    let scale = sheet.plane_scale().unwrap();
    // one graduation shows 2 units on y, so 2.5 units is 12.5 mm above the x axis
    let b = scale.to_mm(3.0, 2.5);
    assert!(close(b.x, 60.0 + 30.0) && close(b.y, 70.0 + 12.5), "{b:?}");
}

#[test]
fn samples_span_the_usable_width() {
    let sheet = axes_sheet().curve(FunctionCurve::new("f", |x| 0.5 * x)).build().unwrap();
    let curves = sheet.sample_curves().unwrap();
    let pts = &curves[0].points;
    assert_eq!(pts.len(), 500);
    assert!(close(pts[0].x, 10.0));
    assert!(close(pts[499].x, 210.0));
    assert!(close(pts[0].y, 110.0 - 50.0));
    assert!(pts.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn non_finite_outputs_leave_gaps() {
    let sheet = axes_sheet().curve(FunctionCurve::new("r", f64::sqrt)).build().unwrap();
    let curve = &sheet.sample_curves().unwrap()[0];
    let runs: Vec<&[PointMm]> = curve.segments().collect();
    assert_eq!(runs.len(), 1, "negative half is a gap, not a segment");
    assert_eq!(runs[0].len(), 250);
    assert!(runs[0].iter().all(|p| p.x >= 110.0));

    let blips = FunctionCurve::new("b", |x| if (x - 0.0).abs() < 0.5 { f64::INFINITY } else { 1.0 });
    let sheet = axes_sheet().curve(blips).build().unwrap();
    assert_eq!(sheet.sample_curves().unwrap()[0].segments().count(), 2);
}

#[test]
fn failing_function_aborts_without_output() {
    let curve = FunctionCurve::fallible("h", |x| if x > 0.0 { Err("pole".into()) } else { Ok(1.0 / (x - 1.0)) });
    let sheet = axes_sheet().curve(curve).build().unwrap();

    match sheet.sample_curves() {
        Err(Error::Evaluation { name, x, .. }) => {
            assert_eq!(name, "h");
            assert!(x > 0.0);
        }
        other => panic!("expected an evaluation error, got {other:?}"),
    }

    let out = std::path::PathBuf::from("target/test_out/failing_function.png");
    let _ = std::fs::remove_file(&out);
    let opts = RenderOptions { dpi: 50.0, ..RenderOptions::default() };
    let err = sheet.render_to_file(&opts, &out).unwrap_err();
    assert!(matches!(err, Error::Evaluation { .. }));
    assert!(!out.exists(), "no file may be written when a function fails");
}

#[test]
fn middle_label_uses_the_middle_sample() {
    let sheet = axes_sheet()
        .curve(FunctionCurve::new("f", |x| x))
        .build()
        .unwrap();
    let curve = &sheet.sample_curves().unwrap()[0];
    let usable = sheet.layout().usable();
    assert_eq!(curve.label_sample(LabelPlacement::Middle, usable), Some(curve.points[250]));
}

#[test]
fn rightmost_label_stays_inside() {
    let sheet = axes_sheet().curve(FunctionCurve::new("p", |x| x * x)).build().unwrap();
    let curve = &sheet.sample_curves().unwrap()[0];
    let usable = sheet.layout().usable();
    let inner = usable.inset(0.5);

    let at = curve.label_sample(LabelPlacement::RightmostVisible, usable).unwrap();
    let idx = curve.points.iter().position(|p| *p == at).unwrap();
    assert!(inner.contains(at));
    assert!(!inner.contains(curve.points[idx + 1]), "a later sample is still visible");
    // y = x^2 leaves through the top near x = 3.15
    assert!(at.x > 140.0 && at.x < 142.0, "{at:?}");
}

#[test]
fn rightmost_label_falls_back_to_last_sample() {
    let sheet = axes_sheet().curve(FunctionCurve::new("c", |_| 100.0)).build().unwrap();
    let curve = &sheet.sample_curves().unwrap()[0];
    let at = curve.label_sample(LabelPlacement::RightmostVisible, sheet.layout().usable()).unwrap();
    assert!(close(at.x, 210.0) && close(at.y, 1110.0), "{at:?}");
}

#[test]
fn label_offsets_apply_in_millimetres() {
    let curve = FunctionCurve::new("g", |x| -x + 3.0).with_label_offset(-4.0, 6.0);
    let sheet = axes_sheet().curve(curve).build().unwrap();
    let sampled = &sheet.sample_curves().unwrap()[0];
    let usable = sheet.layout().usable();
    let base = sampled.label_sample(LabelPlacement::Middle, usable).unwrap();
    let anchor = sampled.label_anchor(LabelPlacement::Middle, usable).unwrap();
    assert!(close(anchor.x, base.x - 4.0) && close(anchor.y, base.y + 6.0));

    let p = PointMark::new("B", 3.0, 2.5);
    assert_eq!((p.label_offset.dx_mm, p.label_offset.dy_mm), (2.0, 2.0));
    let p = p.with_label_offset(2.0, -6.0);
    assert_eq!((p.label_offset.dx_mm, p.label_offset.dy_mm), (2.0, -6.0));
}

#[test]
fn label_placement_parses() {
    assert_eq!("middle".parse::<LabelPlacement>().unwrap(), LabelPlacement::Middle);
    assert_eq!(" Rightmost ".parse::<LabelPlacement>().unwrap(), LabelPlacement::RightmostVisible);
    assert_eq!("rightmost-visible".parse::<LabelPlacement>().unwrap(), LabelPlacement::RightmostVisible);
    assert!(matches!("left".parse::<LabelPlacement>(), Err(ConfigError::UnknownOption { .. })));
}
