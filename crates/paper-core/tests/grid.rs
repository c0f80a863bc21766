// File: crates/paper-core/tests/grid.rs
// Purpose: Grid step fallback and tier classification across subdivision counts.

use paper_core::grid::{classify, grid_lines, step_mm};
use paper_core::Tier;

#[test]
fn step_falls_back_to_centimetres() {
    assert_eq!(step_mm(10), 1.0);
    assert_eq!(step_mm(5), 2.0);
    assert_eq!(step_mm(1), 10.0);
    assert_eq!(step_mm(0), 10.0);
    assert_eq!(step_mm(-4), 10.0);
}

#[test]
fn classify_by_offset() {
    assert_eq!(classify(0.0, 10), Tier::Heavy);
    assert_eq!(classify(30.0, 10), Tier::Heavy);
    assert_eq!(classify(5.0, 10), Tier::Medium);
    assert_eq!(classify(15.0, 20), Tier::Medium);
    assert_eq!(classify(3.0, 10), Tier::Fine);
    // too coarse for a 5 mm tier
    assert_eq!(classify(5.0, 2), Tier::Fine);
    assert_eq!(classify(5.0, 4), Tier::Fine);
    assert_eq!(classify(20.0, 1), Tier::Heavy);
}

#[test]
fn tiers_follow_offset_modulo_rule() {
    let (near, far) = (10.0, 210.0);
    for subdivisions in [-1, 0, 1, 2, 3, 4, 5, 8, 10, 20] {
        let lines = grid_lines(near, far, subdivisions);
        let step = step_mm(subdivisions);
        assert_eq!(lines.len(), ((far - near) / step + 1e-6).floor() as usize + 1, "subdivisions={subdivisions}");
        assert!((lines.last().unwrap().pos_mm - far).abs() < 1e-6, "grid must reach the far edge");

        for line in &lines {
            let offset_um = ((line.pos_mm - near) * 1000.0).round() as i64;
            let expected = if offset_um % 10_000 == 0 {
                Tier::Heavy
            } else if subdivisions >= 5 && offset_um % 5_000 == 0 {
                Tier::Medium
            } else {
                Tier::Fine
            };
            assert_eq!(line.tier, expected, "pos={} subdivisions={subdivisions}", line.pos_mm);
        }
    }
}

#[test]
fn two_millimetre_paper_has_no_medium_lines() {
    let lines = grid_lines(0.0, 100.0, 5);
    assert_eq!(lines.len(), 51);
    assert!(lines.iter().all(|l| l.tier != Tier::Medium));
    assert_eq!(lines.iter().filter(|l| l.tier == Tier::Heavy).count(), 11);
}

#[test]
fn millimetre_paper_tier_counts() {
    let lines = grid_lines(0.0, 200.0, 10);
    let count = |t| lines.iter().filter(|l| l.tier == t).count();
    assert_eq!(count(Tier::Heavy), 21);
    assert_eq!(count(Tier::Medium), 20);
    assert_eq!(count(Tier::Fine), 201 - 41);
}
