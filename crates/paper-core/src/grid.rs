// File: crates/paper-core/src/grid.rs
// Summary: Grid line placement and tier classification (fine / 5 mm / 10 mm).

use crate::types::EPS_MM;

/// Visual weight class of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// One subdivision.
    Fine,
    /// Every 5 mm, only when subdivisions are at least that fine.
    Medium,
    /// Every 10 mm.
    Heavy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Absolute position along the axis, mm.
    pub pos_mm: f64,
    pub tier: Tier,
}

/// Distance between consecutive lines for `subdivisions` lines per 10 mm.
/// Non-positive counts fall back to 10 mm.
pub fn step_mm(subdivisions: i32) -> f64 {
    if subdivisions > 0 { 10.0 / subdivisions as f64 } else { 10.0 }
}

/// Tier of a line sitting `offset_mm` from the grid origin.
pub fn classify(offset_mm: f64, subdivisions: i32) -> Tier {
    if on_multiple(offset_mm, 10.0) {
        Tier::Heavy
    } else if subdivisions >= 5 && on_multiple(offset_mm, 5.0) {
        Tier::Medium
    } else {
        Tier::Fine
    }
}

/// Lines from `near` to `far` inclusive, one per step, each classified by its offset from `near`.
pub fn grid_lines(near: f64, far: f64, subdivisions: i32) -> Vec<GridLine> {
    let step = step_mm(subdivisions);
    // tolerate float drift so the far edge is still reached
    let count = ((far - near) / step + EPS_MM).floor().max(0.0) as usize;
    (0..=count)
        .map(|i| {
            let offset = i as f64 * step;
            GridLine { pos_mm: near + offset, tier: classify(offset, subdivisions) }
        })
        .collect()
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn on_multiple(v: f64, m: f64) -> bool {
    let r = v.rem_euclid(m);
    r < EPS_MM || (m - r) < EPS_MM
}
