// File: crates/paper-core/src/theme.rs
// Summary: Grid/ink palettes for sheet rendering (graphite greys, monochrome print).

use skia_safe as skia;

use crate::grid::Tier;

/// Stroke colour and width (points).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width_pt: f32,
}

impl Stroke {
    pub const fn new(color: skia::Color, width_pt: f32) -> Self { Self { color, width_pt } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    /// Colour the trimmed output is composited over.
    pub paper: skia::Color,
    pub fine: Stroke,
    pub medium: Stroke,
    pub heavy: Stroke,
    /// Outline of the usable rectangle, if any.
    pub frame: Option<Stroke>,
    /// Axes, ticks, markers and their labels.
    pub ink: skia::Color,
}

impl Palette {
    /// Light grey subdivisions, silver 5 mm lines, dark grey centimetres.
    pub fn graphite() -> Self {
        Self {
            name: "graphite",
            paper: skia::Color::WHITE,
            fine: Stroke::new(skia::Color::from_rgb(0xd3, 0xd3, 0xd3), 0.3),   // lightgrey
            medium: Stroke::new(skia::Color::from_rgb(0xc0, 0xc0, 0xc0), 0.6), // silver
            heavy: Stroke::new(skia::Color::from_rgb(0xa9, 0xa9, 0xa9), 1.0),  // darkgrey
            frame: None,
            ink: skia::Color::BLACK,
        }
    }

    /// Black lines only, thinner weights, framed. Classic printable millimetre paper.
    pub fn monochrome() -> Self {
        Self {
            name: "monochrome",
            paper: skia::Color::WHITE,
            fine: Stroke::new(skia::Color::BLACK, 0.2),
            medium: Stroke::new(skia::Color::BLACK, 0.4),
            heavy: Stroke::new(skia::Color::BLACK, 0.8),
            frame: Some(Stroke::new(skia::Color::BLACK, 0.8)),
            ink: skia::Color::BLACK,
        }
    }

    pub fn stroke(&self, tier: Tier) -> Stroke {
        match tier {
            Tier::Fine => self.fine,
            Tier::Medium => self.medium,
            Tier::Heavy => self.heavy,
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::graphite() }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::graphite(), Palette::monochrome()]
}

/// Find a palette by its `name`, falling back to graphite.
pub fn find(name: &str) -> Palette {
    for p in presets() { if p.name.eq_ignore_ascii_case(name) { return p; } }
    Palette::graphite()
}

/// Resolve a handful of common colour names used for curves.
pub fn named_color(name: &str) -> Option<skia::Color> {
    let c = match name.trim().to_ascii_lowercase().as_str() {
        "black" => skia::Color::BLACK,
        "red" => skia::Color::from_rgb(0xff, 0x00, 0x00),
        "blue" => skia::Color::from_rgb(0x00, 0x00, 0xff),
        "green" => skia::Color::from_rgb(0x00, 0x80, 0x00),
        "orange" => skia::Color::from_rgb(0xff, 0xa5, 0x00),
        "purple" => skia::Color::from_rgb(0x80, 0x00, 0x80),
        "magenta" => skia::Color::from_rgb(0xff, 0x00, 0xff),
        "cyan" => skia::Color::from_rgb(0x00, 0xff, 0xff),
        "grey" | "gray" => skia::Color::from_rgb(0x80, 0x80, 0x80),
        "brown" => skia::Color::from_rgb(0xa5, 0x2a, 0x2a),
        _ => return None,
    };
    Some(c)
}
