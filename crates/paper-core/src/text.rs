// File: crates/paper-core/src/text.rs
// Summary: Label shaper/renderer using Skia textlayout, anchored by horizontal/vertical alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height in pixels of `text` laid out at `size` px.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, size, skia::Color::BLACK);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that its bounding box sits at (`x`, `y`) according to the alignment.
    /// Coordinates are raster pixels, y down.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        (h, v): (HAlign, VAlign),
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let ht = p.height();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }
}
