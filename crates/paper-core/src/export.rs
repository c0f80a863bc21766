// File: crates/paper-core/src/export.rs
// Summary: RGBA raster readback, tight trimming to drawn content, compositing and file export.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::geometry::PointMm;

/// Inclusive-exclusive pixel box `[x0, x1) × [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBounds {
    pub fn width(&self) -> u32 { self.x1 - self.x0 }
    pub fn height(&self) -> u32 { self.y1 - self.y0 }
}

/// Unpremultiplied RGBA8 pixels with enough metadata to locate sheet coordinates.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    px_per_mm: f64,
    /// Pixel position of the canvas's top-left corner.
    canvas_origin_px: (f64, f64),
    canvas_height_mm: f64,
}

impl Raster {
    pub(crate) fn from_surface(
        surface: &mut skia::Surface,
        px_per_mm: f64,
        canvas_origin_px: (f64, f64),
        canvas_height_mm: f64,
    ) -> Result<Self> {
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(Error::Surface("failed to read back raster pixels"));
        }
        Ok(Self { width: w as u32, height: h as u32, pixels, px_per_mm, canvas_origin_px, canvas_height_mm })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn px_per_mm(&self) -> f64 { self.px_per_mm }
    /// Row-major RGBA8, `width * 4` bytes per row.
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    /// RGBA at (`x`, `y`), `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels.get(i..i + 4)?.try_into().ok()
    }

    /// Pixel coordinates (y down, fractional) of a sheet point.
    pub fn to_px(&self, p: PointMm) -> (f64, f64) {
        (
            self.canvas_origin_px.0 + p.x * self.px_per_mm,
            self.canvas_origin_px.1 + (self.canvas_height_mm - p.y) * self.px_per_mm,
        )
    }

    /// Smallest box holding every non-transparent pixel; `None` for an empty raster.
    pub fn content_bounds(&self) -> Option<PixelBounds> {
        let mut b: Option<PixelBounds> = None;
        for y in 0..self.height {
            let row = &self.pixels[y as usize * self.width as usize * 4..][..self.width as usize * 4];
            let mut xs = row.chunks_exact(4).enumerate().filter(|(_, px)| px[3] != 0).map(|(x, _)| x as u32);
            let Some(first) = xs.next() else { continue };
            let last = xs.last().unwrap_or(first);
            b = Some(match b {
                None => PixelBounds { x0: first, y0: y, x1: last + 1, y1: y + 1 },
                Some(b) => PixelBounds { x0: b.x0.min(first), y0: b.y0, x1: b.x1.max(last + 1), y1: y + 1 },
            });
        }
        b
    }

    /// Copy of the raster cropped to its content with zero padding.
    pub fn trimmed(&self) -> Raster {
        let Some(b) = self.content_bounds() else {
            return self.clone();
        };
        let src_stride = self.width as usize * 4;
        let mut pixels = Vec::with_capacity(b.width() as usize * b.height() as usize * 4);
        for y in b.y0..b.y1 {
            let start = y as usize * src_stride + b.x0 as usize * 4;
            pixels.extend_from_slice(&self.pixels[start..start + b.width() as usize * 4]);
        }
        Raster {
            width: b.width(),
            height: b.height(),
            pixels,
            px_per_mm: self.px_per_mm,
            canvas_origin_px: (self.canvas_origin_px.0 - b.x0 as f64, self.canvas_origin_px.1 - b.y0 as f64),
            canvas_height_mm: self.canvas_height_mm,
        }
    }

    /// Flatten over an opaque `paper` colour.
    pub fn to_rgb(&self, paper: skia::Color) -> image::RgbImage {
        let bg = [paper.r() as u32, paper.g() as u32, paper.b() as u32];
        let mut out = image::RgbImage::new(self.width, self.height);
        for (dst, src) in out.pixels_mut().zip(self.pixels.chunks_exact(4)) {
            let a = src[3] as u32;
            let blend = |c: u8, bgc: u32| ((c as u32 * a + bgc * (255 - a) + 127) / 255) as u8;
            *dst = image::Rgb([blend(src[0], bg[0]), blend(src[1], bg[1]), blend(src[2], bg[2])]);
        }
        out
    }

    /// Encode over `paper` into `format`. PNG output records the resolution in a `pHYs` chunk.
    pub fn encode(&self, paper: skia::Color, format: image::ImageFormat, target: &str) -> Result<Vec<u8>> {
        let rgb = self.to_rgb(paper);
        if format == image::ImageFormat::Png {
            return self
                .encode_png(rgb.as_raw())
                .map_err(|source| Error::Png { target: target.to_string(), source });
        }
        let mut buf = Cursor::new(Vec::new());
        rgb.write_to(&mut buf, format)
            .map_err(|source| Error::Encode { target: target.to_string(), source })?;
        Ok(buf.into_inner())
    }

    fn encode_png(&self, rgb: &[u8]) -> Result<Vec<u8>, png::EncodingError> {
        let ppm = (self.px_per_mm * 1000.0).round() as u32;
        let mut buf = Vec::new();
        {
            let mut enc = png::Encoder::new(&mut buf, self.width, self.height);
            enc.set_color(png::ColorType::Rgb);
            enc.set_depth(png::BitDepth::Eight);
            enc.set_pixel_dims(Some(png::PixelDimensions { xppu: ppm, yppu: ppm, unit: png::Unit::Meter }));
            let mut writer = enc.write_header()?;
            writer.write_image_data(rgb)?;
            writer.finish()?;
        }
        Ok(buf)
    }

    /// Encode then write `path`, creating parent directories. Replaces existing files.
    pub fn save(&self, paper: skia::Color, format: image::ImageFormat, path: &Path) -> Result<()> {
        let bytes = self.encode(paper, format, &path.display().to_string())?;
        let io_err = |source| Error::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)?;
        Ok(())
    }
}
