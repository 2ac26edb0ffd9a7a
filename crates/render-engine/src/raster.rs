//! Software RGBA surface backed by the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use framer_common::config::{OutlineStyle, OutputFormat};
use framer_common::error::{FramerError, FramerResult};
use framer_model::geometry::{Rect, Size};
use framer_model::session::Raster;

use crate::surface::Surface;

/// A decoded image, ready to composite.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// A single-color image, mostly useful in tests and placeholders.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

impl From<RgbaImage> for DecodedImage {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}

impl Raster for DecodedImage {
    fn size(&self) -> Size {
        let (w, h) = self.pixels.dimensions();
        Size::from_pixels(w, h)
    }
}

/// An RGBA pixel buffer implementing [`Surface`].
///
/// Sampling is nearest-neighbour at pixel centers; drawing blends
/// source-over.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    clips: Vec<Rect>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            clips: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Color at a pixel, `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.pixels.width() && y < self.pixels.height()).then(|| self.pixels.get_pixel(x, y).0)
    }

    /// The surface bounds intersected with every active clip.
    fn clip_rect(&self) -> Rect {
        self.clips
            .iter()
            .fold(Rect::from_size(self.size()), |acc, clip| acc.intersection(clip))
    }

    /// Pixel index range whose centers fall inside `[start, end)`.
    fn pixel_span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
        let first = (start - 0.5).ceil().max(0.0);
        let last = (end - 0.5).ceil().max(0.0);
        let first = first.min(limit as f64) as u32;
        let last = last.min(limit as f64) as u32;
        first..last.max(first)
    }

    fn fill_where(&mut self, area: Rect, color: Rgba<u8>, mut predicate: impl FnMut(f64, f64) -> bool) {
        let area = area.intersection(&self.clip_rect());
        if area.is_degenerate() {
            return;
        }
        let (w, h) = self.pixels.dimensions();
        for py in Self::pixel_span(area.y, area.bottom(), h) {
            let cy = py as f64 + 0.5;
            for px in Self::pixel_span(area.x, area.right(), w) {
                let cx = px as f64 + 0.5;
                if predicate(cx, cy) {
                    blend(self.pixels.get_pixel_mut(px, py), color);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    type Image = DecodedImage;

    fn size(&self) -> Size {
        let (w, h) = self.pixels.dimensions();
        Size::from_pixels(w, h)
    }

    fn resize(&mut self, size: Size) {
        let width = size.width.max(0.0).round() as u32;
        let height = size.height.max(0.0).round() as u32;
        self.pixels = RgbaImage::new(width, height);
        self.clips.clear();
    }

    fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn draw_image(&mut self, image: &DecodedImage, source: Rect, dest: Rect) {
        if source.is_degenerate() || dest.is_degenerate() {
            return;
        }
        let area = dest.intersection(&self.clip_rect());
        if area.is_degenerate() {
            return;
        }

        let src = image.pixels();
        let (src_w, src_h) = src.dimensions();
        if src_w == 0 || src_h == 0 {
            return;
        }
        let step_x = source.width / dest.width;
        let step_y = source.height / dest.height;
        let (w, h) = self.pixels.dimensions();

        for py in Self::pixel_span(area.y, area.bottom(), h) {
            let v = source.y + (py as f64 + 0.5 - dest.y) * step_y;
            let sy = (v.floor().max(0.0) as u32).min(src_h - 1);
            for px in Self::pixel_span(area.x, area.right(), w) {
                let u = source.x + (px as f64 + 0.5 - dest.x) * step_x;
                let sx = (u.floor().max(0.0) as u32).min(src_w - 1);
                blend(self.pixels.get_pixel_mut(px, py), *src.get_pixel(sx, sy));
            }
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clips.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn stroke_rect(&mut self, rect: Rect, style: &OutlineStyle) {
        if style.width <= 0.0 {
            return;
        }
        let half = style.width / 2.0;
        let outer = rect.inflate(half);
        let inner = rect.inflate(-half);
        let hollow = !inner.is_degenerate();
        self.fill_where(outer, Rgba(style.color), |cx, cy| {
            !(hollow && cx > inner.x && cx < inner.right() && cy > inner.y && cy < inner.bottom())
        });
    }

    fn snapshot(&self, format: OutputFormat) -> FramerResult<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        match format {
            OutputFormat::Png => DynamicImage::ImageRgba8(self.pixels.clone())
                .write_to(&mut bytes, ImageFormat::Png),
            // JPEG has no alpha channel.
            OutputFormat::Jpeg => DynamicImage::ImageRgb8(
                DynamicImage::ImageRgba8(self.pixels.clone()).to_rgb8(),
            )
            .write_to(&mut bytes, ImageFormat::Jpeg),
        }
        .map_err(|e| FramerError::encode(format!("Failed to encode {format:?} snapshot: {e}")))?;
        Ok(bytes.into_inner())
    }
}

/// Source-over blend of `src` onto `dst` (straight alpha).
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src.0[3] as f64 / 255.0;
    if sa >= 1.0 {
        *dst = src;
        return;
    }
    if sa <= 0.0 {
        return;
    }
    let da = dst.0[3] as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for i in 0..3 {
        let c = (src.0[i] as f64 * sa + dst.0[i] as f64 * da * (1.0 - sa)) / out_a;
        dst.0[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
