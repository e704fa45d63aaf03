//! Fixed-size raster surface the card is painted onto.
//!
//! `CardSurface` wraps a tiny-skia pixmap together with a cosmic-text font
//! system. Unlike a browser canvas there is no implicit drawing state: every
//! draw call receives its full style explicitly, so two calls can never
//! interfere through a forgotten font or alignment reset.

use crate::error::{CardError, CardResult};
use crate::font::{self, FontConfig};
use crate::layout::{Align, FontWeight};
use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache, Weight,
};
use tiny_skia::{Pixmap, Transform};

/// Maximum surface dimension (same as Chrome's canvas limit).
const MAX_DIMENSION: u32 = 32767;

/// Fully-resolved style for one text draw call: family, weight, size, fill
/// color, and the optional line-height multiplier used by wrapped blocks.
#[derive(Debug, Clone)]
pub struct TextStyle<'a> {
    /// Font family name; falls back to the sans-serif mapping when the family
    /// is not in the database.
    pub family: &'a str,
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size: f32,
    pub color: tiny_skia::Color,
    /// Line-height multiplier for wrapped text; `None` means the wrapped-text
    /// default of 1.5. Ignored by single-line draws.
    pub line_height: Option<f32>,
}

impl From<FontWeight> for Weight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        }
    }
}

/// A drawable raster surface with text support.
pub struct CardSurface {
    /// Width of the surface in pixels.
    width: u32,
    /// Height of the surface in pixels.
    height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pixmap: Pixmap,
    /// Font system for text shaping and measurement.
    font_system: FontSystem,
    /// Swash cache for glyph outline retrieval.
    swash_cache: SwashCache,
}

impl CardSurface {
    /// Create a new surface with the specified dimensions.
    ///
    /// Uses `FontConfig::default()`, which loads system fonts and sets up the
    /// generic family mappings.
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        Self::with_config(width, height, FontConfig::default())
    }

    /// Create a new surface with the specified dimensions and font
    /// configuration.
    pub fn with_config(width: u32, height: u32, config: FontConfig) -> CardResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CardError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(CardError::InvalidDimensions { width, height })?;

        let db = font::font_config_to_db(&config);
        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), db);

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
        })
    }

    /// Get surface width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get surface height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check the requested families against the font database, logging a
    /// warning for each one that will fall back to sans-serif.
    pub fn ensure_families(&self, families: &[&str]) {
        for family in families {
            if !font::family_available(self.font_system.db(), family) {
                log::warn!(
                    target: "card",
                    "font family \"{}\" not available, using fallback",
                    family
                );
            }
        }
    }

    /// Clear the whole surface to transparent.
    pub fn clear(&mut self) {
        log::debug!(target: "card", "clear");
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Fill the whole surface with a rounded rectangle of the given color.
    ///
    /// Each corner is a quarter turn of the given radius joining two straight
    /// edges (cubic approximation of the quarter arc).
    pub fn fill_round_rect(&mut self, radius: f32, color: tiny_skia::Color) {
        log::debug!(target: "card", "fillRoundRect r={}", radius);
        let w = self.width as f32;
        let h = self.height as f32;
        let r = radius.max(0.0).min(w / 2.0).min(h / 2.0);

        // Kappa for quarter-circle cubic Bezier approximation
        const K: f32 = 0.552_284_8;

        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(r, 0.0);
        pb.line_to(w - r, 0.0);
        if r > 0.0 {
            pb.cubic_to(w - r + r * K, 0.0, w, r - r * K, w, r);
        }
        pb.line_to(w, h - r);
        if r > 0.0 {
            pb.cubic_to(w, h - r + r * K, w - r + r * K, h, w - r, h);
        }
        pb.line_to(r, h);
        if r > 0.0 {
            pb.cubic_to(r - r * K, h, 0.0, h - r + r * K, 0.0, h - r);
        }
        pb.line_to(0.0, r);
        if r > 0.0 {
            pb.cubic_to(0.0, r - r * K, r - r * K, 0.0, r, 0.0);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            let mut paint = tiny_skia::Paint {
                anti_alias: true,
                ..Default::default()
            };
            paint.set_color(color);
            self.pixmap.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Measure the rendered width of a single line of text under the given
    /// style, in pixels.
    pub fn measure_text(&mut self, text: &str, style: &TextStyle<'_>) -> f32 {
        let (_, width, _, _) = self.shape_line(text, style);
        width
    }

    /// Place one line of text at `(x, y)`.
    ///
    /// `x` is the anchor interpreted per `align`; the text is vertically
    /// centered on `y` (baseline = middle).
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle<'_>, align: Align) {
        log::debug!(target: "card", "fillText \"{}\" {} {}", text, x, y);
        let (buffer, text_width, ascent, descent) = self.shape_line(text, style);

        let x_offset = match align {
            Align::Left => 0.0,
            Align::Right => -text_width,
            Align::Center => -text_width / 2.0,
        };
        // Middle baseline: center the span from ascent to descent on y.
        let y_offset = ascent / 2.0 - descent / 2.0;

        let base_x = x + x_offset;
        let base_y = y + y_offset;

        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(style.color);

        // Render each glyph as a vector path
        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((base_x, base_y), 1.0);

                // Floating-point glyph position for sub-pixel precision
                let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                if let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                {
                    // Font outlines have Y pointing up, screen has Y pointing
                    // down, so Y coordinates are negated during path building.
                    let mut path_builder = tiny_skia::PathBuilder::new();
                    for cmd in commands {
                        match cmd {
                            Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                            Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                            Command::QuadTo(ctrl, end) => {
                                path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                            }
                            Command::CurveTo(c1, c2, end) => {
                                path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                            }
                            Command::Close => path_builder.close(),
                        }
                    }

                    if let Some(path) = path_builder.finish() {
                        self.pixmap.fill_path(
                            &path,
                            &paint,
                            tiny_skia::FillRule::Winding,
                            Transform::from_translate(glyph_x, glyph_y),
                            None,
                        );
                    }
                }
            }
        }
    }

    /// Shape a single line, returning the laid-out buffer plus its width,
    /// ascent, and descent.
    fn shape_line(&mut self, text: &str, style: &TextStyle<'_>) -> (Buffer, f32, f32, f32) {
        let metrics = Metrics::new(style.size, style.size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let family = if font::family_available(self.font_system.db(), style.family) {
            Family::Name(style.family)
        } else {
            Family::SansSerif
        };

        // Disable hinting so measurement and placement stay resolution-independent
        let attrs = Attrs::new()
            .family(family)
            .weight(style.weight.into())
            .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut width: f32 = 0.0;
        let mut ascent: f32 = 0.0;
        let mut descent: f32 = 0.0;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            ascent = ascent.max(run.line_y - run.line_top);
            descent = descent.max((run.line_top + run.line_height) - run.line_y);
        }
        if ascent == 0.0 && descent == 0.0 {
            ascent = style.size * 0.8;
            descent = style.size * 0.2;
        }

        (buffer, width, ascent, descent)
    }

    /// Blit premultiplied RGBA pixels scaled into the destination rectangle.
    pub fn draw_pixels_scaled(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) {
        log::debug!(
            target: "card",
            "drawImage {}x{} at {} {} scaled to {}x{}",
            width, height, dx, dy, dw, dh
        );
        let Some(pixmap) = tiny_skia::PixmapRef::from_bytes(data, width, height) else {
            return;
        };
        let paint = tiny_skia::PixmapPaint {
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };

        let transform = Transform::from_translate(dx, dy)
            .pre_scale(dw / width as f32, dh / height as f32);

        self.pixmap.draw_pixmap(0, 0, pixmap, &paint, transform, None);
    }

    /// Get straight-alpha RGBA data for a region of the surface.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;

                let dst_idx = ((dy * width + dx) * 4) as usize;

                if src_x >= 0
                    && src_x < self.width as i32
                    && src_y >= 0
                    && src_y < self.height as i32
                {
                    let src_idx = (src_y as u32 * self.width + src_x as u32) as usize;
                    let pixel = &self.pixmap.data()[src_idx * 4..src_idx * 4 + 4];

                    // Convert from premultiplied alpha to straight alpha
                    let a = pixel[3];
                    if a == 0 {
                        data[dst_idx..dst_idx + 4].copy_from_slice(&[0, 0, 0, 0]);
                    } else if a == 255 {
                        data[dst_idx..dst_idx + 4].copy_from_slice(pixel);
                    } else {
                        let alpha_f = a as f32 / 255.0;
                        data[dst_idx] = (pixel[0] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 1] = (pixel[1] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 2] = (pixel[2] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Serialize the surface as PNG data.
    pub fn to_png(&self) -> CardResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
pub fn parse_color(s: &str) -> CardResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| CardError::ColorParse(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    Ok(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::BLACK))
}
