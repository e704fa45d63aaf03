//! Message-card rendering pipeline using tiny-skia and cosmic-text.
//!
//! This crate turns a structured card description (text fields, font choices,
//! a background color, and an optional uploaded image) into a pixel-exact
//! 450x340 raster frame and serializes it as PNG. It uses:
//! - `tiny-skia` for 2D rasterization
//! - `cosmic-text` for text shaping, measurement, and glyph outlines
//! - `fontdb` for font database management
//! - `image` for decoding uploaded bitmaps
//!
//! # Example
//!
//! ```rust,ignore
//! use msgcard_rs::{render_card, CardData, CardSurface, CARD_LAYOUT};
//!
//! let mut surface = CardSurface::new(CARD_LAYOUT.width, CARD_LAYOUT.height)?;
//! let mut card = CardData::default();
//! card.to = "John".to_string();
//! card.message = "Hello there".to_string();
//! render_card(&mut surface, &card).await?;
//! let png_data = surface.to_png()?;
//! ```

mod card;
mod compositor;
mod error;
mod export;
mod font;
mod image;
mod layout;
mod ops;
mod surface;
mod text;

// Re-export public API
pub use card::{today_mm_dd, CardData, FontSizes, DEFAULT_BACKGROUND};
pub use compositor::render_card;
pub use error::{CardError, CardResult};
pub use export::export_filename;
pub use font::{font_config_to_db, FontConfig, GenericFamilyMap};
// `crate::` disambiguates the module from the image crate itself
pub use crate::image::{
    contain_rect, decode_async, validate_upload, DecodedImage, EncodedImage, FitRect, ImageKind,
    MAX_UPLOAD_BYTES,
};
pub use layout::{
    Align, CardLayout, FamilySlot, FieldStyle, FontWeight, ImageBounds, Position, CARD_LAYOUT,
};
pub use ops::{draw_labeled_text, draw_text, draw_wrapped_text};
pub use surface::{parse_color, CardSurface, TextStyle};
pub use text::wrap_text;
