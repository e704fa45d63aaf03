//! Encoded-image ingestion, decoding, and contain-fit placement.

use crate::error::{CardError, CardResult};
use crate::layout::ImageBounds;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Maximum accepted upload size in bytes (5MB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Image formats accepted at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    WebP,
}

impl ImageKind {
    /// MIME type used in the data URI.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::WebP => "image/webp",
        }
    }
}

/// Validate uploaded image bytes: format sniffing plus the size cap.
///
/// The error messages are the user-facing validation text shown by the
/// upload form.
pub fn validate_upload(data: &[u8]) -> CardResult<ImageKind> {
    let kind = match image::guess_format(data) {
        Ok(image::ImageFormat::Png) => ImageKind::Png,
        Ok(image::ImageFormat::Jpeg) => ImageKind::Jpeg,
        Ok(image::ImageFormat::WebP) => ImageKind::WebP,
        _ => {
            return Err(CardError::ImageValidation(
                "Only PNG, JPG, and WebP formats are supported".to_string(),
            ))
        }
    };

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(CardError::ImageValidation(
            "File size must be less than 5MB".to_string(),
        ));
    }

    Ok(kind)
}

/// A bitmap stored as a `data:<mime>;base64,<payload>` URI, the form the
/// upload path produces and the card model carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Validate raw image bytes and encode them into a data URI.
    pub fn from_bytes(data: &[u8]) -> CardResult<Self> {
        let kind = validate_upload(data)?;
        Ok(Self(format!(
            "data:{};base64,{}",
            kind.mime(),
            BASE64.encode(data)
        )))
    }

    /// Wrap an existing data-URI string without validation.
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into premultiplied RGBA pixels ready to blit.
    pub fn decode(&self) -> CardResult<DecodedImage> {
        let payload = if self.0.starts_with("data:") {
            self.0
                .split_once(',')
                .map(|(_, p)| p)
                .ok_or_else(|| CardError::ImageDecode("malformed data URI".to_string()))?
        } else {
            // Bare base64 payload
            self.0.as_str()
        };

        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| CardError::ImageDecode(e.to_string()))?;
        DecodedImage::from_encoded_bytes(&bytes)
    }
}

/// A decoded bitmap with premultiplied-alpha RGBA pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl DecodedImage {
    fn from_encoded_bytes(bytes: &[u8]) -> CardResult<Self> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| CardError::ImageDecode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut data = rgba.into_raw();
        premultiply(&mut data);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiplied RGBA pixel data, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Convert straight-alpha RGBA to premultiplied alpha in place, using
/// `(color * alpha + 127) / 255` for proper rounding.
fn premultiply(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Placement of a contained image inside its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Aspect-preserving "contain" placement of an image inside a bounding box.
///
/// The image scales to touch the box on its longer relative axis and is
/// centered along the other; it always fits entirely within the box with no
/// cropping and no distortion.
pub fn contain_rect(img_width: u32, img_height: u32, bounds: &ImageBounds) -> FitRect {
    let img_aspect = img_width as f32 / img_height as f32;
    let bounds_aspect = bounds.width / bounds.height;

    if img_aspect > bounds_aspect {
        // Image wider than bounds - fit to width
        let height = bounds.width / img_aspect;
        FitRect {
            x: bounds.x,
            y: bounds.y + (bounds.height - height) / 2.0,
            width: bounds.width,
            height,
        }
    } else {
        // Image taller than bounds - fit to height
        let width = bounds.height * img_aspect;
        FitRect {
            x: bounds.x + (bounds.width - width) / 2.0,
            y: bounds.y,
            width,
            height: bounds.height,
        }
    }
}

/// Decode an encoded image off the render thread.
pub async fn decode_async(image: EncodedImage) -> CardResult<DecodedImage> {
    tokio::task::spawn_blocking(move || image.decode())
        .await
        .map_err(|e| CardError::ImageDecode(e.to_string()))?
}
