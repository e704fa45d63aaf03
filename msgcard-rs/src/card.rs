//! The card description model the editing surface mutates and the renderer
//! consumes.

use crate::image::EncodedImage;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Default card background (lemon chiffon).
pub const DEFAULT_BACKGROUND: &str = "#FFFACD";

/// Per-field font sizes in pixels, each independently adjustable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: f32,
    pub to: f32,
    pub message: f32,
    pub date: f32,
    pub from: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 45.0,
            to: 45.0,
            message: 45.0,
            date: 40.0,
            from: 40.0,
        }
    }
}

/// A complete card description.
///
/// Field names serialize in camelCase, matching the JSON shape the editing
/// form produces. Every field has a default, so partial documents
/// deserialize. The renderer never mutates a `CardData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardData {
    /// Card heading, at most 30 chars (enforced by the form, not here).
    pub title: String,
    /// Recipient name.
    pub to: String,
    /// Body text, at most 200 chars; wraps to at most 5 visual lines.
    pub message: String,
    /// Free-form date; the form constrains it to `mm/dd`.
    pub date: String,
    /// Sender name.
    pub from: String,
    /// Optional uploaded bitmap.
    pub image: Option<EncodedImage>,
    /// Background color as a CSS color string.
    pub background_color: String,
    /// Family for everything except the title.
    pub font_family: String,
    /// Family for the title.
    pub title_font_family: String,
    pub font_sizes: FontSizes,
}

impl Default for CardData {
    fn default() -> Self {
        Self {
            title: "Thanks Card".to_string(),
            to: String::new(),
            message: String::new(),
            date: today_mm_dd(),
            from: String::new(),
            image: None,
            background_color: DEFAULT_BACKGROUND.to_string(),
            font_family: "Arial".to_string(),
            title_font_family: "Arial".to_string(),
            font_sizes: FontSizes::default(),
        }
    }
}

/// Today's date in the `mm/dd` form the date field is pre-filled with.
pub fn today_mm_dd() -> String {
    let now = chrono::Local::now();
    format!("{:02}/{:02}", now.month(), now.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let card = CardData::default();
        assert_eq!(card.title, "Thanks Card");
        assert_eq!(card.to, "");
        assert_eq!(card.message, "");
        assert_eq!(card.from, "");
        assert!(card.image.is_none());
        assert_eq!(card.background_color, "#FFFACD");
        assert_eq!(card.font_family, "Arial");
        assert_eq!(card.title_font_family, "Arial");
        assert_eq!(card.font_sizes.title, 45.0);
        assert_eq!(card.font_sizes.to, 45.0);
        assert_eq!(card.font_sizes.message, 45.0);
        assert_eq!(card.font_sizes.date, 40.0);
        assert_eq!(card.font_sizes.from, 40.0);
    }

    #[test]
    fn test_default_date_is_mm_dd() {
        let date = today_mm_dd();
        let bytes = date.as_bytes();
        assert_eq!(date.len(), 5);
        assert!(bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit());
        assert_eq!(bytes[2], b'/');
        assert!(bytes[3].is_ascii_digit() && bytes[4].is_ascii_digit());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let card: CardData =
            serde_json::from_str(r##"{"to": "John", "backgroundColor": "#ffffff"}"##).unwrap();
        assert_eq!(card.to, "John");
        assert_eq!(card.background_color, "#ffffff");
        assert_eq!(card.title, "Thanks Card");
        assert_eq!(card.font_sizes.date, 40.0);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let card = CardData {
            title_font_family: "Georgia".to_string(),
            ..CardData::default()
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"titleFontFamily\":\"Georgia\""));
        assert!(json.contains("\"backgroundColor\""));
        assert!(json.contains("\"fontSizes\""));
        assert!(json.contains("\"image\":null"));
    }

    #[test]
    fn test_json_roundtrip() {
        let card = CardData {
            message: "see you\nsoon".to_string(),
            ..CardData::default()
        };
        let json = serde_json::to_string(&card).unwrap();
        let back: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
