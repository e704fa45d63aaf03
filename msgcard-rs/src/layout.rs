//! The fixed layout and style tables the compositor renders against.
//!
//! Everything in this module is process-wide constant data: canvas
//! dimensions, per-field font styles, and per-field anchor positions. Font
//! sizes and families from [`CardData`](crate::card::CardData) supersede the
//! base values here at render time.

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Text extends right of the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text extends left of the anchor.
    Right,
}

/// Which of the card's two font-family slots a field draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilySlot {
    /// `CardData::font_family`, used by everything except the title.
    Body,
    /// `CardData::title_font_family`.
    Title,
}

/// Font weight. The card styles only use the two CSS keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Static style for one class of card text.
#[derive(Debug, Clone)]
pub struct FieldStyle {
    /// Family slot resolved against the card at render time.
    pub slot: FamilySlot,
    /// Base size in px; always superseded by the card's per-field size.
    pub size: f32,
    pub weight: FontWeight,
    /// Fill color as a CSS color string.
    pub color: &'static str,
    /// Line-height multiplier for wrapped text. Unset means the wrapped-text
    /// default of 1.5.
    pub line_height: Option<f32>,
}

/// A text anchor: one point plus horizontal alignment. Vertical placement is
/// always centered on the point.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub align: Align,
}

/// Bounding box the card image is contained within.
#[derive(Debug, Clone, Copy)]
pub struct ImageBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The full layout table for a card.
#[derive(Debug, Clone)]
pub struct CardLayout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Corner radius of the background rectangle.
    pub corner_radius: f32,
    /// Base padding unit the message wrap width is derived from.
    pub padding: f32,

    pub title_style: FieldStyle,
    pub label_style: FieldStyle,
    pub content_style: FieldStyle,
    pub message_style: FieldStyle,

    pub title_pos: Position,
    pub to_pos: Position,
    pub message_pos: Position,
    pub date_pos: Position,
    pub from_pos: Position,
    pub image_bounds: ImageBounds,
}

impl CardLayout {
    /// Maximum rendered width of a message line.
    pub fn message_max_width(&self) -> f32 {
        self.width as f32 - 4.0 * self.padding
    }
}

/// The layout every card renders against.
pub const CARD_LAYOUT: CardLayout = CardLayout {
    width: 450,
    height: 340,
    corner_radius: 8.0,
    padding: 18.0,

    title_style: FieldStyle {
        slot: FamilySlot::Title,
        size: 21.0,
        weight: FontWeight::Bold,
        color: "#000000",
        line_height: None,
    },
    label_style: FieldStyle {
        slot: FamilySlot::Body,
        size: 9.0,
        weight: FontWeight::Normal,
        color: "#666666",
        line_height: None,
    },
    content_style: FieldStyle {
        slot: FamilySlot::Body,
        size: 12.0,
        weight: FontWeight::Normal,
        color: "#000000",
        line_height: None,
    },
    message_style: FieldStyle {
        slot: FamilySlot::Body,
        size: 12.0,
        weight: FontWeight::Normal,
        color: "#000000",
        line_height: Some(1.0),
    },

    title_pos: Position {
        x: 225.0,
        y: 35.0,
        align: Align::Center,
    },
    to_pos: Position {
        x: 20.0,
        y: 90.0,
        align: Align::Left,
    },
    message_pos: Position {
        x: 50.0,
        y: 192.0,
        align: Align::Left,
    },
    date_pos: Position {
        x: 250.0,
        y: 310.0,
        align: Align::Right,
    },
    from_pos: Position {
        x: 430.0,
        y: 310.0,
        align: Align::Right,
    },
    image_bounds: ImageBounds {
        x: 14.0,
        y: 248.0,
        width: 90.0,
        height: 80.0,
    },
};
