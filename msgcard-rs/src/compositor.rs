//! The card compositor: resolves the card against the layout table and runs
//! the fixed-order paint sequence.

use crate::card::{CardData, DEFAULT_BACKGROUND};
use crate::error::CardResult;
use crate::image::{contain_rect, decode_async};
use crate::layout::{FamilySlot, FieldStyle, CARD_LAYOUT};
use crate::ops::{draw_labeled_text, draw_text, draw_wrapped_text};
use crate::surface::{parse_color, CardSurface, TextStyle};

/// Hard cap on visual message lines.
const MESSAGE_MAX_LINES: usize = 5;

/// Caption drawn next to the recipient field.
const TO_LABEL: &str = "To:";

/// Caption drawn next to the sender field.
const FROM_LABEL: &str = "Fm:";

/// Render a card onto the surface.
///
/// The image decode (when present) is the awaited stage; everything after it
/// is synchronous paint. Each field is independently optional and rendering
/// degrades field by field: a missing font falls back with a warning, a
/// broken image is dropped with an error log, and neither aborts the render.
/// Callers must not interleave two renders onto one surface; the `&mut`
/// receiver enforces that within safe code.
pub async fn render_card(surface: &mut CardSurface, card: &CardData) -> CardResult<()> {
    let layout = &CARD_LAYOUT;

    surface.ensure_families(&[card.title_font_family.as_str(), card.font_family.as_str()]);

    let decoded = match &card.image {
        Some(encoded) => match decode_async(encoded.clone()).await {
            Ok(img) => Some(img),
            Err(err) => {
                log::error!(target: "card", "failed to decode card image: {}", err);
                None
            }
        },
        None => None,
    };

    surface.clear();
    surface.fill_round_rect(
        layout.corner_radius,
        background_color(&card.background_color),
    );

    let sizes = &card.font_sizes;

    if !card.title.is_empty() {
        let style = resolve_style(card, &layout.title_style, sizes.title);
        draw_text(surface, &card.title, &layout.title_pos, &style);
    }

    if !card.to.is_empty() {
        let label = resolve_style(card, &layout.label_style, (sizes.to * 0.75).round());
        let content = resolve_style(card, &layout.content_style, sizes.to);
        draw_labeled_text(surface, TO_LABEL, &card.to, &layout.to_pos, &label, &content);
    }

    if !card.message.is_empty() {
        let style = resolve_style(card, &layout.message_style, sizes.message);
        draw_wrapped_text(
            surface,
            &card.message,
            &layout.message_pos,
            &style,
            layout.message_max_width(),
            MESSAGE_MAX_LINES,
        );
    }

    if !card.date.is_empty() {
        let style = resolve_style(card, &layout.content_style, sizes.date);
        draw_text(surface, &card.date, &layout.date_pos, &style);
    }

    if !card.from.is_empty() {
        let label = resolve_style(card, &layout.label_style, (sizes.from * 0.75).round());
        let content = resolve_style(card, &layout.content_style, sizes.from);
        draw_labeled_text(
            surface,
            FROM_LABEL,
            &card.from,
            &layout.from_pos,
            &label,
            &content,
        );
    }

    if let Some(img) = decoded {
        let fit = contain_rect(img.width, img.height, &layout.image_bounds);
        surface.draw_pixels_scaled(
            img.data(),
            img.width,
            img.height,
            fit.x,
            fit.y,
            fit.width,
            fit.height,
        );
    }

    Ok(())
}

/// Combine a config-level field style with the card's family and size
/// overrides into a concrete draw style.
fn resolve_style<'a>(card: &'a CardData, field: &FieldStyle, size: f32) -> TextStyle<'a> {
    let family = match field.slot {
        FamilySlot::Title => card.title_font_family.as_str(),
        FamilySlot::Body => card.font_family.as_str(),
    };
    TextStyle {
        family,
        weight: field.weight,
        size,
        color: parse_color(field.color).unwrap_or(tiny_skia::Color::BLACK),
        line_height: field.line_height,
    }
}

/// Parse the card background color, falling back to the default on bad input.
fn background_color(value: &str) -> tiny_skia::Color {
    match parse_color(value) {
        Ok(color) => color,
        Err(err) => {
            log::warn!(target: "card", "bad background color: {}", err);
            parse_color(DEFAULT_BACKGROUND).unwrap_or(tiny_skia::Color::WHITE)
        }
    }
}
