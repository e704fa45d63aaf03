//! Primitive drawing operations: plain, labeled, and wrapped text.
//!
//! Every op is a free function over the surface with the full style passed
//! explicitly, and every op is a no-op when its text is blank after trimming.

use crate::layout::{Align, Position};
use crate::surface::{CardSurface, TextStyle};
use crate::text::wrap_text;

/// Gap in pixels between a label and its content.
const LABEL_GAP: f32 = 6.0;

/// Line-height multiplier used when a style does not pin one.
const DEFAULT_LINE_HEIGHT: f32 = 1.5;

/// Draw a single line of text at the anchor.
pub fn draw_text(surface: &mut CardSurface, text: &str, position: &Position, style: &TextStyle<'_>) {
    if text.trim().is_empty() {
        return;
    }
    surface.fill_text(text, position.x, position.y, style, position.align);
}

/// Draw a short fixed label immediately adjacent to its content, both
/// vertically centered on `position.y`.
///
/// Right alignment anchors the content's right edge at `position.x` with the
/// label to its left; any other alignment is treated as left-anchored, label
/// first.
pub fn draw_labeled_text(
    surface: &mut CardSurface,
    label: &str,
    text: &str,
    position: &Position,
    label_style: &TextStyle<'_>,
    content_style: &TextStyle<'_>,
) {
    if text.trim().is_empty() {
        return;
    }

    if position.align == Align::Right {
        surface.fill_text(text, position.x, position.y, content_style, Align::Right);

        let content_width = surface.measure_text(text, content_style);
        surface.fill_text(
            label,
            position.x - content_width - LABEL_GAP,
            position.y,
            label_style,
            Align::Right,
        );
    } else {
        surface.fill_text(label, position.x, position.y, label_style, Align::Left);

        let label_width = surface.measure_text(label, label_style);
        surface.fill_text(
            text,
            position.x + label_width + LABEL_GAP,
            position.y,
            content_style,
            Align::Left,
        );
    }
}

/// Draw text wrapped to `max_width` and capped at `max_lines`, with the whole
/// block vertically centered on `position.y`.
pub fn draw_wrapped_text(
    surface: &mut CardSurface,
    text: &str,
    position: &Position,
    style: &TextStyle<'_>,
    max_width: f32,
    max_lines: usize,
) {
    if text.trim().is_empty() {
        return;
    }

    let lines = wrap_text(text, max_width, max_lines, |line| {
        surface.measure_text(line, style)
    });

    let line_height = style.size * style.line_height.unwrap_or(DEFAULT_LINE_HEIGHT);
    let total_height = lines.len() as f32 * line_height;
    let start_y = position.y - total_height / 2.0 + line_height / 2.0;

    for (index, line) in lines.iter().enumerate() {
        surface.fill_text(
            line,
            position.x,
            start_y + index as f32 * line_height,
            style,
            position.align,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontConfig;
    use crate::layout::FontWeight;

    fn fontless_surface() -> CardSurface {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        CardSurface::with_config(100, 100, config).unwrap()
    }

    fn style() -> TextStyle<'static> {
        TextStyle {
            family: "Arial",
            weight: FontWeight::Normal,
            size: 12.0,
            color: tiny_skia::Color::BLACK,
            line_height: None,
        }
    }

    fn surface_is_blank(surface: &CardSurface) -> bool {
        surface
            .get_image_data(0, 0, 100, 100)
            .iter()
            .all(|&b| b == 0)
    }

    #[test]
    fn test_draw_text_blank_is_noop() {
        let mut surface = fontless_surface();
        let pos = Position {
            x: 10.0,
            y: 50.0,
            align: Align::Left,
        };
        draw_text(&mut surface, "   ", &pos, &style());
        assert!(surface_is_blank(&surface));
    }

    #[test]
    fn test_draw_labeled_text_blank_content_is_noop() {
        let mut surface = fontless_surface();
        let pos = Position {
            x: 90.0,
            y: 50.0,
            align: Align::Right,
        };
        // Even with a non-blank label, blank content suppresses the pair
        draw_labeled_text(&mut surface, "To:", "  ", &pos, &style(), &style());
        assert!(surface_is_blank(&surface));
    }

    #[test]
    fn test_draw_wrapped_text_blank_is_noop() {
        let mut surface = fontless_surface();
        let pos = Position {
            x: 50.0,
            y: 50.0,
            align: Align::Left,
        };
        draw_wrapped_text(&mut surface, " \n ", &pos, &style(), 80.0, 5);
        assert!(surface_is_blank(&surface));
    }
}
