//! Greedy word-wrapping bounded by a max width and a max line count.

/// Wrap `text` into at most `max_lines` lines no wider than `max_width`.
///
/// `measure` returns the rendered width of a candidate line in the same units
/// as `max_width` (pixels, under whatever font the caller is about to draw
/// with). Paragraphs are split on `\n` and wrapped independently; an empty
/// paragraph yields one empty line, preserving blank lines. Words never get
/// split: a single word wider than `max_width` is placed alone on its own
/// line and allowed to overflow. Content past the line cap is dropped.
///
/// Whitespace-only input yields no lines at all.
pub fn wrap_text<F>(text: &str, max_width: f32, max_lines: usize, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        if lines.len() >= max_lines {
            break;
        }

        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure(&candidate) > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                if lines.len() >= max_lines {
                    break;
                }
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() && lines.len() < max_lines {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Measurement stand-in: every char is 10px wide.
    fn char_width(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(" \n ")]
    fn test_blank_input_yields_no_lines(#[case] input: &str) {
        assert!(wrap_text(input, 100.0, 5, char_width).is_empty());
    }

    #[test]
    fn test_short_line_passes_through() {
        // "hi there" is 80px, fits in 100px
        let lines = wrap_text("hi there", 100.0, 5, char_width);
        assert_eq!(lines, vec!["hi there"]);
    }

    #[test]
    fn test_greedy_wrap() {
        // 100px max = 10 chars per line
        let lines = wrap_text("aaa bbb ccc ddd", 100.0, 5, char_width);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_no_line_exceeds_max_width() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let lines = wrap_text(text, 120.0, 20, char_width);
        assert!(!lines.is_empty());
        for line in &lines {
            assert!(char_width(line) <= 120.0, "line too wide: {line:?}");
        }
    }

    #[test]
    fn test_blank_line_preserved() {
        let lines = wrap_text("a\n\nb", 100.0, 5, char_width);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_line_cap_drops_remainder() {
        // Each word fills its own 50px line; 7 words but only 5 lines allowed
        let lines = wrap_text("aaaa bbbb cccc dddd eeee ffff gggg", 50.0, 5, char_width);
        assert_eq!(lines, vec!["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
    }

    #[test]
    fn test_blank_lines_count_toward_cap() {
        let lines = wrap_text("a\n\n\nb\nc", 100.0, 3, char_width);
        assert_eq!(lines, vec!["a", "", ""]);
    }

    #[test]
    fn test_overlong_word_not_split() {
        let lines = wrap_text("x abcdefghijklmnop y", 100.0, 5, char_width);
        assert_eq!(lines, vec!["x", "abcdefghijklmnop", "y"]);
    }

    #[test]
    fn test_overlong_word_alone() {
        let lines = wrap_text("abcdefghijklmnop", 100.0, 5, char_width);
        assert_eq!(lines, vec!["abcdefghijklmnop"]);
    }

    #[test]
    fn test_deterministic() {
        let a = wrap_text("one two three four five", 90.0, 5, char_width);
        let b = wrap_text("one two three four five", 90.0, 5, char_width);
        assert_eq!(a, b);
    }
}
