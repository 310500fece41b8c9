#![forbid(unsafe_code)]

//! Display width of glyphs and strings.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Number of terminal columns a glyph occupies: 1 or 2.
///
/// Zero-width and control characters still occupy one column once they are
/// placed in a cell, so the result is never 0.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return 1;
    }
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Split text into displayable glyphs.
///
/// Yields the first scalar of every extended grapheme cluster.
pub fn glyphs(text: &str) -> impl Iterator<Item = char> + '_ {
    text.graphemes(true).filter_map(|g| g.chars().next())
}

/// Display width of text in cells, counted glyph by glyph.
#[must_use]
pub fn display_width(text: &str) -> usize {
    // Printable ASCII is one glyph per byte; "\r\n" is a single grapheme.
    if text.bytes().all(|b| b == b' ' || b.is_ascii_graphic()) {
        return text.len();
    }
    glyphs(text).map(char_width).sum()
}

/// Longest prefix of `text` that fits in `max_width` columns.
///
/// A glyph that would straddle the limit is dropped together with
/// everything after it; glyphs are never split.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut current_width = 0;

    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.chars().next().map_or(0, char_width);
        if current_width + w > max_width {
            return &text[..offset];
        }
        current_width += w;
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_single_width() {
        for ch in ['a', 'Z', '0', ' ', '%', '~'] {
            assert_eq!(char_width(ch), 1, "{ch:?}");
        }
    }

    #[test]
    fn control_chars_occupy_one_column() {
        assert_eq!(char_width('\t'), 1);
        assert_eq!(char_width('\u{7f}'), 1);
    }

    #[test]
    fn cjk_is_double_width() {
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('界'), 2);
        assert_eq!(char_width('Ａ'), 2); // fullwidth A
    }

    #[test]
    fn combining_mark_alone_is_one_column() {
        assert_eq!(char_width('\u{301}'), 1);
    }

    #[test]
    fn glyphs_fold_combining_marks() {
        let out: Vec<char> = glyphs("e\u{301}a").collect();
        assert_eq!(out, vec!['e', 'a']);
    }

    #[test]
    fn glyphs_keep_newlines() {
        let out: Vec<char> = glyphs("ab\ncd").collect();
        assert_eq!(out, vec!['a', 'b', '\n', 'c', 'd']);
    }

    #[test]
    fn display_width_mixed() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("a你b"), 4);
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_simple() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_drops_straddling_wide_glyph() {
        assert_eq!(truncate_to_width("你好世界", 4), "你好");
        assert_eq!(truncate_to_width("你好世界", 5), "你好");
        assert_eq!(truncate_to_width("a你", 2), "a");
    }

    #[test]
    fn truncate_keeps_combining_marks_with_base() {
        assert_eq!(truncate_to_width("e\u{301}xyz", 1), "e\u{301}");
    }
}
