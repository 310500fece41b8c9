//! Property tests for glyph width and truncation.

use celltui_text::{char_width, display_width, glyphs, truncate_to_width};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('\u{4e00}', '\u{4e20}'),
            Just(' '),
            Just('\u{301}'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn char_width_is_one_or_two(ch in any::<char>()) {
        let w = char_width(ch);
        prop_assert!(w == 1 || w == 2, "width of {:?} was {}", ch, w);
    }

    #[test]
    fn display_width_is_sum_of_glyph_widths(text in text_strategy()) {
        let sum: usize = glyphs(&text).map(char_width).sum();
        prop_assert_eq!(display_width(&text), sum);
    }

    #[test]
    fn truncation_fits_and_is_prefix(text in text_strategy(), max in 0usize..30) {
        let cut = truncate_to_width(&text, max);
        prop_assert!(display_width(cut) <= max);
        prop_assert!(text.starts_with(cut));
    }

    #[test]
    fn truncation_is_maximal(text in text_strategy(), max in 0usize..30) {
        let cut = truncate_to_width(&text, max);
        let rest = &text[cut.len()..];
        if let Some(next) = glyphs(rest).next() {
            prop_assert!(display_width(cut) + char_width(next) > max);
        }
    }
}
