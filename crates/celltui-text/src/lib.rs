#![forbid(unsafe_code)]

//! Glyph handling for celltui.
//!
//! A *glyph* is the single `char` a terminal cell displays. Text is split into
//! glyphs along grapheme boundaries; combining marks fold into their base
//! character, so every glyph advances the cursor by one or two columns.
//!
//! # Example
//! ```
//! use celltui_text::{char_width, display_width, glyphs, truncate_to_width};
//!
//! assert_eq!(char_width('a'), 1);
//! assert_eq!(char_width('你'), 2);
//! assert_eq!(display_width("a你"), 3);
//! assert_eq!(glyphs("e\u{301}x").collect::<String>(), "ex");
//! assert_eq!(truncate_to_width("你好世界", 5), "你好");
//! ```

pub mod width;

pub use width::{char_width, display_width, glyphs, truncate_to_width};
