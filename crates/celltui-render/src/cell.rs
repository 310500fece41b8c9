#![forbid(unsafe_code)]

//! Cell types and color attributes.
//!
//! A [`Cell`] is one terminal position's worth of output: a glyph plus a
//! foreground and background [`Attribute`]. Widgets never keep cells around;
//! they emit [`PlacedCell`]s into a [`CellList`](crate::cell_list::CellList)
//! once per redraw.
//!
//! # Attributes
//!
//! ```text
//! Attribute {
//!     color: Color,       // Default sentinel, named ANSI, indexed or RGB
//!     flags: StyleFlags,  // bold, underline, reverse, ...
//! }
//! ```
//!
//! [`Attribute::DEFAULT`] is the terminal's own default color with no
//! modifiers. Widgets compare against it exactly; an attribute that merely
//! *looks* like the background is not treated specially.

use core::ops::BitOr;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Whatever the terminal uses when no color is set.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Entry of the 256-color palette.
    Indexed(u8),
    /// 24-bit color.
    Rgb(Rgb),
}

impl Color {
    /// Create a 24-bit color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b1000_0000;
    }
}

/// A color together with its style modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub color: Color,
    pub flags: StyleFlags,
}

impl Attribute {
    /// The terminal default color without modifiers.
    pub const DEFAULT: Self = Self::new(Color::Default);

    /// Create an attribute with no modifiers.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            flags: StyleFlags::empty(),
        }
    }

    /// Return a copy with `flags` added.
    #[inline]
    #[must_use]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self {
            color: self.color,
            flags: self.flags.union(flags),
        }
    }

    /// Check whether a specific flag is set.
    #[inline]
    pub const fn has_flag(self, flag: StyleFlags) -> bool {
        self.flags.contains(flag)
    }

    /// True only for the exact [`Attribute::DEFAULT`] sentinel.
    #[inline]
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Color> for Attribute {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl BitOr<StyleFlags> for Attribute {
    type Output = Self;

    fn bitor(self, rhs: StyleFlags) -> Self {
        self.with_flags(rhs)
    }
}

/// One styled glyph.
///
/// # Default
///
/// The default cell is a space in the terminal's default colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Displayed character. Occupies one or two columns, see
    /// [`celltui_text::char_width`].
    pub glyph: char,
    /// Foreground attribute.
    pub fg: Attribute,
    /// Background attribute.
    pub bg: Attribute,
}

impl Cell {
    /// Create a cell from a single character with default colors.
    #[inline]
    pub const fn from_char(glyph: char) -> Self {
        Self {
            glyph,
            fg: Attribute::DEFAULT,
            bg: Attribute::DEFAULT,
        }
    }

    /// Set the foreground attribute.
    #[inline]
    pub const fn with_fg(mut self, fg: Attribute) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background attribute.
    #[inline]
    pub const fn with_bg(mut self, bg: Attribute) -> Self {
        self.bg = bg;
        self
    }

    /// Display width of the glyph (1 or 2).
    #[inline]
    pub fn width(&self) -> usize {
        celltui_text::char_width(self.glyph)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::from_char(' ')
    }
}

/// A cell bound to a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedCell {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

impl PlacedCell {
    #[inline]
    pub const fn new(x: u16, y: u16, cell: Cell) -> Self {
        Self { x, y, cell }
    }
}
