#![forbid(unsafe_code)]

//! Gauge (progress bar) widget.
//!
//! The bar fills `percent` of the space between the margins on every inner
//! row. Captions sit on the middle row at both ends, and a `"<n>%"` label is
//! centered over the bar. Each label glyph takes the bar color as background
//! only where the fill actually reaches it.

use crate::block::Block;
use crate::theme::GaugeConfig;
use crate::{Widget, draw_text_span};
use celltui_core::geometry::{Rect, Size};
use celltui_render::cell::{Attribute, Cell, StyleFlags};
use celltui_render::cell_list::CellList;
use celltui_text::{char_width, display_width, glyphs};

/// A progress bar with a centered percent label and optional captions.
///
/// `percent` is not clamped: values outside `0..=100` draw an oversized or
/// empty bar rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gauge {
    pub block: Block,
    pub percent: i32,
    pub bar_color: Attribute,
    pub percent_color: Attribute,
    pub left_margin: u16,
    pub right_margin: u16,
    pub left_text: String,
    pub right_text: String,
}

impl Default for Gauge {
    fn default() -> Self {
        Self::from_config(GaugeConfig::default())
    }
}

impl Gauge {
    /// Outer size a freshly created gauge asks for.
    pub const DEFAULT_SIZE: Size = Size::new(12, 5);

    /// Create a gauge with [`GaugeConfig::default`] colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gauge from explicit defaults.
    pub fn from_config(config: GaugeConfig) -> Self {
        Self {
            block: Block::new(),
            percent: 0,
            bar_color: config.bar_color,
            percent_color: config.percent_color,
            left_margin: config.left_margin,
            right_margin: config.right_margin,
            left_text: String::new(),
            right_text: String::new(),
        }
    }

    /// Set the surrounding block.
    pub fn block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }

    /// Set the progress value.
    pub fn percent(mut self, percent: i32) -> Self {
        self.percent = percent;
        self
    }

    /// Set the fill color.
    pub fn bar_color(mut self, color: Attribute) -> Self {
        self.bar_color = color;
        self
    }

    /// Set the foreground of the label and captions.
    pub fn percent_color(mut self, color: Attribute) -> Self {
        self.percent_color = color;
        self
    }

    /// Set the columns kept free left and right of the bar.
    pub fn margins(mut self, left: u16, right: u16) -> Self {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    /// Set the caption drawn at the left end of the middle row.
    pub fn left_text(mut self, text: impl Into<String>) -> Self {
        self.left_text = text.into();
        self
    }

    /// Set the caption drawn right-aligned on the middle row.
    pub fn right_text(mut self, text: impl Into<String>) -> Self {
        self.right_text = text.into();
        self
    }

    /// Width of the bar area: the inner width minus both margins.
    ///
    /// Negative when the margins do not fit.
    pub fn max_width(&self, inner_width: u16) -> i32 {
        i32::from(inner_width) - i32::from(self.left_margin) - i32::from(self.right_margin)
    }

    /// Number of filled columns for a bar area of `max_width`.
    ///
    /// `percent * max_width / 100`, truncated toward zero.
    pub fn fill_width(&self, max_width: i32) -> i32 {
        let fill = i64::from(self.percent) * i64::from(max_width) / 100;
        fill.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Background for filled cells.
    ///
    /// The default terminal color would make the bar invisible, so it is
    /// drawn in reverse video instead.
    fn bar_background(&self) -> Attribute {
        if self.bar_color.is_default() {
            self.bar_color | StyleFlags::REVERSE
        } else {
            self.bar_color
        }
    }
}

impl Widget for Gauge {
    fn render(&self, area: Rect, cells: &mut CellList) {
        let _span = celltui_core::debug_span!(
            "widget_render",
            widget = "Gauge",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        self.block.render(area, cells);

        let inner = self.block.inner(area);
        if inner.is_empty() {
            return;
        }

        let background = self.block.bg();
        let bar_background = self.bar_background();

        let inner_x = i32::from(inner.x);
        let inner_y = i32::from(inner.y);
        let inner_width = i32::from(inner.width);
        let left_margin = i32::from(self.left_margin);

        let max_width = self.max_width(inner.width);
        let fill_width = self.fill_width(max_width);
        let right_width = display_width(&self.right_text) as i32;

        let mid_y = inner_y + i32::from(inner.height) / 2;

        draw_text_span(
            cells,
            inner_x,
            mid_y,
            &self.left_text,
            self.percent_color,
            background,
            i32::MAX,
        );

        draw_text_span(
            cells,
            inner_x + inner_width - right_width,
            mid_y,
            &self.right_text,
            self.percent_color,
            background,
            i32::MAX,
        );

        let bar_x = inner_x + left_margin;
        // Columns past the u16 grid would be dropped anyway.
        let fill_end = bar_x
            .saturating_add(fill_width)
            .min(i32::from(u16::MAX) + 1);
        let fill_cell = Cell::from_char(' ').with_bg(bar_background);
        for y in inner.top()..inner.bottom() {
            for x in bar_x..fill_end {
                cells.push_at(x, i32::from(y), fill_cell);
            }
        }

        let label = format!("{}%", self.percent);
        let fill_boundary = bar_x.saturating_add(fill_width);
        let mut x = bar_x + max_width / 2 - right_width / 2;
        for glyph in glyphs(&label) {
            let bg = if x < fill_boundary {
                bar_background
            } else {
                background
            };
            cells.push_at(
                x,
                mid_y,
                Cell::from_char(glyph).with_fg(self.percent_color).with_bg(bg),
            );
            x += char_width(glyph) as i32;
        }
    }
}
