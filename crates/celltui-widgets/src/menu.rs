#![forbid(unsafe_code)]

//! Selectable menu (list) widget.
//!
//! A [`Menu`] owns its items and colors. The cursor lives in a separately
//! owned [`MenuState`], which navigation mutates and rendering only reads.
//!
//! # Overflow
//!
//! - [`Overflow::Wrap`] treats the items as one text stream and reflows it
//!   glyph by glyph into the inner area. No row is highlighted.
//! - [`Overflow::TruncateScroll`] shows one item per row, cut to the inner
//!   width, in a window that scrolls with the active item. The active row is
//!   a full-width highlight bar.

use crate::block::Block;
use crate::theme::MenuConfig;
use crate::{StatefulWidget, Widget, draw_text_span};
use celltui_core::geometry::{Rect, Size};
use celltui_render::cell::{Attribute, Cell};
use celltui_render::cell_list::CellList;
use celltui_text::{char_width, display_width, glyphs, truncate_to_width};

/// How a menu handles content larger than its inner area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Reflow all items as a single stream of text.
    Wrap,
    /// One item per row, truncated, scrolled to keep the active item visible.
    #[default]
    TruncateScroll,
}

/// Cursor of a [`Menu`]: the active item and the first visible item.
///
/// After every navigation call on a non-empty menu with a window of height
/// `h > 0`: `active < len` and `scroll <= active < scroll + h`. A resize can
/// leave the active row outside the window until the next call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MenuState {
    active: usize,
    scroll: usize,
}

impl MenuState {
    /// Cursor on the first item, unscrolled.
    pub const fn new() -> Self {
        Self {
            active: 0,
            scroll: 0,
        }
    }

    /// Index of the active item.
    #[inline]
    pub const fn selected_index(&self) -> usize {
        self.active
    }

    /// Index of the first visible item in [`Overflow::TruncateScroll`] mode.
    #[inline]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Move to the next item over `len` items in a window of `height` rows.
    ///
    /// Scrolls by at most one row. Does nothing when `len == 0`.
    pub fn select_down(&mut self, len: usize, height: usize) {
        if len == 0 {
            return;
        }
        self.active = self.active.saturating_add(1).min(len - 1);
        if self.active >= height.saturating_add(self.scroll) {
            self.scroll += 1;
        }
        celltui_core::trace!(
            active = self.active,
            scroll = self.scroll,
            "menu select_down"
        );
    }

    /// Move to the previous item, scrolling up by one row if it left the window.
    pub fn select_up(&mut self) {
        self.active = self.active.saturating_sub(1);
        if self.active < self.scroll {
            self.scroll -= 1;
        }
        celltui_core::trace!(
            active = self.active,
            scroll = self.scroll,
            "menu select_up"
        );
    }

    /// Back to the first item. Call after replacing the items.
    pub fn reset(&mut self) {
        self.active = 0;
        self.scroll = 0;
        celltui_core::trace!("menu reset");
    }
}

/// A list of text items with an overflow policy and item/active colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub block: Block,
    pub items: Vec<String>,
    pub overflow: Overflow,
    pub item_fg: Attribute,
    pub item_bg: Attribute,
    pub active_fg: Attribute,
    pub active_bg: Attribute,
}

impl Default for Menu {
    fn default() -> Self {
        Self::from_config(MenuConfig::default())
    }
}

impl Menu {
    /// Create an empty menu with [`MenuConfig::default`] colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty menu from explicit defaults.
    pub fn from_config(config: MenuConfig) -> Self {
        Self {
            block: Block::new(),
            items: Vec::new(),
            overflow: config.overflow,
            item_fg: config.item_fg,
            item_bg: config.item_bg,
            active_fg: config.active_fg,
            active_bg: config.active_bg,
        }
    }

    /// Set the surrounding block.
    pub fn block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }

    /// Set the items.
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the overflow policy.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the colors of ordinary rows.
    pub fn item_style(mut self, fg: Attribute, bg: Attribute) -> Self {
        self.item_fg = fg;
        self.item_bg = bg;
        self
    }

    /// Set the colors of the highlighted row.
    pub fn active_style(mut self, fg: Attribute, bg: Attribute) -> Self {
        self.active_fg = fg;
        self.active_bg = bg;
        self
    }

    /// Replace the items and put the cursor back on the first one.
    pub fn set_items<I, S>(&mut self, items: I, state: &mut MenuState)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        state.reset();
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows available for items when rendered into `area`.
    pub fn visible_height(&self, area: Rect) -> usize {
        usize::from(self.block.inner(area).height)
    }

    /// Move the cursor down, using the window height for `area`.
    pub fn select_down(&self, state: &mut MenuState, area: Rect) {
        state.select_down(self.len(), self.visible_height(area));
    }

    /// Move the cursor up.
    pub fn select_up(&self, state: &mut MenuState) {
        state.select_up();
    }

    /// Outer size that shows every item on its own row without truncation.
    pub fn preferred_size(&self) -> Size {
        let widest = self
            .items
            .iter()
            .map(|item| display_width(item))
            .max()
            .unwrap_or(0);
        let (chrome_w, chrome_h) = self.block.chrome_size();
        Size::new(
            u16::try_from(widest).unwrap_or(u16::MAX),
            u16::try_from(self.items.len()).unwrap_or(u16::MAX),
        )
        .saturating_add(chrome_w, chrome_h)
    }

    fn render_wrap(&self, inner: Rect, cells: &mut CellList) {
        let width = usize::from(inner.width);
        let height = usize::from(inner.height);
        let (mut row, mut col) = (0usize, 0usize);

        let mut stream = self
            .items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| (i > 0).then_some('\n').into_iter().chain(glyphs(item)))
            .peekable();

        while let Some(&glyph) = stream.peek() {
            if row >= height {
                break;
            }
            if glyph == '\n' {
                row += 1;
                col = 0;
                stream.next();
                continue;
            }
            let w = char_width(glyph);
            if col + w > width {
                // retry the same glyph on the next row
                row += 1;
                col = 0;
                continue;
            }
            let x = i32::from(inner.x) + col as i32;
            let y = i32::from(inner.y) + row as i32;
            cells.push_at(
                x,
                y,
                Cell::from_char(glyph)
                    .with_fg(self.item_fg)
                    .with_bg(self.item_bg),
            );
            col += w;
            stream.next();
        }
    }

    fn render_truncate_scroll(&self, inner: Rect, cells: &mut CellList, state: &MenuState) {
        let len = self.items.len();
        let height = usize::from(inner.height);
        let start = if len <= height {
            0
        } else {
            state.scroll.min(len)
        };
        let end = start.saturating_add(height).min(len);

        let right = i32::from(inner.x) + i32::from(inner.width);
        for (offset, item) in self.items[start..end].iter().enumerate() {
            let y = i32::from(inner.y) + offset as i32;
            let text = truncate_to_width(item, usize::from(inner.width));

            // rows are matched against the cursor's own scroll, even when a
            // short list pins the window to the top
            if offset + state.scroll == state.active {
                let end_x = draw_text_span(
                    cells,
                    i32::from(inner.x),
                    y,
                    text,
                    self.active_fg,
                    self.active_bg,
                    right,
                );
                let pad = Cell::from_char(' ')
                    .with_fg(self.active_fg)
                    .with_bg(self.active_bg);
                for x in end_x..right {
                    cells.push_at(x, y, pad);
                }
            } else {
                draw_text_span(
                    cells,
                    i32::from(inner.x),
                    y,
                    text,
                    self.item_fg,
                    self.item_bg,
                    right,
                );
            }
        }
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(&self, area: Rect, cells: &mut CellList, state: &Self::State) {
        let _span = celltui_core::debug_span!(
            "widget_render",
            widget = "Menu",
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

        match self.overflow {
            Overflow::Wrap => self.render_wrap(inner, cells),
            Overflow::TruncateScroll => self.render_truncate_scroll(inner, cells, state),
        }
    }
}

impl Widget for Menu {
    fn render(&self, area: Rect, cells: &mut CellList) {
        StatefulWidget::render(self, area, cells, &MenuState::new());
    }
}
