#![forbid(unsafe_code)]

//! Bordered box that publishes an inner drawable rectangle.

use crate::borders::{BorderSet, Borders};
use crate::{Widget, draw_text_span};
use celltui_core::geometry::{Rect, Sides};
use celltui_render::cell::{Attribute, Cell};
use celltui_render::cell_list::CellList;
use celltui_text::display_width;

/// Horizontal placement of the block label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    /// Align text to the left.
    Left,
    /// Center text horizontally.
    Center,
    /// Align text to the right.
    Right,
}

/// A box with optional borders, a label on the top border and a background.
///
/// Widgets embed a `Block` and draw into [`Block::inner`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    borders: Borders,
    border_set: BorderSet,
    border_fg: Attribute,
    border_bg: Attribute,
    title: Option<String>,
    title_alignment: Alignment,
    title_fg: Attribute,
    background: Attribute,
}

impl Block {
    /// Create a borderless block with default colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block with all borders enabled.
    pub fn bordered() -> Self {
        Self::default().borders(Borders::ALL)
    }

    /// Set which borders to render.
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the border character set.
    pub fn border_set(mut self, set: BorderSet) -> Self {
        self.border_set = set;
        self
    }

    /// Set the border foreground.
    pub fn border_fg(mut self, fg: Attribute) -> Self {
        self.border_fg = fg;
        self
    }

    /// Set the border background.
    pub fn border_bg(mut self, bg: Attribute) -> Self {
        self.border_bg = bg;
        self
    }

    /// Set the label displayed on the top border.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the horizontal alignment of the label.
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Set the label foreground.
    pub fn title_fg(mut self, fg: Attribute) -> Self {
        self.title_fg = fg;
        self
    }

    /// Set the background painted over the whole block area.
    ///
    /// [`Attribute::DEFAULT`] paints nothing and leaves the terminal
    /// background showing through.
    pub fn background(mut self, bg: Attribute) -> Self {
        self.background = bg;
        self
    }

    /// The block background, used by widgets for their unfilled cells.
    pub fn bg(&self) -> Attribute {
        self.background
    }

    /// Compute the inner area inside the block's borders.
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(self.border_sides())
    }

    /// Total `(width, height)` taken up by borders.
    pub fn chrome_size(&self) -> (u16, u16) {
        let sides = self.border_sides();
        (sides.horizontal_sum(), sides.vertical_sum())
    }

    fn border_sides(&self) -> Sides {
        Sides::new(
            self.borders.contains(Borders::TOP) as u16,
            self.borders.contains(Borders::RIGHT) as u16,
            self.borders.contains(Borders::BOTTOM) as u16,
            self.borders.contains(Borders::LEFT) as u16,
        )
    }

    fn border_cell(&self, c: char) -> Cell {
        Cell::from_char(c)
            .with_fg(self.border_fg)
            .with_bg(self.border_bg)
    }

    fn render_background(&self, area: Rect, cells: &mut CellList) {
        if self.background.is_default() {
            return;
        }
        let blank = Cell::from_char(' ').with_bg(self.background);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                cells.push(x, y, blank);
            }
        }
    }

    fn render_borders(&self, area: Rect, cells: &mut CellList) {
        let set = self.border_set;

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                cells.push(area.x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            let x = area.right() - 1;
            for y in area.y..area.bottom() {
                cells.push(x, y, self.border_cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                cells.push(x, area.y, self.border_cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            let y = area.bottom() - 1;
            for x in area.x..area.right() {
                cells.push(x, y, self.border_cell(set.horizontal));
            }
        }

        // Corners go last so they replace the edge characters.
        if self.borders.contains(Borders::LEFT | Borders::TOP) {
            cells.push(area.x, area.y, self.border_cell(set.top_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::TOP) {
            cells.push(area.right() - 1, area.y, self.border_cell(set.top_right));
        }
        if self.borders.contains(Borders::LEFT | Borders::BOTTOM) {
            cells.push(area.x, area.bottom() - 1, self.border_cell(set.bottom_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::BOTTOM) {
            cells.push(
                area.right() - 1,
                area.bottom() - 1,
                self.border_cell(set.bottom_right),
            );
        }
    }

    fn render_title(&self, area: Rect, cells: &mut CellList) {
        let Some(title) = self.title.as_deref() else {
            return;
        };
        if !self.borders.contains(Borders::TOP) || area.width < 3 {
            return;
        }

        let available_width = area.width.saturating_sub(2) as usize;
        let shown_width = display_width(title).min(available_width);

        let x = match self.title_alignment {
            Alignment::Left => area.x.saturating_add(1),
            Alignment::Center => area
                .x
                .saturating_add(1)
                .saturating_add(((available_width - shown_width) / 2) as u16),
            Alignment::Right => area
                .right()
                .saturating_sub(1)
                .saturating_sub(shown_width as u16),
        };

        let max_x = area.right().saturating_sub(1);
        draw_text_span(
            cells,
            i32::from(x),
            i32::from(area.y),
            title,
            self.title_fg,
            self.border_bg,
            i32::from(max_x),
        );
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, cells: &mut CellList) {
        let _span = celltui_core::debug_span!(
            "widget_render",
            widget = "Block",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        self.render_background(area, cells);
        self.render_borders(area, cells);
        self.render_title(area, cells);
    }
}
