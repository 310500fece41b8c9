#![forbid(unsafe_code)]

//! Widgets for celltui.
//!
//! Every widget renders into a [`CellList`]: an ordered sequence of
//! positioned cells that a compositor applies front to back. Widgets embed a
//! [`Block`](block::Block) that supplies the inner drawable rectangle and its
//! own border, label and background cells.

pub mod block;
pub mod borders;
pub mod gauge;
pub mod menu;
pub mod theme;

use celltui_core::geometry::Rect;
use celltui_render::cell::{Attribute, Cell};
use celltui_render::cell_list::CellList;
use celltui_text::{char_width, glyphs};

/// A `Widget` is a renderable component.
///
/// Rendering reads the widget and the given area only; calling it twice with
/// the same inputs yields the same cells.
pub trait Widget {
    /// Append this widget's cells for the given outer area.
    fn render(&self, area: Rect, cells: &mut CellList);
}

/// A widget whose output also depends on separately owned state.
///
/// The state is borrowed immutably: rendering never moves a cursor.
pub trait StatefulWidget {
    type State;

    /// Append this widget's cells for the given outer area and state.
    fn render(&self, area: Rect, cells: &mut CellList, state: &Self::State);
}

/// Draw a run of text starting at `(x, y)` with fixed colors.
///
/// Returns the x position after the last drawn glyph. Stops before a glyph
/// that would cross `max_x` (exclusive).
pub(crate) fn draw_text_span(
    cells: &mut CellList,
    mut x: i32,
    y: i32,
    content: &str,
    fg: Attribute,
    bg: Attribute,
    max_x: i32,
) -> i32 {
    for glyph in glyphs(content) {
        let w = char_width(glyph) as i32;
        if x.saturating_add(w) > max_x {
            break;
        }
        cells.push_at(x, y, Cell::from_char(glyph).with_fg(fg).with_bg(bg));
        x = x.saturating_add(w);
    }
    x
}
