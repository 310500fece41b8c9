#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s that composites a
//! [`CellList`] in emission order, the way a backend would before painting.
//! Hosts without a terminal (tests, snapshots) read rows back as text.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `slots.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A double-width glyph at `x` owns a continuation slot at `x + 1`;
//!    overwriting either half clears the other

use crate::cell::Cell;
use crate::cell_list::CellList;
use celltui_core::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Glyph(Cell),
    Continuation,
}

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use celltui_render::buffer::Buffer;
/// use celltui_render::cell::Cell;
///
/// let mut buffer = Buffer::new(4, 1);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0), "Hi  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    slots: Vec<Slot>,
}

impl Buffer {
    /// Create a new buffer filled with default (blank) cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            slots: vec![Slot::Glyph(Cell::default()); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    ///
    /// Returns `None` out of bounds and for the right half of a wide glyph.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        match self.index(x, y).map(|i| &self.slots[i]) {
            Some(Slot::Glyph(cell)) => Some(cell),
            _ => None,
        }
    }

    /// Whether (x, y) is covered by the wide glyph to its left.
    pub fn is_continuation(&self, x: u16, y: u16) -> bool {
        matches!(
            self.index(x, y).map(|i| self.slots[i]),
            Some(Slot::Continuation)
        )
    }

    /// Clear whatever wide glyph currently covers (x, y).
    fn cleanup_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        match self.slots[idx] {
            Slot::Glyph(current) if current.width() > 1 => {
                if let Some(tail) = self.index(x.saturating_add(1), y)
                    && self.slots[tail] == Slot::Continuation
                {
                    self.slots[tail] = Slot::Glyph(Cell::default());
                }
            }
            Slot::Continuation => {
                if let Some(head) = x.checked_sub(1).and_then(|hx| self.index(hx, y)) {
                    self.slots[head] = Slot::Glyph(Cell::default());
                }
            }
            Slot::Glyph(_) => {}
        }
    }

    /// Set the cell at (x, y).
    ///
    /// Does nothing if the coordinates are out of bounds. A double-width glyph
    /// is written only if both of its columns fit.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(idx) = self.index(x, y) else { return };

        if cell.width() > 1 {
            let Some(tail) = x.checked_add(1).and_then(|tx| self.index(tx, y)) else {
                return;
            };
            self.cleanup_overlap(x, y);
            self.cleanup_overlap(x + 1, y);
            self.slots[idx] = Slot::Glyph(cell);
            self.slots[tail] = Slot::Continuation;
            return;
        }

        self.cleanup_overlap(x, y);
        self.slots[idx] = Slot::Glyph(cell);
    }

    /// Composite a render pass. Later cells overwrite earlier ones.
    pub fn apply(&mut self, cells: &CellList) {
        let _span = celltui_core::debug_span!("buffer_apply", cells = cells.len()).entered();

        for placed in cells {
            self.set(placed.x, placed.y, placed.cell);
        }
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Glyph(Cell::default()));
    }

    /// The glyphs of row `y` as a string, one char per occupied glyph.
    ///
    /// Continuation columns of wide glyphs contribute nothing, so the string
    /// has the row's display width. Returns an empty string out of bounds.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.slots[start..start + self.width as usize]
            .iter()
            .filter_map(|slot| match slot {
                Slot::Glyph(cell) => Some(cell.glyph),
                Slot::Continuation => None,
            })
            .collect()
    }

    /// All rows as text with trailing blanks removed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }
}
