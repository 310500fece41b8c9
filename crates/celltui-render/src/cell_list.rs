#![forbid(unsafe_code)]

//! Ordered cell output of a render pass.
//!
//! Widgets append cells in paint order. A compositor applies them front to
//! back, so a later cell at the same position replaces an earlier one.

use crate::cell::{Cell, PlacedCell};

/// An ordered sequence of positioned cells.
///
/// # Example
///
/// ```
/// use celltui_render::cell::Cell;
/// use celltui_render::cell_list::CellList;
///
/// let mut cells = CellList::new();
/// cells.push(0, 0, Cell::from_char('a'));
/// cells.push(0, 0, Cell::from_char('b'));
/// assert_eq!(cells.len(), 2);
/// assert_eq!(cells.last_at(0, 0).map(|c| c.glyph), Some('b'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellList {
    cells: Vec<PlacedCell>,
}

impl CellList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Append a cell at `(x, y)`.
    #[inline]
    pub fn push(&mut self, x: u16, y: u16, cell: Cell) {
        self.cells.push(PlacedCell::new(x, y, cell));
    }

    /// Append a cell at signed coordinates.
    ///
    /// Positions that do not fit the `u16` grid are dropped. Returns whether
    /// the cell was kept.
    #[inline]
    pub fn push_at(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => {
                self.push(x, y, cell);
                true
            }
            _ => false,
        }
    }

    /// Number of cells emitted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if nothing was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drop all cells, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The cells in emission order.
    #[inline]
    pub fn as_slice(&self) -> &[PlacedCell] {
        &self.cells
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedCell> {
        self.cells.iter()
    }

    /// The cell that ends up visible at `(x, y)`, i.e. the last one emitted there.
    pub fn last_at(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cells
            .iter()
            .rev()
            .find(|p| p.x == x && p.y == y)
            .map(|p| &p.cell)
    }

    /// Consume the list, returning the cells in emission order.
    pub fn into_vec(self) -> Vec<PlacedCell> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a CellList {
    type Item = &'a PlacedCell;
    type IntoIter = std::slice::Iter<'a, PlacedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CellList {
    type Item = PlacedCell;
    type IntoIter = std::vec::IntoIter<PlacedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl Extend<PlacedCell> for CellList {
    fn extend<T: IntoIterator<Item = PlacedCell>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}
