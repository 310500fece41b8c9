#![forbid(unsafe_code)]

//! celltui public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude. Rendering cannot fail, so there is no error type here: bad input
//! produces fewer cells, never an `Err`.
//!
//! # Example
//!
//! ```
//! use celltui::prelude::*;
//!
//! let menu = Menu::new().items(["alpha", "beta", "gamma"]);
//! let area = Rect::new(0, 0, 8, 2);
//! let mut state = MenuState::new();
//! menu.select_down(&mut state, area);
//! menu.select_down(&mut state, area);
//!
//! let mut cells = CellList::new();
//! StatefulWidget::render(&menu, area, &mut cells, &state);
//!
//! let mut buffer = Buffer::new(8, 2);
//! buffer.apply(&cells);
//! assert_eq!(buffer.to_lines(), vec!["beta", "gamma"]);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use celltui_core::geometry::{Rect, Sides, Size};

// --- Render re-exports -----------------------------------------------------

pub use celltui_render::buffer::Buffer;
pub use celltui_render::cell::{Attribute, Cell, Color, PlacedCell, Rgb, StyleFlags};
pub use celltui_render::cell_list::CellList;

// --- Widget re-exports -----------------------------------------------------

pub use celltui_widgets::block::{Alignment, Block};
pub use celltui_widgets::borders::{BorderSet, Borders};
pub use celltui_widgets::gauge::Gauge;
pub use celltui_widgets::menu::{Menu, MenuState, Overflow};
pub use celltui_widgets::theme::{GaugeConfig, MenuConfig};
pub use celltui_widgets::{StatefulWidget, Widget};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Attribute, Block, Borders, Buffer, Cell, CellList, Color, Gauge, GaugeConfig, Menu,
        MenuConfig, MenuState, Overflow, Rect, Size, StatefulWidget, StyleFlags, Widget,
    };

    pub use crate::{core, render, text, widgets};
}

pub use celltui_core as core;
pub use celltui_render as render;
pub use celltui_text as text;
pub use celltui_widgets as widgets;
