#![forbid(unsafe_code)]

//! Render kernel: cells, attributes, ordered cell lists and the compositing buffer.

pub mod buffer;
pub mod cell;
pub mod cell_list;
