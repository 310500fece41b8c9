#![forbid(unsafe_code)]

//! Core: geometry primitives and the logging facade shared by all celltui crates.

pub mod geometry;
pub mod logging;

// With the feature on, the macros live at the crate root just like the
// `#[macro_export]` no-op versions do without it.
#[cfg(feature = "tracing")]
pub use logging::{debug_span, trace};
