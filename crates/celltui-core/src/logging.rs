#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports `trace!` and `debug_span!` from `tracing` when the `tracing`
//! feature is enabled. Without the feature the same macro names expand to
//! nothing (or to a [`NoopSpan`]), so render code can instrument
//! unconditionally.

#[cfg(feature = "tracing")]
pub use tracing::{debug_span, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Discards a trace event when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Stands in for a debug-level span when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span returned by `debug_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`; the guard does nothing.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard of an entered [`NoopSpan`].
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Intended for host applications that want machine-readable render traces.
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
}

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_macros_accept_structured_fields() {
        let active = 3usize;
        crate::trace!(active, scroll = 1, "select_down");
        let _guard = crate::debug_span!("widget_render", widget = "Gauge", x = active).entered();
    }
}
