//! Logging macros used across the workspace.
//!
//! Thin wrappers over [`tracing`], so callers do not need a direct tracing
//! import and the CLI formatter stays the single place that decides how a
//! level (or the `success` target) looks on screen.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Like `info!`, but tagged so the formatter can render it as a success line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "webcheck::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
