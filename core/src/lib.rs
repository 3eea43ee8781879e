//! # Webcheck Core
//!
//! The application layer of the workspace: everything between a finished
//! classification and the terminal.
//!
//! * **[`dispatch`]**: turns a classification into a navigation event for the
//!   results view, or the inline error for unroutable input.
//! * **[`boundary`]**: the per-panel failure isolator. One panicking result
//!   section becomes a fallback card instead of taking the whole view down.
//! * **[`panels`]**: the built-in result sections keyed off the address kind.

pub mod boundary;
pub mod dispatch;
pub mod panels;
