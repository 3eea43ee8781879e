//! # Webcheck Common
//!
//! Shared domain model for the webcheck workspace.
//!
//! * **[`address`]**: pure syntactic classification of user-typed addresses.
//!     * No network, no IO. The same input always classifies the same way.
//! * **[`config`]**: run configuration shared by every command.
//!
//! The crate also exports the `info!`/`success!`/`warn!`/`error!` macros the
//! rest of the workspace logs through; they forward to [`tracing`] so the CLI
//! can dress events up with its own formatter.

pub mod address;
pub mod config;

mod macros;
