//! # Address Classification
//!
//! Decides which kind of address a raw user-typed string represents.
//!
//! This module handles classifying and normalizing inputs, which can be:
//! * An IPv4 address (e.g., `1.1.1.1`).
//! * An IPv6 address (e.g., `2001:db8::1`).
//! * A URL or bare hostname (e.g., `https://duck.com`, `duck.com`).
//! * Nothing at all, or something that is none of the above.
//!
//! Classification is purely syntactic: no DNS lookup, no reachability check,
//! no IO of any sort. It decides which downstream analysis pipeline and which
//! route parameters are used, nothing more.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use thiserror::Error;

pub mod hostname;

/// The kinds of address the classifier can recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// The field was empty (or nothing but whitespace).
    Empty,
    /// The input matched none of the supported grammars.
    Invalid,
    /// A dotted-quad IPv4 address.
    Ipv4,
    /// A colon-hex IPv6 address.
    Ipv6,
    /// A URL or bare hostname.
    Url,
}

impl AddressKind {
    /// Whether this kind can be dispatched to a results route.
    pub fn is_routable(&self) -> bool {
        matches!(self, AddressKind::Ipv4 | AddressKind::Ipv6 | AddressKind::Url)
    }
}

impl fmt::Display for AddressKind {
    /// The token carried as routing state (`ipv4`, `ipv6`, `url`, ...).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddressKind::Empty => "empty",
            AddressKind::Invalid => "invalid",
            AddressKind::Ipv4 => "ipv4",
            AddressKind::Ipv6 => "ipv6",
            AddressKind::Url => "url",
        })
    }
}

/// Outcome of classifying one input string. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: AddressKind,
    /// The normalized form used as a route parameter. `None` for
    /// [`AddressKind::Empty`] and [`AddressKind::Invalid`].
    pub normalized: Option<String>,
}

impl Classification {
    fn of(kind: AddressKind, normalized: &str) -> Self {
        Self {
            kind,
            normalized: Some(normalized.to_string()),
        }
    }

    fn unroutable(kind: AddressKind) -> Self {
        Self {
            kind,
            normalized: None,
        }
    }

    /// Returns the normalized address, or the user-correctable error for the
    /// two kinds that cannot be dispatched.
    pub fn require_routable(&self) -> Result<&str, AddressError> {
        match self.kind {
            AddressKind::Empty => Err(AddressError::EmptyInput),
            AddressKind::Invalid => Err(AddressError::InvalidAddress),
            _ => Ok(self.normalized.as_deref().unwrap_or_default()),
        }
    }
}

/// User-correctable input errors. Surfaced inline, never logged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("field cannot be empty")]
    EmptyInput,
    #[error("must be a valid URL, IPv4 or IPv6 address")]
    InvalidAddress,
}

/// Classifies a raw user-typed string.
///
/// Steps, in order, first match wins:
/// 1. Strip a single trailing `/` (a convenience for copy-pasted URLs).
/// 2. Empty or all-whitespace input is [`AddressKind::Empty`].
/// 3. A clean dotted-quad is [`AddressKind::Ipv4`].
/// 4. Colon-hex (with at most one `::`, optional IPv4 tail) is
///    [`AddressKind::Ipv6`].
/// 5. A syntactically valid hostname, optionally behind `http://` or
///    `https://`, is [`AddressKind::Url`]; a bare hostname gets `https://`
///    prepended in the normalized form.
/// 6. Everything else is [`AddressKind::Invalid`].
///
/// The precedence is canonical: a purely numeric dotted quad classifies as
/// IPv4 even though it also looks like a plausible hostname.
pub fn classify(input: &str) -> Classification {
    let stripped = input.strip_suffix('/').unwrap_or(input);

    if stripped.trim().is_empty() {
        return Classification::unroutable(AddressKind::Empty);
    }

    // std's parsers implement exactly the conservative grammars wanted here:
    // four octets 0..=255 without leading zeros, and colon-hex groups with a
    // single `::` compression and no zone id.
    if stripped.parse::<Ipv4Addr>().is_ok() {
        return Classification::of(AddressKind::Ipv4, stripped);
    }

    if stripped.parse::<Ipv6Addr>().is_ok() {
        return Classification::of(AddressKind::Ipv6, stripped);
    }

    if let Some(normalized) = hostname::normalize(stripped) {
        return Classification {
            kind: AddressKind::Url,
            normalized: Some(normalized),
        };
    }

    Classification::unroutable(AddressKind::Invalid)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
