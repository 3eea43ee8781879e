//! Syntactic hostname validation and URL normalization.
//!
//! Deliberately conservative: dot-separated LDH labels with an alphabetic
//! final label, inside conventional DNS length limits. Nothing here is an
//! RFC-complete URL parser; it only has to be good enough to pick a route.

/// Conventional limit for a full hostname.
pub const MAX_HOSTNAME_LEN: usize = 253;
/// Conventional limit for a single label.
pub const MAX_LABEL_LEN: usize = 63;

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Splits a leading `http://` or `https://` off `s`, case-insensitively.
///
/// Returns the scheme as written (including `://`) and the remainder.
pub fn split_scheme(s: &str) -> (Option<&str>, &str) {
    for scheme in SCHEMES {
        match s.get(..scheme.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(scheme) => {
                return (Some(prefix), &s[scheme.len()..]);
            }
            _ => {}
        }
    }
    (None, s)
}

/// Returns the normalized URL form when `s` is a valid hostname, optionally
/// behind an explicit scheme. Bare hostnames get `https://` prepended; an
/// explicit scheme is kept as typed.
pub fn normalize(s: &str) -> Option<String> {
    let (scheme, host) = split_scheme(s);
    if !is_valid_hostname(host) {
        return None;
    }
    Some(match scheme {
        Some(_) => s.to_string(),
        None => format!("https://{s}"),
    })
}

/// Checks `host` against the hostname grammar: one or more dot-separated
/// labels, each `[A-Za-z0-9-]` not starting or ending with `-`, and a final
/// label of at least two alphabetic characters.
pub fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let mut labels = host.split('.').peekable();
    while let Some(label) = labels.next() {
        if !is_valid_label(label) {
            return false;
        }
        if labels.peek().is_none() && !is_valid_tld(label) {
            return false;
        }
    }
    true
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_tld(label: &str) -> bool {
    label.len() >= 2 && label.chars().all(|c| c.is_ascii_alphabetic())
}
