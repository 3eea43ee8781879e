use colored::*;

use webcheck_common::address::AddressKind;

use crate::terminal::colors;

/// Splits a panel body line into its key/value halves.
pub fn split_detail(line: &str) -> (&str, &str) {
    match line.split_once(": ") {
        Some((key, value)) => (key, value),
        None => ("", line),
    }
}

/// Colors the kind token for headers and summaries.
pub fn kind_label(kind: AddressKind) -> ColoredString {
    match kind {
        AddressKind::Ipv4 => "ipv4".color(colors::IPV4_ADDR),
        AddressKind::Ipv6 => "ipv6".color(colors::IPV6_ADDR),
        AddressKind::Url => "url".color(colors::PRIMARY),
        AddressKind::Empty | AddressKind::Invalid => kind.to_string().color(colors::DANGER),
    }
}
