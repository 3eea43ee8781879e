//! IP address detail panels.
//!
//! Pure breakdowns of the classified address itself: representation, scope
//! and address-type classification. No lookups.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::boundary::Panel;

/// Octet/scope breakdown for an IPv4 address.
pub struct Ipv4Panel {
    addr: Ipv4Addr,
}

impl Ipv4Panel {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok().map(|addr| Self { addr })
    }
}

impl Panel for Ipv4Panel {
    fn name(&self) -> &str {
        "IPv4 Info"
    }

    fn render(&mut self) -> Vec<String> {
        let value = u32::from(self.addr);
        vec![
            format!("Address: {}", self.addr),
            format!("Hex: 0x{value:08X}"),
            format!("Integer: {value}"),
            format!("Scope: {}", ipv4_scope(&self.addr)),
        ]
    }
}

pub fn ipv4_scope(addr: &Ipv4Addr) -> &'static str {
    if addr.is_loopback() {
        return "loopback";
    }
    if addr.is_private() {
        return "private";
    }
    if addr.is_link_local() {
        return "link-local";
    }
    if addr.is_broadcast() {
        return "broadcast";
    }
    "global"
}

/// Segment/type breakdown for an IPv6 address.
pub struct Ipv6Panel {
    addr: Ipv6Addr,
}

impl Ipv6Panel {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok().map(|addr| Self { addr })
    }
}

impl Panel for Ipv6Panel {
    fn name(&self) -> &str {
        "IPv6 Info"
    }

    fn render(&mut self) -> Vec<String> {
        let segments = self
            .addr
            .segments()
            .iter()
            .map(|segment| format!("{segment:x}"))
            .collect::<Vec<String>>()
            .join(":");

        vec![
            format!("Address: {}", self.addr),
            format!("Expanded: {segments}"),
            format!("Type: {}", ipv6_to_type_str(&self.addr)),
        ]
    }
}

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    if ipv6_addr.is_loopback() {
        return "loopback";
    }
    if is_global_unicast(ipv6_addr) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

// Global unicast is 2000::/3.
fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}
