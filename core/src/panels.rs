//! # Built-in Result Panels
//!
//! The pure analyses that need nothing but the classification itself. The
//! original tool's network probes live behind the [`Navigator`] seam and are
//! out of scope here; these panels are what the results view can always show.
//!
//! [`Navigator`]: crate::dispatch::Navigator

pub mod host_info;
pub mod ip_info;
pub mod summary;

use webcheck_common::address::AddressKind;

use crate::boundary::{Panel, PanelBoundary};
use crate::dispatch::Route;

/// Assembles the panel set for a route, one boundary per panel, so a single
/// failing section cannot blank its siblings.
pub fn panels_for(route: &Route) -> Vec<PanelBoundary> {
    let mut panels: Vec<Box<dyn Panel>> = vec![Box::new(summary::SummaryPanel::new(route))];

    match route.state.address_type {
        AddressKind::Ipv4 => {
            if let Some(panel) = ip_info::Ipv4Panel::parse(&route.state.address) {
                panels.push(Box::new(panel));
            }
        }
        AddressKind::Ipv6 => {
            if let Some(panel) = ip_info::Ipv6Panel::parse(&route.state.address) {
                panels.push(Box::new(panel));
            }
        }
        AddressKind::Url => {
            panels.push(Box::new(host_info::HostnamePanel::new(
                &route.state.address,
            )));
        }
        AddressKind::Empty | AddressKind::Invalid => {}
    }

    panels
        .into_iter()
        .map(|panel| {
            let title = panel.name().to_string();
            PanelBoundary::new(panel).with_title(title)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::route_for;
    use webcheck_common::address::classify;

    fn names_for(input: &str) -> Vec<String> {
        let route = route_for(&classify(input)).unwrap();
        panels_for(&route)
            .iter()
            .map(|b| b.name().to_string())
            .collect()
    }

    #[test]
    fn test_panel_sets_per_kind() {
        assert_eq!(names_for("1.1.1.1"), vec!["Summary", "IPv4 Info"]);
        assert_eq!(names_for("2001:db8::1"), vec!["Summary", "IPv6 Info"]);
        assert_eq!(names_for("duck.com"), vec!["Summary", "Hostname Info"]);
    }

    #[test]
    fn test_every_panel_gets_its_own_boundary() {
        let route = route_for(&classify("1.1.1.1")).unwrap();
        let mut boundaries = panels_for(&route);
        assert_eq!(boundaries.len(), 2);
        for boundary in &mut boundaries {
            boundary.render();
            assert!(!boundary.failed());
        }
    }
}
