use crate::boundary::Panel;
use crate::dispatch::Route;

/// Always-present overview card for the classified address.
pub struct SummaryPanel {
    route: Route,
}

impl SummaryPanel {
    pub fn new(route: &Route) -> Self {
        Self {
            route: route.clone(),
        }
    }
}

impl Panel for SummaryPanel {
    fn name(&self) -> &str {
        "Summary"
    }

    fn render(&mut self) -> Vec<String> {
        vec![
            format!("Address: {}", self.route.state.address),
            format!("Kind: {}", self.route.state.address_type),
            format!("Route: {}", self.route.path),
        ]
    }
}
