//! # Results Dispatch
//!
//! Converts a finished classification into the navigation event the results
//! view consumes, or into the inline error for unroutable input.
//!
//! The route parameter is percent-encoded here; whoever implements
//! [`Navigator`] receives a safe-to-encode path plus the kind as routing
//! state and is responsible for everything after that.

use webcheck_common::address::{AddressError, AddressKind, Classification};

/// Route prefix of the results view.
pub const RESULTS_PREFIX: &str = "/results/";

/// Navigation event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// `/results/{address}` with the address percent-encoded.
    pub path: String,
    pub state: RouteState,
}

/// Routing state carried alongside the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteState {
    /// The normalized address, not encoded.
    pub address: String,
    /// Keys the downstream analysis pipeline.
    pub address_type: AddressKind,
}

/// Builds the results route for a classification.
///
/// `Empty` and `Invalid` come back as the matching [`AddressError`]; callers
/// surface those inline and take no navigation action. That path is a no-op,
/// not a failure.
pub fn route_for(classification: &Classification) -> Result<Route, AddressError> {
    let address = classification.require_routable()?;
    Ok(Route {
        path: format!("{RESULTS_PREFIX}{}", urlencoding::encode(address)),
        state: RouteState {
            address: address.to_string(),
            address_type: classification.kind,
        },
    })
}

/// Outbound port for whatever owns the results view.
pub trait Navigator {
    fn navigate(&mut self, route: Route) -> anyhow::Result<()>;
}
