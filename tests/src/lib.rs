//! Cross-crate integration tests for the webcheck workspace.

#[cfg(test)]
mod full_flow;
#[cfg(test)]
mod isolation;
