//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Access to values injected into the depot by router hoops.
pub(crate) trait DepotExt {
    /// The shared application state, or a 500 if the router was built without it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            StatusError::internal_server_error().brief("Application state unavailable")
        })
    }
}
