//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map any error to an HTTP error with a client-facing message.
pub(crate) trait ResultExt<T> {
    /// Log the error with `context` and report a generic 500.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Report a 400 with `message`, keeping the error text as detail.
    fn or_400(self, message: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error().brief("Internal server error")
        })
    }

    fn or_400(self, message: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{message}: {error}");

            StatusError::bad_request()
                .brief(message.to_owned())
                .detail(error.to_string())
        })
    }
}
