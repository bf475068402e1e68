//! Response Envelope
//!
//! Every response body is wrapped as `{status, data?, message?, error?}`.
//! Handlers return [`Envelope`] on success; failures travel as salvo
//! `StatusError`s and are rendered into an [`ErrorEnvelope`] by the catcher.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EnvelopeStatus {
    /// The request succeeded.
    Success,

    /// The request failed.
    Error,
}

/// Successful response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope<T: ToSchema + 'static> {
    /// Always `success`
    pub status: EnvelopeStatus,

    /// Response payload
    pub data: T,

    /// Human readable summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: ToSchema + 'static> Envelope<T> {
    pub(crate) fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data,
            message: None,
        }
    }

    #[must_use]
    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorEnvelope {
    /// Always `error`
    pub status: EnvelopeStatus,

    /// Short description of the failure
    pub message: String,

    /// Underlying cause, when one is worth reporting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    fn new(message: String, error: Option<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message,
            error,
        }
    }
}

/// Catcher that renders every error response as an [`ErrorEnvelope`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error)
}

#[handler]
async fn render_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let envelope = match res.take_body() {
        ResBody::Error(error) => ErrorEnvelope::new(error.brief, error.detail),
        _ => ErrorEnvelope::new(fallback_message(status).to_owned(), None),
    };

    res.status_code(status);
    res.render(Json(envelope));

    ctrl.skip_rest();
}

fn fallback_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "Route not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        status if status.is_client_error() => "Bad request",
        _ => "Internal server error",
    }
}
