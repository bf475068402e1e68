//! Quantity request body

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use storefront_app::numeric::NumericInput;

use crate::extensions::*;

const DEFAULT_QUANTITY: i64 = 1;

/// Quantity Request
///
/// `quantity` may be a JSON number or a numeric string. Fractions are truncated.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuantityRequest {
    #[salvo(schema(value_type = Option<i64>))]
    pub quantity: Option<NumericInput>,
}

/// Quantity from an optional body. A blank body or absent field means one unit.
pub(super) fn optional_quantity(payload: &[u8]) -> Result<i64, StatusError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(DEFAULT_QUANTITY);
    }

    let request: QuantityRequest =
        serde_json::from_slice(payload).or_400("Invalid request body")?;

    request
        .quantity
        .map_or(Ok(DEFAULT_QUANTITY), |quantity| coerce(&quantity))
}

/// Quantity from a body that must carry one.
pub(super) fn required_quantity(request: QuantityRequest) -> Result<i64, StatusError> {
    let quantity = request.quantity.ok_or_else(|| {
        StatusError::bad_request()
            .brief("Invalid quantity")
            .detail("quantity is required")
    })?;

    coerce(&quantity)
}

fn coerce(quantity: &NumericInput) -> Result<i64, StatusError> {
    quantity.to_i64().ok_or_else(|| {
        StatusError::bad_request()
            .brief("Invalid quantity")
            .detail("quantity must be a number")
    })
}
