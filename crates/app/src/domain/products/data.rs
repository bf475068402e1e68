//! Products Data

use crate::numeric::NumericInput;

/// New Product Data
///
/// Every field is optional here so that presence can be validated by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<NumericInput>,
    pub code: Option<String>,
    pub stock: Option<NumericInput>,
    pub status: Option<bool>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
}

/// Product Update Data
///
/// Present fields replace the stored ones. There is no id field: ids are immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<NumericInput>,
    pub code: Option<String>,
    pub stock: Option<NumericInput>,
    pub status: Option<bool>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub category_name: Option<String>,
}

/// Parse a raw listing limit.
///
/// Any finite number of at least one limits the listing, truncated to a whole count.
/// Anything else means "no limit".
pub fn parse_limit(raw: &str) -> Option<usize> {
    let limit = raw.trim().parse::<f64>().ok()?.trunc();

    if !limit.is_finite() || limit < 1.0 {
        return None;
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "positive and finite; oversized values saturate to usize::MAX"
    )]
    Some(limit as usize)
}
