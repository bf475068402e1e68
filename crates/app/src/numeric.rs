//! Lenient numeric input.

use serde::{Deserialize, Serialize};

/// A number supplied by a client, either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON integer.
    Integer(i64),

    /// A JSON number with a fractional part (or too large for `i64`).
    Float(f64),

    /// A string expected to contain a number.
    Text(String),
}

impl NumericInput {
    /// Interpret the input as a finite float.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            #[expect(
                clippy::cast_precision_loss,
                reason = "prices are far below the 2^53 precision limit"
            )]
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
        .filter(|value| value.is_finite())
    }

    /// Interpret the input as an integer, truncating any fractional part.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) => truncate(*value),
            Self::Text(text) => {
                let text = text.trim();

                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(truncate))
            }
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked before the cast"
)]
fn truncate(value: f64) -> Option<i64> {
    let value = value.trunc();

    #[expect(clippy::cast_precision_loss, reason = "bounds only")]
    let in_range = value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64;

    in_range.then_some(value as i64)
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn integers_and_numeric_strings_coerce() {
        assert_eq!(NumericInput::Integer(5).to_i64(), Some(5));
        assert_eq!(NumericInput::from(" 12 ").to_i64(), Some(12));
        assert!(
            NumericInput::from("19.99")
                .to_f64()
                .is_some_and(|price| (price - 19.99).abs() < f64::EPSILON),
            "numeric string should parse as a float"
        );
    }

    #[test]
    fn floats_truncate_to_integers() {
        assert_eq!(NumericInput::Float(2.9).to_i64(), Some(2));
        assert_eq!(NumericInput::from("-3.5").to_i64(), Some(-3));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!(NumericInput::from("abc").to_i64(), None);
        assert!(NumericInput::from("").to_f64().is_none());
        assert!(NumericInput::from("NaN").to_f64().is_none());
    }

    #[test]
    fn deserializes_numbers_and_strings() -> TestResult {
        let values: Vec<NumericInput> = serde_json::from_str(r#"[3, 4.5, "6"]"#)?;

        assert_eq!(
            values,
            vec![
                NumericInput::Integer(3),
                NumericInput::Float(4.5),
                NumericInput::Text("6".to_string()),
            ]
        );

        Ok(())
    }
}
