//! Request rules shared by the resource modules.
//!
//! Request DTOs derive `validator::Validate`, tagging every rule with a code that is unique
//! within the DTO. A route then walks its chain of `(code, message)` pairs in order and
//! reports the first code the validator flagged, so the first failure is the one sent back
//! and the order of the chain, not the order of the error map, decides which one that is.

use super::error::Error;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Ordered `(code, message)` pairs. The first flagged code ends the request.
pub type Chain = [(&'static str, &'static str)];

/// Whether any field of `errors` carries `code`.
pub fn flagged(errors: &ValidationErrors, code: &str) -> bool {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .any(|error| error.code == code)
}

/// Runs `chain` against `errors`, turning the first flagged rule into a 400.
pub fn ensure(errors: &ValidationErrors, chain: &Chain) -> Result<(), Error> {
    match chain.iter().find(|(code, _)| flagged(errors, code)) {
        Some((_, message)) => Err(Error::Validation(message.to_string())),
        None => Ok(()),
    }
}

/// Text made only of whitespace counts as blank.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

pub fn whole_positive(value: &Value) -> Result<(), ValidationError> {
    match positive_integer(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("not_positive_integer")),
    }
}

/// Falsy values (`null`, `false`, `0`, `""`) count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whole numbers greater than zero. `5.0` is as whole as `5`.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let number = match value.as_u64() {
        Some(number) => number,
        None => {
            let number = value.as_f64()?;
            if number.fract() != 0.0 || number < 1.0 || number > u64::MAX as f64 {
                return None;
            }
            number as u64
        }
    };

    Some(number).filter(|n| *n > 0)
}
