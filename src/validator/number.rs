//! Numeric rules: integer parsing and upper bounds.

use super::Validator;
use crate::form::FieldValues;
use crate::Either;

/// Rule that rejects values whose numeric reading exceeds a bound.
///
/// An empty value passes vacuously, and so does a value with no numeric
/// reading at all — whether the value parses is [`integer`]'s concern, and
/// keeping the concerns apart keeps each rule to a single message.
#[derive(Clone, Debug)]
pub struct LessThan {
    bound: f64,
    message: String,
}

impl Validator for LessThan {
    #[inline]
    fn validate(&self, raw: &str, _all: &FieldValues) -> Either<String, String> {
        if raw.is_empty() {
            return Either::right(String::new());
        }

        match raw.trim().parse::<f64>() {
            Ok(n) if n > self.bound => Either::left(self.message.clone()),
            _ => Either::right(raw.to_string()),
        }
    }
}

/// Create a rule that fails with `message` when the value reads as a number
/// greater than `bound`.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
/// use acervo::Either;
///
/// let rule = less_than(2021.0, "O ano da obra não pode ser no futuro");
/// let none = FieldValues::new();
///
/// assert!(rule.validate("1922", &none).is_right());
/// assert!(rule.validate("2021", &none).is_right());
/// assert_eq!(
///     rule.validate("2022", &none),
///     Either::left("O ano da obra não pode ser no futuro".to_string()),
/// );
/// ```
pub fn less_than(bound: f64, message: impl Into<String>) -> LessThan {
    LessThan {
        bound,
        message: message.into(),
    }
}

/// Rule that rejects values that do not parse as an integer.
///
/// An empty value passes vacuously; presence is [`required`](super::required)'s
/// concern.
#[derive(Clone, Debug)]
pub struct Integer {
    message: String,
}

impl Validator for Integer {
    #[inline]
    fn validate(&self, raw: &str, _all: &FieldValues) -> Either<String, String> {
        if raw.is_empty() {
            return Either::right(String::new());
        }

        if raw.trim().parse::<i64>().is_ok() {
            Either::right(raw.to_string())
        } else {
            Either::left(self.message.clone())
        }
    }
}

/// Create a rule that fails with `message` when the value is not an integer.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
/// use acervo::Either;
///
/// let rule = integer("O ano da obra deve ser um número inteiro");
/// let none = FieldValues::new();
///
/// assert!(rule.validate("123", &none).is_right());
/// assert_eq!(
///     rule.validate("abc", &none),
///     Either::left("O ano da obra deve ser um número inteiro".to_string()),
/// );
/// ```
pub fn integer(message: impl Into<String>) -> Integer {
    Integer {
        message: message.into(),
    }
}
