//! Text rules: presence and minimum length.

use super::Validator;
use crate::form::FieldValues;
use crate::Either;

/// Rule that rejects empty values.
#[derive(Clone, Debug)]
pub struct Required {
    message: String,
}

impl Validator for Required {
    #[inline]
    fn validate(&self, raw: &str, _all: &FieldValues) -> Either<String, String> {
        // Explicit emptiness, not falsiness: "0" is a value.
        if raw.is_empty() {
            Either::left(self.message.clone())
        } else {
            Either::right(raw.to_string())
        }
    }
}

/// Create a rule that fails with `message` when the value is empty.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
/// use acervo::Either;
///
/// let rule = required("O período da obra deve ser informado");
/// let none = FieldValues::new();
///
/// assert_eq!(
///     rule.validate("", &none),
///     Either::left("O período da obra deve ser informado".to_string()),
/// );
/// assert_eq!(rule.validate("0", &none), Either::right("0".to_string()));
/// ```
pub fn required(message: impl Into<String>) -> Required {
    Required {
        message: message.into(),
    }
}

/// Rule that rejects values shorter than a minimum character count.
///
/// An empty value passes vacuously; presence is [`required`]'s concern.
#[derive(Clone, Debug)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl Validator for MinLength {
    #[inline]
    fn validate(&self, raw: &str, _all: &FieldValues) -> Either<String, String> {
        if raw.is_empty() {
            return Either::right(String::new());
        }

        if raw.chars().count() < self.min {
            Either::left(self.message.clone())
        } else {
            Either::right(raw.to_string())
        }
    }
}

/// Create a rule that fails with `message` when the value has fewer than
/// `min` characters. Empty values pass.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
/// use acervo::Either;
///
/// let rule = min_length(6, "Nome da obra deve ter no mínimo 6 caracteres");
/// let none = FieldValues::new();
///
/// assert!(rule.validate("", &none).is_right()); // vacuous pass
/// assert_eq!(
///     rule.validate("Obra", &none),
///     Either::left("Nome da obra deve ter no mínimo 6 caracteres".to_string()),
/// );
/// assert!(rule.validate("Abaporu", &none).is_right());
/// ```
pub fn min_length(min: usize, message: impl Into<String>) -> MinLength {
    MinLength {
        min,
        message: message.into(),
    }
}
