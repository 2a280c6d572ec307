//! The validator composition combinator.

use super::{BoxedValidator, Validator};
use crate::form::FieldValues;
use crate::Either;
use std::fmt;

/// A chain of validators evaluated in reverse declaration order.
///
/// Built by [`compose`]; the empty chain accepts everything, like
/// [`value_field`](super::value_field).
pub struct Compose {
    validators: Vec<BoxedValidator>,
}

impl fmt::Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl Validator for Compose {
    fn validate(&self, raw: &str, all: &FieldValues) -> Either<String, String> {
        // Last listed runs first; the first failure is the field's message.
        for validator in self.validators.iter().rev() {
            if let Either::Left(message) = validator.validate(raw, all) {
                return Either::left(message);
            }
        }

        Either::right(raw.to_string())
    }
}

/// Chain validators, short-circuiting on the first failure.
///
/// The chain evaluates in REVERSE declaration order: the last listed rule
/// runs first. Call sites then read top-to-bottom as "format, then presence"
/// while presence is actually checked first — which single message a field
/// shows when several rules are violated is part of the contract, so the
/// order of the list matters to users, not just to the implementation.
///
/// On success the original value is returned, untouched by the intermediate
/// rules.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
/// use acervo::Either;
///
/// let year = compose(vec![
///     min_length(4, "O ano da obra deve estar no formato AAAA").boxed(),
///     less_than(2021.0, "O ano da obra não pode ser no futuro").boxed(),
///     integer("O ano da obra deve ser um número inteiro").boxed(),
///     required("O ano da obra deve ser informado").boxed(),
/// ]);
/// let none = FieldValues::new();
///
/// // required runs first
/// assert_eq!(
///     year.validate("", &none),
///     Either::left("O ano da obra deve ser informado".to_string()),
/// );
/// // then integer
/// assert_eq!(
///     year.validate("abc", &none),
///     Either::left("O ano da obra deve ser um número inteiro".to_string()),
/// );
/// // all pass: the original value comes back
/// assert_eq!(year.validate("1922", &none), Either::right("1922".to_string()));
/// ```
pub fn compose(validators: Vec<BoxedValidator>) -> Compose {
    Compose { validators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{min_length, required, ValidatorExt};

    fn no_context() -> FieldValues {
        FieldValues::new()
    }

    #[test]
    fn test_empty_compose_is_identity() {
        let chain = compose(vec![]);
        let all = no_context();

        assert_eq!(chain.validate("", &all), Either::right(String::new()));
        assert_eq!(
            chain.validate("qualquer", &all),
            Either::right("qualquer".to_string())
        );
    }

    #[test]
    fn test_last_listed_runs_first() {
        let chain = compose(vec![
            min_length(6, "curto demais").boxed(),
            required("deve ser informado").boxed(),
        ]);
        let all = no_context();

        // Empty violates both rules; required (listed last) wins.
        assert_eq!(
            chain.validate("", &all),
            Either::left("deve ser informado".to_string())
        );
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let chain = compose(vec![
            min_length(6, "curto demais").boxed(),
            required("deve ser informado").boxed(),
        ]);
        let all = no_context();

        assert_eq!(
            chain.validate("abc", &all),
            Either::left("curto demais".to_string())
        );
    }

    #[test]
    fn test_success_returns_original_value() {
        let chain = compose(vec![
            min_length(6, "curto demais").boxed(),
            required("deve ser informado").boxed(),
        ]);
        let all = no_context();

        assert_eq!(
            chain.validate("Abaporu", &all),
            Either::right("Abaporu".to_string())
        );
    }

    #[test]
    fn test_both_failing_yields_the_later_listed_message() {
        let a = |_: &str, _: &FieldValues| Either::<String, String>::left("A".to_string());
        let b = |_: &str, _: &FieldValues| Either::<String, String>::left("B".to_string());
        let chain = compose(vec![a.boxed(), b.boxed()]);
        let all = no_context();

        assert_eq!(chain.validate("x", &all), Either::left("B".to_string()));
    }
}
