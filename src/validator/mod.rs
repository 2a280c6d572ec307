//! Field validators and the composition combinator.
//!
//! A validator is a pure function from a raw field value (plus the full raw
//! value set, for cross-field rules) to an [`Either`]: message on the left,
//! accepted value on the right. Validators carry their configuration — a
//! minimum length, a bound, a message — as plain struct fields fixed at
//! construction, and are built through small free functions:
//!
//! ```rust
//! use acervo::validator::*;
//! use acervo::form::FieldValues;
//!
//! let rule = min_length(6, "Nome da obra deve ter no mínimo 6 caracteres");
//! let none = FieldValues::new();
//!
//! assert!(rule.validate("Abaporu", &none).is_right());
//! assert!(rule.validate("Obra", &none).is_left());
//! ```
//!
//! # Emptiness is `required`'s concern
//!
//! Every rule except [`required`] passes an empty value through vacuously, so
//! that a single field can stack "must be filled in" and "must be well
//! formed" without reporting both at once. Stack rules with [`compose`]:
//!
//! ```rust
//! use acervo::validator::*;
//! use acervo::form::FieldValues;
//!
//! // Reads top-to-bottom; runs bottom-up, first failure wins.
//! let name = compose(vec![
//!     min_length(6, "Nome da obra deve ter no mínimo 6 caracteres").boxed(),
//!     required("O nome da obra deve ser informado").boxed(),
//! ]);
//!
//! let none = FieldValues::new();
//! assert_eq!(
//!     name.validate("", &none).into_left().unwrap(),
//!     "O nome da obra deve ser informado",
//! );
//! ```

mod compose;
mod number;
mod text;

pub use compose::{compose, Compose};
pub use number::{integer, less_than, Integer, LessThan};
pub use text::{min_length, required, MinLength, Required};

use crate::form::FieldValues;
use crate::Either;

/// A composable validation rule over a raw field value.
///
/// Implementations must be pure: the same `(raw, all)` pair always yields a
/// structurally equal result, and no shared state is touched.
pub trait Validator: Send + Sync {
    /// Validate a raw value against this rule.
    ///
    /// `all` is the full raw-value mapping of the form being validated, so a
    /// rule can compare fields. The built-in rules only look at `raw`.
    fn validate(&self, raw: &str, all: &FieldValues) -> Either<String, String>;
}

// Blanket impl for closures
impl<F> Validator for F
where
    F: Fn(&str, &FieldValues) -> Either<String, String> + Send + Sync,
{
    #[inline]
    fn validate(&self, raw: &str, all: &FieldValues) -> Either<String, String> {
        self(raw, all)
    }
}

/// A boxed, dynamically dispatched validator.
///
/// Field registries and [`compose`] hold their rules in this form.
pub type BoxedValidator = Box<dyn Validator>;

/// Extension methods for validators.
pub trait ValidatorExt: Validator + Sized + 'static {
    /// Box this validator for storage in a registry or a [`compose`] chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::validator::*;
    ///
    /// let rules = vec![
    ///     min_length(4, "O ano da obra deve estar no formato AAAA").boxed(),
    ///     required("O ano da obra deve ser informado").boxed(),
    /// ];
    /// let year = compose(rules);
    /// ```
    fn boxed(self) -> BoxedValidator {
        Box::new(self)
    }
}

impl<V: Validator + Sized + 'static> ValidatorExt for V {}

/// Identity rule: accepts any value unchanged.
///
/// Used for fields that carry no constraint, and the unit of [`compose`].
#[derive(Clone, Copy, Default, Debug)]
pub struct ValueField;

impl Validator for ValueField {
    #[inline]
    fn validate(&self, raw: &str, _all: &FieldValues) -> Either<String, String> {
        Either::right(raw.to_string())
    }
}

/// Create the identity rule for fields with no validation.
///
/// # Example
///
/// ```rust
/// use acervo::validator::*;
/// use acervo::form::FieldValues;
///
/// let details = value_field();
/// let none = FieldValues::new();
/// assert!(details.validate("", &none).is_right());
/// assert!(details.validate("óleo sobre tela", &none).is_right());
/// ```
pub fn value_field() -> ValueField {
    ValueField
}
