//! Full-form validation: field registries, raw values, error collection.
//!
//! The orchestrator here is deliberately not fail-fast across fields: every
//! declared field is evaluated exactly once and ALL failures come back
//! together, so a form can flag every problem in a single pass. Within a
//! single field, [`compose`](crate::validator::compose) still short-circuits
//! to pick the one message that field shows.
//!
//! ```rust
//! use acervo::form::{run_validation, FieldValidations, FieldValues};
//! use acervo::validator::*;
//!
//! let validations = FieldValidations::new()
//!     .field("name", min_length(6, "m1"))
//!     .field("author", min_length(10, "m2"));
//!
//! let mut form = FieldValues::new();
//! form.insert("name", "Obra");
//! form.insert("author", "Anita");
//!
//! let errors = run_validation(&validations, &form).into_left().unwrap();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field, "name");
//! assert_eq!(errors[1].field, "author");
//! ```

use crate::validator::{Validator, ValidatorExt};
use crate::Either;
use std::fmt;

/// An insertion-ordered mapping from field name to raw value.
///
/// Iteration order is the order fields were inserted, which downstream
/// consumers rely on for stable error display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    entries: Vec<(String, String)>,
}

impl FieldValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's raw value, replacing any previous value for the name
    /// while keeping its original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Look up a field's raw value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// A per-field validation failure: which field, the raw value it held, and
/// the message to show.
///
/// This is the only structured error the validation core produces; user
/// input never raises anything else.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Name of the field that failed.
    pub field: String,
    /// The raw value the field held when it failed.
    pub value: String,
    /// The user-facing message.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An insertion-ordered registry from field name to validator.
///
/// Declaration order determines evaluation and error-collection order.
#[derive(Default)]
pub struct FieldValidations {
    entries: Vec<(String, Box<dyn Validator>)>,
}

impl FieldValidations {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field and its rule. Chainable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::form::FieldValidations;
    /// use acervo::validator::*;
    ///
    /// let validations = FieldValidations::new()
    ///     .field("period", required("O período da obra deve ser informado"))
    ///     .field("details", value_field());
    /// ```
    pub fn field(mut self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.entries.push((name.into(), validator.boxed()));
        self
    }

    /// Iterate over `(field, validator)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Validator)> {
        self.entries
            .iter()
            .map(|(name, validator)| (name.as_str(), validator.as_ref()))
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FieldValidations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

/// The raw-value collaborator: anything that can report the current raw
/// value of a named field.
///
/// In the browser original this is a DOM query; in tests it is a
/// [`FieldValues`]. A field the source does not know reads as empty, which
/// lets `required` report it rather than anything panicking.
pub trait ValueSource {
    /// Current raw value of `field`, if the source knows the field.
    fn value_of(&self, field: &str) -> Option<String>;
}

impl ValueSource for FieldValues {
    fn value_of(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }
}

/// Run every declared validator against the source's current values,
/// collecting all failures.
///
/// Every declared field is read and evaluated exactly once, in declaration
/// order. Failures are tagged with field name and raw value; if there are
/// none, the full raw-value mapping comes back on the right.
///
/// # Example
///
/// ```rust
/// use acervo::form::{run_validation, FieldValidations, FieldValues};
/// use acervo::validator::*;
///
/// let validations = FieldValidations::new()
///     .field("name", required("O nome da obra deve ser informado"));
///
/// let mut form = FieldValues::new();
/// form.insert("name", "Abaporu");
///
/// let values = run_validation(&validations, &form).into_right().unwrap();
/// assert_eq!(values.get("name"), Some("Abaporu"));
/// ```
pub fn run_validation(
    validations: &FieldValidations,
    source: &impl ValueSource,
) -> Either<Vec<FieldError>, FieldValues> {
    // Snapshot all raw values first so cross-field rules see a consistent set.
    let values: FieldValues = validations
        .field_names()
        .map(|field| (field, source.value_of(field).unwrap_or_default()))
        .collect();

    let errors: Vec<FieldError> = validations
        .iter()
        .filter_map(|(field, validator)| {
            let raw = values.get(field).unwrap_or_default();
            validator
                .validate(raw, &values)
                .map_left(|message| FieldError {
                    field: field.to_string(),
                    value: raw.to_string(),
                    message,
                })
                .into_left()
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        fields = validations.len(),
        errors = errors.len(),
        "form validation finished"
    );

    if errors.is_empty() {
        Either::right(values)
    } else {
        Either::left(errors)
    }
}

/// Deferred entry point over [`run_validation`].
///
/// The work itself is sequential and synchronous; the future exists so the
/// triggering event handler can await the outcome instead of blocking on it.
///
/// # Example
///
/// ```rust
/// use acervo::form::{validate, FieldValidations, FieldValues};
/// use acervo::validator::*;
///
/// let validations = FieldValidations::new()
///     .field("name", required("O nome da obra deve ser informado"));
/// let form: FieldValues = [("name", "Abaporu")].into_iter().collect();
///
/// let result = tokio_test::block_on(validate(&validations, &form));
/// assert!(result.is_right());
/// ```
pub async fn validate(
    validations: &FieldValidations,
    source: &impl ValueSource,
) -> Either<Vec<FieldError>, FieldValues> {
    run_validation(validations, source)
}
