//! The museum-work registration form: canonical rules and submit flow.
//!
//! The message strings are user-facing data, fixed in the application's
//! language, and kept byte-for-byte stable — compatibility tests match on
//! them exactly.
//!
//! ```rust
//! use acervo::form::{run_validation, FieldValues};
//! use acervo::registration::{work_validations, NAME_MIN_LENGTH_MESSAGE};
//!
//! let validations = work_validations(2021);
//! let form: FieldValues = [("name", "Obra")].into_iter().collect();
//!
//! let errors = run_validation(&validations, &form).into_left().unwrap();
//! assert_eq!(errors[0].message, NAME_MIN_LENGTH_MESSAGE);
//! ```

use crate::form::{validate, FieldError, FieldValidations, ValueSource};
use crate::repository::WorkRepository;
use crate::validator::{
    compose, integer, less_than, min_length, required, value_field, ValidatorExt,
};
use crate::work::Work;
use crate::Either;
use std::rc::Rc;

/// Shown when the work name is missing.
pub const NAME_REQUIRED_MESSAGE: &str = "O nome da obra deve ser informado";
/// Shown when the work name is too short.
pub const NAME_MIN_LENGTH_MESSAGE: &str = "Nome da obra deve ter no mínimo 6 caracteres";
/// Shown when the author name is missing.
pub const AUTHOR_REQUIRED_MESSAGE: &str = "O nome do autor deve ser informado";
/// Shown when the author name is too short.
pub const AUTHOR_MIN_LENGTH_MESSAGE: &str = "Nome do autor deve ter no mínimo 10 caracteres";
/// Shown when the release year is missing.
pub const YEAR_REQUIRED_MESSAGE: &str = "O ano da obra deve ser informado";
/// Shown when the release year is not an integer.
pub const YEAR_INTEGER_MESSAGE: &str = "O ano da obra deve ser um número inteiro";
/// Shown when the release year is in the future.
pub const YEAR_IN_THE_FUTURE_MESSAGE: &str = "O ano da obra não pode ser no futuro";
/// Shown when the release year is not four digits.
pub const YEAR_FORMAT_MESSAGE: &str = "O ano da obra deve estar no formato AAAA";
/// Shown when the period is not selected.
pub const PERIOD_REQUIRED_MESSAGE: &str = "O período da obra deve ser informado";
/// Shown when the type is not selected.
pub const TYPE_REQUIRED_MESSAGE: &str = "O tipo da obra deve ser informado";

/// The canonical per-field rules of the registration form.
///
/// `current_year` bounds the release year; callers read the clock once and
/// pass it in, keeping every rule referentially transparent.
///
/// Each chain is listed top-to-bottom in display order and evaluated
/// bottom-up by [`compose`], so presence is always checked before format.
pub fn work_validations(current_year: i64) -> FieldValidations {
    FieldValidations::new()
        .field(
            "name",
            compose(vec![
                min_length(6, NAME_MIN_LENGTH_MESSAGE).boxed(),
                required(NAME_REQUIRED_MESSAGE).boxed(),
            ]),
        )
        .field(
            "author",
            compose(vec![
                min_length(10, AUTHOR_MIN_LENGTH_MESSAGE).boxed(),
                required(AUTHOR_REQUIRED_MESSAGE).boxed(),
            ]),
        )
        .field(
            "releaseYear",
            compose(vec![
                min_length(4, YEAR_FORMAT_MESSAGE).boxed(),
                less_than(current_year as f64, YEAR_IN_THE_FUTURE_MESSAGE).boxed(),
                integer(YEAR_INTEGER_MESSAGE).boxed(),
                required(YEAR_REQUIRED_MESSAGE).boxed(),
            ]),
        )
        .field("period", required(PERIOD_REQUIRED_MESSAGE))
        .field("type", required(TYPE_REQUIRED_MESSAGE))
        .field("details", value_field())
}

/// The submit flow: validate the source, and on success store the work.
///
/// The error branch is returned untouched for the rendering collaborator to
/// display; the success branch saves and hands back the stored entry's
/// identity handle (which is also what a later delete needs).
///
/// # Example
///
/// ```rust
/// use acervo::form::FieldValues;
/// use acervo::registration::{submit, work_validations};
/// use acervo::repository::WorkRepository;
///
/// let validations = work_validations(2021);
/// let repository = WorkRepository::new();
/// let form: FieldValues = [
///     ("name", "Abaporu"),
///     ("author", "Tarsila do Amaral"),
///     ("releaseYear", "1928"),
///     ("period", "Modernismo"),
///     ("type", "Pintura"),
///     ("details", ""),
/// ]
/// .into_iter()
/// .collect();
///
/// let saved = tokio_test::block_on(submit(&validations, &form, &repository));
/// assert!(saved.is_right());
/// assert_eq!(repository.snapshot().len(), 1);
/// ```
pub async fn submit(
    validations: &FieldValidations,
    source: &impl ValueSource,
    repository: &WorkRepository,
) -> Either<Vec<FieldError>, Rc<Work>> {
    validate(validations, source)
        .await
        .map(|values| repository.save(Work::from_values(&values)))
}
