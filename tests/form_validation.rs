//! Integration tests for the full registration form.
//!
//! Scenarios follow the browser end-to-end suite of the original
//! application: exact message strings, all-fields error collection, and the
//! deferred submit entry point.

use acervo::form::{run_validation, validate, FieldValues};
use acervo::registration::{
    work_validations, AUTHOR_MIN_LENGTH_MESSAGE, NAME_MIN_LENGTH_MESSAGE, PERIOD_REQUIRED_MESSAGE,
    TYPE_REQUIRED_MESSAGE, YEAR_REQUIRED_MESSAGE,
};
use acervo::validator::min_length;
use acervo::FieldValidations;

const CURRENT_YEAR: i64 = 2021;

fn filled_form() -> FieldValues {
    [
        ("name", "Abaporu"),
        ("author", "Tarsila do Amaral"),
        ("releaseYear", "1928"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", "Óleo sobre tela"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn short_name_and_author_are_both_flagged_with_exact_messages() {
    let validations = FieldValidations::new()
        .field("name", min_length(6, NAME_MIN_LENGTH_MESSAGE))
        .field("author", min_length(10, AUTHOR_MIN_LENGTH_MESSAGE));
    let form: FieldValues = [("name", "Obra"), ("author", "Anita")].into_iter().collect();

    let errors = run_validation(&validations, &form).into_left().unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "name");
    assert_eq!(
        errors[0].message,
        "Nome da obra deve ter no mínimo 6 caracteres"
    );
    assert_eq!(errors[1].field, "author");
    assert_eq!(
        errors[1].message,
        "Nome do autor deve ter no mínimo 10 caracteres"
    );
}

#[test]
fn errors_carry_the_raw_value_that_failed() {
    let validations = work_validations(CURRENT_YEAR);
    let mut form = filled_form();
    form.insert("name", "Obra");

    let errors = run_validation(&validations, &form).into_left().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "name");
    assert_eq!(errors[0].value, "Obra");
}

#[test]
fn fully_valid_form_returns_every_declared_field() {
    let validations = work_validations(CURRENT_YEAR);

    let values = run_validation(&validations, &filled_form())
        .into_right()
        .unwrap();

    let names: Vec<&str> = values.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["name", "author", "releaseYear", "period", "type", "details"]
    );
    assert_eq!(values.get("releaseYear"), Some("1928"));
}

#[test]
fn unselected_period_and_type_are_flagged() {
    let validations = work_validations(CURRENT_YEAR);
    let mut form = filled_form();
    form.insert("period", "");
    form.insert("type", "");

    let errors = run_validation(&validations, &form).into_left().unwrap();
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![PERIOD_REQUIRED_MESSAGE, TYPE_REQUIRED_MESSAGE]
    );
}

#[test]
fn three_digit_year_is_rejected_like_the_browser_suite_expects() {
    let validations = work_validations(CURRENT_YEAR);
    let mut form = filled_form();
    form.insert("releaseYear", "999");

    let errors = run_validation(&validations, &form).into_left().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "releaseYear");
}

#[tokio::test]
async fn deferred_validation_resolves_to_the_same_result() {
    let validations = work_validations(CURRENT_YEAR);
    let mut form = filled_form();
    form.insert("releaseYear", "");

    let deferred = validate(&validations, &form).await;
    let direct = run_validation(&validations, &form);

    assert_eq!(deferred, direct);
    assert_eq!(
        deferred.into_left().unwrap()[0].message,
        YEAR_REQUIRED_MESSAGE
    );
}
