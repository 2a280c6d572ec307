//! Shows the debug events emitted when the `tracing` feature is enabled.
//!
//! Run with: `cargo run --example tracing_demo --features tracing`

use acervo::form::FieldValues;
use acervo::registration::{submit, work_validations};
use acervo::repository::WorkRepository;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let validations = work_validations(2021);
    let repository = WorkRepository::new();

    // A failing pass: the validation event reports five errors.
    let _ = submit(&validations, &FieldValues::new(), &repository).await;

    // A clean pass: validation reports zero errors, the repository logs the save.
    let form: FieldValues = [
        ("name", "Abaporu"),
        ("author", "Tarsila do Amaral"),
        ("releaseYear", "1928"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", ""),
    ]
    .into_iter()
    .collect();

    let saved = submit(&validations, &form, &repository)
        .await
        .into_right()
        .expect("valid form");
    repository.remove(&saved);
}
