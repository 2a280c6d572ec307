//! Registration form walkthrough: validate, collect errors, store, re-render.

use acervo::form::FieldValues;
use acervo::observable::Subscriber;
use acervo::registration::{submit, work_validations};
use acervo::repository::WorkRepository;
use acervo::work::Work;
use std::rc::Rc;

fn form(entries: &[(&str, &str)]) -> FieldValues {
    entries.iter().copied().collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let validations = work_validations(2021);
    let repository = WorkRepository::new();

    // The "renderer": print each collection snapshot as it is emitted.
    repository.subscribe(Subscriber::function(|works: &Vec<Rc<Work>>| {
        println!("-- lista ({} obras) --", works.len());
        for work in works {
            println!("   {} — {} ({})", work.name, work.author, work.release_year);
        }
    }));

    // First submit: everything missing.
    println!("Submit 1: formulário vazio");
    let result = submit(&validations, &form(&[]), &repository).await;
    if let Some(errors) = result.into_left() {
        for error in &errors {
            println!("   {}", error);
        }
    }

    // Second submit: short name, future year.
    println!("\nSubmit 2: nome curto, ano no futuro");
    let bad = form(&[
        ("name", "Obra"),
        ("author", "Tarsila do Amaral"),
        ("releaseYear", "2050"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", ""),
    ]);
    let result = submit(&validations, &bad, &repository).await;
    if let Some(errors) = result.into_left() {
        for error in &errors {
            println!("   {}", error);
        }
    }

    // Two valid submits, then a confirmed delete.
    println!("\nSubmit 3 e 4: obras válidas");
    let abaporu = form(&[
        ("name", "Abaporu"),
        ("author", "Tarsila do Amaral"),
        ("releaseYear", "1928"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", "Óleo sobre tela"),
    ]);
    let mestico = form(&[
        ("name", "O Mestiço"),
        ("author", "Candido Portinari"),
        ("releaseYear", "1934"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", ""),
    ]);

    let first = submit(&validations, &abaporu, &repository)
        .await
        .into_right()
        .expect("valid form");
    submit(&validations, &mestico, &repository)
        .await
        .into_right()
        .expect("valid form");

    println!("\nDelete confirmado da primeira obra");
    repository.remove(&first);
}
