//! End-to-end flow: submit, re-render, delete.
//!
//! Mirrors the browser scenarios minus the DOM: the "renderer" here is a
//! subscriber that records each collection snapshot, and the delete
//! confirmation dialog becomes the caller's choice of whether to call
//! `remove` at all.

use acervo::form::FieldValues;
use acervo::observable::Subscriber;
use acervo::registration::{submit, work_validations};
use acervo::repository::WorkRepository;
use acervo::work::Work;
use std::cell::RefCell;
use std::rc::Rc;

const CURRENT_YEAR: i64 = 2021;

fn form_for(name: &str) -> FieldValues {
    [
        ("name", name),
        ("author", "Tarsila do Amaral"),
        ("releaseYear", "1928"),
        ("period", "Modernismo"),
        ("type", "Pintura"),
        ("details", "Óleo sobre tela"),
    ]
    .into_iter()
    .collect()
}

fn render_log(repository: &WorkRepository) -> Rc<RefCell<Vec<Vec<String>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
        sink.borrow_mut()
            .push(works.iter().map(|w| w.name.clone()).collect());
    }));
    log
}

#[tokio::test]
async fn two_submissions_render_a_collection_of_two() {
    let validations = work_validations(CURRENT_YEAR);
    let repository = WorkRepository::new();
    let rendered = render_log(&repository);

    submit(&validations, &form_for("Abaporu"), &repository)
        .await
        .into_right()
        .unwrap();
    submit(&validations, &form_for("O Mestiço"), &repository)
        .await
        .into_right()
        .unwrap();

    let frames = rendered.borrow();
    assert_eq!(frames.len(), 2);
    assert_eq!(
        frames[1],
        vec!["Abaporu".to_string(), "O Mestiço".to_string()]
    );
}

#[tokio::test]
async fn confirmed_delete_shrinks_the_collection_and_rerenders() {
    let validations = work_validations(CURRENT_YEAR);
    let repository = WorkRepository::new();

    let first = submit(&validations, &form_for("Abaporu"), &repository)
        .await
        .into_right()
        .unwrap();
    submit(&validations, &form_for("O Mestiço"), &repository)
        .await
        .into_right()
        .unwrap();

    let rendered = render_log(&repository);

    // User clicked delete and confirmed.
    repository.remove(&first);

    assert_eq!(repository.snapshot().len(), 1);
    assert_eq!(*rendered.borrow(), vec![vec!["O Mestiço".to_string()]]);
}

#[tokio::test]
async fn cancelled_delete_leaves_the_collection_unchanged() {
    let validations = work_validations(CURRENT_YEAR);
    let repository = WorkRepository::new();

    submit(&validations, &form_for("Abaporu"), &repository)
        .await
        .into_right()
        .unwrap();
    submit(&validations, &form_for("O Mestiço"), &repository)
        .await
        .into_right()
        .unwrap();

    let rendered = render_log(&repository);

    // User clicked delete and cancelled the confirmation: no remove call,
    // no re-render.
    assert_eq!(repository.snapshot().len(), 2);
    assert!(rendered.borrow().is_empty());
}

#[tokio::test]
async fn rejected_submission_does_not_reach_the_renderer() {
    let validations = work_validations(CURRENT_YEAR);
    let repository = WorkRepository::new();
    let rendered = render_log(&repository);

    let mut bad_form = form_for("Abaporu");
    bad_form.insert("author", "");

    let result = submit(&validations, &bad_form, &repository).await;

    assert!(result.is_left());
    assert!(rendered.borrow().is_empty());
    assert!(repository.snapshot().is_empty());
}

#[tokio::test]
async fn saved_work_carries_the_submitted_values() {
    let validations = work_validations(CURRENT_YEAR);
    let repository = WorkRepository::new();

    let saved = submit(&validations, &form_for("Abaporu"), &repository)
        .await
        .into_right()
        .unwrap();

    assert_eq!(saved.name, "Abaporu");
    assert_eq!(saved.author, "Tarsila do Amaral");
    assert_eq!(saved.release_year, "1928");
    assert_eq!(saved.period, "Modernismo");
    assert_eq!(saved.kind, "Pintura");
    assert_eq!(saved.details, "Óleo sobre tela");
}
