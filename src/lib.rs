//! # Acervo
//!
//! The validation and registry core of a museum-work registration form.
//!
//! ## Philosophy
//!
//! The core is pure and the shell is thin: validators are referentially
//! transparent functions from raw values to an [`Either`], the orchestrator
//! collects every field's failure instead of throwing, and the only stateful
//! pieces — the [`Subject`](observable::Subject) subscriber registry and the
//! [`WorkRepository`](repository::WorkRepository) collection — each have a
//! single owner that mutates them synchronously. The browser glue that
//! queries inputs and paints errors lives outside this crate and talks to it
//! through [`form::ValueSource`] and the snapshot stream.
//!
//! ## Quick Example
//!
//! ```rust
//! use acervo::form::{run_validation, FieldValues};
//! use acervo::registration::work_validations;
//!
//! let validations = work_validations(2021);
//!
//! let form: FieldValues = [
//!     ("name", "Abaporu"),
//!     ("author", "Tarsila do Amaral"),
//!     ("releaseYear", "1928"),
//!     ("period", "Modernismo"),
//!     ("type", "Pintura"),
//!     ("details", "Óleo sobre tela"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = run_validation(&validations, &form);
//! let accepted = result.fold(|errors| errors.len(), |values| values.len());
//! assert_eq!(accepted, 6); // all six fields came back clean
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod form;
pub mod observable;
pub mod registration;
pub mod repository;
pub mod validator;
pub mod work;

// Re-exports
pub use either::Either;
pub use form::{FieldError, FieldValidations, FieldValues, ValueSource};
pub use observable::{Observable, Observer, Subject, Subscriber, Subscription};
pub use repository::WorkRepository;
pub use validator::Validator;
pub use work::Work;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::form::{
        run_validation, validate, FieldError, FieldValidations, FieldValues, ValueSource,
    };
    pub use crate::observable::{Observable, Observer, Subject, Subscriber, Subscription};
    pub use crate::registration::{submit, work_validations};
    pub use crate::repository::WorkRepository;
    pub use crate::validator::{
        compose, integer, less_than, min_length, required, value_field, BoxedValidator, Validator,
        ValidatorExt,
    };
    pub use crate::work::Work;
}
