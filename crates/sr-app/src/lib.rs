//! ScrollReveal admin orchestration layer
//!
//! This crate contains the admin and client bootstrap use cases, the logical
//! routes they navigate between, and the form error model.

pub mod deps;
pub mod form;
pub mod routes;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use form::{Completed, FormErrors, Notice, NoticeKind, SubmitOutcome};
pub use routes::Route;
pub use usecase_factory::UseCases;
