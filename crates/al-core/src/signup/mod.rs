//! Signup domain module.
//!
//! Form data, outcome taxonomy and the pure state machine behind the
//! registration screen.

pub mod form;
pub mod outcome;
pub mod route;
pub mod state_machine;
pub mod view;

pub use form::{FormField, SignupForm, SignupRequest, SignupValidationError};
pub use outcome::{Alert, SignupOutcome};
pub use route::Route;
pub use state_machine::{SignupAction, SignupEvent, SignupState, SignupStateMachine};
pub use view::SignupView;
