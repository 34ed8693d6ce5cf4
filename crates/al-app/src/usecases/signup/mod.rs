//! Signup use case.
//!
//! This module exposes the signup controller.

mod context;
pub mod controller;
mod guard;

pub use controller::SignupController;
