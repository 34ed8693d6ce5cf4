//! # al-core
//!
//! Core domain models and ports for the Alumo signup flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod ports;
pub mod security;
pub mod signup;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::UserId;
pub use security::SecretString;
pub use signup::{
    Alert, FormField, Route, SignupForm, SignupOutcome, SignupState, SignupValidationError,
    SignupView,
};
