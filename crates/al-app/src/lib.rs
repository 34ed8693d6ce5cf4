//! Alumo Application Orchestration Layer
//!
//! This crate contains the signup use case and the runtime state it drives.

pub mod usecases;

pub use usecases::signup::SignupController;
