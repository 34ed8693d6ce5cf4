//! Handling of sensitive user input.

pub mod secret;

pub use secret::SecretString;
