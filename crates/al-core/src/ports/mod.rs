//! Port interfaces for the application layer
//!
//! Ports define the contract between the signup use case and the
//! infrastructure that talks to the auth provider or drives the UI.
//! Implementations live in `al-infra` (provider) and the application shell
//! (navigation, alerts).

pub mod alert;
pub mod auth;
pub mod errors;
pub mod navigator;

pub use alert::AlertPort;
pub use auth::{AccountUser, AuthProviderPort, CreateAccountResponse, ProfileUpdate};
pub use errors::{AuthProviderError, ProviderError};
pub use navigator::NavigatorPort;
