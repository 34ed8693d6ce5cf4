//! Business logic use cases
//!
//! ```text
//! [Signup screen input]
//!         ↓
//! SignupController::submit
//!         ↓
//! AuthProviderPort::create_account → AuthProviderPort::update_profile
//!         ↓
//! AlertPort / NavigatorPort
//! ```

pub mod signup;

pub use signup::SignupController;
