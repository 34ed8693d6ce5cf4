//! Signup form fields and pre-flight validation.

use std::fmt;

use crate::security::SecretString;

/// Input fields of the signup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures detected before any network access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Field state of one signup screen instance.
///
/// Values are kept verbatim as typed; the name is trimmed only when a
/// request is built.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FormField::Name);
        }
        if self.email.is_empty() {
            missing.push(FormField::Email);
        }
        if self.password.is_empty() {
            missing.push(FormField::Password);
        }
        missing
    }

    /// Validate the form and build the request for one submission attempt.
    pub fn to_request(&self) -> Result<SignupRequest, SignupValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SignupValidationError::MissingFields(missing));
        }

        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            password: self.password.duplicate(),
        })
    }

    /// Copy of the form, used to hand field values to a caller without
    /// giving up the controller's own state.
    pub fn snapshot(&self) -> SignupForm {
        SignupForm {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.duplicate(),
        }
    }
}

/// Validated input of one submission attempt.
#[derive(Debug)]
pub struct SignupRequest {
    /// Trimmed display name.
    pub name: String,
    pub email: String,
    pub password: SecretString,
}
