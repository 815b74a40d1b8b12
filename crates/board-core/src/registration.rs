//! Registration form checks and API response handling.
//!
//! The HTTP call itself belongs to the caller. This module decides what to
//! send and how to read what comes back.

use board_model::{Ambassador, ModelError, split_email};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email is already taken. Please use a different email.";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Status code the API returns for an already registered email.
const STATUS_CONFLICT: u16 = 409;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("Emails do not match. Please re-enter your email.")]
    EmailMismatch,
    #[error(transparent)]
    InvalidEmail(#[from] ModelError),
}

/// Fields collected by the registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Second entry of the email, compared against `email`.
    pub confirm_email: String,
    pub university: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("confirmEmail", &self.confirm_email),
            ("university", &self.university),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField { field });
            }
        }
        if self.email.trim() != self.confirm_email.trim() {
            return Err(RegistrationError::EmailMismatch);
        }
        split_email(self.email.trim())?;
        Ok(())
    }

    /// Validate and build the body to POST. New ambassadors start at zero.
    pub fn into_request(self) -> Result<RegistrationRequest, RegistrationError> {
        self.validate()?;
        Ok(RegistrationRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            university: self.university.trim().to_string(),
            score: 0,
        })
    }
}

/// JSON body accepted by the ambassador collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub university: String,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(Ambassador),
    EmailTaken,
    Rejected(String),
}

impl RegistrationOutcome {
    /// Text shown to the applicant for a failed registration.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Registered(_) => None,
            Self::EmailTaken => Some(EMAIL_TAKEN_MESSAGE),
            Self::Rejected(message) => Some(message),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Interpret the API's reply to a registration POST.
pub fn classify_response(status: u16, body: &str) -> RegistrationOutcome {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<Ambassador>(body) {
            Ok(ambassador) => RegistrationOutcome::Registered(ambassador),
            Err(_) => RegistrationOutcome::Rejected(DEFAULT_FAILURE_MESSAGE.to_string()),
        };
    }
    if status == STATUS_CONFLICT {
        return RegistrationOutcome::EmailTaken;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
    RegistrationOutcome::Rejected(message)
}
