//! Registration form controls and their validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::REGION_PLACEHOLDER;
use crate::error::ValidationError;
use crate::types::RegistrationInput;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Raw values of the registration form's three controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub region: String,
    pub email: String,
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            email: email.into(),
        }
    }

    /// Check the controls in display order and build the request payload.
    /// The first failing check is reported.
    pub fn validate(&self) -> Result<RegistrationInput, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let region = self.region.as_str();
        if region.is_empty() || region == REGION_PLACEHOLDER {
            return Err(ValidationError::MissingRegion);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(RegistrationInput {
            name: name.to_string(),
            region: region.to_string(),
            email: email.to_string(),
        })
    }

    /// Clear every control.
    pub fn reset(&mut self) {
        self.name.clear();
        self.region.clear();
        self.email.clear();
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
