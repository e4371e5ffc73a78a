//! Validate the registration form and submit it to the API.

use crate::client::DirectoryClient;
use crate::constants::{REGISTRATION_FAILED_PREFIX, REGISTRATION_SUCCESS_MESSAGE};
use crate::error::{DirectoryError, ValidationError};
use crate::form::RegistrationForm;
use crate::notify::Notifier;
use crate::types::RegisterResponse;

/// Result of one `submit` call, after the user has been notified.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent.
    Invalid(ValidationError),
    Registered(RegisterResponse),
    Failed(DirectoryError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Registered(_))
    }
}

pub struct RegistrationFlow<'a, N: Notifier> {
    client: &'a DirectoryClient,
    notifier: N,
}

impl<'a, N: Notifier> RegistrationFlow<'a, N> {
    pub fn new(client: &'a DirectoryClient, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// Validate `form`, then register it. The form is cleared only when the
    /// server accepts the registration.
    pub async fn submit(&self, form: &mut RegistrationForm) -> SubmitOutcome {
        let input = match form.validate() {
            Ok(input) => input,
            Err(err) => {
                self.notifier.failure(&err.to_string());
                return SubmitOutcome::Invalid(err);
            }
        };

        match self.client.register(&input).await {
            Ok(response) => {
                tracing::info!(
                    email = %input.email,
                    region = %input.region,
                    user_id = ?response.user().map(|u| u.id),
                    "registration succeeded"
                );
                self.notifier.success(REGISTRATION_SUCCESS_MESSAGE);
                form.reset();
                SubmitOutcome::Registered(response)
            }
            Err(err) => {
                tracing::error!(error = %err, email = %input.email, "registration failed");
                self.notifier.failure(&format!(
                    "{REGISTRATION_FAILED_PREFIX}{}",
                    err.user_message()
                ));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
