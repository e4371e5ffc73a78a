//! Shared response shapes that are not part of the data model.

use serde::Deserialize;

/// Error body returned with non-2xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server-provided message, `error` taking precedence over `message`.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|e| !e.is_empty())
            .or(self.message.filter(|m| !m.is_empty()))
    }
}
