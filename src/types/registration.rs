use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validated registration payload sent as the `POST /register` body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub region: String,
    pub email: String,
}

/// Body of a successful registration.
///
/// The server only promises JSON, so any value is kept as received and the
/// known fields are read from it on demand.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RegisterResponse(Value);

impl RegisterResponse {
    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// The created user, when the body carries one in the usual shape.
    pub fn user(&self) -> Option<CreatedUser> {
        self.0
            .get("user")
            .and_then(|user| serde_json::from_value(user.clone()).ok())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreatedUser {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub email: String,
}
