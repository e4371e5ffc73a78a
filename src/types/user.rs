use serde::{Deserialize, Serialize};

/// A registered user as returned by `GET /users`.
///
/// Records are owned by the server; the client only reads them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub email: String,
    /// ISO-8601 timestamp, sometimes without an offset.
    #[serde(default)]
    pub created_at: Option<String>,
}
