use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Body of a successful `GET /users` response.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct QueryResult {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}
